//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::error::{validation_error, DatabaseError};
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha2::{Digest, Sha256};

/// RSA-SHA256 (PKCS#1 v1.5) signature over `data`, as required by the
/// `rsa-sha256` algorithm of the HTTP signature scheme.
pub fn sign(private_key: &RsaPrivateKey, data: &[u8]) -> Result<Vec<u8>, DatabaseError> {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let hashed = hasher.finalize();

    private_key
        .sign(Pkcs1v15Sign::new::<Sha256>(), &hashed)
        .map_err(|e| validation_error!("unable to sign request: {}", e))
}
