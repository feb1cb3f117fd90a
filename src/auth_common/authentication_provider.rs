//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::error::DatabaseError;
use rsa::RsaPrivateKey;
use std::fmt::Debug;

/// Trait defining an Authentication Provider.
///
/// The provider supplies the identity material the request signer needs:
/// tenancy, user, key fingerprint, and the RSA private key itself. The
/// signer consults the provider on every attempt, so implementations must
/// be safe to call concurrently.
pub trait AuthenticationProvider: Send + Sync + Debug + AuthenticationProviderClone {
    /// Returns the Tenancy OCID associated with this AuthenticationProvider
    fn tenancy_id(&self) -> &str;
    /// Returns the User OCID associated with this AuthenticationProvider
    fn user_id(&self) -> &str;
    /// Returns the Fingerprint associated with the Private Key of this AuthenticationProvider
    fn fingerprint(&self) -> &str;
    /// Returns the Private Key associated with this AuthenticationProvider
    fn private_key(&self) -> Result<RsaPrivateKey, DatabaseError>;
    /// Returns the key id associated with this AuthenticationProvider to be used for signing requests
    fn key_id(&self) -> String {
        format!(
            "{}/{}/{}",
            self.tenancy_id(),
            self.user_id(),
            self.fingerprint()
        )
    }
    /// Returns the region-id associated with this AuthenticationProvider
    fn region_id(&self) -> &str;
}

// This allows users of this library to clone a Box<dyn AuthenticationProvider>
pub trait AuthenticationProviderClone {
    fn clone_box(&self) -> Box<dyn AuthenticationProvider>;
}

impl<T> AuthenticationProviderClone for T
where
    T: 'static + AuthenticationProvider + Clone,
{
    fn clone_box(&self) -> Box<dyn AuthenticationProvider> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn AuthenticationProvider> {
    fn clone(&self) -> Box<dyn AuthenticationProvider> {
        self.clone_box()
    }
}
