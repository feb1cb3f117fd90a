//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::auth_common::file_utils::expand_user_home;
use crate::error::{validation_err, DatabaseError};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::RsaPrivateKey;
use std::fmt::Debug;

pub trait Supplier: Send + Sync + Debug + SupplierClone {
    fn get_key(&self) -> Result<RsaPrivateKey, DatabaseError>;
}

pub trait SupplierClone {
    fn clone_box(&self) -> Box<dyn Supplier>;
}

impl<T> SupplierClone for T
where
    T: 'static + Supplier + Clone,
{
    fn clone_box(&self) -> Box<dyn Supplier> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Supplier> {
    fn clone(&self) -> Box<dyn Supplier> {
        self.clone_box()
    }
}

// Keys may be PKCS#8 ("BEGIN PRIVATE KEY") or PKCS#1 ("BEGIN RSA PRIVATE
// KEY") PEM; both appear in the wild in OCI key files.
fn parse_private_key(key_content: &str) -> Result<RsaPrivateKey, DatabaseError> {
    if let Ok(key) = RsaPrivateKey::from_pkcs8_pem(key_content) {
        return Ok(key);
    }
    match RsaPrivateKey::from_pkcs1_pem(key_content) {
        Ok(key) => Ok(key),
        Err(e) => validation_err!("unable to parse private key: {}", e),
    }
}

/// Supplies an RSA private key held in memory.
#[derive(Debug, Clone)]
pub struct PrivateKeySupplier {
    key_content: String,
    passphrase: Option<Vec<char>>,
}

impl PrivateKeySupplier {
    #[allow(dead_code)]
    pub fn new(key_content: String) -> Self {
        PrivateKeySupplier {
            key_content,
            passphrase: None,
        }
    }

    #[allow(dead_code)]
    pub fn new_with_passphrase(key_content: String, passphrase: Option<Vec<char>>) -> Self {
        PrivateKeySupplier {
            key_content,
            passphrase,
        }
    }
}

impl Supplier for PrivateKeySupplier {
    fn get_key(&self) -> Result<RsaPrivateKey, DatabaseError> {
        if self.passphrase.is_some() {
            return validation_err!("passphrase-protected private keys are not supported");
        }
        parse_private_key(&self.key_content)
    }
}

/// Supplies an RSA private key read from a PEM file on each use.
#[derive(Debug, Clone)]
pub struct FilePrivateKeySupplier {
    key_path: String,
    passphrase: Option<Vec<char>>,
}

impl FilePrivateKeySupplier {
    pub fn new(key_path: String) -> Self {
        FilePrivateKeySupplier {
            key_path,
            passphrase: None,
        }
    }

    pub fn new_with_passphrase(key_path: String, passphrase: Option<Vec<char>>) -> Self {
        FilePrivateKeySupplier {
            key_path,
            passphrase,
        }
    }
}

impl Supplier for FilePrivateKeySupplier {
    fn get_key(&self) -> Result<RsaPrivateKey, DatabaseError> {
        // TODO: cache key in memory, don't go to disk for every request
        let key_content = match std::fs::read_to_string(expand_user_home(&self.key_path)) {
            Ok(kc) => kc,
            Err(e) => {
                return validation_err!(
                    "unable to read private key file '{}': {}",
                    self.key_path,
                    e
                );
            }
        };
        if self.passphrase.is_some() {
            return validation_err!("passphrase-protected private keys are not supported");
        }
        parse_private_key(&key_content)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rsa::pkcs8::EncodePrivateKey;
    use rsa::RsaPrivateKey;

    #[test]
    fn file_key_supplier_with_key_file_missing() {
        let file_key_provider = FilePrivateKeySupplier::new(String::from("~/invalid_path"));
        assert!(file_key_provider.get_key().is_err());
    }

    #[test]
    fn key_supplier_with_invalid_key() {
        let key_supplier = PrivateKeySupplier::new(String::from("invalid key"));
        assert!(key_supplier.get_key().is_err());
    }

    #[test]
    fn key_supplier_with_passphrase_is_rejected() {
        let key_supplier = PrivateKeySupplier::new_with_passphrase(
            String::from("some key content"),
            Some("passphrase".chars().collect::<Vec<_>>()),
        );
        assert!(key_supplier.get_key().is_err());
    }

    #[test]
    fn key_supplier_with_valid_pkcs8_key() {
        let mut rng = rand::thread_rng();
        let rsa = RsaPrivateKey::new(&mut rng, 2048).unwrap();
        let key_pem = rsa.to_pkcs8_pem(rsa::pkcs8::LineEnding::LF).unwrap();

        let key_supplier = PrivateKeySupplier::new(key_pem.to_string());
        key_supplier.get_key().unwrap();
    }
}
