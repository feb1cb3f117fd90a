//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::auth_common::authentication_provider::AuthenticationProvider;
use crate::auth_common::private_key_supplier::Supplier;
use crate::error::DatabaseError;
use rsa::RsaPrivateKey;

/// An authentication details provider that carries user authentication and
/// region information directly. This is the provider to use when the
/// credentials do not come from an OCI config file.
#[derive(Debug, Clone)]
pub struct SimpleAuthenticationProvider {
    tenancy_id: String,
    user_id: String,
    fingerprint: String,
    region_id: String,
    supplier: Box<dyn Supplier>,
}

impl SimpleAuthenticationProvider {
    /// Creates a new SimpleAuthenticationProvider using the values passed in the arguments.
    ///
    /// # Arguments
    ///
    /// * `tenancy_id` : The tenancy ocid to use for user-based authentication
    /// * `user_id`: The user ocid to use for user-based authentication
    /// * `fingerprint`: The fingerprint of the private key
    /// * `region_id`: The region-id to associate with this Authentication Provider
    /// * `supplier`: The supplier that provides the private key used to sign requests
    pub fn new(
        tenancy_id: String,
        user_id: String,
        fingerprint: String,
        region_id: String,
        supplier: Box<dyn Supplier + Send + Sync>,
    ) -> Self {
        SimpleAuthenticationProvider {
            tenancy_id,
            user_id,
            fingerprint,
            region_id,
            supplier,
        }
    }
}

impl AuthenticationProvider for SimpleAuthenticationProvider {
    fn tenancy_id(&self) -> &str {
        &self.tenancy_id
    }
    fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
    fn user_id(&self) -> &str {
        &self.user_id
    }
    fn private_key(&self) -> Result<RsaPrivateKey, DatabaseError> {
        self.supplier.get_key()
    }
    fn region_id(&self) -> &str {
        &self.region_id
    }
}
