//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Builder for creating a [`DatabaseClient`](crate::DatabaseClient).

use std::default::Default;
use std::env;
use std::result::Result;
use std::sync::Arc;
use std::time::Duration;

use crate::auth_common::authentication_provider::AuthenticationProvider;
use crate::auth_common::config_file_authentication_provider::ConfigFileAuthenticationProvider;
use crate::client::{ClientRef, DatabaseClient};
use crate::error::{validation_err, DatabaseError};
use crate::region::{string_to_region, Region};
use reqwest::Client;
use tracing::debug;

// Fixed API version segment of the Database service.
const DEFAULT_BASE_PATH: &str = "20160918";

/// Builder used to set all the parameters to create a
/// [`DatabaseClient`](crate::DatabaseClient).
///
/// The region is normally taken from the authentication configuration (an
/// OCI config file carries one); call [`region()`](ClientBuilder::region)
/// to override it, or [`endpoint()`](ClientBuilder::endpoint) to bypass
/// region resolution entirely (typically for testing against a local
/// server).
#[derive(Default, Debug, Clone)]
pub struct ClientBuilder {
    pub(crate) endpoint: String,
    pub(crate) region: Option<Region>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) base_path: Option<String>,
    pub(crate) client: Option<Client>,
    pub(crate) auth: Option<Box<dyn AuthenticationProvider>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder struct.
    ///
    /// The default ClientBuilder does not set an authentication method;
    /// configure one with [`config_from_file()`](ClientBuilder::config_from_file)
    /// or [`auth_provider()`](ClientBuilder::auth_provider) before building.
    pub fn new() -> Self {
        ClientBuilder {
            ..Default::default()
        }
    }

    /// Build a new [`DatabaseClient`].
    ///
    /// The configuration is validated here: a client is only returned when
    /// an authentication provider is present and carries a usable identity,
    /// and when an endpoint could be determined from the region or an
    /// explicit override.
    pub fn build(self) -> Result<DatabaseClient, DatabaseError> {
        let auth = match &self.auth {
            Some(a) => a.clone(),
            None => {
                return validation_err!(
                    "cannot build client: no authentication configured; \
                     call config_from_file() or auth_provider()"
                );
            }
        };
        if auth.tenancy_id().is_empty()
            || auth.user_id().is_empty()
            || auth.fingerprint().is_empty()
        {
            return validation_err!(
                "cannot build client: authentication provider is missing \
                 tenancy, user, or fingerprint"
            );
        }

        let endpoint = if !self.endpoint.is_empty() {
            self.endpoint.trim_end_matches('/').to_string()
        } else {
            let region = match &self.region {
                Some(r) => r.clone(),
                None => {
                    if auth.region_id().is_empty() {
                        return validation_err!(
                            "cannot determine service endpoint: set a region \
                             or an explicit endpoint"
                        );
                    }
                    string_to_region(auth.region_id())?
                }
            };
            region.database_endpoint()
        };

        let timeout = self.timeout.unwrap_or(Duration::new(60, 0));
        let client = match &self.client {
            Some(c) => c.clone(),
            None => Client::builder()
                .connect_timeout(timeout)
                .build()
                .map_err(DatabaseError::from)?,
        };

        let base_path = self
            .base_path
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());
        debug!("creating DatabaseClient: endpoint={}/{}", endpoint, base_path);
        Ok(DatabaseClient {
            inner: Arc::new(ClientRef {
                client,
                endpoint,
                base_path,
                auth,
                timeout,
            }),
        })
    }

    /// Gather configuration settings from the current environment.
    ///
    /// The following environment variables are used:
    ///
    /// | variable | description |
    /// | -------- | ----------- |
    /// | `OCI_CONFIG_FILE` | Path of the OCI config file. Defaults to `~/.oci/config`. |
    /// | `OCI_CONFIG_PROFILE` | Profile within the config file. Defaults to `DEFAULT`. |
    /// | `ORACLE_DATABASE_REGION` | Region identifier override. |
    /// | `ORACLE_DATABASE_ENDPOINT` | Explicit endpoint override. |
    pub fn from_environment(mut self) -> Result<Self, DatabaseError> {
        let file = env::var("OCI_CONFIG_FILE").unwrap_or_else(|_| "~/.oci/config".to_string());
        let profile = env::var("OCI_CONFIG_PROFILE").unwrap_or_else(|_| "DEFAULT".to_string());
        self = self.config_from_file_with_profile(&file, &profile)?;
        if let Ok(val) = env::var("ORACLE_DATABASE_REGION") {
            self = self.region(&val)?;
        }
        if let Ok(val) = env::var("ORACLE_DATABASE_ENDPOINT") {
            self = self.endpoint(&val)?;
        }
        Ok(self)
    }

    /// Specify an OCI config file to use with user-based authentication.
    ///
    /// This method allows the use of a file other than the default
    /// `~/.oci/config` file. This method assumes the use of the `"DEFAULT"`
    /// profile.
    pub fn config_from_file(self, config_file: &str) -> Result<Self, DatabaseError> {
        self.config_from_file_with_profile(config_file, "DEFAULT")
    }

    /// Specify an OCI config file and profile to use with user-based
    /// authentication.
    pub fn config_from_file_with_profile(
        mut self,
        config_file: &str,
        profile: &str,
    ) -> Result<Self, DatabaseError> {
        let provider = ConfigFileAuthenticationProvider::new_from_file(config_file, profile)?;
        if self.region.is_none() && !provider.region_id().is_empty() {
            self = self.region(&provider.region_id().to_string())?;
        }
        self.auth = Some(Box::new(provider));
        Ok(self)
    }

    /// Supply a pre-built authentication provider.
    pub fn auth_provider(
        mut self,
        provider: Box<dyn AuthenticationProvider>,
    ) -> Result<Self, DatabaseError> {
        if self.region.is_none() && !provider.region_id().is_empty() {
            self = self.region(&provider.region_id().to_string())?;
        }
        self.auth = Some(provider);
        Ok(self)
    }

    /// Specify a region identifier, such as `us-ashburn-1`.
    ///
    /// The identifier is validated against the internal region table;
    /// identifiers not yet in the table resolve against the commercial
    /// realm so new regions can be used without an SDK update.
    pub fn region(mut self, region: &str) -> Result<Self, DatabaseError> {
        self.region = Some(string_to_region(region)?);
        Ok(self)
    }

    /// Set a specific endpoint to use, bypassing region resolution.
    ///
    /// Examples:
    /// ```text
    ///     // Cloud service
    ///     https://database.us-ashburn-1.oraclecloud.com
    ///
    ///     // Local test server
    ///     http://localhost:8080
    /// ```
    pub fn endpoint(mut self, endpoint: &str) -> Result<Self, DatabaseError> {
        if endpoint.is_empty() {
            return validation_err!("endpoint must be non-empty");
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            self.endpoint = format!("https://{}", endpoint);
        } else {
            self.endpoint = endpoint.to_string();
        }
        Ok(self)
    }

    /// Override the API version segment prepended to every operation path.
    ///
    /// This is rarely needed; the default matches the service contract.
    pub fn base_path(mut self, base_path: &str) -> Result<Self, DatabaseError> {
        self.base_path = Some(base_path.trim_matches('/').to_string());
        Ok(self)
    }

    /// Specify the default timeout used for operations.
    ///
    /// The timeout bounds one whole logical call, including retries and
    /// backoff sleeps. It can be overridden per request. The default is 60
    /// seconds.
    pub fn timeout(mut self, timeout: Duration) -> Result<Self, DatabaseError> {
        if timeout < Duration::from_millis(1) {
            return validation_err!("timeout must be at least 1 millisecond");
        }
        self.timeout = Some(timeout);
        Ok(self)
    }

    /// Specify a [`reqwest::Client`] to use for all http/s connections.
    ///
    /// By default, the [`DatabaseClient`](crate::DatabaseClient) creates an
    /// internal [`reqwest::Client`]. If your application already has a
    /// reqwest Client, you can pass that in to avoid creating multiple
    /// connection pools.
    pub fn reqwest_client(mut self, client: &Client) -> Result<Self, DatabaseError> {
        self.client = Some(client.clone());
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth_common::private_key_supplier::PrivateKeySupplier;
    use crate::auth_common::simple_authentication_provider::SimpleAuthenticationProvider;

    fn provider(region: &str) -> Box<dyn AuthenticationProvider> {
        Box::new(SimpleAuthenticationProvider::new(
            "ocid1.tenancy.oc1..aaaa".to_string(),
            "ocid1.user.oc1..bbbb".to_string(),
            "11:22:33:44".to_string(),
            region.to_string(),
            Box::new(PrivateKeySupplier::new("unused".to_string())),
        ))
    }

    #[test]
    fn build_without_auth_is_rejected() {
        let res = DatabaseClient::builder().build();
        assert!(res.is_err());
    }

    #[test]
    fn build_without_region_or_endpoint_is_rejected() {
        let res = DatabaseClient::builder()
            .auth_provider(provider(""))
            .unwrap()
            .build();
        assert!(res.is_err());
    }

    #[test]
    fn provider_with_empty_identity_is_rejected() {
        let p = Box::new(SimpleAuthenticationProvider::new(
            "".to_string(),
            "".to_string(),
            "".to_string(),
            "us-ashburn-1".to_string(),
            Box::new(PrivateKeySupplier::new("unused".to_string())),
        ));
        let res = DatabaseClient::builder().auth_provider(p).unwrap().build();
        assert!(res.is_err());
    }

    #[test]
    fn region_from_provider_resolves_endpoint() {
        let client = DatabaseClient::builder()
            .auth_provider(provider("us-phoenix-1"))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            client.endpoint(),
            "https://database.us-phoenix-1.oraclecloud.com"
        );
    }

    #[test]
    fn explicit_endpoint_overrides_region() {
        let client = DatabaseClient::builder()
            .auth_provider(provider("us-phoenix-1"))
            .unwrap()
            .endpoint("http://localhost:8080")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080");
    }

    #[test]
    fn bare_host_endpoint_gets_https_scheme() {
        let client = DatabaseClient::builder()
            .auth_provider(provider("us-phoenix-1"))
            .unwrap()
            .endpoint("database.me-dubai-1.oraclecloud.com")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            client.endpoint(),
            "https://database.me-dubai-1.oraclecloud.com"
        );
    }
}
