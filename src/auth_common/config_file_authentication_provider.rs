//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::auth_common::authentication_provider::AuthenticationProvider;
use crate::auth_common::file_utils::expand_user_home;
use crate::auth_common::private_key_supplier::FilePrivateKeySupplier;
use crate::auth_common::simple_authentication_provider::SimpleAuthenticationProvider;
use crate::error::{validation_err, DatabaseError};
use ini::Ini;
use rsa::RsaPrivateKey;

#[allow(dead_code)]
const DEFAULT_CONFIG_FILE_PATH: &str = "~/.oci/config";
const TENANCY: &str = "tenancy";
const USER: &str = "user";
const PASS_PHRASE: &str = "pass_phrase";
const KEY_FILE: &str = "key_file";
const FINGERPRINT: &str = "fingerprint";
const REGION: &str = "region";

/// Struct defining a user-based Authentication Provider that reads all authentication information from config file
#[derive(Debug, Clone)]
pub struct ConfigFileAuthenticationProvider {
    auth_provider: SimpleAuthenticationProvider,
}

fn get_section_variable(
    file: &str,
    props: &ini::Properties,
    var: &str,
) -> Result<String, DatabaseError> {
    match props.get(var) {
        Some(v) => Ok(v.to_string()),
        None => validation_err!(
            "error reading OCI config file '{}': missing field '{}'",
            file,
            var
        ),
    }
}

impl ConfigFileAuthenticationProvider {
    /// Creates a new ConfigFileAuthenticationProvider using the file from the path provided using the profile name provided.
    ///
    /// # Arguments
    ///
    /// * `config_file_path` : The path of the config file to use
    /// * `profile_name`: The name of the profile to use
    ///
    /// # Returns
    ///
    /// An instance of ConfigFileAuthenticationProvider
    ///
    pub fn new_from_file(
        config_file_path: &str,
        profile_name: &str,
    ) -> Result<Self, DatabaseError> {
        tracing::debug!(
            "Creating a ConfigFileAuthenticationProvider from file {} and profile {}",
            config_file_path,
            profile_name
        );
        // Fix path
        let file_path = expand_user_home(config_file_path);
        // Read config file
        let config = match Ini::load_from_file(&file_path) {
            Ok(c) => c,
            Err(e) => {
                return validation_err!("error reading OCI config file '{}': {}", file_path, e);
            }
        };
        // Get Profile
        let profile_data = match config.section(Some(profile_name)) {
            Some(p) => p,
            None => {
                return validation_err!(
                    "error reading OCI config file '{}': missing profile '{}'",
                    file_path,
                    profile_name
                );
            }
        };

        // Read required keys from profile data
        let tenancy_id = get_section_variable(&file_path, profile_data, TENANCY)?;
        let user_id = get_section_variable(&file_path, profile_data, USER)?;
        let fingerprint = get_section_variable(&file_path, profile_data, FINGERPRINT)?;
        let pem_file_path = get_section_variable(&file_path, profile_data, KEY_FILE)?;

        // region_id is optional
        let region_id =
            get_section_variable(&file_path, profile_data, REGION).unwrap_or("".to_string());
        if region_id.is_empty() {
            tracing::debug!("no '{}' specified in OCI config file", REGION);
        }

        let supplier = match profile_data.get(PASS_PHRASE) {
            Some(pass) => Box::new(FilePrivateKeySupplier::new_with_passphrase(
                pem_file_path,
                Some(pass.chars().collect()),
            )),
            None => Box::new(FilePrivateKeySupplier::new(pem_file_path)),
        };
        Ok(ConfigFileAuthenticationProvider {
            auth_provider: SimpleAuthenticationProvider::new(
                tenancy_id,
                user_id,
                fingerprint,
                region_id,
                supplier,
            ),
        })
    }

    /// Creates a new ConfigFileAuthenticationProvider using the default oci config path using the profile name provided.
    ///
    /// # Arguments
    ///
    /// * `profile_name`: The name of the profile to use
    ///
    /// # Returns
    ///
    /// An instance of ConfigFileAuthenticationProvider
    ///
    #[allow(dead_code)]
    pub fn new(profile_name: &str) -> Result<Self, DatabaseError> {
        Self::new_from_file(DEFAULT_CONFIG_FILE_PATH, profile_name)
    }
}

impl AuthenticationProvider for ConfigFileAuthenticationProvider {
    fn tenancy_id(&self) -> &str {
        self.auth_provider.tenancy_id()
    }
    fn fingerprint(&self) -> &str {
        self.auth_provider.fingerprint()
    }
    fn user_id(&self) -> &str {
        self.auth_provider.user_id()
    }
    fn private_key(&self) -> Result<RsaPrivateKey, DatabaseError> {
        self.auth_provider.private_key()
    }
    fn region_id(&self) -> &str {
        self.auth_provider.region_id()
    }
    // Note: key_id() uses default implementation in AuthenticationProvider
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::*;

    #[test]
    fn config_auth_provider_with_invalid_file_path() {
        let res = ConfigFileAuthenticationProvider::new_from_file("~/invalid_path", "DEFAULT");
        assert!(res.is_err());
    }

    #[test]
    fn config_auth_provider_with_invalid_profile() {
        let dir = tempfile::tempdir().expect("Error creating temp dir");
        let file_path = dir.path().join("oci_config_file");
        let mut file =
            std::fs::File::create(file_path.to_str().unwrap()).expect("Error creating file");
        let config_file_contents = r#"
[DEFAULT]
tenancy = ocid1.tenancy.oc1..aaaa
"#;
        file.write_all(config_file_contents.as_bytes())
            .expect("Error writing to config file");

        let res = ConfigFileAuthenticationProvider::new_from_file(
            file_path.to_str().unwrap(),
            "DOES_NOT_EXIST",
        );
        assert!(res.is_err());
        drop(file);
        _ = dir.close();
    }

    #[test]
    fn config_auth_provider_with_missing_keys() {
        let dir = tempfile::tempdir().expect("Error creating temp dir");
        let file_path = dir.path().join("oci_config_file-2");
        let mut file =
            std::fs::File::create(file_path.to_str().unwrap()).expect("Error creating file");
        let config_file_contents = r#"
[DEFAULT]
tenancy = ocid1.tenancy.oc1..aaaa
user = ocid1.user.oc1..bbbb
fingerprint = 11:22:33:44
region = us-ashburn-1
"#;
        file.write_all(config_file_contents.as_bytes())
            .expect("Error writing to config file");

        let res = ConfigFileAuthenticationProvider::new_from_file(
            file_path.to_str().unwrap(),
            "DEFAULT",
        );
        // key_file is missing
        assert!(res.is_err());
        drop(file);
        _ = dir.close();
    }

    #[test]
    fn config_auth_provider_reads_profile() {
        let dir = tempfile::tempdir().expect("Error creating temp dir");
        let file_path = dir.path().join("oci_config_file-3");
        let mut file =
            std::fs::File::create(file_path.to_str().unwrap()).expect("Error creating file");
        let config_file_contents = r#"
[DEFAULT]
tenancy = ocid1.tenancy.oc1..aaaa
user = ocid1.user.oc1..bbbb
fingerprint = 11:22:33:44
key_file = ~/.oci/key.pem
region = us-ashburn-1
"#;
        file.write_all(config_file_contents.as_bytes())
            .expect("Error writing to config file");

        let p = ConfigFileAuthenticationProvider::new_from_file(
            file_path.to_str().unwrap(),
            "DEFAULT",
        )
        .expect("provider should build");
        assert_eq!(p.tenancy_id(), "ocid1.tenancy.oc1..aaaa");
        assert_eq!(p.user_id(), "ocid1.user.oc1..bbbb");
        assert_eq!(p.fingerprint(), "11:22:33:44");
        assert_eq!(p.region_id(), "us-ashburn-1");
        assert_eq!(
            p.key_id(),
            "ocid1.tenancy.oc1..aaaa/ocid1.user.oc1..bbbb/11:22:33:44"
        );
        drop(file);
        _ = dir.close();
    }
}
