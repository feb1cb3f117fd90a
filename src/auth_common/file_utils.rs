//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::error::{validation_err, DatabaseError};
use dirs;
use std::path::PathBuf;

/// Generates the absolute file path of the path provided based on the underlying platform
///
/// # Arguments
///
/// * `file_path`: The file path that needs to be corrected
///
/// # Returns
///
/// The absolute file path to be used based on the platform being used
///
pub(crate) fn expand_user_home(file_path: &str) -> String {
    if file_path.starts_with("~/") || file_path.starts_with("~\\") {
        if let Some(home_dir) = dirs::home_dir() {
            let full_path = home_dir.join(PathBuf::from(correct_path(&file_path[2..])));
            format!("{}", full_path.display())
        } else {
            String::from(file_path)
        }
    } else {
        String::from(file_path)
    }
}

/// Generates the correct file path based on the platform
fn correct_path(file_path: &str) -> String {
    if cfg!(target_os = "windows") {
        file_path.replace("/", "\\")
    } else {
        String::from(file_path)
    }
}

/// Read an entire file into a string, expanding a leading `~`.
pub(crate) fn file_to_string(file_path: &str) -> Result<String, DatabaseError> {
    match std::fs::read_to_string(expand_user_home(file_path)) {
        Ok(s) => Ok(s),
        Err(e) => validation_err!("unable to read file '{}': {}", file_path, e),
    }
}
