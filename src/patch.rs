//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Patch and patch-history models shared by DB systems and DB homes.

use chrono::{DateTime, FixedOffset};
use serde_derive::{Deserialize, Serialize};

/// The action a patch operation performs or is allowed to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatchAction {
    Apply,
    Precheck,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatchLifecycleState {
    Available,
    Success,
    InProgress,
    Failed,
    #[serde(other)]
    Unknown,
}

/// A patch applicable to a DB system or DB home.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patch {
    /// The OCID of the patch.
    pub id: String,
    /// The text describing this patch package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The version of this patch package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Actions that can currently be performed with this patch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_actions: Option<Vec<PatchAction>>,
    /// Action that is currently being performed or was completed last.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_action: Option<PatchAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<PatchLifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    /// The date and time that the patch was released.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_released: Option<DateTime<FixedOffset>>,
}

pub type PatchSummary = Patch;

/// One record of a patch action performed on a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchHistoryEntry {
    /// The OCID of the patch history entry.
    pub id: String,
    /// The OCID of the patch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<PatchAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<PatchLifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_started: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_ended: Option<DateTime<FixedOffset>>,
}

pub type PatchHistoryEntrySummary = PatchHistoryEntry;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_decodes_actions() {
        let body = r#"{
            "id": "ocid1.patch.oc1..aaaa",
            "description": "Apr 2019 bundle",
            "version": "19.3.0.0",
            "availableActions": ["APPLY", "PRECHECK", "ROLLBACK"],
            "lastAction": "PRECHECK",
            "lifecycleState": "AVAILABLE"
        }"#;
        let p: Patch = serde_json::from_str(body).unwrap();
        assert_eq!(
            p.available_actions,
            Some(vec![
                PatchAction::Apply,
                PatchAction::Precheck,
                PatchAction::Unknown
            ])
        );
        assert_eq!(p.lifecycle_state, Some(PatchLifecycleState::Available));
    }
}
