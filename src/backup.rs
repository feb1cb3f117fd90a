//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Backups of classic (non-autonomous) databases.

use crate::client::{CallOptions, DatabaseClient, ServiceOperation};
use crate::error::{validation_err, DatabaseError};
use crate::retry::RetryPolicy;
use crate::wire::{RawResponse, ResponseCtx, WireRequest};
use chrono::{DateTime, FixedOffset};
use reqwest::Method;
use serde_derive::{Deserialize, Serialize};
use std::time::Duration;

/// The current state of a backup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackupLifecycleState {
    Creating,
    Active,
    Deleting,
    Deleted,
    Failed,
    Restoring,
    /// A state added by the service after this SDK was released.
    #[serde(other)]
    Unknown,
}

/// The type of backup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackupType {
    Incremental,
    Full,
    #[serde(other)]
    Unknown,
}

/// A database backup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    /// The OCID of the backup.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
    /// The user-friendly name for the backup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub backup_type: Option<BackupType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<BackupLifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_domain: Option<String>,
    /// The Oracle Database edition of the DB system from which the backup
    /// was taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_edition: Option<String>,
    /// The size of the database in gigabytes at the time the backup was
    /// taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_size_in_g_bs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_started: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_ended: Option<DateTime<FixedOffset>>,
}

/// One element of a backup listing; same shape as [`Backup`].
pub type BackupSummary = Backup;

/// Details for creating a backup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBackupDetails {
    /// The OCID of the database to back up.
    pub database_id: String,
    /// The user-friendly name for the backup. It does not need to be
    /// unique.
    pub display_name: String,
}

/// Request to create a new backup of a database.
///
/// The operation is idempotent by retry token: when `opc_retry_token` is
/// unset a token is generated, and the same token is sent on every attempt
/// of this logical call.
#[derive(Debug, Clone, Default)]
pub struct CreateBackupRequest {
    pub create_backup_details: CreateBackupDetails,
    /// A token that, retried with, guarantees the effect is applied at
    /// most once.
    pub opc_retry_token: Option<String>,
    /// Client-supplied tracing id; generated when unset.
    pub opc_request_id: Option<String>,
    /// Overrides the default (no-retry) policy for this call.
    pub retry_policy: Option<RetryPolicy>,
    /// Overrides the client's default timeout for this call.
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct CreateBackupResponse {
    pub backup: Backup,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl CreateBackupRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<CreateBackupResponse, DatabaseError> {
        let opts = CallOptions::new(&self.retry_policy, &self.timeout)
            .with_retry_token(&self.opc_retry_token);
        client.invoke(self, opts).await
    }
}

impl ServiceOperation for CreateBackupRequest {
    type Response = CreateBackupResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        if self.create_backup_details.database_id.is_empty() {
            return validation_err!("create_backup_details.database_id is required");
        }
        let mut w = WireRequest::new(Method::POST, "/backups");
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(&self.create_backup_details)?;
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<CreateBackupResponse, DatabaseError> {
        Ok(CreateBackupResponse {
            backup: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to get information about the specified backup.
#[derive(Debug, Clone, Default)]
pub struct GetBackupRequest {
    /// The OCID of the backup.
    pub backup_id: String,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct GetBackupResponse {
    pub backup: Backup,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl GetBackupRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<GetBackupResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for GetBackupRequest {
    type Response = GetBackupResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::GET, "/backups/{backupId}");
        w.path("backupId", &self.backup_id)?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<GetBackupResponse, DatabaseError> {
        Ok(GetBackupResponse {
            backup: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to list backups, by database or by compartment.
///
/// Either `database_id` or `compartment_id` must be set. The listing is
/// paginated: pass the `opc_next_page` value of one response as `page` on
/// the next request until the response carries no token.
#[derive(Debug, Clone, Default)]
pub struct ListBackupsRequest {
    /// The OCID of the database; restricts the listing to that database.
    pub database_id: Option<String>,
    /// The compartment OCID.
    pub compartment_id: Option<String>,
    /// The maximum number of items to return per page.
    pub limit: Option<i64>,
    /// The pagination token to continue a previous listing.
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct ListBackupsResponse {
    pub items: Vec<BackupSummary>,
    /// Continuation token; absent on the last page.
    pub opc_next_page: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl ListBackupsRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<ListBackupsResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for ListBackupsRequest {
    type Response = ListBackupsResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        if self.database_id.is_none() && self.compartment_id.is_none() {
            return validation_err!("one of database_id or compartment_id is required");
        }
        let mut w = WireRequest::new(Method::GET, "/backups");
        w.query_opt("databaseId", self.database_id.as_deref());
        w.query_opt("compartmentId", self.compartment_id.as_deref());
        w.query_opt("limit", self.limit.as_ref());
        w.query_opt("page", self.page.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<ListBackupsResponse, DatabaseError> {
        Ok(ListBackupsResponse {
            items: ctx.json()?,
            opc_next_page: ctx.header_str("opc-next-page"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to delete a full backup.
#[derive(Debug, Clone, Default)]
pub struct DeleteBackupRequest {
    /// The OCID of the backup.
    pub backup_id: String,
    /// Entity tag from a previous GET or POST; the delete only proceeds if
    /// the resource's current etag matches.
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct DeleteBackupResponse {
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl DeleteBackupRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<DeleteBackupResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for DeleteBackupRequest {
    type Response = DeleteBackupResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::DELETE, "/backups/{backupId}");
        w.path("backupId", &self.backup_id)?;
        w.header_opt("if-match", self.if_match.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<DeleteBackupResponse, DatabaseError> {
        Ok(DeleteBackupResponse {
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_database_id() {
        let req = CreateBackupRequest::default();
        let err = req.encode().unwrap_err();
        assert!(matches!(err, DatabaseError::Validation { .. }));
    }

    #[test]
    fn list_requires_a_scope() {
        let req = ListBackupsRequest::default();
        assert!(req.encode().is_err());

        let req = ListBackupsRequest {
            compartment_id: Some("c1".to_string()),
            ..Default::default()
        };
        let w = req.encode().unwrap();
        assert_eq!(w.query, vec![("compartmentId", "c1".to_string())]);
    }

    #[test]
    fn lifecycle_state_decodes_unknown_values() {
        let s: BackupLifecycleState = serde_json::from_str(r#""ACTIVE""#).unwrap();
        assert_eq!(s, BackupLifecycleState::Active);
        let s: BackupLifecycleState = serde_json::from_str(r#""SOME_FUTURE_STATE""#).unwrap();
        assert_eq!(s, BackupLifecycleState::Unknown);
    }

    #[test]
    fn backup_model_round_trips() {
        let body = r#"{
            "id": "ocid1.backup.oc1..aaaa",
            "compartmentId": "ocid1.compartment.oc1..bbbb",
            "databaseId": "ocid1.database.oc1..cccc",
            "displayName": "nightly",
            "type": "INCREMENTAL",
            "lifecycleState": "ACTIVE",
            "databaseSizeInGBs": 256.5,
            "timeStarted": "2019-03-01T01:00:00.000+05:30"
        }"#;
        let b: Backup = serde_json::from_str(body).unwrap();
        assert_eq!(b.id, "ocid1.backup.oc1..aaaa");
        assert_eq!(b.backup_type, Some(BackupType::Incremental));
        assert_eq!(b.database_size_in_g_bs, Some(256.5));
        // the +05:30 offset survives the round trip
        let ts = b.time_started.unwrap();
        assert_eq!(ts.offset().local_minus_utc(), 5 * 3600 + 30 * 60);
    }
}
