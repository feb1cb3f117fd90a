//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Databases within a DB system.

use crate::client::{CallOptions, DatabaseClient, ServiceOperation};
use crate::error::{validation_err, DatabaseError};
use crate::retry::RetryPolicy;
use crate::wire::{RawResponse, ResponseCtx, WireRequest};
use chrono::{DateTime, FixedOffset};
use reqwest::Method;
use serde_derive::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DatabaseLifecycleState {
    Provisioning,
    Available,
    Updating,
    BackupInProgress,
    Terminating,
    Terminated,
    RestoreFailed,
    Failed,
    #[serde(other)]
    Unknown,
}

/// Backup settings for a database.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbBackupConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_backup_enabled: Option<bool>,
    /// Number of days between the current and the earliest recoverable
    /// point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_window_in_days: Option<i64>,
}

/// A database running in a DB system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    /// The OCID of the database.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_home_id: Option<String>,
    /// The database name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    /// A system-generated name for the database to ensure uniqueness
    /// within an Oracle Data Guard group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_unique_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_workload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ncharacter_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdb_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<DatabaseLifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_backup_config: Option<DbBackupConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<FixedOffset>>,
}

pub type DatabaseSummary = Database;

/// Details for updating a database's mutable fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDatabaseDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_backup_config: Option<DbBackupConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<HashMap<String, String>>,
}

/// Point to restore a database to: one of SCN, timestamp, or latest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreDatabaseDetails {
    /// Restores using the backup with the System Change Number (SCN)
    /// specified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_scn: Option<String>,
    /// Restores to the timestamp specified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<FixedOffset>>,
    /// Restores to the last known good state with the least possible data
    /// loss.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<bool>,
}

/// Request to get information about a specific database.
#[derive(Debug, Clone, Default)]
pub struct GetDatabaseRequest {
    /// The database OCID.
    pub database_id: String,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct GetDatabaseResponse {
    pub database: Database,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl GetDatabaseRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<GetDatabaseResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for GetDatabaseRequest {
    type Response = GetDatabaseResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::GET, "/databases/{databaseId}");
        w.path("databaseId", &self.database_id)?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<GetDatabaseResponse, DatabaseError> {
        Ok(GetDatabaseResponse {
            database: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to list databases in a given DB home.
#[derive(Debug, Clone, Default)]
pub struct ListDatabasesRequest {
    /// The compartment OCID.
    pub compartment_id: String,
    /// The OCID of the DB home.
    pub db_home_id: String,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct ListDatabasesResponse {
    pub items: Vec<DatabaseSummary>,
    pub opc_next_page: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl ListDatabasesRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<ListDatabasesResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for ListDatabasesRequest {
    type Response = ListDatabasesResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        if self.compartment_id.is_empty() {
            return validation_err!("compartment_id is required");
        }
        if self.db_home_id.is_empty() {
            return validation_err!("db_home_id is required");
        }
        let mut w = WireRequest::new(Method::GET, "/databases");
        w.query("compartmentId", self.compartment_id.as_str());
        w.query("dbHomeId", self.db_home_id.as_str());
        w.query_opt("limit", self.limit.as_ref());
        w.query_opt("page", self.page.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<ListDatabasesResponse, DatabaseError> {
        Ok(ListDatabasesResponse {
            items: ctx.json()?,
            opc_next_page: ctx.header_str("opc-next-page"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to update the specified database based on the request parameters
/// provided.
#[derive(Debug, Clone, Default)]
pub struct UpdateDatabaseRequest {
    pub database_id: String,
    pub update_database_details: UpdateDatabaseDetails,
    /// Entity tag for the compare-and-swap update.
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct UpdateDatabaseResponse {
    pub database: Database,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl UpdateDatabaseRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<UpdateDatabaseResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for UpdateDatabaseRequest {
    type Response = UpdateDatabaseResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::PUT, "/databases/{databaseId}");
        w.path("databaseId", &self.database_id)?;
        w.header_opt("if-match", self.if_match.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(&self.update_database_details)?;
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<UpdateDatabaseResponse, DatabaseError> {
        Ok(UpdateDatabaseResponse {
            database: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to restore a database to the point specified in the details.
#[derive(Debug, Clone, Default)]
pub struct RestoreDatabaseRequest {
    pub database_id: String,
    pub restore_database_details: RestoreDatabaseDetails,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct RestoreDatabaseResponse {
    pub database: Database,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl RestoreDatabaseRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<RestoreDatabaseResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for RestoreDatabaseRequest {
    type Response = RestoreDatabaseResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::POST, "/databases/{databaseId}/actions/restore");
        w.path("databaseId", &self.database_id)?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(&self.restore_database_details)?;
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<RestoreDatabaseResponse, DatabaseError> {
        Ok(RestoreDatabaseResponse {
            database: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_requires_database_id() {
        let req = GetDatabaseRequest::default();
        assert!(req.encode().is_err());
    }

    #[test]
    fn restore_details_elide_absent_fields() {
        let details = RestoreDatabaseDetails {
            latest: Some(true),
            ..Default::default()
        };
        let body = serde_json::to_string(&details).unwrap();
        assert_eq!(body, r#"{"latest":true}"#);
    }

    #[test]
    fn update_encodes_if_match_header() {
        let req = UpdateDatabaseRequest {
            database_id: "ocid1.database.oc1..aaaa".to_string(),
            if_match: Some("etag-a".to_string()),
            ..Default::default()
        };
        let w = req.encode().unwrap();
        assert!(w.headers.contains(&("if-match", "etag-a".to_string())));
    }
}
