//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! DB homes: Oracle Database software installations within a DB system.

use crate::client::{CallOptions, DatabaseClient, ServiceOperation};
use crate::error::{validation_err, DatabaseError};
use crate::patch::{Patch, PatchHistoryEntry, PatchHistoryEntrySummary, PatchSummary};
use crate::retry::RetryPolicy;
use crate::wire::{RawResponse, ResponseCtx, WireRequest};
use chrono::{DateTime, FixedOffset};
use reqwest::Method;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_derive::{Deserialize as DeserializeDerive, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, DeserializeDerive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DbHomeLifecycleState {
    Provisioning,
    Available,
    Updating,
    Terminating,
    Terminated,
    Failed,
    #[serde(other)]
    Unknown,
}

/// A directory where Oracle Database software is installed.
#[derive(Debug, Clone, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct DbHome {
    /// The OCID of the DB home.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_system_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// The Oracle Database version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_patch_history_entry_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<DbHomeLifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<FixedOffset>>,
}

pub type DbHomeSummary = DbHome;

/// Database definition embedded in a create-DB-home call.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatabaseDetails {
    /// The database name, up to 8 alphanumeric characters starting with an
    /// alphabetic character.
    pub db_name: String,
    /// A strong password for `SYS`, `SYSTEM`, and `PDB Admin`.
    pub admin_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_workload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ncharacter_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdb_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_backup_config: Option<crate::database::DbBackupConfig>,
}

/// Database restored from a backup, embedded in a create-DB-home call.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatabaseFromBackupDetails {
    /// The OCID of the backup to restore from.
    pub backup_id: String,
    /// The password to open the TDE wallet of the backup.
    #[serde(rename = "backupTDEPassword")]
    pub backup_tde_password: String,
    /// A strong password for `SYS`, `SYSTEM`, and `PDB Admin`.
    pub admin_password: String,
}

/// DB home created with a brand new database.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct CreateDbHomeWithDbSystemIdDetails {
    /// The OCID of the DB system.
    pub db_system_id: String,
    /// The Oracle Database version for the new home.
    pub db_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub database: CreateDatabaseDetails,
}

/// DB home created by restoring a database from a backup.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct CreateDbHomeWithDbSystemIdFromBackupDetails {
    /// The OCID of the DB system.
    pub db_system_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub database: CreateDatabaseFromBackupDetails,
}

/// The polymorphic body of a create-DB-home call, discriminated by the
/// `source` JSON key: `NONE` for a new database, `DB_BACKUP` for a
/// database restored from a backup. Unknown discriminator values decode as
/// the `NONE` variant so the SDK keeps working when the service adds
/// sources.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "source")]
pub enum CreateDbHomeBase {
    #[serde(rename = "NONE")]
    New(CreateDbHomeWithDbSystemIdDetails),
    #[serde(rename = "DB_BACKUP")]
    FromBackup(CreateDbHomeWithDbSystemIdFromBackupDetails),
}

impl Default for CreateDbHomeBase {
    fn default() -> Self {
        CreateDbHomeBase::New(Default::default())
    }
}

impl<'de> Deserialize<'de> for CreateDbHomeBase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let source = value
            .get("source")
            .and_then(|v| v.as_str())
            .unwrap_or("NONE")
            .to_string();
        match source.as_str() {
            "DB_BACKUP" => serde_json::from_value(value)
                .map(CreateDbHomeBase::FromBackup)
                .map_err(D::Error::custom),
            _ => serde_json::from_value(value)
                .map(CreateDbHomeBase::New)
                .map_err(D::Error::custom),
        }
    }
}

impl CreateDbHomeBase {
    fn db_system_id(&self) -> &str {
        match self {
            CreateDbHomeBase::New(d) => &d.db_system_id,
            CreateDbHomeBase::FromBackup(d) => &d.db_system_id,
        }
    }
}

/// Request to create a new DB home in the specified DB system based on the
/// request parameters provided.
#[derive(Debug, Clone, Default)]
pub struct CreateDbHomeRequest {
    pub create_db_home_with_db_system_id_details: CreateDbHomeBase,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct CreateDbHomeResponse {
    pub db_home: DbHome,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl CreateDbHomeRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<CreateDbHomeResponse, DatabaseError> {
        let opts = CallOptions::new(&self.retry_policy, &self.timeout)
            .with_retry_token(&self.opc_retry_token);
        client.invoke(self, opts).await
    }
}

impl ServiceOperation for CreateDbHomeRequest {
    type Response = CreateDbHomeResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        if self
            .create_db_home_with_db_system_id_details
            .db_system_id()
            .is_empty()
        {
            return validation_err!("db_system_id is required");
        }
        let mut w = WireRequest::new(Method::POST, "/dbHomes");
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(&self.create_db_home_with_db_system_id_details)?;
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<CreateDbHomeResponse, DatabaseError> {
        Ok(CreateDbHomeResponse {
            db_home: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to get information about the specified DB home.
#[derive(Debug, Clone, Default)]
pub struct GetDbHomeRequest {
    pub db_home_id: String,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct GetDbHomeResponse {
    pub db_home: DbHome,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl GetDbHomeRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<GetDbHomeResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for GetDbHomeRequest {
    type Response = GetDbHomeResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::GET, "/dbHomes/{dbHomeId}");
        w.path("dbHomeId", &self.db_home_id)?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<GetDbHomeResponse, DatabaseError> {
        Ok(GetDbHomeResponse {
            db_home: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to list the DB homes in the specified DB system and compartment.
#[derive(Debug, Clone, Default)]
pub struct ListDbHomesRequest {
    pub compartment_id: String,
    pub db_system_id: String,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct ListDbHomesResponse {
    pub items: Vec<DbHomeSummary>,
    pub opc_next_page: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl ListDbHomesRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<ListDbHomesResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for ListDbHomesRequest {
    type Response = ListDbHomesResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        if self.compartment_id.is_empty() {
            return validation_err!("compartment_id is required");
        }
        if self.db_system_id.is_empty() {
            return validation_err!("db_system_id is required");
        }
        let mut w = WireRequest::new(Method::GET, "/dbHomes");
        w.query("compartmentId", self.compartment_id.as_str());
        w.query("dbSystemId", self.db_system_id.as_str());
        w.query_opt("limit", self.limit.as_ref());
        w.query_opt("page", self.page.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<ListDbHomesResponse, DatabaseError> {
        Ok(ListDbHomesResponse {
            items: ctx.json()?,
            opc_next_page: ctx.header_str("opc-next-page"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Patches the specified DB home. The only mutable property is the patch
/// action to run.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct PatchDetails {
    /// The OCID of the patch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_id: Option<String>,
    /// The action to perform on the patch: `APPLY` or `PRECHECK`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<crate::patch::PatchAction>,
}

/// Details for updating a DB home.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDbHomeDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_version: Option<PatchDetails>,
}

/// Request to patch the specified DB home.
#[derive(Debug, Clone, Default)]
pub struct UpdateDbHomeRequest {
    pub db_home_id: String,
    pub update_db_home_details: UpdateDbHomeDetails,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct UpdateDbHomeResponse {
    pub db_home: DbHome,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl UpdateDbHomeRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<UpdateDbHomeResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for UpdateDbHomeRequest {
    type Response = UpdateDbHomeResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::PUT, "/dbHomes/{dbHomeId}");
        w.path("dbHomeId", &self.db_home_id)?;
        w.header_opt("if-match", self.if_match.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(&self.update_db_home_details)?;
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<UpdateDbHomeResponse, DatabaseError> {
        Ok(UpdateDbHomeResponse {
            db_home: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to delete a DB home. The DB home and its database data are
/// removed; an optional final backup can be taken first.
#[derive(Debug, Clone, Default)]
pub struct DeleteDbHomeRequest {
    pub db_home_id: String,
    /// Whether to perform a final backup of the database before deleting.
    pub perform_final_backup: Option<bool>,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct DeleteDbHomeResponse {
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl DeleteDbHomeRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<DeleteDbHomeResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for DeleteDbHomeRequest {
    type Response = DeleteDbHomeResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::DELETE, "/dbHomes/{dbHomeId}");
        w.path("dbHomeId", &self.db_home_id)?;
        w.query_opt("performFinalBackup", self.perform_final_backup.as_ref());
        w.header_opt("if-match", self.if_match.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<DeleteDbHomeResponse, DatabaseError> {
        Ok(DeleteDbHomeResponse {
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to get information about a specified patch package for a DB
/// home.
#[derive(Debug, Clone, Default)]
pub struct GetDbHomePatchRequest {
    pub db_home_id: String,
    pub patch_id: String,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct GetDbHomePatchResponse {
    pub patch: Patch,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl GetDbHomePatchRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<GetDbHomePatchResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for GetDbHomePatchRequest {
    type Response = GetDbHomePatchResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::GET, "/dbHomes/{dbHomeId}/patches/{patchId}");
        w.path("dbHomeId", &self.db_home_id)?;
        w.path("patchId", &self.patch_id)?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<GetDbHomePatchResponse, DatabaseError> {
        Ok(GetDbHomePatchResponse {
            patch: ctx.json()?,
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to list patches applicable to the requested DB home.
#[derive(Debug, Clone, Default)]
pub struct ListDbHomePatchesRequest {
    pub db_home_id: String,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct ListDbHomePatchesResponse {
    pub items: Vec<PatchSummary>,
    pub opc_next_page: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl ListDbHomePatchesRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<ListDbHomePatchesResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for ListDbHomePatchesRequest {
    type Response = ListDbHomePatchesResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::GET, "/dbHomes/{dbHomeId}/patches");
        w.path("dbHomeId", &self.db_home_id)?;
        w.query_opt("limit", self.limit.as_ref());
        w.query_opt("page", self.page.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<ListDbHomePatchesResponse, DatabaseError> {
        Ok(ListDbHomePatchesResponse {
            items: ctx.json()?,
            opc_next_page: ctx.header_str("opc-next-page"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to get the details of the specified patch operation on the
/// specified DB home.
#[derive(Debug, Clone, Default)]
pub struct GetDbHomePatchHistoryEntryRequest {
    pub db_home_id: String,
    pub patch_history_entry_id: String,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct GetDbHomePatchHistoryEntryResponse {
    pub patch_history_entry: PatchHistoryEntry,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl GetDbHomePatchHistoryEntryRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<GetDbHomePatchHistoryEntryResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for GetDbHomePatchHistoryEntryRequest {
    type Response = GetDbHomePatchHistoryEntryResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(
            Method::GET,
            "/dbHomes/{dbHomeId}/patchHistoryEntries/{patchHistoryEntryId}",
        );
        w.path("dbHomeId", &self.db_home_id)?;
        w.path("patchHistoryEntryId", &self.patch_history_entry_id)?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<GetDbHomePatchHistoryEntryResponse, DatabaseError> {
        Ok(GetDbHomePatchHistoryEntryResponse {
            patch_history_entry: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to list the patch history of the specified DB home.
#[derive(Debug, Clone, Default)]
pub struct ListDbHomePatchHistoryEntriesRequest {
    pub db_home_id: String,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct ListDbHomePatchHistoryEntriesResponse {
    pub items: Vec<PatchHistoryEntrySummary>,
    pub opc_next_page: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl ListDbHomePatchHistoryEntriesRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<ListDbHomePatchHistoryEntriesResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for ListDbHomePatchHistoryEntriesRequest {
    type Response = ListDbHomePatchHistoryEntriesResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::GET, "/dbHomes/{dbHomeId}/patchHistoryEntries");
        w.path("dbHomeId", &self.db_home_id)?;
        w.query_opt("limit", self.limit.as_ref());
        w.query_opt("page", self.page.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<ListDbHomePatchHistoryEntriesResponse, DatabaseError> {
        Ok(ListDbHomePatchHistoryEntriesResponse {
            items: ctx.json()?,
            opc_next_page: ctx.header_str("opc-next-page"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_carries_source_discriminator() {
        let req = CreateDbHomeRequest {
            create_db_home_with_db_system_id_details: CreateDbHomeBase::FromBackup(
                CreateDbHomeWithDbSystemIdFromBackupDetails {
                    db_system_id: "ocid1.dbsystem.oc1..aaaa".to_string(),
                    display_name: None,
                    database: CreateDatabaseFromBackupDetails {
                        backup_id: "ocid1.backup.oc1..bbbb".to_string(),
                        backup_tde_password: "tde-pw".to_string(),
                        admin_password: "admin-pw".to_string(),
                    },
                },
            ),
            ..Default::default()
        };
        let w = req.encode().unwrap();
        let body = match w.body {
            crate::wire::WireBody::Json(b) => b,
            _ => panic!("expected json body"),
        };
        let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(v["source"], "DB_BACKUP");
        assert_eq!(v["database"]["backupId"], "ocid1.backup.oc1..bbbb");
    }

    #[test]
    fn missing_source_key_decodes_as_new_database() {
        let body = r#"{
            "dbSystemId": "ocid1.dbsystem.oc1..aaaa",
            "dbVersion": "19.3.0.0",
            "database": {"dbName": "proddb", "adminPassword": "pw"}
        }"#;
        let base: CreateDbHomeBase = serde_json::from_str(body).unwrap();
        match base {
            CreateDbHomeBase::New(d) => assert_eq!(d.db_version, "19.3.0.0"),
            other => panic!("expected New, got {:?}", other),
        }
    }

    #[test]
    fn create_requires_db_system_id() {
        let req = CreateDbHomeRequest::default();
        assert!(req.encode().is_err());
    }
}
