//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! DB systems: bare metal, virtual machine, and Exadata database
//! infrastructure, plus their shapes, versions, patches, and the Exadata
//! IORM configuration.

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
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, DeserializeDerive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DbSystemLifecycleState {
    Provisioning,
    Available,
    Updating,
    Terminating,
    Terminated,
    Failed,
    #[serde(other)]
    Unknown,
}

/// A DB system.
#[derive(Debug, Clone, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct DbSystem {
    /// The OCID of the DB system.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_domain: Option<String>,
    /// The OCID of the subnet the DB system is associated with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    /// The shape of the DB system, e.g. `VM.Standard2.4` or
    /// `Exadata.Half2.184`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_core_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_edition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_storage_size_in_g_bs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reco_storage_size_in_g_b: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_public_keys: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<DbSystemLifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_patch_history_entry_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_ip_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vip_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<FixedOffset>>,
}

pub type DbSystemSummary = DbSystem;

/// Database definition embedded in a launch call, by way of a new DB home.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct CreateDbHomeDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub db_version: String,
    pub database: crate::db_home::CreateDatabaseDetails,
}

/// DB home definition for a launch restoring from a backup.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct CreateDbHomeFromBackupDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub database: crate::db_home::CreateDatabaseFromBackupDetails,
}

/// Fields common to every way of launching a DB system.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct LaunchDbSystemBaseDetails {
    pub compartment_id: String,
    pub availability_domain: String,
    pub subnet_id: String,
    pub shape: String,
    pub hostname: String,
    pub ssh_public_keys: Vec<String>,
    pub cpu_core_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_data_storage_size_in_g_b: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<HashMap<String, String>>,
}

/// Launch with a brand new database.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct LaunchDbSystemDetails {
    #[serde(flatten)]
    pub base: LaunchDbSystemBaseDetails,
    pub db_home: CreateDbHomeDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_edition: Option<String>,
}

/// Launch restoring a database from a backup.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct LaunchDbSystemFromBackupDetails {
    #[serde(flatten)]
    pub base: LaunchDbSystemBaseDetails,
    pub db_home: CreateDbHomeFromBackupDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_edition: Option<String>,
}

/// The polymorphic body of a launch call, discriminated by the `source`
/// JSON key: `NONE` launches with a new database, `DB_BACKUP` restores one
/// from a backup. Unknown discriminator values decode as `NONE`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "source")]
pub enum LaunchDbSystemBase {
    #[serde(rename = "NONE")]
    New(LaunchDbSystemDetails),
    #[serde(rename = "DB_BACKUP")]
    FromBackup(LaunchDbSystemFromBackupDetails),
}

impl Default for LaunchDbSystemBase {
    fn default() -> Self {
        LaunchDbSystemBase::New(Default::default())
    }
}

impl<'de> Deserialize<'de> for LaunchDbSystemBase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let source = value
            .get("source")
            .and_then(|v| v.as_str())
            .unwrap_or("NONE")
            .to_string();
        match source.as_str() {
            "DB_BACKUP" => serde_json::from_value(value)
                .map(LaunchDbSystemBase::FromBackup)
                .map_err(D::Error::custom),
            _ => serde_json::from_value(value)
                .map(LaunchDbSystemBase::New)
                .map_err(D::Error::custom),
        }
    }
}

impl LaunchDbSystemBase {
    fn base(&self) -> &LaunchDbSystemBaseDetails {
        match self {
            LaunchDbSystemBase::New(d) => &d.base,
            LaunchDbSystemBase::FromBackup(d) => &d.base,
        }
    }
}

/// Request to launch a new DB system in the specified compartment and
/// availability domain.
#[derive(Debug, Clone, Default)]
pub struct LaunchDbSystemRequest {
    pub launch_db_system_details: LaunchDbSystemBase,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct LaunchDbSystemResponse {
    pub db_system: DbSystem,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl LaunchDbSystemRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<LaunchDbSystemResponse, DatabaseError> {
        let opts = CallOptions::new(&self.retry_policy, &self.timeout)
            .with_retry_token(&self.opc_retry_token);
        client.invoke(self, opts).await
    }
}

impl ServiceOperation for LaunchDbSystemRequest {
    type Response = LaunchDbSystemResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let base = self.launch_db_system_details.base();
        if base.compartment_id.is_empty() {
            return validation_err!("compartment_id is required");
        }
        if base.availability_domain.is_empty() {
            return validation_err!("availability_domain is required");
        }
        if base.shape.is_empty() {
            return validation_err!("shape is required");
        }
        let mut w = WireRequest::new(Method::POST, "/dbSystems");
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(&self.launch_db_system_details)?;
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<LaunchDbSystemResponse, DatabaseError> {
        Ok(LaunchDbSystemResponse {
            db_system: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to get information about the specified DB system.
#[derive(Debug, Clone, Default)]
pub struct GetDbSystemRequest {
    pub db_system_id: String,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct GetDbSystemResponse {
    pub db_system: DbSystem,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl GetDbSystemRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<GetDbSystemResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for GetDbSystemRequest {
    type Response = GetDbSystemResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::GET, "/dbSystems/{dbSystemId}");
        w.path("dbSystemId", &self.db_system_id)?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<GetDbSystemResponse, DatabaseError> {
        Ok(GetDbSystemResponse {
            db_system: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to list the DB systems in the specified compartment. An
/// optional backup id restricts the listing to DB systems that can be used
/// to restore that backup.
#[derive(Debug, Clone, Default)]
pub struct ListDbSystemsRequest {
    pub compartment_id: String,
    pub backup_id: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct ListDbSystemsResponse {
    pub items: Vec<DbSystemSummary>,
    pub opc_next_page: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl ListDbSystemsRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<ListDbSystemsResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for ListDbSystemsRequest {
    type Response = ListDbSystemsResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        if self.compartment_id.is_empty() {
            return validation_err!("compartment_id is required");
        }
        let mut w = WireRequest::new(Method::GET, "/dbSystems");
        w.query("compartmentId", self.compartment_id.as_str());
        w.query_opt("backupId", self.backup_id.as_deref());
        w.query_opt("limit", self.limit.as_ref());
        w.query_opt("page", self.page.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<ListDbSystemsResponse, DatabaseError> {
        Ok(ListDbSystemsResponse {
            items: ctx.json()?,
            opc_next_page: ctx.header_str("opc-next-page"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Details for updating a DB system's mutable properties.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDbSystemDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_core_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_storage_size_in_g_bs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_public_keys: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<crate::db_home::PatchDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<HashMap<String, String>>,
}

/// Request to update the properties of the specified DB system, such as
/// the CPU core count.
#[derive(Debug, Clone, Default)]
pub struct UpdateDbSystemRequest {
    pub db_system_id: String,
    pub update_db_system_details: UpdateDbSystemDetails,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct UpdateDbSystemResponse {
    pub db_system: DbSystem,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl UpdateDbSystemRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<UpdateDbSystemResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for UpdateDbSystemRequest {
    type Response = UpdateDbSystemResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::PUT, "/dbSystems/{dbSystemId}");
        w.path("dbSystemId", &self.db_system_id)?;
        w.header_opt("if-match", self.if_match.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(&self.update_db_system_details)?;
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<UpdateDbSystemResponse, DatabaseError> {
        Ok(UpdateDbSystemResponse {
            db_system: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to terminate a DB system and permanently delete it, including
/// any databases running on it.
#[derive(Debug, Clone, Default)]
pub struct TerminateDbSystemRequest {
    pub db_system_id: String,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct TerminateDbSystemResponse {
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl TerminateDbSystemRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<TerminateDbSystemResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for TerminateDbSystemRequest {
    type Response = TerminateDbSystemResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::DELETE, "/dbSystems/{dbSystemId}");
        w.path("dbSystemId", &self.db_system_id)?;
        w.header_opt("if-match", self.if_match.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<TerminateDbSystemResponse, DatabaseError> {
        Ok(TerminateDbSystemResponse {
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// The shape of a DB system.
#[derive(Debug, Clone, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct DbSystemShapeSummary {
    /// The name of the shape, used when launching a DB system.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_core_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_core_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_count_increment: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_node_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_node_count: Option<i64>,
}

/// Request to list the shapes that can be used to launch a new DB system.
#[derive(Debug, Clone, Default)]
pub struct ListDbSystemShapesRequest {
    pub compartment_id: String,
    pub availability_domain: String,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct ListDbSystemShapesResponse {
    pub items: Vec<DbSystemShapeSummary>,
    pub opc_next_page: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl ListDbSystemShapesRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<ListDbSystemShapesResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for ListDbSystemShapesRequest {
    type Response = ListDbSystemShapesResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        if self.compartment_id.is_empty() {
            return validation_err!("compartment_id is required");
        }
        if self.availability_domain.is_empty() {
            return validation_err!("availability_domain is required");
        }
        let mut w = WireRequest::new(Method::GET, "/dbSystemShapes");
        w.query("compartmentId", self.compartment_id.as_str());
        w.query("availabilityDomain", self.availability_domain.as_str());
        w.query_opt("limit", self.limit.as_ref());
        w.query_opt("page", self.page.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<ListDbSystemShapesResponse, DatabaseError> {
        Ok(ListDbSystemShapesResponse {
            items: ctx.json()?,
            opc_next_page: ctx.header_str("opc-next-page"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// A supported Oracle Database version.
#[derive(Debug, Clone, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct DbVersionSummary {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_latest_for_major_version: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_pdb: Option<bool>,
}

/// Request to list the supported Oracle Database versions.
#[derive(Debug, Clone, Default)]
pub struct ListDbVersionsRequest {
    pub compartment_id: String,
    /// Filters to versions supported by the given shape.
    pub db_system_shape: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct ListDbVersionsResponse {
    pub items: Vec<DbVersionSummary>,
    pub opc_next_page: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl ListDbVersionsRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<ListDbVersionsResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for ListDbVersionsRequest {
    type Response = ListDbVersionsResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        if self.compartment_id.is_empty() {
            return validation_err!("compartment_id is required");
        }
        let mut w = WireRequest::new(Method::GET, "/dbVersions");
        w.query("compartmentId", self.compartment_id.as_str());
        w.query_opt("dbSystemShape", self.db_system_shape.as_deref());
        w.query_opt("limit", self.limit.as_ref());
        w.query_opt("page", self.page.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<ListDbVersionsResponse, DatabaseError> {
        Ok(ListDbVersionsResponse {
            items: ctx.json()?,
            opc_next_page: ctx.header_str("opc-next-page"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to get information about a specified patch package for a DB
/// system.
#[derive(Debug, Clone, Default)]
pub struct GetDbSystemPatchRequest {
    pub db_system_id: String,
    pub patch_id: String,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct GetDbSystemPatchResponse {
    pub patch: Patch,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl GetDbSystemPatchRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<GetDbSystemPatchResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for GetDbSystemPatchRequest {
    type Response = GetDbSystemPatchResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::GET, "/dbSystems/{dbSystemId}/patches/{patchId}");
        w.path("dbSystemId", &self.db_system_id)?;
        w.path("patchId", &self.patch_id)?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<GetDbSystemPatchResponse, DatabaseError> {
        Ok(GetDbSystemPatchResponse {
            patch: ctx.json()?,
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to list the patches applicable to the requested DB system.
#[derive(Debug, Clone, Default)]
pub struct ListDbSystemPatchesRequest {
    pub db_system_id: String,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct ListDbSystemPatchesResponse {
    pub items: Vec<PatchSummary>,
    pub opc_next_page: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl ListDbSystemPatchesRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<ListDbSystemPatchesResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for ListDbSystemPatchesRequest {
    type Response = ListDbSystemPatchesResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::GET, "/dbSystems/{dbSystemId}/patches");
        w.path("dbSystemId", &self.db_system_id)?;
        w.query_opt("limit", self.limit.as_ref());
        w.query_opt("page", self.page.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<ListDbSystemPatchesResponse, DatabaseError> {
        Ok(ListDbSystemPatchesResponse {
            items: ctx.json()?,
            opc_next_page: ctx.header_str("opc-next-page"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to get the details of the specified patch operation on the
/// specified DB system.
#[derive(Debug, Clone, Default)]
pub struct GetDbSystemPatchHistoryEntryRequest {
    pub db_system_id: String,
    pub patch_history_entry_id: String,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct GetDbSystemPatchHistoryEntryResponse {
    pub patch_history_entry: PatchHistoryEntry,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl GetDbSystemPatchHistoryEntryRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<GetDbSystemPatchHistoryEntryResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for GetDbSystemPatchHistoryEntryRequest {
    type Response = GetDbSystemPatchHistoryEntryResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(
            Method::GET,
            "/dbSystems/{dbSystemId}/patchHistoryEntries/{patchHistoryEntryId}",
        );
        w.path("dbSystemId", &self.db_system_id)?;
        w.path("patchHistoryEntryId", &self.patch_history_entry_id)?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<GetDbSystemPatchHistoryEntryResponse, DatabaseError> {
        Ok(GetDbSystemPatchHistoryEntryResponse {
            patch_history_entry: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to list the patch history of the specified DB system.
#[derive(Debug, Clone, Default)]
pub struct ListDbSystemPatchHistoryEntriesRequest {
    pub db_system_id: String,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct ListDbSystemPatchHistoryEntriesResponse {
    pub items: Vec<PatchHistoryEntrySummary>,
    pub opc_next_page: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl ListDbSystemPatchHistoryEntriesRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<ListDbSystemPatchHistoryEntriesResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for ListDbSystemPatchHistoryEntriesRequest {
    type Response = ListDbSystemPatchHistoryEntriesResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::GET, "/dbSystems/{dbSystemId}/patchHistoryEntries");
        w.path("dbSystemId", &self.db_system_id)?;
        w.query_opt("limit", self.limit.as_ref());
        w.query_opt("page", self.page.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<ListDbSystemPatchHistoryEntriesResponse, DatabaseError> {
        Ok(ListDbSystemPatchHistoryEntriesResponse {
            items: ctx.json()?,
            opc_next_page: ctx.header_str("opc-next-page"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// IORM settings for one database in an Exadata DB system.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct DbIormConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    /// Relative share of the I/O resources, 1 to 32.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash_cache_limit: Option<String>,
}

/// The IORM configuration of an Exadata DB system.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct ExadataIormConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    /// The current value for the IORM objective, e.g. `AUTO`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_plans: Option<Vec<DbIormConfig>>,
}

/// Details for updating the IORM configuration.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct ExadataIormConfigUpdateDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_plans: Option<Vec<DbIormConfig>>,
}

/// Request to get the IORM configuration settings for the specified
/// Exadata DB system.
#[derive(Debug, Clone, Default)]
pub struct GetExadataIormConfigRequest {
    pub db_system_id: String,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct GetExadataIormConfigResponse {
    pub exadata_iorm_config: ExadataIormConfig,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl GetExadataIormConfigRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<GetExadataIormConfigResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for GetExadataIormConfigRequest {
    type Response = GetExadataIormConfigResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::GET, "/dbSystems/{dbSystemId}/ExadataIormConfig");
        w.path("dbSystemId", &self.db_system_id)?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<GetExadataIormConfigResponse, DatabaseError> {
        Ok(GetExadataIormConfigResponse {
            exadata_iorm_config: ctx.json()?,
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to update the IORM settings for the specified Exadata DB
/// system.
#[derive(Debug, Clone, Default)]
pub struct UpdateExadataIormConfigRequest {
    pub db_system_id: String,
    pub exadata_iorm_config_update_details: ExadataIormConfigUpdateDetails,
    pub if_match: Option<String>,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct UpdateExadataIormConfigResponse {
    pub exadata_iorm_config: ExadataIormConfig,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl UpdateExadataIormConfigRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<UpdateExadataIormConfigResponse, DatabaseError> {
        let opts = CallOptions::new(&self.retry_policy, &self.timeout)
            .with_retry_token(&self.opc_retry_token);
        client.invoke(self, opts).await
    }
}

impl ServiceOperation for UpdateExadataIormConfigRequest {
    type Response = UpdateExadataIormConfigResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::PUT, "/dbSystems/{dbSystemId}/ExadataIormConfig");
        w.path("dbSystemId", &self.db_system_id)?;
        w.header_opt("if-match", self.if_match.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(&self.exadata_iorm_config_update_details)?;
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<UpdateExadataIormConfigResponse, DatabaseError> {
        Ok(UpdateExadataIormConfigResponse {
            exadata_iorm_config: ctx.json()?,
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_body_flattens_base_and_injects_source() {
        let details = LaunchDbSystemBase::New(LaunchDbSystemDetails {
            base: LaunchDbSystemBaseDetails {
                compartment_id: "c1".to_string(),
                availability_domain: "AD-1".to_string(),
                subnet_id: "subnet1".to_string(),
                shape: "VM.Standard2.4".to_string(),
                hostname: "db-host".to_string(),
                ssh_public_keys: vec!["ssh-rsa AAAA".to_string()],
                cpu_core_count: 4,
                ..Default::default()
            },
            db_home: CreateDbHomeDetails {
                display_name: None,
                db_version: "19.3.0.0".to_string(),
                database: crate::db_home::CreateDatabaseDetails {
                    db_name: "proddb".to_string(),
                    admin_password: "pw".to_string(),
                    ..Default::default()
                },
            },
            database_edition: Some("ENTERPRISE_EDITION".to_string()),
        });
        let v: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&details).unwrap()).unwrap();
        assert_eq!(v["source"], "NONE");
        assert_eq!(v["compartmentId"], "c1");
        assert_eq!(v["dbHome"]["dbVersion"], "19.3.0.0");
        assert_eq!(v["cpuCoreCount"], 4);
    }

    #[test]
    fn launch_validates_mandatory_fields() {
        let req = LaunchDbSystemRequest::default();
        let err = req.encode().unwrap_err();
        assert!(matches!(err, DatabaseError::Validation { .. }));
    }

    #[test]
    fn launch_from_backup_round_trips_discriminator() {
        let body = r#"{
            "source": "DB_BACKUP",
            "compartmentId": "c1",
            "availabilityDomain": "AD-1",
            "subnetId": "subnet1",
            "shape": "VM.Standard2.4",
            "hostname": "db-host",
            "sshPublicKeys": ["ssh-rsa AAAA"],
            "cpuCoreCount": 4,
            "dbHome": {"database": {"backupId": "b1", "backupTDEPassword": "tde", "adminPassword": "pw"}}
        }"#;
        let base: LaunchDbSystemBase = serde_json::from_str(body).unwrap();
        assert!(matches!(base, LaunchDbSystemBase::FromBackup(_)));
        let v: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&base).unwrap()).unwrap();
        assert_eq!(v["source"], "DB_BACKUP");
    }
}
