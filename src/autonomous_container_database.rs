//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Autonomous Container Databases running within Autonomous Exadata
//! Infrastructure.

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
pub enum AutonomousContainerDatabaseLifecycleState {
    Provisioning,
    Available,
    Updating,
    Terminating,
    Terminated,
    Failed,
    BackupInProgress,
    Restarting,
    MaintenanceInProgress,
    #[serde(other)]
    Unknown,
}

/// The patch model of a container database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatchModel {
    ReleaseUpdates,
    ReleaseUpdateRevisions,
    #[serde(other)]
    Unknown,
}

/// An Autonomous Container Database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutonomousContainerDatabase {
    /// The OCID of the container database.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autonomous_exadata_infrastructure_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_level_agreement_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<AutonomousContainerDatabaseLifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_model: Option<PatchModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_maintenance_run_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_maintenance_run_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<FixedOffset>>,
}

pub type AutonomousContainerDatabaseSummary = AutonomousContainerDatabase;

/// Details for creating an Autonomous Container Database.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAutonomousContainerDatabaseDetails {
    /// The display name for the container database.
    pub display_name: String,
    /// The OCID of the Autonomous Exadata Infrastructure to contain the
    /// database.
    pub autonomous_exadata_infrastructure_id: String,
    /// The patch model preference: `RELEASE_UPDATES` or
    /// `RELEASE_UPDATE_REVISIONS`.
    pub patch_model: PatchModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_level_agreement_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_config: Option<AutonomousContainerDatabaseBackupConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<HashMap<String, String>>,
}

impl Default for PatchModel {
    fn default() -> Self {
        PatchModel::ReleaseUpdates
    }
}

/// Backup retention settings of a container database.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutonomousContainerDatabaseBackupConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_window_in_days: Option<i64>,
}

/// Request to create a new Autonomous Container Database in the specified
/// Autonomous Exadata Infrastructure.
#[derive(Debug, Clone, Default)]
pub struct CreateAutonomousContainerDatabaseRequest {
    pub create_autonomous_container_database_details: CreateAutonomousContainerDatabaseDetails,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct CreateAutonomousContainerDatabaseResponse {
    pub autonomous_container_database: AutonomousContainerDatabase,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl CreateAutonomousContainerDatabaseRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<CreateAutonomousContainerDatabaseResponse, DatabaseError> {
        let opts = CallOptions::new(&self.retry_policy, &self.timeout)
            .with_retry_token(&self.opc_retry_token);
        client.invoke(self, opts).await
    }
}

impl ServiceOperation for CreateAutonomousContainerDatabaseRequest {
    type Response = CreateAutonomousContainerDatabaseResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let details = &self.create_autonomous_container_database_details;
        if details.display_name.is_empty() {
            return validation_err!("display_name is required");
        }
        if details.autonomous_exadata_infrastructure_id.is_empty() {
            return validation_err!("autonomous_exadata_infrastructure_id is required");
        }
        let mut w = WireRequest::new(Method::POST, "/autonomousContainerDatabases");
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(details)?;
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<CreateAutonomousContainerDatabaseResponse, DatabaseError> {
        Ok(CreateAutonomousContainerDatabaseResponse {
            autonomous_container_database: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to get information about the specified Autonomous Container
/// Database.
#[derive(Debug, Clone, Default)]
pub struct GetAutonomousContainerDatabaseRequest {
    pub autonomous_container_database_id: String,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct GetAutonomousContainerDatabaseResponse {
    pub autonomous_container_database: AutonomousContainerDatabase,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl GetAutonomousContainerDatabaseRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<GetAutonomousContainerDatabaseResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for GetAutonomousContainerDatabaseRequest {
    type Response = GetAutonomousContainerDatabaseResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(
            Method::GET,
            "/autonomousContainerDatabases/{autonomousContainerDatabaseId}",
        );
        w.path(
            "autonomousContainerDatabaseId",
            &self.autonomous_container_database_id,
        )?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<GetAutonomousContainerDatabaseResponse, DatabaseError> {
        Ok(GetAutonomousContainerDatabaseResponse {
            autonomous_container_database: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to list the Autonomous Container Databases in the specified
/// compartment.
#[derive(Debug, Clone, Default)]
pub struct ListAutonomousContainerDatabasesRequest {
    pub compartment_id: String,
    pub autonomous_exadata_infrastructure_id: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct ListAutonomousContainerDatabasesResponse {
    pub items: Vec<AutonomousContainerDatabaseSummary>,
    pub opc_next_page: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl ListAutonomousContainerDatabasesRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<ListAutonomousContainerDatabasesResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for ListAutonomousContainerDatabasesRequest {
    type Response = ListAutonomousContainerDatabasesResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        if self.compartment_id.is_empty() {
            return validation_err!("compartment_id is required");
        }
        let mut w = WireRequest::new(Method::GET, "/autonomousContainerDatabases");
        w.query("compartmentId", self.compartment_id.as_str());
        w.query_opt(
            "autonomousExadataInfrastructureId",
            self.autonomous_exadata_infrastructure_id.as_deref(),
        );
        w.query_opt("displayName", self.display_name.as_deref());
        w.query_opt("lifecycleState", self.lifecycle_state.as_deref());
        w.query_opt("limit", self.limit.as_ref());
        w.query_opt("page", self.page.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<ListAutonomousContainerDatabasesResponse, DatabaseError> {
        Ok(ListAutonomousContainerDatabasesResponse {
            items: ctx.json()?,
            opc_next_page: ctx.header_str("opc-next-page"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Details for updating an Autonomous Container Database.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAutonomousContainerDatabaseDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_model: Option<PatchModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_config: Option<AutonomousContainerDatabaseBackupConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<HashMap<String, String>>,
}

/// Request to update the properties of the specified Autonomous Container
/// Database.
#[derive(Debug, Clone, Default)]
pub struct UpdateAutonomousContainerDatabaseRequest {
    pub autonomous_container_database_id: String,
    pub update_autonomous_container_database_details: UpdateAutonomousContainerDatabaseDetails,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct UpdateAutonomousContainerDatabaseResponse {
    pub autonomous_container_database: AutonomousContainerDatabase,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl UpdateAutonomousContainerDatabaseRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<UpdateAutonomousContainerDatabaseResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for UpdateAutonomousContainerDatabaseRequest {
    type Response = UpdateAutonomousContainerDatabaseResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(
            Method::PUT,
            "/autonomousContainerDatabases/{autonomousContainerDatabaseId}",
        );
        w.path(
            "autonomousContainerDatabaseId",
            &self.autonomous_container_database_id,
        )?;
        w.header_opt("if-match", self.if_match.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(&self.update_autonomous_container_database_details)?;
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<UpdateAutonomousContainerDatabaseResponse, DatabaseError> {
        Ok(UpdateAutonomousContainerDatabaseResponse {
            autonomous_container_database: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to roll the specified Autonomous Container Database and every
/// Autonomous Database inside it through a restart.
#[derive(Debug, Clone, Default)]
pub struct RestartAutonomousContainerDatabaseRequest {
    pub autonomous_container_database_id: String,
    pub if_match: Option<String>,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct RestartAutonomousContainerDatabaseResponse {
    pub autonomous_container_database: AutonomousContainerDatabase,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl RestartAutonomousContainerDatabaseRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<RestartAutonomousContainerDatabaseResponse, DatabaseError> {
        let opts = CallOptions::new(&self.retry_policy, &self.timeout)
            .with_retry_token(&self.opc_retry_token);
        client.invoke(self, opts).await
    }
}

impl ServiceOperation for RestartAutonomousContainerDatabaseRequest {
    type Response = RestartAutonomousContainerDatabaseResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(
            Method::POST,
            "/autonomousContainerDatabases/{autonomousContainerDatabaseId}/actions/restart",
        );
        w.path(
            "autonomousContainerDatabaseId",
            &self.autonomous_container_database_id,
        )?;
        w.header_opt("if-match", self.if_match.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<RestartAutonomousContainerDatabaseResponse, DatabaseError> {
        Ok(RestartAutonomousContainerDatabaseResponse {
            autonomous_container_database: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to terminate the specified Autonomous Container Database.
#[derive(Debug, Clone, Default)]
pub struct TerminateAutonomousContainerDatabaseRequest {
    pub autonomous_container_database_id: String,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct TerminateAutonomousContainerDatabaseResponse {
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl TerminateAutonomousContainerDatabaseRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<TerminateAutonomousContainerDatabaseResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for TerminateAutonomousContainerDatabaseRequest {
    type Response = TerminateAutonomousContainerDatabaseResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(
            Method::DELETE,
            "/autonomousContainerDatabases/{autonomousContainerDatabaseId}",
        );
        w.path(
            "autonomousContainerDatabaseId",
            &self.autonomous_container_database_id,
        )?;
        w.header_opt("if-match", self.if_match.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<TerminateAutonomousContainerDatabaseResponse, DatabaseError> {
        Ok(TerminateAutonomousContainerDatabaseResponse {
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_validates_mandatory_fields() {
        let req = CreateAutonomousContainerDatabaseRequest::default();
        assert!(req.encode().is_err());
    }

    #[test]
    fn patch_model_serializes_screaming_snake() {
        let s = serde_json::to_string(&PatchModel::ReleaseUpdateRevisions).unwrap();
        assert_eq!(s, r#""RELEASE_UPDATE_REVISIONS""#);
    }
}
