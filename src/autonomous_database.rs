//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Autonomous Databases: serverless Oracle databases with self-managing
//! infrastructure, their backups, and wallet generation.

use crate::client::{CallOptions, DatabaseClient, ServiceOperation};
use crate::error::{validation_err, DatabaseError};
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
pub enum AutonomousDatabaseLifecycleState {
    Provisioning,
    Available,
    Stopping,
    Stopped,
    Starting,
    Terminating,
    Terminated,
    Unavailable,
    RestoreInProgress,
    RestoreFailed,
    BackupInProgress,
    ScaleInProgress,
    AvailableNeedsAttention,
    Updating,
    #[serde(other)]
    Unknown,
}

/// The Autonomous Database workload type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, DeserializeDerive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutonomousDatabaseWorkload {
    /// Autonomous Transaction Processing
    Oltp,
    /// Autonomous Data Warehouse
    Dw,
    #[serde(other)]
    Unknown,
}

/// Connection strings of an Autonomous Database, by consumer group.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct AutonomousDatabaseConnectionStrings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_connection_strings: Option<HashMap<String, String>>,
}

/// An Autonomous Database.
#[derive(Debug, Clone, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct AutonomousDatabase {
    /// The OCID of the Autonomous Database.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<AutonomousDatabaseLifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_core_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_storage_size_in_t_bs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_workload: Option<AutonomousDatabaseWorkload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free_tier: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_scaling_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_strings: Option<AutonomousDatabaseConnectionStrings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_console_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<FixedOffset>>,
}

pub type AutonomousDatabaseSummary = AutonomousDatabase;

/// Fields shared by every way of creating an Autonomous Database.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct CreateAutonomousDatabaseDetails {
    /// The OCID of the compartment of the database.
    pub compartment_id: String,
    /// The database name, up to 14 alphanumeric characters starting with
    /// an alphabetic character.
    pub db_name: String,
    /// The number of OCPU cores to enable.
    pub cpu_core_count: i64,
    /// The size of the data storage in terabytes.
    #[serde(rename = "dataStorageSizeInTBs")]
    pub data_storage_size_in_tbs: i64,
    /// A strong password for the `ADMIN` user.
    pub admin_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_workload: Option<AutonomousDatabaseWorkload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free_tier: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_scaling_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<HashMap<String, String>>,
}

/// The clone type of a clone-create call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, DeserializeDerive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CloneType {
    /// A complete clone, with data.
    Full,
    /// A clone of the database metadata only.
    Metadata,
    #[serde(other)]
    Unknown,
}

/// Creation of an Autonomous Database by cloning an existing one.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct CreateAutonomousDatabaseCloneDetails {
    #[serde(flatten)]
    pub details: CreateAutonomousDatabaseDetails,
    /// The OCID of the Autonomous Database to clone.
    pub source_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clone_type: Option<CloneType>,
}

/// The polymorphic body of a create call, discriminated by the `source`
/// JSON key: `NONE` creates a fresh database, `DATABASE` clones an
/// existing one. Unknown discriminator values decode as the `NONE`
/// variant, preserving forward compatibility when the service adds new
/// sources.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "source")]
pub enum CreateAutonomousDatabaseBase {
    #[serde(rename = "NONE")]
    New(CreateAutonomousDatabaseDetails),
    #[serde(rename = "DATABASE")]
    Clone(CreateAutonomousDatabaseCloneDetails),
}

impl Default for CreateAutonomousDatabaseBase {
    fn default() -> Self {
        CreateAutonomousDatabaseBase::New(Default::default())
    }
}

impl<'de> Deserialize<'de> for CreateAutonomousDatabaseBase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let source = value
            .get("source")
            .and_then(|v| v.as_str())
            .unwrap_or("NONE")
            .to_string();
        match source.as_str() {
            "DATABASE" => serde_json::from_value(value)
                .map(CreateAutonomousDatabaseBase::Clone)
                .map_err(D::Error::custom),
            _ => serde_json::from_value(value)
                .map(CreateAutonomousDatabaseBase::New)
                .map_err(D::Error::custom),
        }
    }
}

impl CreateAutonomousDatabaseBase {
    fn details(&self) -> &CreateAutonomousDatabaseDetails {
        match self {
            CreateAutonomousDatabaseBase::New(d) => d,
            CreateAutonomousDatabaseBase::Clone(d) => &d.details,
        }
    }
}

/// Request to create a new Autonomous Database.
///
/// The operation is idempotent by retry token: when `opc_retry_token` is
/// unset a token is generated, and the same token is sent on every attempt
/// of this logical call, so retried submissions provision at most one
/// database.
#[derive(Debug, Clone, Default)]
pub struct CreateAutonomousDatabaseRequest {
    pub create_autonomous_database_details: CreateAutonomousDatabaseBase,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct CreateAutonomousDatabaseResponse {
    pub autonomous_database: AutonomousDatabase,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl CreateAutonomousDatabaseRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<CreateAutonomousDatabaseResponse, DatabaseError> {
        let opts = CallOptions::new(&self.retry_policy, &self.timeout)
            .with_retry_token(&self.opc_retry_token);
        client.invoke(self, opts).await
    }
}

impl ServiceOperation for CreateAutonomousDatabaseRequest {
    type Response = CreateAutonomousDatabaseResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let details = self.create_autonomous_database_details.details();
        if details.compartment_id.is_empty() {
            return validation_err!("compartment_id is required");
        }
        if details.db_name.is_empty() {
            return validation_err!("db_name is required");
        }
        if details.admin_password.is_empty() {
            return validation_err!("admin_password is required");
        }
        let mut w = WireRequest::new(Method::POST, "/autonomousDatabases");
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(&self.create_autonomous_database_details)?;
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<CreateAutonomousDatabaseResponse, DatabaseError> {
        Ok(CreateAutonomousDatabaseResponse {
            autonomous_database: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to get the details of the specified Autonomous Database.
#[derive(Debug, Clone, Default)]
pub struct GetAutonomousDatabaseRequest {
    pub autonomous_database_id: String,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct GetAutonomousDatabaseResponse {
    pub autonomous_database: AutonomousDatabase,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl GetAutonomousDatabaseRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<GetAutonomousDatabaseResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for GetAutonomousDatabaseRequest {
    type Response = GetAutonomousDatabaseResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::GET, "/autonomousDatabases/{autonomousDatabaseId}");
        w.path("autonomousDatabaseId", &self.autonomous_database_id)?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<GetAutonomousDatabaseResponse, DatabaseError> {
        Ok(GetAutonomousDatabaseResponse {
            autonomous_database: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to list Autonomous Databases in a compartment.
#[derive(Debug, Clone, Default)]
pub struct ListAutonomousDatabasesRequest {
    pub compartment_id: String,
    /// Filter on the exact display name given.
    pub display_name: Option<String>,
    /// Filter on lifecycle state, e.g. `AVAILABLE`.
    pub lifecycle_state: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct ListAutonomousDatabasesResponse {
    pub items: Vec<AutonomousDatabaseSummary>,
    pub opc_next_page: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl ListAutonomousDatabasesRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<ListAutonomousDatabasesResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for ListAutonomousDatabasesRequest {
    type Response = ListAutonomousDatabasesResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        if self.compartment_id.is_empty() {
            return validation_err!("compartment_id is required");
        }
        let mut w = WireRequest::new(Method::GET, "/autonomousDatabases");
        w.query("compartmentId", self.compartment_id.as_str());
        w.query_opt("displayName", self.display_name.as_deref());
        w.query_opt("lifecycleState", self.lifecycle_state.as_deref());
        w.query_opt("limit", self.limit.as_ref());
        w.query_opt("page", self.page.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<ListAutonomousDatabasesResponse, DatabaseError> {
        Ok(ListAutonomousDatabasesResponse {
            items: ctx.json()?,
            opc_next_page: ctx.header_str("opc-next-page"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Details for updating an Autonomous Database.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAutonomousDatabaseDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_core_count: Option<i64>,
    #[serde(rename = "dataStorageSizeInTBs", skip_serializing_if = "Option::is_none")]
    pub data_storage_size_in_tbs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_scaling_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<HashMap<String, String>>,
}

/// Request to update one or more properties of the specified Autonomous
/// Database.
#[derive(Debug, Clone, Default)]
pub struct UpdateAutonomousDatabaseRequest {
    pub autonomous_database_id: String,
    pub update_autonomous_database_details: UpdateAutonomousDatabaseDetails,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct UpdateAutonomousDatabaseResponse {
    pub autonomous_database: AutonomousDatabase,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl UpdateAutonomousDatabaseRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<UpdateAutonomousDatabaseResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for UpdateAutonomousDatabaseRequest {
    type Response = UpdateAutonomousDatabaseResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::PUT, "/autonomousDatabases/{autonomousDatabaseId}");
        w.path("autonomousDatabaseId", &self.autonomous_database_id)?;
        w.header_opt("if-match", self.if_match.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(&self.update_autonomous_database_details)?;
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<UpdateAutonomousDatabaseResponse, DatabaseError> {
        Ok(UpdateAutonomousDatabaseResponse {
            autonomous_database: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to delete the specified Autonomous Database.
#[derive(Debug, Clone, Default)]
pub struct DeleteAutonomousDatabaseRequest {
    pub autonomous_database_id: String,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct DeleteAutonomousDatabaseResponse {
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl DeleteAutonomousDatabaseRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<DeleteAutonomousDatabaseResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for DeleteAutonomousDatabaseRequest {
    type Response = DeleteAutonomousDatabaseResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(
            Method::DELETE,
            "/autonomousDatabases/{autonomousDatabaseId}",
        );
        w.path("autonomousDatabaseId", &self.autonomous_database_id)?;
        w.header_opt("if-match", self.if_match.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<DeleteAutonomousDatabaseResponse, DatabaseError> {
        Ok(DeleteAutonomousDatabaseResponse {
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

macro_rules! autonomous_database_action {
    ($(#[$doc:meta])* $request:ident, $response:ident, $action:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default)]
        pub struct $request {
            pub autonomous_database_id: String,
            pub if_match: Option<String>,
            pub opc_request_id: Option<String>,
            pub retry_policy: Option<RetryPolicy>,
            pub timeout: Option<Duration>,
        }

        #[derive(Debug)]
        pub struct $response {
            pub autonomous_database: AutonomousDatabase,
            pub etag: Option<String>,
            pub opc_request_id: Option<String>,
            pub raw: RawResponse,
        }

        impl $request {
            pub async fn execute(
                &self,
                client: &DatabaseClient,
            ) -> Result<$response, DatabaseError> {
                client
                    .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
                    .await
            }
        }

        impl ServiceOperation for $request {
            type Response = $response;

            fn encode(&self) -> Result<WireRequest, DatabaseError> {
                let mut w = WireRequest::new(
                    Method::POST,
                    concat!("/autonomousDatabases/{autonomousDatabaseId}/actions/", $action),
                );
                w.path("autonomousDatabaseId", &self.autonomous_database_id)?;
                w.header_opt("if-match", self.if_match.as_deref());
                w.header_opt("opc-request-id", self.opc_request_id.as_deref());
                Ok(w)
            }

            fn decode(ctx: ResponseCtx) -> Result<$response, DatabaseError> {
                Ok($response {
                    autonomous_database: ctx.json()?,
                    etag: ctx.header_str("etag"),
                    opc_request_id: ctx.header_str("opc-request-id"),
                    raw: ctx.raw(),
                })
            }
        }
    };
}

autonomous_database_action!(
    /// Request to start the specified Autonomous Database.
    StartAutonomousDatabaseRequest,
    StartAutonomousDatabaseResponse,
    "start"
);

autonomous_database_action!(
    /// Request to stop the specified Autonomous Database.
    StopAutonomousDatabaseRequest,
    StopAutonomousDatabaseResponse,
    "stop"
);

/// Point in time to restore the database to.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct RestoreAutonomousDatabaseDetails {
    /// The time to restore the database to.
    pub timestamp: Option<DateTime<FixedOffset>>,
}

/// Request to restore an Autonomous Database based on the provided request
/// parameters.
#[derive(Debug, Clone, Default)]
pub struct RestoreAutonomousDatabaseRequest {
    pub autonomous_database_id: String,
    pub restore_autonomous_database_details: RestoreAutonomousDatabaseDetails,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct RestoreAutonomousDatabaseResponse {
    pub autonomous_database: AutonomousDatabase,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl RestoreAutonomousDatabaseRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<RestoreAutonomousDatabaseResponse, DatabaseError> {
        let opts = CallOptions::new(&self.retry_policy, &self.timeout)
            .with_retry_token(&self.opc_retry_token);
        client.invoke(self, opts).await
    }
}

impl ServiceOperation for RestoreAutonomousDatabaseRequest {
    type Response = RestoreAutonomousDatabaseResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        if self.restore_autonomous_database_details.timestamp.is_none() {
            return validation_err!("restore timestamp is required");
        }
        let mut w = WireRequest::new(
            Method::POST,
            "/autonomousDatabases/{autonomousDatabaseId}/actions/restore",
        );
        w.path("autonomousDatabaseId", &self.autonomous_database_id)?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(&self.restore_autonomous_database_details)?;
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<RestoreAutonomousDatabaseResponse, DatabaseError> {
        Ok(RestoreAutonomousDatabaseResponse {
            autonomous_database: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Details for requesting a client credentials wallet.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAutonomousDatabaseWalletDetails {
    /// The password to encrypt the keys inside the wallet, at least 8
    /// characters with at least 1 letter and either 1 number or 1 special
    /// character.
    pub password: String,
}

/// Request to create and download a wallet for the specified Autonomous
/// Database.
#[derive(Debug, Clone, Default)]
pub struct GenerateAutonomousDatabaseWalletRequest {
    pub autonomous_database_id: String,
    pub generate_autonomous_database_wallet_details: GenerateAutonomousDatabaseWalletDetails,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

/// The wallet archive as an unread byte stream.
///
/// The `content` response is handed over without consuming its body; the
/// caller owns it and releases the connection by dropping it (or by
/// reading it to the end).
#[derive(Debug)]
pub struct GenerateAutonomousDatabaseWalletResponse {
    /// The streaming response; read the ZIP archive from it with
    /// [`reqwest::Response::bytes`] or chunk by chunk.
    pub content: reqwest::Response,
    /// The size of the wallet archive, when the service announces it.
    pub content_length: Option<i64>,
    pub last_modified: Option<DateTime<FixedOffset>>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl GenerateAutonomousDatabaseWalletRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<GenerateAutonomousDatabaseWalletResponse, DatabaseError> {
        let opts = CallOptions::new(&self.retry_policy, &self.timeout)
            .with_retry_token(&self.opc_retry_token);
        client.invoke(self, opts).await
    }
}

impl ServiceOperation for GenerateAutonomousDatabaseWalletRequest {
    type Response = GenerateAutonomousDatabaseWalletResponse;

    fn binary() -> bool {
        true
    }

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        if self
            .generate_autonomous_database_wallet_details
            .password
            .is_empty()
        {
            return validation_err!("wallet password is required");
        }
        let mut w = WireRequest::new(
            Method::POST,
            "/autonomousDatabases/{autonomousDatabaseId}/actions/generateWallet",
        );
        w.path("autonomousDatabaseId", &self.autonomous_database_id)?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(&self.generate_autonomous_database_wallet_details)?;
        Ok(w)
    }

    fn decode(_ctx: ResponseCtx) -> Result<Self::Response, DatabaseError> {
        validation_err!("wallet responses are binary; decode_stream handles them")
    }

    fn decode_stream(
        response: reqwest::Response,
    ) -> Result<GenerateAutonomousDatabaseWalletResponse, DatabaseError> {
        let ctx = ResponseCtx {
            status: response.status().as_u16(),
            headers: response.headers().clone(),
            body: bytes::Bytes::new(),
        };
        Ok(GenerateAutonomousDatabaseWalletResponse {
            content_length: ctx.header_i64("content-length"),
            last_modified: ctx.header_datetime("last-modified"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
            content: response,
        })
    }
}

/// An Autonomous Database backup.
#[derive(Debug, Clone, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct AutonomousDatabaseBackup {
    /// The OCID of the backup.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autonomous_database_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub backup_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_automatic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_started: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_ended: Option<DateTime<FixedOffset>>,
}

pub type AutonomousDatabaseBackupSummary = AutonomousDatabaseBackup;

/// Details for creating an Autonomous Database backup.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct CreateAutonomousDatabaseBackupDetails {
    /// The OCID of the Autonomous Database to back up.
    pub autonomous_database_id: String,
    /// The user-friendly name for the backup.
    pub display_name: String,
}

/// Request to create a new Autonomous Database backup for the specified
/// database.
#[derive(Debug, Clone, Default)]
pub struct CreateAutonomousDatabaseBackupRequest {
    pub create_autonomous_database_backup_details: CreateAutonomousDatabaseBackupDetails,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct CreateAutonomousDatabaseBackupResponse {
    pub autonomous_database_backup: AutonomousDatabaseBackup,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl CreateAutonomousDatabaseBackupRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<CreateAutonomousDatabaseBackupResponse, DatabaseError> {
        let opts = CallOptions::new(&self.retry_policy, &self.timeout)
            .with_retry_token(&self.opc_retry_token);
        client.invoke(self, opts).await
    }
}

impl ServiceOperation for CreateAutonomousDatabaseBackupRequest {
    type Response = CreateAutonomousDatabaseBackupResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        if self
            .create_autonomous_database_backup_details
            .autonomous_database_id
            .is_empty()
        {
            return validation_err!("autonomous_database_id is required");
        }
        let mut w = WireRequest::new(Method::POST, "/autonomousDatabaseBackups");
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(&self.create_autonomous_database_backup_details)?;
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<CreateAutonomousDatabaseBackupResponse, DatabaseError> {
        Ok(CreateAutonomousDatabaseBackupResponse {
            autonomous_database_backup: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to get information about the specified Autonomous Database
/// backup.
#[derive(Debug, Clone, Default)]
pub struct GetAutonomousDatabaseBackupRequest {
    pub autonomous_database_backup_id: String,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct GetAutonomousDatabaseBackupResponse {
    pub autonomous_database_backup: AutonomousDatabaseBackup,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl GetAutonomousDatabaseBackupRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<GetAutonomousDatabaseBackupResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for GetAutonomousDatabaseBackupRequest {
    type Response = GetAutonomousDatabaseBackupResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(
            Method::GET,
            "/autonomousDatabaseBackups/{autonomousDatabaseBackupId}",
        );
        w.path(
            "autonomousDatabaseBackupId",
            &self.autonomous_database_backup_id,
        )?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<GetAutonomousDatabaseBackupResponse, DatabaseError> {
        Ok(GetAutonomousDatabaseBackupResponse {
            autonomous_database_backup: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to list Autonomous Database backups by database or by
/// compartment.
#[derive(Debug, Clone, Default)]
pub struct ListAutonomousDatabaseBackupsRequest {
    pub autonomous_database_id: Option<String>,
    pub compartment_id: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct ListAutonomousDatabaseBackupsResponse {
    pub items: Vec<AutonomousDatabaseBackupSummary>,
    pub opc_next_page: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl ListAutonomousDatabaseBackupsRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<ListAutonomousDatabaseBackupsResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for ListAutonomousDatabaseBackupsRequest {
    type Response = ListAutonomousDatabaseBackupsResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        if self.autonomous_database_id.is_none() && self.compartment_id.is_none() {
            return validation_err!(
                "one of autonomous_database_id or compartment_id is required"
            );
        }
        let mut w = WireRequest::new(Method::GET, "/autonomousDatabaseBackups");
        w.query_opt("autonomousDatabaseId", self.autonomous_database_id.as_deref());
        w.query_opt("compartmentId", self.compartment_id.as_deref());
        w.query_opt("limit", self.limit.as_ref());
        w.query_opt("page", self.page.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<ListAutonomousDatabaseBackupsResponse, DatabaseError> {
        Ok(ListAutonomousDatabaseBackupsResponse {
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

    fn new_details() -> CreateAutonomousDatabaseDetails {
        CreateAutonomousDatabaseDetails {
            compartment_id: "c1".to_string(),
            db_name: "db1".to_string(),
            cpu_core_count: 1,
            data_storage_size_in_tbs: 1,
            admin_password: "P@ssword1234!".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn clone_create_injects_source_database() {
        let base = CreateAutonomousDatabaseBase::Clone(CreateAutonomousDatabaseCloneDetails {
            details: new_details(),
            source_id: "src-1".to_string(),
            clone_type: Some(CloneType::Full),
        });
        let v: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&base).unwrap()).unwrap();
        assert_eq!(v["source"], "DATABASE");
        assert_eq!(v["sourceId"], "src-1");
        assert_eq!(v["cloneType"], "FULL");
        assert_eq!(v["dbName"], "db1");
    }

    #[test]
    fn decode_selects_clone_variant() {
        let body = r#"{
            "source": "DATABASE",
            "compartmentId": "c1",
            "dbName": "db1",
            "cpuCoreCount": 1,
            "dataStorageSizeInTBs": 1,
            "adminPassword": "P@ssword1234!",
            "sourceId": "src-1",
            "cloneType": "FULL"
        }"#;
        let base: CreateAutonomousDatabaseBase = serde_json::from_str(body).unwrap();
        match base {
            CreateAutonomousDatabaseBase::Clone(c) => {
                assert_eq!(c.source_id, "src-1");
                assert_eq!(c.clone_type, Some(CloneType::Full));
            }
            other => panic!("expected clone variant, got {:?}", other),
        }
    }

    #[test]
    fn unknown_source_round_trips_as_base() {
        let body = r#"{
            "source": "CROSS_REGION_SOMETHING",
            "compartmentId": "c1",
            "dbName": "db1",
            "cpuCoreCount": 1,
            "dataStorageSizeInTBs": 1,
            "adminPassword": "P@ssword1234!"
        }"#;
        let base: CreateAutonomousDatabaseBase = serde_json::from_str(body).unwrap();
        match &base {
            CreateAutonomousDatabaseBase::New(d) => assert_eq!(d.db_name, "db1"),
            other => panic!("expected base variant, got {:?}", other),
        }
    }

    #[test]
    fn create_validates_mandatory_fields() {
        let req = CreateAutonomousDatabaseRequest::default();
        let err = req.encode().unwrap_err();
        assert!(matches!(err, DatabaseError::Validation { .. }));

        let req = CreateAutonomousDatabaseRequest {
            create_autonomous_database_details: CreateAutonomousDatabaseBase::New(new_details()),
            ..Default::default()
        };
        assert!(req.encode().is_ok());
    }

    #[test]
    fn wallet_request_validates_password() {
        let req = GenerateAutonomousDatabaseWalletRequest {
            autonomous_database_id: "adb-1".to_string(),
            ..Default::default()
        };
        assert!(req.encode().is_err());
    }

    #[test]
    fn lifecycle_state_tolerates_new_states() {
        let s: AutonomousDatabaseLifecycleState =
            serde_json::from_str(r#""AVAILABLE_NEEDS_ATTENTION""#).unwrap();
        assert_eq!(s, AutonomousDatabaseLifecycleState::AvailableNeedsAttention);
        let s: AutonomousDatabaseLifecycleState =
            serde_json::from_str(r#""INACCESSIBLE""#).unwrap();
        assert_eq!(s, AutonomousDatabaseLifecycleState::Unknown);
    }
}
