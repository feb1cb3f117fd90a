//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! DB nodes: the compute hosts of a DB system.

use crate::client::{CallOptions, DatabaseClient, ServiceOperation};
use crate::error::{validation_err, DatabaseError};
use crate::retry::RetryPolicy;
use crate::wire::{RawResponse, ResponseCtx, WireRequest, WireValue};
use chrono::{DateTime, FixedOffset};
use reqwest::Method;
use serde_derive::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DbNodeLifecycleState {
    Provisioning,
    Available,
    Updating,
    Stopping,
    Stopped,
    Starting,
    Terminating,
    Terminated,
    Failed,
    #[serde(other)]
    Unknown,
}

/// A server compute node of a DB system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbNode {
    /// The OCID of the DB node.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_system_id: Option<String>,
    /// The OCID of the VNIC attached to this node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vnic_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_vnic_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<DbNodeLifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_storage_size_in_g_b: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<FixedOffset>>,
}

pub type DbNodeSummary = DbNode;

/// Power action performed on a DB node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbNodeAction {
    Stop,
    Start,
    /// ACPI shutdown and power on.
    SoftReset,
    /// Power off and power on.
    Reset,
}

impl DbNodeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            DbNodeAction::Stop => "STOP",
            DbNodeAction::Start => "START",
            DbNodeAction::SoftReset => "SOFTRESET",
            DbNodeAction::Reset => "RESET",
        }
    }
}

impl WireValue for DbNodeAction {
    fn to_wire(&self) -> String {
        self.as_str().to_string()
    }
}

/// Request to get information about the specified database node.
#[derive(Debug, Clone, Default)]
pub struct GetDbNodeRequest {
    pub db_node_id: String,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct GetDbNodeResponse {
    pub db_node: DbNode,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl GetDbNodeRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<GetDbNodeResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for GetDbNodeRequest {
    type Response = GetDbNodeResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::GET, "/dbNodes/{dbNodeId}");
        w.path("dbNodeId", &self.db_node_id)?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<GetDbNodeResponse, DatabaseError> {
        Ok(GetDbNodeResponse {
            db_node: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to list the DB nodes in the specified DB system and compartment.
#[derive(Debug, Clone, Default)]
pub struct ListDbNodesRequest {
    pub compartment_id: String,
    pub db_system_id: String,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct ListDbNodesResponse {
    pub items: Vec<DbNodeSummary>,
    pub opc_next_page: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl ListDbNodesRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<ListDbNodesResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for ListDbNodesRequest {
    type Response = ListDbNodesResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        if self.compartment_id.is_empty() {
            return validation_err!("compartment_id is required");
        }
        if self.db_system_id.is_empty() {
            return validation_err!("db_system_id is required");
        }
        let mut w = WireRequest::new(Method::GET, "/dbNodes");
        w.query("compartmentId", self.compartment_id.as_str());
        w.query("dbSystemId", self.db_system_id.as_str());
        w.query_opt("limit", self.limit.as_ref());
        w.query_opt("page", self.page.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<ListDbNodesResponse, DatabaseError> {
        Ok(ListDbNodesResponse {
            items: ctx.json()?,
            opc_next_page: ctx.header_str("opc-next-page"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to perform one of the power actions (start, stop, softreset, or
/// reset) on the specified DB node.
#[derive(Debug, Clone)]
pub struct DbNodeActionRequest {
    pub db_node_id: String,
    /// The action to perform.
    pub action: DbNodeAction,
    pub if_match: Option<String>,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct DbNodeActionResponse {
    pub db_node: DbNode,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl DbNodeActionRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<DbNodeActionResponse, DatabaseError> {
        let opts = CallOptions::new(&self.retry_policy, &self.timeout)
            .with_retry_token(&self.opc_retry_token);
        client.invoke(self, opts).await
    }
}

impl ServiceOperation for DbNodeActionRequest {
    type Response = DbNodeActionResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::POST, "/dbNodes/{dbNodeId}");
        w.path("dbNodeId", &self.db_node_id)?;
        w.query("action", &self.action);
        w.header_opt("if-match", self.if_match.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<DbNodeActionResponse, DatabaseError> {
        Ok(DbNodeActionResponse {
            db_node: ctx.json()?,
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
    fn action_is_sent_as_query_parameter() {
        let req = DbNodeActionRequest {
            db_node_id: "ocid1.dbnode.oc1..aaaa".to_string(),
            action: DbNodeAction::SoftReset,
            if_match: None,
            opc_retry_token: None,
            opc_request_id: None,
            retry_policy: None,
            timeout: None,
        };
        let w = req.encode().unwrap();
        assert_eq!(w.method, Method::POST);
        assert_eq!(w.query, vec![("action", "SOFTRESET".to_string())]);
        assert_eq!(w.path, "/dbNodes/ocid1.dbnode.oc1..aaaa");
    }
}
