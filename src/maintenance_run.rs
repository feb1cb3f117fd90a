//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Maintenance runs scheduled against database resources.

use crate::client::{CallOptions, DatabaseClient, ServiceOperation};
use crate::error::{validation_err, DatabaseError};
use crate::retry::RetryPolicy;
use crate::wire::{RawResponse, ResponseCtx, WireRequest};
use chrono::{DateTime, FixedOffset};
use reqwest::Method;
use serde_derive::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceRunLifecycleState {
    Scheduled,
    InProgress,
    Succeeded,
    Skipped,
    Failed,
    #[serde(other)]
    Unknown,
}

/// A maintenance run against a database resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRun {
    /// The OCID of the maintenance run.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<MaintenanceRunLifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    /// The OCID of the resource the maintenance run occurs on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_subtype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_scheduled: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_started: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_ended: Option<DateTime<FixedOffset>>,
}

pub type MaintenanceRunSummary = MaintenanceRun;

/// Request to get information about the specified maintenance run.
#[derive(Debug, Clone, Default)]
pub struct GetMaintenanceRunRequest {
    pub maintenance_run_id: String,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct GetMaintenanceRunResponse {
    pub maintenance_run: MaintenanceRun,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl GetMaintenanceRunRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<GetMaintenanceRunResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for GetMaintenanceRunRequest {
    type Response = GetMaintenanceRunResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::GET, "/maintenanceRuns/{maintenanceRunId}");
        w.path("maintenanceRunId", &self.maintenance_run_id)?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<GetMaintenanceRunResponse, DatabaseError> {
        Ok(GetMaintenanceRunResponse {
            maintenance_run: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to list the maintenance runs in the specified compartment.
#[derive(Debug, Clone, Default)]
pub struct ListMaintenanceRunsRequest {
    pub compartment_id: String,
    /// Filter on the target resource OCID.
    pub target_resource_id: Option<String>,
    /// Filter on maintenance type, e.g. `PLANNED`.
    pub maintenance_type: Option<String>,
    /// Filter on lifecycle state, e.g. `SCHEDULED`.
    pub lifecycle_state: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct ListMaintenanceRunsResponse {
    pub items: Vec<MaintenanceRunSummary>,
    pub opc_next_page: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl ListMaintenanceRunsRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<ListMaintenanceRunsResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for ListMaintenanceRunsRequest {
    type Response = ListMaintenanceRunsResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        if self.compartment_id.is_empty() {
            return validation_err!("compartment_id is required");
        }
        let mut w = WireRequest::new(Method::GET, "/maintenanceRuns");
        w.query("compartmentId", self.compartment_id.as_str());
        w.query_opt("targetResourceId", self.target_resource_id.as_deref());
        w.query_opt("maintenanceType", self.maintenance_type.as_deref());
        w.query_opt("lifecycleState", self.lifecycle_state.as_deref());
        w.query_opt("limit", self.limit.as_ref());
        w.query_opt("page", self.page.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<ListMaintenanceRunsResponse, DatabaseError> {
        Ok(ListMaintenanceRunsResponse {
            items: ctx.json()?,
            opc_next_page: ctx.header_str("opc-next-page"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Details for updating a maintenance run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenanceRunDetails {
    /// If `true`, skips the scheduled maintenance run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    /// The new scheduled date and time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_scheduled: Option<DateTime<FixedOffset>>,
}

/// Request to update the properties of a maintenance run, such as the
/// scheduled time.
#[derive(Debug, Clone, Default)]
pub struct UpdateMaintenanceRunRequest {
    pub maintenance_run_id: String,
    pub update_maintenance_run_details: UpdateMaintenanceRunDetails,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct UpdateMaintenanceRunResponse {
    pub maintenance_run: MaintenanceRun,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl UpdateMaintenanceRunRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<UpdateMaintenanceRunResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for UpdateMaintenanceRunRequest {
    type Response = UpdateMaintenanceRunResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::PUT, "/maintenanceRuns/{maintenanceRunId}");
        w.path("maintenanceRunId", &self.maintenance_run_id)?;
        w.header_opt("if-match", self.if_match.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(&self.update_maintenance_run_details)?;
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<UpdateMaintenanceRunResponse, DatabaseError> {
        Ok(UpdateMaintenanceRunResponse {
            maintenance_run: ctx.json()?,
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
    fn list_requires_compartment() {
        let req = ListMaintenanceRunsRequest::default();
        assert!(req.encode().is_err());
    }

    #[test]
    fn update_time_scheduled_is_rfc3339() {
        let ts = DateTime::parse_from_rfc3339("2019-08-01T09:30:00+02:00").unwrap();
        let details = UpdateMaintenanceRunDetails {
            is_enabled: None,
            time_scheduled: Some(ts),
        };
        let body = serde_json::to_string(&details).unwrap();
        assert_eq!(body, r#"{"timeScheduled":"2019-08-01T09:30:00+02:00"}"#);
    }
}
