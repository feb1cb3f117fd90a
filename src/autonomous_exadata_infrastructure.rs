//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Autonomous Exadata Infrastructure: the dedicated Exadata hardware that
//! hosts Autonomous Container Databases.

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
pub enum AutonomousExadataInfrastructureLifecycleState {
    Provisioning,
    Available,
    Updating,
    Terminating,
    Terminated,
    Failed,
    MaintenanceInProgress,
    #[serde(other)]
    Unknown,
}

/// A window of time for automated infrastructure maintenance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceWindow {
    /// The day of the week, e.g. `SUNDAY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<String>,
    /// The hour the window starts, 0-23.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour_of_day: Option<i64>,
}

/// An Autonomous Exadata Infrastructure resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutonomousExadataInfrastructure {
    /// The OCID of the infrastructure.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<AutonomousExadataInfrastructureLifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window: Option<MaintenanceWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_maintenance_run_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_maintenance_run_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<FixedOffset>>,
}

pub type AutonomousExadataInfrastructureSummary = AutonomousExadataInfrastructure;

/// Details for launching an Autonomous Exadata Infrastructure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchAutonomousExadataInfrastructureDetails {
    pub compartment_id: String,
    pub availability_domain: String,
    pub subnet_id: String,
    pub shape: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window_details: Option<MaintenanceWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<HashMap<String, String>>,
}

/// Request to launch a new Autonomous Exadata Infrastructure in the
/// specified compartment and availability domain.
#[derive(Debug, Clone, Default)]
pub struct LaunchAutonomousExadataInfrastructureRequest {
    pub launch_autonomous_exadata_infrastructure_details:
        LaunchAutonomousExadataInfrastructureDetails,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct LaunchAutonomousExadataInfrastructureResponse {
    pub autonomous_exadata_infrastructure: AutonomousExadataInfrastructure,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl LaunchAutonomousExadataInfrastructureRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<LaunchAutonomousExadataInfrastructureResponse, DatabaseError> {
        let opts = CallOptions::new(&self.retry_policy, &self.timeout)
            .with_retry_token(&self.opc_retry_token);
        client.invoke(self, opts).await
    }
}

impl ServiceOperation for LaunchAutonomousExadataInfrastructureRequest {
    type Response = LaunchAutonomousExadataInfrastructureResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let details = &self.launch_autonomous_exadata_infrastructure_details;
        if details.compartment_id.is_empty() {
            return validation_err!("compartment_id is required");
        }
        if details.availability_domain.is_empty() {
            return validation_err!("availability_domain is required");
        }
        if details.subnet_id.is_empty() {
            return validation_err!("subnet_id is required");
        }
        if details.shape.is_empty() {
            return validation_err!("shape is required");
        }
        let mut w = WireRequest::new(Method::POST, "/autonomousExadataInfrastructures");
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(details)?;
        Ok(w)
    }

    fn decode(
        ctx: ResponseCtx,
    ) -> Result<LaunchAutonomousExadataInfrastructureResponse, DatabaseError> {
        Ok(LaunchAutonomousExadataInfrastructureResponse {
            autonomous_exadata_infrastructure: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to get information about the specified Autonomous Exadata
/// Infrastructure.
#[derive(Debug, Clone, Default)]
pub struct GetAutonomousExadataInfrastructureRequest {
    pub autonomous_exadata_infrastructure_id: String,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct GetAutonomousExadataInfrastructureResponse {
    pub autonomous_exadata_infrastructure: AutonomousExadataInfrastructure,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl GetAutonomousExadataInfrastructureRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<GetAutonomousExadataInfrastructureResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for GetAutonomousExadataInfrastructureRequest {
    type Response = GetAutonomousExadataInfrastructureResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(
            Method::GET,
            "/autonomousExadataInfrastructures/{autonomousExadataInfrastructureId}",
        );
        w.path(
            "autonomousExadataInfrastructureId",
            &self.autonomous_exadata_infrastructure_id,
        )?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(
        ctx: ResponseCtx,
    ) -> Result<GetAutonomousExadataInfrastructureResponse, DatabaseError> {
        Ok(GetAutonomousExadataInfrastructureResponse {
            autonomous_exadata_infrastructure: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to list the Autonomous Exadata Infrastructures in the specified
/// compartment.
#[derive(Debug, Clone, Default)]
pub struct ListAutonomousExadataInfrastructuresRequest {
    pub compartment_id: String,
    pub availability_domain: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct ListAutonomousExadataInfrastructuresResponse {
    pub items: Vec<AutonomousExadataInfrastructureSummary>,
    pub opc_next_page: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl ListAutonomousExadataInfrastructuresRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<ListAutonomousExadataInfrastructuresResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for ListAutonomousExadataInfrastructuresRequest {
    type Response = ListAutonomousExadataInfrastructuresResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        if self.compartment_id.is_empty() {
            return validation_err!("compartment_id is required");
        }
        let mut w = WireRequest::new(Method::GET, "/autonomousExadataInfrastructures");
        w.query("compartmentId", self.compartment_id.as_str());
        w.query_opt("availabilityDomain", self.availability_domain.as_deref());
        w.query_opt("displayName", self.display_name.as_deref());
        w.query_opt("lifecycleState", self.lifecycle_state.as_deref());
        w.query_opt("limit", self.limit.as_ref());
        w.query_opt("page", self.page.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(
        ctx: ResponseCtx,
    ) -> Result<ListAutonomousExadataInfrastructuresResponse, DatabaseError> {
        Ok(ListAutonomousExadataInfrastructuresResponse {
            items: ctx.json()?,
            opc_next_page: ctx.header_str("opc-next-page"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// A shape that can be used to launch Autonomous Exadata Infrastructure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutonomousExadataInfrastructureShapeSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_core_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_core_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_count_increment: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_node_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_node_count: Option<i64>,
}

/// Request to list the shapes available for an Autonomous Exadata
/// Infrastructure.
#[derive(Debug, Clone, Default)]
pub struct ListAutonomousExadataInfrastructureShapesRequest {
    pub compartment_id: String,
    pub availability_domain: String,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct ListAutonomousExadataInfrastructureShapesResponse {
    pub items: Vec<AutonomousExadataInfrastructureShapeSummary>,
    pub opc_next_page: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl ListAutonomousExadataInfrastructureShapesRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<ListAutonomousExadataInfrastructureShapesResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for ListAutonomousExadataInfrastructureShapesRequest {
    type Response = ListAutonomousExadataInfrastructureShapesResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        if self.compartment_id.is_empty() {
            return validation_err!("compartment_id is required");
        }
        if self.availability_domain.is_empty() {
            return validation_err!("availability_domain is required");
        }
        let mut w = WireRequest::new(Method::GET, "/autonomousExadataInfrastructureShapes");
        w.query("compartmentId", self.compartment_id.as_str());
        w.query("availabilityDomain", self.availability_domain.as_str());
        w.query_opt("limit", self.limit.as_ref());
        w.query_opt("page", self.page.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(
        ctx: ResponseCtx,
    ) -> Result<ListAutonomousExadataInfrastructureShapesResponse, DatabaseError> {
        Ok(ListAutonomousExadataInfrastructureShapesResponse {
            items: ctx.json()?,
            opc_next_page: ctx.header_str("opc-next-page"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Details for updating an Autonomous Exadata Infrastructure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAutonomousExadataInfrastructureDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window_details: Option<MaintenanceWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<HashMap<String, String>>,
}

/// Request to update the properties of an Autonomous Exadata
/// Infrastructure, such as the maintenance window.
#[derive(Debug, Clone, Default)]
pub struct UpdateAutonomousExadataInfrastructureRequest {
    pub autonomous_exadata_infrastructure_id: String,
    pub update_autonomous_exadata_infrastructures_details:
        UpdateAutonomousExadataInfrastructureDetails,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct UpdateAutonomousExadataInfrastructureResponse {
    pub autonomous_exadata_infrastructure: AutonomousExadataInfrastructure,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl UpdateAutonomousExadataInfrastructureRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<UpdateAutonomousExadataInfrastructureResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for UpdateAutonomousExadataInfrastructureRequest {
    type Response = UpdateAutonomousExadataInfrastructureResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(
            Method::PUT,
            "/autonomousExadataInfrastructures/{autonomousExadataInfrastructureId}",
        );
        w.path(
            "autonomousExadataInfrastructureId",
            &self.autonomous_exadata_infrastructure_id,
        )?;
        w.header_opt("if-match", self.if_match.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(&self.update_autonomous_exadata_infrastructures_details)?;
        Ok(w)
    }

    fn decode(
        ctx: ResponseCtx,
    ) -> Result<UpdateAutonomousExadataInfrastructureResponse, DatabaseError> {
        Ok(UpdateAutonomousExadataInfrastructureResponse {
            autonomous_exadata_infrastructure: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to terminate the specified Autonomous Exadata Infrastructure.
#[derive(Debug, Clone, Default)]
pub struct TerminateAutonomousExadataInfrastructureRequest {
    pub autonomous_exadata_infrastructure_id: String,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct TerminateAutonomousExadataInfrastructureResponse {
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl TerminateAutonomousExadataInfrastructureRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<TerminateAutonomousExadataInfrastructureResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for TerminateAutonomousExadataInfrastructureRequest {
    type Response = TerminateAutonomousExadataInfrastructureResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(
            Method::DELETE,
            "/autonomousExadataInfrastructures/{autonomousExadataInfrastructureId}",
        );
        w.path(
            "autonomousExadataInfrastructureId",
            &self.autonomous_exadata_infrastructure_id,
        )?;
        w.header_opt("if-match", self.if_match.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(
        ctx: ResponseCtx,
    ) -> Result<TerminateAutonomousExadataInfrastructureResponse, DatabaseError> {
        Ok(TerminateAutonomousExadataInfrastructureResponse {
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_validates_mandatory_fields() {
        let req = LaunchAutonomousExadataInfrastructureRequest::default();
        assert!(req.encode().is_err());
    }

    #[test]
    fn shapes_list_requires_availability_domain() {
        let req = ListAutonomousExadataInfrastructureShapesRequest {
            compartment_id: "c1".to_string(),
            ..Default::default()
        };
        assert!(req.encode().is_err());
    }
}
