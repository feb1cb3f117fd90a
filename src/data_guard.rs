//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Oracle Data Guard associations between a primary and a standby
//! database.

use crate::client::{CallOptions, DatabaseClient, ServiceOperation};
use crate::error::{validation_err, DatabaseError};
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
pub enum DataGuardAssociationLifecycleState {
    Provisioning,
    Available,
    Updating,
    Terminating,
    Terminated,
    Failed,
    #[serde(other)]
    Unknown,
}

/// A Data Guard association between two databases.
#[derive(Debug, Clone, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct DataGuardAssociation {
    /// The OCID of the association.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<DataGuardAssociationLifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_db_system_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_db_home_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_database_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_data_guard_association_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_lag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<FixedOffset>>,
}

pub type DataGuardAssociationSummary = DataGuardAssociation;

/// Fields shared by every way of creating a Data Guard association.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct CreateStandbyDetails {
    /// A strong password for the `SYS`, `SYSTEM`, and `PDB Admin` users of
    /// the peer database.
    pub database_admin_password: String,
    /// The protection mode to set, e.g. `MAXIMUM_PERFORMANCE`.
    pub protection_mode: String,
    /// The redo transport type, e.g. `ASYNC`.
    pub transport_type: String,
}

/// Standby placed in an existing DB system.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct CreateDataGuardAssociationToExistingDbSystemDetails {
    #[serde(flatten)]
    pub standby: CreateStandbyDetails,
    /// The OCID of the DB system to create the standby database on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_db_system_id: Option<String>,
}

/// Standby launched into a new DB system.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct CreateDataGuardAssociationWithNewDbSystemDetails {
    #[serde(flatten)]
    pub standby: CreateStandbyDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

/// The polymorphic body of a create-association call, discriminated by the
/// `creationType` JSON key.
///
/// Encoding injects the discriminator at the top level of the object;
/// decoding reads it first and then re-parses the concrete variant.
/// Discriminator values this SDK does not know decode as
/// [`ExistingDbSystem`](CreateDataGuardAssociationDetails::ExistingDbSystem)
/// so additions on the service side never fail hard.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "creationType")]
pub enum CreateDataGuardAssociationDetails {
    #[serde(rename = "ExistingDbSystem")]
    ExistingDbSystem(CreateDataGuardAssociationToExistingDbSystemDetails),
    #[serde(rename = "NewDbSystem")]
    NewDbSystem(CreateDataGuardAssociationWithNewDbSystemDetails),
}

impl Default for CreateDataGuardAssociationDetails {
    fn default() -> Self {
        CreateDataGuardAssociationDetails::ExistingDbSystem(Default::default())
    }
}

impl<'de> Deserialize<'de> for CreateDataGuardAssociationDetails {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let creation_type = value
            .get("creationType")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        match creation_type.as_str() {
            "NewDbSystem" => serde_json::from_value(value)
                .map(CreateDataGuardAssociationDetails::NewDbSystem)
                .map_err(D::Error::custom),
            _ => serde_json::from_value(value)
                .map(CreateDataGuardAssociationDetails::ExistingDbSystem)
                .map_err(D::Error::custom),
        }
    }
}

impl CreateDataGuardAssociationDetails {
    fn standby(&self) -> &CreateStandbyDetails {
        match self {
            CreateDataGuardAssociationDetails::ExistingDbSystem(d) => &d.standby,
            CreateDataGuardAssociationDetails::NewDbSystem(d) => &d.standby,
        }
    }
}

/// Request to create a new Data Guard association. A Data Guard
/// association represents the replication relationship between the
/// specified database and a peer database.
#[derive(Debug, Clone, Default)]
pub struct CreateDataGuardAssociationRequest {
    /// The OCID of the primary database.
    pub database_id: String,
    pub create_data_guard_association_details: CreateDataGuardAssociationDetails,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct CreateDataGuardAssociationResponse {
    pub data_guard_association: DataGuardAssociation,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl CreateDataGuardAssociationRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<CreateDataGuardAssociationResponse, DatabaseError> {
        let opts = CallOptions::new(&self.retry_policy, &self.timeout)
            .with_retry_token(&self.opc_retry_token);
        client.invoke(self, opts).await
    }
}

impl ServiceOperation for CreateDataGuardAssociationRequest {
    type Response = CreateDataGuardAssociationResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let standby = self.create_data_guard_association_details.standby();
        if standby.database_admin_password.is_empty() {
            return validation_err!("database_admin_password is required");
        }
        let mut w = WireRequest::new(
            Method::POST,
            "/databases/{databaseId}/dataGuardAssociations",
        );
        w.path("databaseId", &self.database_id)?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(&self.create_data_guard_association_details)?;
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<CreateDataGuardAssociationResponse, DatabaseError> {
        Ok(CreateDataGuardAssociationResponse {
            data_guard_association: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to get the specified Data Guard association's configuration
/// information.
#[derive(Debug, Clone, Default)]
pub struct GetDataGuardAssociationRequest {
    pub database_id: String,
    pub data_guard_association_id: String,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct GetDataGuardAssociationResponse {
    pub data_guard_association: DataGuardAssociation,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl GetDataGuardAssociationRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<GetDataGuardAssociationResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for GetDataGuardAssociationRequest {
    type Response = GetDataGuardAssociationResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(
            Method::GET,
            "/databases/{databaseId}/dataGuardAssociations/{dataGuardAssociationId}",
        );
        w.path("databaseId", &self.database_id)?;
        w.path("dataGuardAssociationId", &self.data_guard_association_id)?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<GetDataGuardAssociationResponse, DatabaseError> {
        Ok(GetDataGuardAssociationResponse {
            data_guard_association: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to list all Data Guard associations for the specified database.
#[derive(Debug, Clone, Default)]
pub struct ListDataGuardAssociationsRequest {
    pub database_id: String,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct ListDataGuardAssociationsResponse {
    pub items: Vec<DataGuardAssociationSummary>,
    pub opc_next_page: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl ListDataGuardAssociationsRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<ListDataGuardAssociationsResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for ListDataGuardAssociationsRequest {
    type Response = ListDataGuardAssociationsResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::GET, "/databases/{databaseId}/dataGuardAssociations");
        w.path("databaseId", &self.database_id)?;
        w.query_opt("limit", self.limit.as_ref());
        w.query_opt("page", self.page.as_deref());
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<ListDataGuardAssociationsResponse, DatabaseError> {
        Ok(ListDataGuardAssociationsResponse {
            items: ctx.json()?,
            opc_next_page: ctx.header_str("opc-next-page"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Credentials for a role-change action on an association.
#[derive(Debug, Clone, Default, Serialize, DeserializeDerive)]
#[serde(rename_all = "camelCase")]
pub struct DataGuardActionDetails {
    /// The `SYS` password of the database taking part in the role change.
    pub database_admin_password: String,
}

macro_rules! data_guard_action {
    ($(#[$doc:meta])* $request:ident, $response:ident, $action:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default)]
        pub struct $request {
            pub database_id: String,
            pub data_guard_association_id: String,
            pub action_details: DataGuardActionDetails,
            /// Entity tag for the compare-and-swap role change.
            pub if_match: Option<String>,
            pub opc_request_id: Option<String>,
            pub retry_policy: Option<RetryPolicy>,
            pub timeout: Option<Duration>,
        }

        #[derive(Debug)]
        pub struct $response {
            pub data_guard_association: DataGuardAssociation,
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
                if self.action_details.database_admin_password.is_empty() {
                    return validation_err!("action_details.database_admin_password is required");
                }
                let mut w = WireRequest::new(
                    Method::POST,
                    concat!(
                        "/databases/{databaseId}/dataGuardAssociations/",
                        "{dataGuardAssociationId}/actions/",
                        $action
                    ),
                );
                w.path("databaseId", &self.database_id)?;
                w.path("dataGuardAssociationId", &self.data_guard_association_id)?;
                w.header_opt("if-match", self.if_match.as_deref());
                w.header_opt("opc-request-id", self.opc_request_id.as_deref());
                w.json_body(&self.action_details)?;
                Ok(w)
            }

            fn decode(ctx: ResponseCtx) -> Result<$response, DatabaseError> {
                Ok($response {
                    data_guard_association: ctx.json()?,
                    etag: ctx.header_str("etag"),
                    opc_request_id: ctx.header_str("opc-request-id"),
                    raw: ctx.raw(),
                })
            }
        }
    };
}

data_guard_action!(
    /// Request to perform a switchover: the primary database becomes the
    /// standby and the standby becomes the primary. Issued against the
    /// primary's association.
    SwitchoverDataGuardAssociationRequest,
    SwitchoverDataGuardAssociationResponse,
    "switchover"
);

data_guard_action!(
    /// Request to fail over the standby database identified by the
    /// association, making it the primary. Issued against the standby's
    /// association.
    FailoverDataGuardAssociationRequest,
    FailoverDataGuardAssociationResponse,
    "failover"
);

data_guard_action!(
    /// Request to reinstate the disabled standby database so it resumes
    /// serving as standby.
    ReinstateDataGuardAssociationRequest,
    ReinstateDataGuardAssociationResponse,
    "reinstate"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_details_inject_discriminator() {
        let details = CreateDataGuardAssociationDetails::ExistingDbSystem(
            CreateDataGuardAssociationToExistingDbSystemDetails {
                standby: CreateStandbyDetails {
                    database_admin_password: "pw".to_string(),
                    protection_mode: "MAXIMUM_PERFORMANCE".to_string(),
                    transport_type: "ASYNC".to_string(),
                },
                peer_db_system_id: Some("ocid1.dbsystem.oc1..peer".to_string()),
            },
        );
        let v: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&details).unwrap()).unwrap();
        assert_eq!(v["creationType"], "ExistingDbSystem");
        assert_eq!(v["peerDbSystemId"], "ocid1.dbsystem.oc1..peer");
        assert_eq!(v["transportType"], "ASYNC");
    }

    #[test]
    fn decode_selects_variant_by_discriminator() {
        let body = r#"{
            "creationType": "NewDbSystem",
            "databaseAdminPassword": "pw",
            "protectionMode": "MAXIMUM_AVAILABILITY",
            "transportType": "SYNC",
            "displayName": "standby-a",
            "hostname": "standby"
        }"#;
        let details: CreateDataGuardAssociationDetails = serde_json::from_str(body).unwrap();
        match details {
            CreateDataGuardAssociationDetails::NewDbSystem(d) => {
                assert_eq!(d.display_name.as_deref(), Some("standby-a"));
                assert_eq!(d.standby.protection_mode, "MAXIMUM_AVAILABILITY");
            }
            other => panic!("expected NewDbSystem, got {:?}", other),
        }
    }

    #[test]
    fn unknown_discriminator_falls_back_to_base_variant() {
        let body = r#"{
            "creationType": "SomethingNew",
            "databaseAdminPassword": "pw",
            "protectionMode": "MAXIMUM_PERFORMANCE",
            "transportType": "ASYNC"
        }"#;
        let details: CreateDataGuardAssociationDetails = serde_json::from_str(body).unwrap();
        assert!(matches!(
            details,
            CreateDataGuardAssociationDetails::ExistingDbSystem(_)
        ));
    }

    #[test]
    fn switchover_requires_password() {
        let req = SwitchoverDataGuardAssociationRequest {
            database_id: "db1".to_string(),
            data_guard_association_id: "dg1".to_string(),
            ..Default::default()
        };
        assert!(req.encode().is_err());
    }
}
