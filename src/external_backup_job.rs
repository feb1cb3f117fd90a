//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! External backup jobs: standalone backup resources created from
//! on-premises databases and migrated into the cloud.

use crate::client::{CallOptions, DatabaseClient, ServiceOperation};
use crate::error::{validation_err, DatabaseError};
use crate::retry::RetryPolicy;
use crate::wire::{RawResponse, ResponseCtx, WireRequest};
use reqwest::Method;
use serde_derive::{Deserialize, Serialize};
use std::time::Duration;

/// Swift object storage credentials and state of an external backup job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalBackupJob {
    /// The OCID of the associated backup resource.
    pub backup_id: String,
    /// Whether the backup can be used to restore the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning: Option<bool>,
    /// The Swift path to use as a destination for the standalone backup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swift_path: Option<String>,
    /// The name of the Swift compartment bucket where the backup should be
    /// stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
    /// The tag for RMAN to apply to the backup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// The Swift user name to use for transferring the standalone backup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// The auth token to use for access to the Swift compartment bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swift_password: Option<String>,
}

/// Details for creating an external backup job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExternalBackupJobDetails {
    /// The targeted availability domain for the backup.
    pub availability_domain: String,
    /// The OCID of the compartment where the backup should be created.
    pub compartment_id: String,
    /// A user-friendly name for the backup.
    pub display_name: String,
    /// The Oracle Database version of the external database.
    pub db_version: String,
    /// The `DBID` of the Oracle Database being backed up.
    pub external_database_identifier: i64,
    /// The character set of the external database.
    pub character_set: String,
    /// The national character set of the external database.
    pub ncharacter_set: String,
    /// The mode (single-instance or RAC) of the external database.
    pub database_mode: String,
    /// The Oracle Database edition to use for creating a database from
    /// this standalone backup.
    pub database_edition: String,
}

/// Request to create a new backup resource and return the information
/// needed to back up an on-premises Oracle Database to Oracle Cloud
/// Infrastructure.
#[derive(Debug, Clone, Default)]
pub struct CreateExternalBackupJobRequest {
    pub create_external_backup_job_details: CreateExternalBackupJobDetails,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct CreateExternalBackupJobResponse {
    pub external_backup_job: ExternalBackupJob,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl CreateExternalBackupJobRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<CreateExternalBackupJobResponse, DatabaseError> {
        let opts = CallOptions::new(&self.retry_policy, &self.timeout)
            .with_retry_token(&self.opc_retry_token);
        client.invoke(self, opts).await
    }
}

impl ServiceOperation for CreateExternalBackupJobRequest {
    type Response = CreateExternalBackupJobResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let details = &self.create_external_backup_job_details;
        if details.availability_domain.is_empty() {
            return validation_err!("availability_domain is required");
        }
        if details.compartment_id.is_empty() {
            return validation_err!("compartment_id is required");
        }
        if details.external_database_identifier == 0 {
            return validation_err!("external_database_identifier is required");
        }
        let mut w = WireRequest::new(Method::POST, "/externalBackupJobs");
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(details)?;
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<CreateExternalBackupJobResponse, DatabaseError> {
        Ok(CreateExternalBackupJobResponse {
            external_backup_job: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Request to get information about the specified external backup job.
#[derive(Debug, Clone, Default)]
pub struct GetExternalBackupJobRequest {
    /// The backup OCID returned when the external backup job was created.
    pub backup_id: String,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct GetExternalBackupJobResponse {
    pub external_backup_job: ExternalBackupJob,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl GetExternalBackupJobRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<GetExternalBackupJobResponse, DatabaseError> {
        client
            .invoke(self, CallOptions::new(&self.retry_policy, &self.timeout))
            .await
    }
}

impl ServiceOperation for GetExternalBackupJobRequest {
    type Response = GetExternalBackupJobResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(Method::GET, "/externalBackupJobs/{backupId}");
        w.path("backupId", &self.backup_id)?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<GetExternalBackupJobResponse, DatabaseError> {
        Ok(GetExternalBackupJobResponse {
            external_backup_job: ctx.json()?,
            etag: ctx.header_str("etag"),
            opc_request_id: ctx.header_str("opc-request-id"),
            raw: ctx.raw(),
        })
    }
}

/// Details for marking an external backup job complete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteExternalBackupJobDetails {
    /// If the database being backed up is TDE enabled, the path to the
    /// associated TDE wallet in Object Storage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tde_wallet_path: Option<String>,
    /// The handle of the control file backup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cf_backup_handle: Option<String>,
    /// The handle of the spfile backup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spf_backup_handle: Option<String>,
    /// The list of SQL patches that need to be applied to the backup during
    /// the restore.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql_patches: Option<Vec<String>>,
    /// The size of the data in the database, in megabytes.
    #[serde(rename = "dataSizeInMBs", skip_serializing_if = "Option::is_none")]
    pub data_size_in_mbs: Option<i64>,
    /// The size of the redo in the database, in megabytes.
    #[serde(rename = "redoSizeInMBs", skip_serializing_if = "Option::is_none")]
    pub redo_size_in_mbs: Option<i64>,
}

/// Request to change the status of the standalone backup resource to
/// `ACTIVE` after the backup is created from the on-premises database and
/// placed in Oracle Cloud Infrastructure Object Storage.
#[derive(Debug, Clone, Default)]
pub struct CompleteExternalBackupJobRequest {
    /// The backup OCID returned when the external backup job was created.
    pub backup_id: String,
    pub complete_external_backup_job_details: CompleteExternalBackupJobDetails,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_policy: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct CompleteExternalBackupJobResponse {
    pub external_backup_job: ExternalBackupJob,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
    pub raw: RawResponse,
}

impl CompleteExternalBackupJobRequest {
    pub async fn execute(
        &self,
        client: &DatabaseClient,
    ) -> Result<CompleteExternalBackupJobResponse, DatabaseError> {
        let opts = CallOptions::new(&self.retry_policy, &self.timeout)
            .with_retry_token(&self.opc_retry_token);
        client.invoke(self, opts).await
    }
}

impl ServiceOperation for CompleteExternalBackupJobRequest {
    type Response = CompleteExternalBackupJobResponse;

    fn encode(&self) -> Result<WireRequest, DatabaseError> {
        let mut w = WireRequest::new(
            Method::POST,
            "/externalBackupJobs/{backupId}/actions/complete",
        );
        w.path("backupId", &self.backup_id)?;
        w.header_opt("opc-request-id", self.opc_request_id.as_deref());
        w.json_body(&self.complete_external_backup_job_details)?;
        Ok(w)
    }

    fn decode(ctx: ResponseCtx) -> Result<CompleteExternalBackupJobResponse, DatabaseError> {
        Ok(CompleteExternalBackupJobResponse {
            external_backup_job: ctx.json()?,
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
    fn create_validates_mandatory_fields() {
        let req = CreateExternalBackupJobRequest::default();
        assert!(req.encode().is_err());
    }

    #[test]
    fn complete_details_use_explicit_mb_names() {
        let details = CompleteExternalBackupJobDetails {
            data_size_in_mbs: Some(10240),
            redo_size_in_mbs: Some(512),
            ..Default::default()
        };
        let body = serde_json::to_string(&details).unwrap();
        assert_eq!(body, r#"{"dataSizeInMBs":10240,"redoSizeInMBs":512}"#);
    }
}
