//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Oracle Database Service Rust SDK
//!
//! This is the Rust SDK for the [Oracle Cloud Infrastructure Database
//! Service](https://docs.cloud.oracle.com/iaas/Content/Database/Concepts/databaseoverview.htm):
//! Autonomous Databases, DB systems, DB homes and nodes, backups, Data
//! Guard associations, maintenance runs, and related resources.
//!
//! This SDK supplies and uses Rust `async` methods throughout, using the
//! [tokio](https://crates.io/crates/tokio) runtime. There is currently no
//! blocking support.
//!
//! The general flow for an application using the SDK is:
//! - Create a [`ClientBuilder`] with all needed parameters
//! - Create a [`DatabaseClient`] from the builder that will be used
//!   throughout the application, across all threads
//! - Interact with the service through Request structs such as
//!   [`CreateAutonomousDatabaseRequest`], [`ListDbSystemsRequest`], etc.,
//!   each of which has an `execute()` method taking the client
//!
//! ## Simple Example
//! The following code creates a client from the default OCI configuration
//! file and reads one Autonomous Database:
//! ```no_run
//! use oracle_database_rust_sdk::{DatabaseClient, GetAutonomousDatabaseRequest};
//! use std::error::Error;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn Error>> {
//!     let client = DatabaseClient::builder()
//!         .config_from_file("~/.oci/config")?
//!         .build()?;
//!     let response = GetAutonomousDatabaseRequest {
//!         autonomous_database_id: "ocid1.autonomousdatabase.oc1..example".to_string(),
//!         ..Default::default()
//!     }
//!     .execute(&client)
//!     .await?;
//!     println!("state={:?}", response.autonomous_database.lifecycle_state);
//!     Ok(())
//! }
//! ```
//!
//! ## Authentication
//!
//! Requests are signed with the OCI HTTP signature scheme. Credentials can
//! come from:
//! - an OCI configuration file (see
//!   [`ClientBuilder::config_from_file()`]), the common case, or
//! - any implementation of [`AuthenticationProvider`] passed to
//!   [`ClientBuilder::auth_provider()`].
//!
//! The configuration is validated when the client is built; an incomplete
//! identity (missing tenancy, user, or fingerprint) is rejected there
//! rather than on the first call.
//!
//! ## Regions and endpoints
//!
//! The service endpoint is normally derived from the region:
//! `https://database.{region}.{secondLevelDomain}`. The region comes from
//! the configuration file or [`ClientBuilder::region()`]; an explicit
//! [`ClientBuilder::endpoint()`] bypasses resolution entirely, which is
//! how tests point the client at a local server.
//!
//! ## Retries, timeouts, and idempotency
//!
//! Every operation defaults to a single attempt. Attach a
//! [`RetryPolicy`] (e.g. [`RetryPolicy::exponential()`]) to a request's
//! `retry_policy` field to retry transient failures: transport errors,
//! HTTP 429 (honoring `Retry-After`), and 5xx responses. Mutating
//! operations that are idempotent by retry token generate a token when the
//! caller supplies none, and the same token is sent on every attempt of
//! the logical call.
//!
//! Each call is bounded by a deadline (the client's default timeout, or
//! the request's `timeout` field). When the deadline expires mid-transport
//! or mid-backoff the call returns [`DatabaseError::Cancelled`] without
//! further attempts. Dropping the future cancels the call immediately.
//!
//! ## Pagination
//!
//! List operations return up to one page of results and an
//! `opc_next_page` token. Pass it back as the request's `page` field to
//! fetch the next page; the token is absent on the last page:
//! ```no_run
//! # use oracle_database_rust_sdk::{DatabaseClient, ListAutonomousDatabasesRequest};
//! # async fn run(client: DatabaseClient) -> Result<(), Box<dyn std::error::Error>> {
//! let mut request = ListAutonomousDatabasesRequest {
//!     compartment_id: "ocid1.compartment.oc1..example".to_string(),
//!     ..Default::default()
//! };
//! loop {
//!     let response = request.execute(&client).await?;
//!     for db in &response.items {
//!         println!("{:?}", db.display_name);
//!     }
//!     match response.opc_next_page {
//!         Some(token) => request.page = Some(token),
//!         None => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Copyright (C) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//!
//! This SDK is licensed under the Universal Permissive License 1.0.
//!

pub(crate) mod client_builder;
pub use crate::client_builder::ClientBuilder;

pub(crate) mod client;
pub use crate::client::DatabaseClient;

pub(crate) mod auth_common;
pub use crate::auth_common::authentication_provider::AuthenticationProvider;
pub use crate::auth_common::config_file_authentication_provider::ConfigFileAuthenticationProvider;
pub use crate::auth_common::private_key_supplier::{
    FilePrivateKeySupplier, PrivateKeySupplier, Supplier,
};
pub use crate::auth_common::simple_authentication_provider::SimpleAuthenticationProvider;

pub(crate) mod error;
pub use crate::error::{DatabaseError, ServiceFailure};

pub(crate) mod region;
pub use crate::region::{string_to_region, Region};

pub(crate) mod retry;
pub use crate::retry::{default_retryable, RetryPolicy};

pub(crate) mod wire;
pub use crate::wire::RawResponse;

pub mod autonomous_container_database;
pub use crate::autonomous_container_database::{
    CreateAutonomousContainerDatabaseRequest, GetAutonomousContainerDatabaseRequest,
    ListAutonomousContainerDatabasesRequest, RestartAutonomousContainerDatabaseRequest,
    TerminateAutonomousContainerDatabaseRequest, UpdateAutonomousContainerDatabaseRequest,
};

pub mod autonomous_database;
pub use crate::autonomous_database::{
    CreateAutonomousDatabaseBackupRequest, CreateAutonomousDatabaseRequest,
    DeleteAutonomousDatabaseRequest, GenerateAutonomousDatabaseWalletRequest,
    GetAutonomousDatabaseBackupRequest, GetAutonomousDatabaseRequest,
    ListAutonomousDatabaseBackupsRequest, ListAutonomousDatabasesRequest,
    RestoreAutonomousDatabaseRequest, StartAutonomousDatabaseRequest,
    StopAutonomousDatabaseRequest, UpdateAutonomousDatabaseRequest,
};

pub mod autonomous_exadata_infrastructure;
pub use crate::autonomous_exadata_infrastructure::{
    GetAutonomousExadataInfrastructureRequest, LaunchAutonomousExadataInfrastructureRequest,
    ListAutonomousExadataInfrastructureShapesRequest,
    ListAutonomousExadataInfrastructuresRequest, TerminateAutonomousExadataInfrastructureRequest,
    UpdateAutonomousExadataInfrastructureRequest,
};

pub mod backup;
pub use crate::backup::{
    CreateBackupRequest, DeleteBackupRequest, GetBackupRequest, ListBackupsRequest,
};

pub mod data_guard;
pub use crate::data_guard::{
    CreateDataGuardAssociationRequest, FailoverDataGuardAssociationRequest,
    GetDataGuardAssociationRequest, ListDataGuardAssociationsRequest,
    ReinstateDataGuardAssociationRequest, SwitchoverDataGuardAssociationRequest,
};

pub mod database;
pub use crate::database::{
    GetDatabaseRequest, ListDatabasesRequest, RestoreDatabaseRequest, UpdateDatabaseRequest,
};

pub mod db_home;
pub use crate::db_home::{
    CreateDbHomeRequest, DeleteDbHomeRequest, GetDbHomePatchHistoryEntryRequest,
    GetDbHomePatchRequest, GetDbHomeRequest, ListDbHomePatchHistoryEntriesRequest,
    ListDbHomePatchesRequest, ListDbHomesRequest, UpdateDbHomeRequest,
};

pub mod db_node;
pub use crate::db_node::{DbNodeActionRequest, GetDbNodeRequest, ListDbNodesRequest};

pub mod db_system;
pub use crate::db_system::{
    GetDbSystemPatchHistoryEntryRequest, GetDbSystemPatchRequest, GetDbSystemRequest,
    GetExadataIormConfigRequest, LaunchDbSystemRequest, ListDbSystemPatchHistoryEntriesRequest,
    ListDbSystemPatchesRequest, ListDbSystemShapesRequest, ListDbSystemsRequest,
    ListDbVersionsRequest, TerminateDbSystemRequest, UpdateDbSystemRequest,
    UpdateExadataIormConfigRequest,
};

pub mod external_backup_job;
pub use crate::external_backup_job::{
    CompleteExternalBackupJobRequest, CreateExternalBackupJobRequest, GetExternalBackupJobRequest,
};

pub mod maintenance_run;
pub use crate::maintenance_run::{
    GetMaintenanceRunRequest, ListMaintenanceRunsRequest, UpdateMaintenanceRunRequest,
};

pub mod patch;
