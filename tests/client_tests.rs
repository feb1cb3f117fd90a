//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! End-to-end tests of the request pipeline against a mock HTTP server.

use oracle_database_rust_sdk::autonomous_database::{
    CloneType, CreateAutonomousDatabaseBase, CreateAutonomousDatabaseCloneDetails,
    CreateAutonomousDatabaseDetails, GenerateAutonomousDatabaseWalletDetails,
};
use oracle_database_rust_sdk::{
    CreateAutonomousDatabaseRequest, DatabaseClient, DatabaseError, DeleteBackupRequest,
    GenerateAutonomousDatabaseWalletRequest, GetBackupRequest, ListAutonomousDatabasesRequest,
    PrivateKeySupplier, RetryPolicy, SimpleAuthenticationProvider,
};
use rsa::pkcs8::EncodePrivateKey;
use rsa::RsaPrivateKey;
use std::sync::OnceLock;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Key generation is slow enough to share one key across the whole suite.
static TEST_KEY_PEM: OnceLock<String> = OnceLock::new();

fn test_key_pem() -> String {
    TEST_KEY_PEM
        .get_or_init(|| {
            let mut rng = rand::thread_rng();
            let key = RsaPrivateKey::new(&mut rng, 2048).expect("generate test key");
            key.to_pkcs8_pem(rsa::pkcs8::LineEnding::LF)
                .expect("encode test key")
                .to_string()
        })
        .clone()
}

fn test_client(endpoint: &str) -> DatabaseClient {
    let provider = SimpleAuthenticationProvider::new(
        "ocid1.tenancy.oc1..testtenancy".to_string(),
        "ocid1.user.oc1..testuser".to_string(),
        "11:22:33:44:55".to_string(),
        "us-phoenix-1".to_string(),
        Box::new(PrivateKeySupplier::new(test_key_pem())),
    );
    DatabaseClient::builder()
        .auth_provider(Box::new(provider))
        .unwrap()
        .endpoint(endpoint)
        .unwrap()
        .build()
        .unwrap()
}

fn new_adb_details() -> CreateAutonomousDatabaseDetails {
    CreateAutonomousDatabaseDetails {
        compartment_id: "c1".to_string(),
        db_name: "db1".to_string(),
        cpu_core_count: 1,
        data_storage_size_in_tbs: 1,
        admin_password: "P@ssword1234!".to_string(),
        ..Default::default()
    }
}

fn quick_retry(max_attempts: u32) -> RetryPolicy {
    RetryPolicy::new(
        max_attempts,
        |_, e| oracle_database_rust_sdk::default_retryable(e),
        |_| Duration::from_millis(10),
    )
}

#[tokio::test]
async fn create_retries_with_stable_retry_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/20160918/autonomousDatabases"))
        .respond_with(ResponseTemplate::new(500).set_body_raw(
            r#"{"code":"InternalServerError","message":"try again"}"#,
            "application/json",
        ))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/20160918/autonomousDatabases"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"id":"ocid.1","lifecycleState":"PROVISIONING"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = CreateAutonomousDatabaseRequest {
        create_autonomous_database_details: CreateAutonomousDatabaseBase::New(new_adb_details()),
        retry_policy: Some(quick_retry(2)),
        ..Default::default()
    }
    .execute(&client)
    .await
    .unwrap();

    assert_eq!(response.autonomous_database.id, "ocid.1");
    assert_eq!(
        response.autonomous_database.lifecycle_state,
        Some(oracle_database_rust_sdk::autonomous_database::AutonomousDatabaseLifecycleState::Provisioning)
    );

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2, "exactly two attempts expected");
    let token_of = |i: usize| {
        requests[i]
            .headers
            .get("opc-retry-token")
            .expect("retry token header present")
            .to_str()
            .unwrap()
            .to_string()
    };
    assert_eq!(token_of(0), token_of(1), "token identical across attempts");
    assert!(!token_of(0).is_empty());
    // the correlation id is also stable across attempts
    let rid_of = |i: usize| {
        requests[i]
            .headers
            .get("opc-request-id")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    };
    assert_eq!(rid_of(0), rid_of(1));
}

#[tokio::test]
async fn conditional_delete_surfaces_412_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/20160918/backups/b1"))
        .respond_with(
            ResponseTemplate::new(412)
                .set_body_raw(
                    r#"{"code":"NoEtagMatch","message":"etag mismatch"}"#,
                    "application/json",
                )
                .insert_header("opc-request-id", "rid-caller-1"),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = DeleteBackupRequest {
        backup_id: "b1".to_string(),
        if_match: Some("etag-a".to_string()),
        opc_request_id: Some("rid-caller-1".to_string()),
        // even with a retry policy attached, 412 is terminal
        retry_policy: Some(quick_retry(5)),
        ..Default::default()
    }
    .execute(&client)
    .await
    .unwrap_err();

    assert_eq!(err.status(), Some(412));
    assert_eq!(err.service_code(), Some("NoEtagMatch"));
    assert_eq!(err.opc_request_id(), Some("rid-caller-1"));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "terminal failures are not retried");
    assert_eq!(
        requests[0].headers.get("if-match").unwrap().to_str().unwrap(),
        "etag-a"
    );
}

#[tokio::test]
async fn paginated_list_terminates_when_token_absent() {
    let server = MockServer::start().await;

    let first_page: Vec<serde_json::Value> = (0..10)
        .map(|i| serde_json::json!({"id": format!("ocid.adb.{}", i)}))
        .collect();
    let second_page: Vec<serde_json::Value> = (10..13)
        .map(|i| serde_json::json!({"id": format!("ocid.adb.{}", i)}))
        .collect();

    Mock::given(method("GET"))
        .and(path("/20160918/autonomousDatabases"))
        .and(query_param_is_missing("page"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&first_page)
                .insert_header("opc-next-page", "p2"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/20160918/autonomousDatabases"))
        .and(query_param("page", "p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&second_page))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut request = ListAutonomousDatabasesRequest {
        compartment_id: "c1".to_string(),
        ..Default::default()
    };
    let mut items = Vec::new();
    let mut pages = 0;
    loop {
        let response = request.execute(&client).await.unwrap();
        pages += 1;
        items.extend(response.items);
        match response.opc_next_page {
            Some(token) => request.page = Some(token),
            None => break,
        }
    }

    assert_eq!(pages, 2);
    assert_eq!(items.len(), 13);
    assert_eq!(items[12].id, "ocid.adb.12");
}

#[tokio::test]
async fn clone_create_sends_discriminator_at_top_level() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/20160918/autonomousDatabases"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"id":"ocid.clone.1","lifecycleState":"PROVISIONING"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    CreateAutonomousDatabaseRequest {
        create_autonomous_database_details: CreateAutonomousDatabaseBase::Clone(
            CreateAutonomousDatabaseCloneDetails {
                details: new_adb_details(),
                source_id: "src-1".to_string(),
                clone_type: Some(CloneType::Full),
            },
        ),
        ..Default::default()
    }
    .execute(&client)
    .await
    .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["source"], "DATABASE");
    assert_eq!(body["sourceId"], "src-1");
    assert_eq!(body["cloneType"], "FULL");
    // the signed digest must cover the body actually sent
    assert!(requests[0].headers.get("x-content-sha256").is_some());
    assert!(requests[0].headers.get("authorization").is_some());
}

#[tokio::test]
async fn wallet_download_hands_over_unread_stream() {
    let server = MockServer::start().await;
    let archive = vec![0x50u8, 0x4b, 0x03, 0x04].repeat(1024); // 4096 bytes

    Mock::given(method("POST"))
        .and(path(
            "/20160918/autonomousDatabases/adb-1/actions/generateWallet",
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(archive.clone())
                .insert_header("content-type", "application/zip")
                .insert_header("last-modified", "Tue, 15 Oct 2019 19:43:05 GMT"),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = GenerateAutonomousDatabaseWalletRequest {
        autonomous_database_id: "adb-1".to_string(),
        generate_autonomous_database_wallet_details: GenerateAutonomousDatabaseWalletDetails {
            password: "strongPw12!".to_string(),
        },
        ..Default::default()
    }
    .execute(&client)
    .await
    .unwrap();

    assert_eq!(response.content_length, Some(4096));
    assert_eq!(
        response.last_modified.unwrap().to_rfc3339(),
        "2019-10-15T19:43:05+00:00"
    );
    assert_eq!(response.raw.status, 200);

    // the stream was not consumed by the pipeline; the caller reads it
    let bytes = response.content.bytes().await.unwrap();
    assert_eq!(bytes.len(), 4096);
    assert_eq!(&bytes[..4], &[0x50, 0x4b, 0x03, 0x04]);
}

#[tokio::test]
async fn deadline_during_backoff_cancels_without_second_attempt() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/20160918/backups/b1"))
        .respond_with(ResponseTemplate::new(503).set_body_raw(
            r#"{"code":"ServiceUnavailable","message":"busy"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = GetBackupRequest {
        backup_id: "b1".to_string(),
        // backoff far longer than the deadline, so the deadline fires
        // during the sleep before attempt 2
        retry_policy: Some(RetryPolicy::new(
            5,
            |_, e| oracle_database_rust_sdk::default_retryable(e),
            |_| Duration::from_secs(30),
        )),
        timeout: Some(Duration::from_millis(300)),
        ..Default::default()
    }
    .execute(&client)
    .await
    .unwrap_err();

    assert!(
        matches!(err, DatabaseError::Cancelled { .. }),
        "expected cancellation, got {:?}",
        err
    );
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "attempt 2 must not start");
}

#[tokio::test]
async fn validation_failure_performs_no_io() {
    let server = MockServer::start().await;
    let client = test_client(&server.uri());

    // admin_password missing
    let err = CreateAutonomousDatabaseRequest {
        create_autonomous_database_details: CreateAutonomousDatabaseBase::New(
            CreateAutonomousDatabaseDetails {
                compartment_id: "c1".to_string(),
                db_name: "db1".to_string(),
                ..Default::default()
            },
        ),
        ..Default::default()
    }
    .execute(&client)
    .await
    .unwrap_err();

    assert!(matches!(err, DatabaseError::Validation { .. }));
    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty(), "validation must precede any I/O");
}

#[tokio::test]
async fn attempts_are_bounded_by_max_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/20160918/backups/b1"))
        .respond_with(ResponseTemplate::new(500).set_body_raw(
            r#"{"code":"InternalServerError","message":"boom"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = GetBackupRequest {
        backup_id: "b1".to_string(),
        retry_policy: Some(quick_retry(3)),
        ..Default::default()
    }
    .execute(&client)
    .await
    .unwrap_err();

    assert_eq!(err.status(), Some(500));
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn success_with_unexpected_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/20160918/backups/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = GetBackupRequest {
        backup_id: "b1".to_string(),
        ..Default::default()
    }
    .execute(&client)
    .await
    .unwrap_err();

    match err {
        DatabaseError::Decode { status, .. } => assert_eq!(status, 200),
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn requests_are_signed_per_attempt() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/20160918/backups/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"id":"b1","displayName":"nightly"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = GetBackupRequest {
        backup_id: "b1".to_string(),
        ..Default::default()
    }
    .execute(&client)
    .await
    .unwrap();
    assert_eq!(response.backup.id, "b1");

    let requests = server.received_requests().await.unwrap();
    let auth = requests[0]
        .headers
        .get("authorization")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(auth.starts_with(r#"Signature version="1""#));
    assert!(auth.contains("ocid1.tenancy.oc1..testtenancy/ocid1.user.oc1..testuser"));
    assert!(auth.contains(r#"headers="date (request-target) host""#));
    assert!(requests[0].headers.get("date").is_some());
}
