//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use crate::auth_common::authentication_provider::AuthenticationProvider;
use crate::auth_common::signer;
use crate::client_builder::ClientBuilder;
use crate::error::{validation_err, DatabaseError, ServiceFailure};
use crate::retry::{parse_retry_after, RetryPolicy};
use crate::wire::{self, ResponseCtx, WireBody, WireRequest};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde_derive::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, trace};
use url::Url;

const RETRY_TOKEN_HEADER: &str = "opc-retry-token";
const REQUEST_ID_HEADER: &str = "opc-request-id";

/// **The Database service client**.
///
/// This should be created once and used throughout the application
/// lifetime, across all threads. Each remote operation is described by a
/// request struct whose `execute()` method takes this client; the client
/// holds no per-call state, so any number of calls may be in flight
/// concurrently.
///
/// Note: there is no need to enclose this struct in an `Rc` or [`Arc`], as
/// it uses an [`Arc`] internally, so calling `.clone()` on this struct will
/// always return the same underlying client.
#[derive(Clone, Debug)]
pub struct DatabaseClient {
    // Use an inner Arc so cloning keeps the same contents
    pub(crate) inner: Arc<ClientRef>,
}

#[derive(Debug)]
pub(crate) struct ClientRef {
    pub(crate) client: reqwest::Client,
    // scheme://host of the service, no trailing slash
    pub(crate) endpoint: String,
    // fixed API version segment prepended to every operation path
    pub(crate) base_path: String,
    pub(crate) auth: Box<dyn AuthenticationProvider>,
    pub(crate) timeout: Duration,
}

/// One remote operation: how to encode the typed request onto the wire and
/// how to decode the raw response back into the typed response.
pub(crate) trait ServiceOperation {
    type Response;

    fn encode(&self) -> Result<WireRequest, DatabaseError>;

    /// True for operations whose 2xx response body is handed to the caller
    /// as an unread stream instead of being JSON-decoded.
    fn binary() -> bool {
        false
    }

    fn decode(ctx: ResponseCtx) -> Result<Self::Response, DatabaseError>;

    fn decode_stream(_response: reqwest::Response) -> Result<Self::Response, DatabaseError> {
        validation_err!("operation does not return a binary stream")
    }
}

/// Per-logical-call settings derived by each request's `execute()`.
#[derive(Default)]
pub(crate) struct CallOptions {
    pub(crate) policy: RetryPolicy,
    // effective retry token; attached to every attempt when set
    pub(crate) retry_token: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl CallOptions {
    pub(crate) fn new(policy: &Option<RetryPolicy>, timeout: &Option<Duration>) -> CallOptions {
        CallOptions {
            policy: policy.clone().unwrap_or_default(),
            retry_token: None,
            timeout: *timeout,
        }
    }

    /// Fix the retry token for the whole logical call: the caller's token
    /// when supplied, a freshly generated one otherwise. Token-bearing
    /// operations get a token even when the effective policy never
    /// retries, so a caller-driven resubmission stays idempotent.
    pub(crate) fn with_retry_token(mut self, caller_token: &Option<String>) -> CallOptions {
        let token = match caller_token {
            Some(t) if !t.is_empty() => t.clone(),
            _ => wire::retry_token(),
        };
        self.retry_token = Some(token);
        self
    }
}

// Wire shape of a service error body.
#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    code: String,
    message: String,
}

impl DatabaseClient {
    /// Create a new [`ClientBuilder`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The resolved service endpoint, e.g.
    /// `https://database.us-phoenix-1.oraclecloud.com`.
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Execute one logical call: encode, sign, send, decode, governed by
    /// the retry policy. Each attempt re-encodes and re-signs so the date
    /// and body digest headers are fresh.
    pub(crate) async fn invoke<O: ServiceOperation>(
        &self,
        op: &O,
        opts: CallOptions,
    ) -> Result<O::Response, DatabaseError> {
        let timeout = opts.timeout.unwrap_or(self.inner.timeout);
        let deadline = Instant::now() + timeout;
        // correlation id is stable across all attempts of this call
        let request_id = wire::request_id();
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            let err = match self.attempt(op, &opts, &request_id, deadline).await {
                Ok(response) => return Ok(response),
                Err(e) => e,
            };
            let delay = match opts.policy.next_attempt_delay(attempt, &err) {
                Some(d) => d,
                None => return Err(err),
            };
            debug!(
                "attempt {} failed ({}), retrying in {:?}",
                attempt, err, delay
            );
            if Instant::now() + delay >= deadline {
                // the deadline will fire mid-sleep; honor it and give up
                tokio::time::sleep_until(deadline).await;
                return Err(DatabaseError::Cancelled {
                    message: format!(
                        "deadline exceeded during retry backoff after attempt {}",
                        attempt
                    ),
                });
            }
            tokio::time::sleep(delay).await;
        }
    }

    async fn attempt<O: ServiceOperation>(
        &self,
        op: &O,
        opts: &CallOptions,
        request_id: &str,
        deadline: Instant,
    ) -> Result<O::Response, DatabaseError> {
        // encode; validation failures surface here without any I/O
        let wire = op.encode()?;
        wire.finish()?;

        let mut url = Url::parse(&format!(
            "{}/{}{}",
            self.inner.endpoint, self.inner.base_path, wire.path
        ))?;
        for (name, value) in &wire.query {
            url.query_pairs_mut().append_pair(name, value);
        }

        let mut headers = HeaderMap::new();
        for (name, value) in &wire.headers {
            let hn: HeaderName = name
                .parse()
                .map_err(|_| crate::error::validation_error!("invalid header name '{}'", name))?;
            headers.append(hn, HeaderValue::from_str(value)?);
        }
        if !headers.contains_key(REQUEST_ID_HEADER) {
            headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(request_id)?);
        }
        if let Some(token) = &opts.retry_token {
            if !headers.contains_key(RETRY_TOKEN_HEADER) {
                headers.insert(RETRY_TOKEN_HEADER, HeaderValue::from_str(token)?);
            }
        }
        headers.insert(
            "user-agent",
            HeaderValue::from_str(crate::error::user_agent())?,
        );

        let (body_bytes, content_type): (Vec<u8>, &str) = match &wire.body {
            WireBody::None => (Vec::new(), "application/json"),
            WireBody::Json(buf) => (buf.clone(), "application/json"),
            WireBody::Binary(buf) => (buf.to_vec(), "application/octet-stream"),
        };

        // sign after the body is final so the digest covers the bytes sent
        signer::sign_request(
            &mut headers,
            &wire.method,
            &url,
            &body_bytes,
            content_type,
            self.inner.auth.as_ref(),
        )?;

        let now = Instant::now();
        if now >= deadline {
            return Err(DatabaseError::Cancelled {
                message: "deadline exceeded before attempt could start".to_string(),
            });
        }
        trace!("{} {}", wire.method, url);
        let mut builder = self
            .inner
            .client
            .request(wire.method.clone(), url)
            .headers(headers)
            .timeout(deadline - now);
        if bodied_method(&wire.method) {
            builder = builder.body(body_bytes);
        }

        let response = match builder.send().await {
            Ok(r) => r,
            Err(e) => {
                if e.is_timeout() || Instant::now() >= deadline {
                    return Err(DatabaseError::Cancelled {
                        message: format!("deadline exceeded during transport: {}", e),
                    });
                }
                return Err(e.into());
            }
        };

        let status = response.status();
        if status.is_success() {
            if O::binary() {
                // the caller owns the stream and is responsible for
                // dropping it
                return O::decode_stream(response);
            }
            let headers = response.headers().clone();
            let body = response.bytes().await?;
            return O::decode(ResponseCtx {
                status: status.as_u16(),
                headers,
                body,
            });
        }

        // non-2xx: the body is always consumed here, never leaked upward
        let headers = response.headers().clone();
        let retry_after = parse_retry_after(&headers);
        let body = response.bytes().await.unwrap_or_default();
        Err(service_error(
            status.as_u16(),
            &headers,
            &body,
            retry_after,
        ))
    }
}

fn bodied_method(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT || *method == Method::PATCH
}

// Decode a non-2xx response into a Service error, falling back to a
// Transport error when the body is not a well-formed service error.
fn service_error(
    status: u16,
    headers: &HeaderMap,
    body: &[u8],
    retry_after: Option<Duration>,
) -> DatabaseError {
    let opc_request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    match serde_json::from_slice::<ServiceErrorBody>(body) {
        Ok(parsed) => DatabaseError::Service(ServiceFailure {
            status,
            code: parsed.code,
            message: parsed.message,
            opc_request_id,
            raw_body: String::from_utf8_lossy(body).to_string(),
            retry_after,
        }),
        Err(_) => DatabaseError::Transport {
            message: format!(
                "service returned an unparseable error body: {}",
                String::from_utf8_lossy(&body[..body.len().min(256)])
            ),
            status: Some(status),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_body_is_parsed() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, "rid-9".parse().unwrap());
        let err = service_error(
            404,
            &headers,
            br#"{"code":"NotAuthorizedOrNotFound","message":"resource gone"}"#,
            None,
        );
        match &err {
            DatabaseError::Service(sf) => {
                assert_eq!(sf.status, 404);
                assert_eq!(sf.code, "NotAuthorizedOrNotFound");
                assert_eq!(sf.message, "resource gone");
                assert_eq!(sf.opc_request_id.as_deref(), Some("rid-9"));
                assert!(sf.raw_body.contains("resource gone"));
            }
            other => panic!("expected service error, got {:?}", other),
        }
        assert_eq!(err.opc_request_id(), Some("rid-9"));
    }

    #[test]
    fn unparseable_error_body_becomes_transport_error() {
        let err = service_error(502, &HeaderMap::new(), b"<html>bad gateway</html>", None);
        match err {
            DatabaseError::Transport { status, message } => {
                assert_eq!(status, Some(502));
                assert!(message.contains("bad gateway"));
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[test]
    fn bodied_methods() {
        assert!(bodied_method(&Method::POST));
        assert!(bodied_method(&Method::PUT));
        assert!(!bodied_method(&Method::GET));
        assert!(!bodied_method(&Method::DELETE));
    }
}
