//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Translation between typed request/response values and HTTP wire messages.
//!
//! Rust has no runtime reflection, so every request type registers its
//! fields' wire bindings explicitly against a [`WireRequest`]: path template
//! placeholders, query parameters, headers, and at most one JSON or binary
//! body. Absent optional values never appear on the wire; absent mandatory
//! values fail encoding before any I/O happens.

use crate::error::{validation_err, validation_error, DatabaseError};
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, Utc};
use rand::Rng;
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A value that can be rendered as a query parameter or header string.
pub(crate) trait WireValue {
    fn to_wire(&self) -> String;
}

impl WireValue for str {
    fn to_wire(&self) -> String {
        self.to_string()
    }
}

impl WireValue for String {
    fn to_wire(&self) -> String {
        self.clone()
    }
}

impl WireValue for i32 {
    fn to_wire(&self) -> String {
        self.to_string()
    }
}

impl WireValue for i64 {
    fn to_wire(&self) -> String {
        self.to_string()
    }
}

impl WireValue for bool {
    fn to_wire(&self) -> String {
        self.to_string()
    }
}

impl WireValue for DateTime<FixedOffset> {
    fn to_wire(&self) -> String {
        self.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }
}

fn encode_path_segment(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for b in value.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

#[derive(Debug)]
pub(crate) enum WireBody {
    None,
    Json(Vec<u8>),
    Binary(Bytes),
}

/// The wire form of one request: method, path, query, headers, body.
///
/// Built once per attempt by the operation's `encode()`, then signed and
/// sent. Path placeholders of the form `{name}` are substituted as bindings
/// are registered; any placeholder left unresolved when the request is
/// finalized is a validation error.
#[derive(Debug)]
pub(crate) struct WireRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Vec<(&'static str, String)>,
    pub(crate) headers: Vec<(&'static str, String)>,
    pub(crate) body: WireBody,
}

impl WireRequest {
    pub(crate) fn new(method: Method, path_template: &str) -> Self {
        WireRequest {
            method,
            path: path_template.to_string(),
            query: Vec::new(),
            headers: Vec::new(),
            body: WireBody::None,
        }
    }

    /// Substitute the `{name}` placeholder with a mandatory, non-empty value.
    pub(crate) fn path(&mut self, name: &str, value: &str) -> Result<(), DatabaseError> {
        if value.is_empty() {
            return validation_err!("required path parameter '{}' is empty", name);
        }
        let placeholder = format!("{{{}}}", name);
        if !self.path.contains(&placeholder) {
            return validation_err!("path template has no placeholder '{}'", name);
        }
        // percent-encode the value so ids with reserved characters can't
        // break out of their path segment
        self.path = self.path.replace(&placeholder, &encode_path_segment(value));
        Ok(())
    }

    /// Add a mandatory query parameter.
    pub(crate) fn query<V: WireValue + ?Sized>(
        &mut self,
        name: &'static str,
        value: &V,
    ) -> &mut Self {
        self.query.push((name, value.to_wire()));
        self
    }

    /// Add an optional query parameter, eliding it entirely when absent.
    pub(crate) fn query_opt<V: WireValue + ?Sized>(
        &mut self,
        name: &'static str,
        value: Option<&V>,
    ) -> &mut Self {
        if let Some(v) = value {
            self.query.push((name, v.to_wire()));
        }
        self
    }

    /// Add an optional header, eliding it entirely when absent.
    pub(crate) fn header_opt<V: WireValue + ?Sized>(
        &mut self,
        name: &'static str,
        value: Option<&V>,
    ) -> &mut Self {
        if let Some(v) = value {
            self.headers.push((name, v.to_wire()));
        }
        self
    }

    /// Serialize `value` as the JSON request body.
    pub(crate) fn json_body<T: Serialize>(&mut self, value: &T) -> Result<(), DatabaseError> {
        let buf = serde_json::to_vec(value)
            .map_err(|e| validation_error!("error serializing request body: {}", e))?;
        self.body = WireBody::Json(buf);
        Ok(())
    }

    #[allow(dead_code)]
    pub(crate) fn binary_body(&mut self, value: Bytes) {
        self.body = WireBody::Binary(value);
    }

    /// Final encode-time check: every placeholder must have been bound.
    pub(crate) fn finish(&self) -> Result<(), DatabaseError> {
        if let Some(start) = self.path.find('{') {
            let end = self.path[start..]
                .find('}')
                .map(|e| start + e + 1)
                .unwrap_or(self.path.len());
            return validation_err!(
                "path template placeholder {} was never bound",
                &self.path[start..end]
            );
        }
        Ok(())
    }
}

/// Status code and headers of the underlying HTTP response, attached to
/// every response value so callers can inspect the raw exchange.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
}

/// A fully buffered 2xx response, handed to the operation's `decode()`.
pub(crate) struct ResponseCtx {
    pub(crate) status: u16,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
}

impl ResponseCtx {
    pub(crate) fn raw(&self) -> RawResponse {
        RawResponse {
            status: self.status,
            headers: self.headers.clone(),
        }
    }

    pub(crate) fn header_str(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    }

    pub(crate) fn header_i64(&self, name: &str) -> Option<i64> {
        self.header_str(name).and_then(|s| s.parse::<i64>().ok())
    }

    /// Parse an HTTP-date header (`last-modified`), preserving it as a
    /// fixed-offset timestamp.
    pub(crate) fn header_datetime(&self, name: &str) -> Option<DateTime<FixedOffset>> {
        let s = self.header_str(name)?;
        let st = httpdate::parse_http_date(&s).ok()?;
        Some(DateTime::<Utc>::from(st).fixed_offset())
    }

    /// Decode the body as JSON. A body that does not match the schema is a
    /// decode error carrying the status and a payload snippet; so is an
    /// empty body, since the caller only asks for a body the operation
    /// declares.
    pub(crate) fn json<T: DeserializeOwned>(&self) -> Result<T, DatabaseError> {
        serde_json::from_slice(&self.body).map_err(|e| DatabaseError::Decode {
            status: self.status,
            message: format!(
                "error decoding response body: {}: {}",
                e,
                String::from_utf8_lossy(&self.body[..self.body.len().min(256)])
            ),
        })
    }
}

const TOKEN_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate an opaque retry token.
///
/// The token is attached as the `opc-retry-token` header on mutating
/// idempotent operations and must stay identical across every attempt of
/// one logical call. `thread_rng` is cryptographically seeded, so two
/// distinct logical calls collide with negligible probability.
pub(crate) fn retry_token() -> String {
    let mut rng = rand::thread_rng();
    (0..32)
        .map(|_| TOKEN_CHARS[rng.gen_range(0..TOKEN_CHARS.len())] as char)
        .collect()
}

const HEX_CHARS: &[u8] = b"0123456789ABCDEF";

/// Generate a default `opc-request-id` for request tracing when the caller
/// did not supply one.
pub(crate) fn request_id() -> String {
    let mut rng = rand::thread_rng();
    (0..32)
        .map(|_| HEX_CHARS[rng.gen_range(0..HEX_CHARS.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_derive::Serialize;
    use std::collections::HashSet;

    #[test]
    fn path_substitution() {
        let mut w = WireRequest::new(Method::GET, "/dbSystems/{dbSystemId}/patches/{patchId}");
        w.path("dbSystemId", "ocid1.dbsystem.oc1..aaaa").unwrap();
        w.path("patchId", "ocid1.patch.oc1..bbbb").unwrap();
        w.finish().unwrap();
        assert_eq!(
            w.path,
            "/dbSystems/ocid1.dbsystem.oc1..aaaa/patches/ocid1.patch.oc1..bbbb"
        );
    }

    #[test]
    fn path_value_is_percent_encoded() {
        let mut w = WireRequest::new(Method::GET, "/backups/{backupId}");
        w.path("backupId", "a/b c").unwrap();
        assert_eq!(w.path, "/backups/a%2Fb%20c");
    }

    #[test]
    fn empty_mandatory_path_is_rejected() {
        let mut w = WireRequest::new(Method::GET, "/backups/{backupId}");
        let err = w.path("backupId", "").unwrap_err();
        assert!(matches!(err, DatabaseError::Validation { .. }));
    }

    #[test]
    fn unbound_placeholder_is_rejected() {
        let w = WireRequest::new(Method::GET, "/backups/{backupId}");
        let err = w.finish().unwrap_err();
        match err {
            DatabaseError::Validation { message } => {
                assert!(message.contains("{backupId}"), "message: {}", message)
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn absent_optional_values_never_hit_the_wire() {
        let mut w = WireRequest::new(Method::GET, "/backups");
        w.query("compartmentId", "c1");
        w.query_opt::<String>("page", None);
        w.query_opt("limit", Some(&25i64));
        w.header_opt::<String>("if-match", None);
        w.header_opt("opc-request-id", Some("rid-1"));
        assert_eq!(
            w.query,
            vec![("compartmentId", "c1".to_string()), ("limit", "25".to_string())]
        );
        assert_eq!(w.headers, vec![("opc-request-id", "rid-1".to_string())]);
    }

    #[test]
    fn json_body_round_trips() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Details {
            display_name: String,
        }
        let mut w = WireRequest::new(Method::POST, "/backups");
        w.json_body(&Details {
            display_name: "nightly".to_string(),
        })
        .unwrap();
        match &w.body {
            WireBody::Json(buf) => {
                assert_eq!(buf.as_slice(), br#"{"displayName":"nightly"}"#)
            }
            _ => panic!("expected json body"),
        }
    }

    #[test]
    fn datetime_values_keep_offset() {
        let dt = DateTime::parse_from_rfc3339("2019-03-01T12:30:05.123+05:30").unwrap();
        assert_eq!(dt.to_wire(), "2019-03-01T12:30:05.123+05:30");
    }

    #[test]
    fn response_header_accessors() {
        let mut headers = HeaderMap::new();
        headers.insert("opc-request-id", "req-1".parse().unwrap());
        headers.insert("content-length", "4096".parse().unwrap());
        headers.insert(
            "last-modified",
            "Tue, 15 Oct 2019 19:43:05 GMT".parse().unwrap(),
        );
        let ctx = ResponseCtx {
            status: 200,
            headers,
            body: Bytes::new(),
        };
        assert_eq!(ctx.header_str("opc-request-id").as_deref(), Some("req-1"));
        assert_eq!(ctx.header_i64("content-length"), Some(4096));
        let lm = ctx.header_datetime("last-modified").unwrap();
        assert_eq!(lm.to_rfc3339(), "2019-10-15T19:43:05+00:00");
        assert!(ctx.header_str("etag").is_none());
    }

    #[test]
    fn decode_error_carries_status() {
        let ctx = ResponseCtx {
            status: 200,
            headers: HeaderMap::new(),
            body: Bytes::from_static(b"not json"),
        };
        let err = ctx.json::<serde_json::Value>().unwrap_err();
        assert_eq!(err.status(), Some(200));
        assert!(matches!(err, DatabaseError::Decode { .. }));
    }

    #[test]
    fn retry_tokens_are_distinct_and_opaque() {
        let mut seen = HashSet::new();
        for _ in 0..100 {
            let t = retry_token();
            assert_eq!(t.len(), 32);
            assert!(t.bytes().all(|b| b.is_ascii_alphanumeric()));
            assert!(seen.insert(t));
        }
    }
}
