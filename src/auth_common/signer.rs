//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! OCI HTTP signature (draft-cavage) request signing.
//!
//! The signer mutates a prepared request to carry `date`, `host`, the body
//! digest headers, and the `authorization` signature header. It runs once
//! per attempt, after the body bytes are final, because the date and digest
//! must cover exactly what is sent.

use crate::auth_common::authentication_provider::AuthenticationProvider;
use crate::auth_common::http_signature;
use crate::error::{validation_error, DatabaseError};
use base64ct::{Base64, Encoding};
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;
use sha2::{Digest, Sha256};
use tracing::trace;
use url::Url;

static DATE_HEADER: &str = "date";
static REQUEST_TARGET_HEADER: &str = "(request-target)";
static HOST_HEADER: &str = "host";
static CONTENT_TYPE_HEADER: &str = "content-type";
static CONTENT_LENGTH_HEADER: &str = "content-length";
static X_CONTENT_SHA256: &str = "x-content-sha256";
static AUTHORIZATION_HEADER: &str = "authorization";

/// Sign one prepared request in place.
///
/// `content_type` is the value the transport will send for bodied methods
/// (`application/json` for JSON bodies, `application/octet-stream` for
/// binary uploads). GET/DELETE/HEAD requests sign only the generic headers;
/// PUT/POST/PATCH additionally sign the body digest headers.
pub(crate) fn sign_request(
    headers: &mut HeaderMap,
    method: &Method,
    url: &Url,
    body: &[u8],
    content_type: &str,
    provider: &dyn AuthenticationProvider,
) -> Result<(), DatabaseError> {
    let mut headers_to_sign = vec![DATE_HEADER, REQUEST_TARGET_HEADER, HOST_HEADER];

    if !headers.contains_key(DATE_HEADER) {
        let date_str = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();
        headers.insert(DATE_HEADER, date_str.parse()?);
    }
    if !headers.contains_key(HOST_HEADER) {
        let host = url
            .host_str()
            .ok_or_else(|| validation_error!("no host in url {}", url))?;
        headers.insert(HOST_HEADER, host.parse()?);
    }

    let body_methods = [Method::PUT, Method::POST, Method::PATCH];
    if body_methods.contains(method) {
        if !headers.contains_key(CONTENT_TYPE_HEADER) {
            headers.insert(CONTENT_TYPE_HEADER, content_type.parse()?);
        }
        if !headers.contains_key(CONTENT_LENGTH_HEADER) {
            headers.insert(CONTENT_LENGTH_HEADER, HeaderValue::from(body.len()));
        }
        if !headers.contains_key(X_CONTENT_SHA256) {
            headers.insert(X_CONTENT_SHA256, body_sha256(body).parse()?);
        }
        headers_to_sign.push(CONTENT_TYPE_HEADER);
        headers_to_sign.push(CONTENT_LENGTH_HEADER);
        headers_to_sign.push(X_CONTENT_SHA256);
    }

    let string_to_sign = string_to_sign(url, method, headers, &headers_to_sign)?;
    let key = provider.private_key()?;
    let signature = Base64::encode_string(&http_signature::sign(&key, string_to_sign.as_bytes())?);
    let authorization_header = format!(
        r###"Signature version="1",keyId="{}",algorithm="rsa-sha256",headers="{}",signature="{}""###,
        provider.key_id(),
        headers_to_sign.join(" "),
        signature
    );

    trace!("inserting auth header: {}", authorization_header);
    headers.insert(AUTHORIZATION_HEADER, authorization_header.parse()?);
    Ok(())
}

fn body_sha256(body: &[u8]) -> String {
    let mut sha256 = Sha256::new();
    sha256.update(body);
    Base64::encode_string(&sha256.finalize())
}

fn string_to_sign(
    url: &Url,
    method: &Method,
    headers: &HeaderMap,
    headers_to_sign: &[&str],
) -> Result<String, DatabaseError> {
    let mut result_parts = Vec::new();
    for header in headers_to_sign {
        let header_val = if *header == REQUEST_TARGET_HEADER {
            let path_string = match url.query() {
                Some(q) => format!("{}?{}", url.path(), q),
                None => url.path().to_string(),
            };
            format!("{} {}", method.as_str().to_lowercase(), path_string)
        } else {
            let v = headers
                .get(*header)
                .ok_or_else(|| validation_error!("header '{}' missing while signing", header))?;
            v.to_str()
                .map_err(|e| validation_error!("header '{}' is not valid ascii: {}", header, e))?
                .to_string()
        };
        result_parts.push(format!("{}: {}", header, header_val));
    }
    Ok(result_parts.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth_common::private_key_supplier::PrivateKeySupplier;
    use crate::auth_common::simple_authentication_provider::SimpleAuthenticationProvider;
    use rsa::pkcs8::EncodePrivateKey;
    use rsa::RsaPrivateKey;

    fn test_provider() -> SimpleAuthenticationProvider {
        let mut rng = rand::thread_rng();
        let key = RsaPrivateKey::new(&mut rng, 2048).unwrap();
        let pem = key.to_pkcs8_pem(rsa::pkcs8::LineEnding::LF).unwrap();
        SimpleAuthenticationProvider::new(
            "ocid1.tenancy.oc1..aaaa".to_string(),
            "ocid1.user.oc1..bbbb".to_string(),
            "11:22:33:44".to_string(),
            "us-phoenix-1".to_string(),
            Box::new(PrivateKeySupplier::new(pem.to_string())),
        )
    }

    #[test]
    fn string_to_sign_includes_query_in_request_target() {
        let url = Url::parse(
            "https://database.us-phoenix-1.oraclecloud.com/20160918/backups?compartmentId=c1&limit=5",
        )
        .unwrap();
        let mut headers = HeaderMap::new();
        headers.insert("date", "Mon, 01 Apr 2019 12:00:00 GMT".parse().unwrap());
        headers.insert("host", "database.us-phoenix-1.oraclecloud.com".parse().unwrap());
        let s = string_to_sign(
            &url,
            &Method::GET,
            &headers,
            &[DATE_HEADER, REQUEST_TARGET_HEADER, HOST_HEADER],
        )
        .unwrap();
        assert_eq!(
            s,
            "date: Mon, 01 Apr 2019 12:00:00 GMT\n\
             (request-target): get /20160918/backups?compartmentId=c1&limit=5\n\
             host: database.us-phoenix-1.oraclecloud.com"
        );
    }

    #[test]
    fn get_signs_generic_headers_only() {
        let url =
            Url::parse("https://database.us-phoenix-1.oraclecloud.com/20160918/backups/b1").unwrap();
        let mut headers = HeaderMap::new();
        sign_request(
            &mut headers,
            &Method::GET,
            &url,
            b"",
            "application/json",
            &test_provider(),
        )
        .unwrap();
        let auth = headers.get("authorization").unwrap().to_str().unwrap();
        assert!(auth.contains(r#"headers="date (request-target) host""#));
        assert!(auth
            .contains(r#"keyId="ocid1.tenancy.oc1..aaaa/ocid1.user.oc1..bbbb/11:22:33:44""#));
        assert!(headers.get("x-content-sha256").is_none());
    }

    #[test]
    fn post_signs_body_digest_headers() {
        let url =
            Url::parse("https://database.us-phoenix-1.oraclecloud.com/20160918/backups").unwrap();
        let mut headers = HeaderMap::new();
        sign_request(
            &mut headers,
            &Method::POST,
            &url,
            br#"{"displayName":"b"}"#,
            "application/json",
            &test_provider(),
        )
        .unwrap();
        let auth = headers.get("authorization").unwrap().to_str().unwrap();
        assert!(auth.contains(
            r#"headers="date (request-target) host content-type content-length x-content-sha256""#
        ));
        assert_eq!(headers.get("content-length").unwrap(), "19");
        assert_eq!(headers.get("content-type").unwrap(), "application/json");
        assert!(headers.get("x-content-sha256").is_some());
    }
}
