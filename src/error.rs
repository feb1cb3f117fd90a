//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use std::time::Duration;

include!(concat!(env!("OUT_DIR"), "/ua.rs"));

pub(crate) fn sdk_version() -> &'static str {
    SDK_VERSION
}

pub(crate) fn user_agent() -> &'static str {
    USER_AGENT
}

/// Enumeration of all possible errors returned by this library.
///
/// The variants partition failures by where in the request pipeline they
/// occurred:
/// - [`Validation`](DatabaseError::Validation): the request could not be
///   encoded; nothing was sent on the wire.
/// - [`Transport`](DatabaseError::Transport): the request never produced a
///   parseable response (network, TLS, protocol, or body-read failure), or
///   the service returned a non-2xx status with an unparseable body.
/// - [`Service`](DatabaseError::Service): a well-formed non-2xx response
///   from the Database service.
/// - [`Decode`](DatabaseError::Decode): a 2xx response whose body did not
///   match the expected schema.
/// - [`Cancelled`](DatabaseError::Cancelled): the per-call deadline expired
///   before the call completed.
#[derive(Debug, Clone)]
pub enum DatabaseError {
    /// A required field was missing, a URL template placeholder had no
    /// matching value, or a body could not be serialized. Raised before any
    /// I/O takes place.
    Validation { message: String },
    /// The request never produced a parseable response. When the failure
    /// happened after response headers arrived, `status` carries the HTTP
    /// status code.
    Transport {
        message: String,
        status: Option<u16>,
    },
    /// A well-formed error response from the service.
    Service(ServiceFailure),
    /// A 2xx response whose body did not decode into the expected type.
    Decode { status: u16, message: String },
    /// The per-call deadline expired, either mid-transport or during a
    /// backoff sleep between attempts.
    Cancelled { message: String },
}

/// The payload of a well-formed non-2xx response from the Database service.
#[derive(Debug, Clone, Default)]
pub struct ServiceFailure {
    /// HTTP status code of the response.
    pub status: u16,
    /// Service-defined error code string (e.g. `NotAuthorizedOrNotFound`,
    /// `IncorrectState`). Callers may switch on known codes without parsing
    /// messages.
    pub code: String,
    /// Human-readable message from the service.
    pub message: String,
    /// Unique Oracle-assigned identifier for the request. Quote this when
    /// contacting Oracle about a particular request.
    pub opc_request_id: Option<String>,
    /// The unmodified response body, for callers that need fields beyond
    /// `code` and `message`.
    pub raw_body: String,
    // Parsed Retry-After value from a 429 response, consulted by the
    // retry governor when computing the next delay.
    pub(crate) retry_after: Option<Duration>,
}

impl std::error::Error for DatabaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl std::fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DatabaseError::Validation { message } => {
                write!(f, "validation error: {}", message)
            }
            DatabaseError::Transport { message, status } => match status {
                Some(s) => write!(f, "transport error (http status {}): {}", s, message),
                None => write!(f, "transport error: {}", message),
            },
            DatabaseError::Service(sf) => {
                write!(
                    f,
                    "service error: status={} code={} message=\"{}\" opc-request-id={}",
                    sf.status,
                    sf.code,
                    sf.message,
                    sf.opc_request_id.as_deref().unwrap_or("<none>")
                )
            }
            DatabaseError::Decode { status, message } => {
                write!(f, "decode error (http status {}): {}", status, message)
            }
            DatabaseError::Cancelled { message } => {
                write!(f, "cancelled: {}", message)
            }
        }
    }
}

impl DatabaseError {
    /// The HTTP status code of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            DatabaseError::Transport { status, .. } => *status,
            DatabaseError::Service(sf) => Some(sf.status),
            DatabaseError::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The service error code, when this is a [`DatabaseError::Service`].
    pub fn service_code(&self) -> Option<&str> {
        match self {
            DatabaseError::Service(sf) => Some(sf.code.as_str()),
            _ => None,
        }
    }

    /// The `opc-request-id` echoed by the service, when available.
    pub fn opc_request_id(&self) -> Option<&str> {
        match self {
            DatabaseError::Service(sf) => sf.opc_request_id.as_deref(),
            _ => None,
        }
    }

    pub(crate) fn retry_after(&self) -> Option<Duration> {
        match self {
            DatabaseError::Service(sf) => sf.retry_after,
            _ => None,
        }
    }
}

macro_rules! validation_error {
    ($($t:tt)*) => {{
        let m = format!($($t)*);
        crate::error::DatabaseError::Validation {
            message: format!("{} ({})", m, crate::error::sdk_version()),
        }
    }};
}

pub(crate) use validation_error;

macro_rules! validation_err {
    ($($t:tt)*) => {{
        Err(crate::error::validation_error!($($t)*))
    }};
}

pub(crate) use validation_err;

impl From<reqwest::Error> for DatabaseError {
    fn from(e: reqwest::Error) -> Self {
        DatabaseError::Transport {
            message: format!("reqwest error: {} ({})", e, crate::error::sdk_version()),
            status: e.status().map(|s| s.as_u16()),
        }
    }
}

impl From<reqwest::header::InvalidHeaderValue> for DatabaseError {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Self {
        validation_error!("invalid header value: {}", e)
    }
}

impl From<url::ParseError> for DatabaseError {
    fn from(e: url::ParseError) -> Self {
        validation_error!("error parsing url: {}", e)
    }
}

impl From<chrono::ParseError> for DatabaseError {
    fn from(e: chrono::ParseError) -> Self {
        validation_error!("invalid datetime value: {}", e)
    }
}

impl From<Box<dyn std::error::Error>> for DatabaseError {
    fn from(e: Box<dyn std::error::Error>) -> Self {
        validation_error!("{}", e)
    }
}
