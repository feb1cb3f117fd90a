//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Retry policies for Database service operations.
//!
//! A [`RetryPolicy`] is a pure policy object: given the attempt index and
//! the classified outcome of the previous attempt it decides whether to try
//! again and after how long. The invoker drives the loop; the policy never
//! performs I/O itself.

use crate::error::DatabaseError;
use rand::Rng;
use reqwest::header::HeaderMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// Decides whether and when a failed attempt of one logical call is retried.
///
/// Every operation defaults to [`RetryPolicy::none()`]: the original service
/// contract leaves retrying to the caller, even on operations that send a
/// retry token (the token makes a caller-supplied policy safe, it does not
/// imply one). Attach a policy to a request's `retry_policy` field to
/// override:
///
/// ```
/// use oracle_database_rust_sdk::RetryPolicy;
///
/// let policy = RetryPolicy::exponential(5);
/// assert_eq!(policy.max_attempts(), 5);
/// ```
#[derive(Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    should_retry: Arc<dyn Fn(u32, &DatabaseError) -> bool + Send + Sync>,
    next_delay: Arc<dyn Fn(u32) -> Duration + Send + Sync>,
}

impl fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_attempts", &self.max_attempts)
            .finish()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::none()
    }
}

impl RetryPolicy {
    /// A policy that never retries: one attempt, whatever the outcome.
    pub fn none() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 1,
            should_retry: Arc::new(|_, _| false),
            next_delay: Arc::new(|_| Duration::ZERO),
        }
    }

    /// Bounded exponential backoff with full jitter over the default
    /// transient-failure classification.
    ///
    /// The delay before attempt `n` is `1s * 2^(n-1)` capped at 30 seconds,
    /// scaled by a random factor in `[0.5, 1.0]` to avoid synchronized
    /// retries from many clients.
    pub fn exponential(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::new(
            max_attempts,
            |_, e| default_retryable(e),
            |attempt| {
                let base = Duration::from_secs(1)
                    .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
                    .min(Duration::from_secs(30));
                let jitter = rand::thread_rng().gen_range(0.5..=1.0);
                base.mul_f64(jitter)
            },
        )
    }

    /// A policy with caller-supplied classification and backoff functions.
    ///
    /// `should_retry` receives the 1-based index of the attempt that just
    /// failed and its classified error; `next_delay` receives the same
    /// index and returns the sleep before the next attempt.
    pub fn new(
        max_attempts: u32,
        should_retry: impl Fn(u32, &DatabaseError) -> bool + Send + Sync + 'static,
        next_delay: impl Fn(u32) -> Duration + Send + Sync + 'static,
    ) -> RetryPolicy {
        RetryPolicy {
            max_attempts: max_attempts.max(1),
            should_retry: Arc::new(should_retry),
            next_delay: Arc::new(next_delay),
        }
    }

    /// Maximum number of transport attempts for one logical call.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Whether the governor allows another attempt after `attempt` (1-based)
    /// failed with `error`, and if so, how long to sleep first.
    ///
    /// A 429 `Retry-After` value takes over when it exceeds the policy's
    /// computed delay.
    pub(crate) fn next_attempt_delay(
        &self,
        attempt: u32,
        error: &DatabaseError,
    ) -> Option<Duration> {
        if attempt >= self.max_attempts {
            return None;
        }
        if !(self.should_retry)(attempt, error) {
            return None;
        }
        let mut delay = (self.next_delay)(attempt);
        if let Some(ra) = error.retry_after() {
            if ra > delay {
                delay = ra;
            }
        }
        Some(delay)
    }
}

// Service error codes the service documents as transient.
const RETRYABLE_SERVICE_CODES: [&str; 2] = ["TooManyRequests", "IncorrectState"];

/// The default outcome classification.
///
/// Retryable: transport failures that never produced a response, HTTP 429,
/// HTTP 5xx other than 501, and the 409 `IncorrectState` transient conflict.
/// Terminal: every other 4xx, validation failures, decode failures, and
/// cancellation.
pub fn default_retryable(error: &DatabaseError) -> bool {
    match error {
        DatabaseError::Transport { status, .. } => match status {
            None => true,
            Some(s) => retryable_status(*s),
        },
        DatabaseError::Service(sf) => {
            if retryable_status(sf.status) {
                return true;
            }
            sf.status == 409 && RETRYABLE_SERVICE_CODES.contains(&sf.code.as_str())
        }
        DatabaseError::Validation { .. }
        | DatabaseError::Decode { .. }
        | DatabaseError::Cancelled { .. } => false,
    }
}

fn retryable_status(status: u16) -> bool {
    status == 429 || (status >= 500 && status != 501)
}

/// Parse a `Retry-After` header: either delay-seconds or an HTTP-date.
pub(crate) fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    let header = headers.get("retry-after")?.to_str().ok()?;

    if let Ok(seconds) = header.trim().parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    if let Ok(date_time) = httpdate::parse_http_date(header) {
        if let Ok(duration) = date_time.duration_since(SystemTime::now()) {
            return Some(duration);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceFailure;

    fn service_error(status: u16, code: &str) -> DatabaseError {
        DatabaseError::Service(ServiceFailure {
            status,
            code: code.to_string(),
            message: "test".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn none_policy_never_retries() {
        let p = RetryPolicy::none();
        assert_eq!(p.max_attempts(), 1);
        assert!(p.next_attempt_delay(1, &service_error(503, "InternalServerError")).is_none());
    }

    #[test]
    fn classification_table() {
        assert!(default_retryable(&service_error(429, "TooManyRequests")));
        assert!(default_retryable(&service_error(500, "InternalServerError")));
        assert!(default_retryable(&service_error(503, "ServiceUnavailable")));
        assert!(default_retryable(&service_error(409, "IncorrectState")));
        assert!(!default_retryable(&service_error(409, "Conflict")));
        assert!(!default_retryable(&service_error(501, "NotImplemented")));
        assert!(!default_retryable(&service_error(404, "NotAuthorizedOrNotFound")));
        assert!(!default_retryable(&service_error(412, "NoEtagMatch")));
        assert!(default_retryable(&DatabaseError::Transport {
            message: "connection reset".to_string(),
            status: None,
        }));
        assert!(!default_retryable(&DatabaseError::Validation {
            message: "missing field".to_string(),
        }));
        assert!(!default_retryable(&DatabaseError::Decode {
            status: 200,
            message: "bad body".to_string(),
        }));
        assert!(!default_retryable(&DatabaseError::Cancelled {
            message: "deadline exceeded".to_string(),
        }));
    }

    #[test]
    fn exponential_delays_are_bounded() {
        let p = RetryPolicy::exponential(6);
        let err = service_error(503, "ServiceUnavailable");
        for attempt in 1..6 {
            let d = p.next_attempt_delay(attempt, &err).unwrap();
            let ceiling = Duration::from_secs(1)
                .saturating_mul(2u32.pow(attempt - 1))
                .min(Duration::from_secs(30));
            assert!(d <= ceiling, "attempt {}: {:?} > {:?}", attempt, d, ceiling);
            assert!(d >= ceiling.mul_f64(0.5), "attempt {}: {:?}", attempt, d);
        }
        // exhausted
        assert!(p.next_attempt_delay(6, &err).is_none());
    }

    #[test]
    fn retry_after_overrides_shorter_computed_delay() {
        let p = RetryPolicy::new(
            3,
            |_, e| default_retryable(e),
            |_| Duration::from_millis(100),
        );
        let mut sf = ServiceFailure {
            status: 429,
            code: "TooManyRequests".to_string(),
            ..Default::default()
        };
        sf.retry_after = Some(Duration::from_secs(7));
        let d = p.next_attempt_delay(1, &DatabaseError::Service(sf.clone())).unwrap();
        assert_eq!(d, Duration::from_secs(7));

        // a Retry-After shorter than the computed delay is ignored
        sf.retry_after = Some(Duration::from_millis(10));
        let d = p.next_attempt_delay(1, &DatabaseError::Service(sf)).unwrap();
        assert_eq!(d, Duration::from_millis(100));
    }

    #[test]
    fn retry_after_seconds_and_http_date_forms() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", "12".parse().unwrap());
        assert_eq!(parse_retry_after(&headers), Some(Duration::from_secs(12)));

        let future = SystemTime::now() + Duration::from_secs(60);
        headers.insert(
            "retry-after",
            httpdate::fmt_http_date(future).parse().unwrap(),
        );
        let parsed = parse_retry_after(&headers).unwrap();
        assert!(parsed <= Duration::from_secs(60));
        assert!(parsed >= Duration::from_secs(55));

        headers.insert("retry-after", "soon".parse().unwrap());
        assert_eq!(parse_retry_after(&headers), None);
    }

    #[test]
    fn terminal_errors_stop_the_exponential_policy() {
        let p = RetryPolicy::exponential(5);
        assert!(p.next_attempt_delay(1, &service_error(404, "NotAuthorizedOrNotFound")).is_none());
    }
}
