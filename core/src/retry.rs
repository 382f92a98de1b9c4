//! Transport-level retry policy.
//!
//! Retries are opt-in, configured once on the client, and applied
//! uniformly to every operation with no per-call override. Only
//! idempotent verbs are retried, and only on failures where a repeat
//! attempt could plausibly succeed (connect failures, timeouts, HTTP
//! 429 and 5xx).

use std::time::Duration;

use crate::method::RestMethod;

/// Bounded retry configuration for idempotent requests.
///
/// ## Examples
///
/// ```rust
/// use std::time::Duration;
/// use cis_core::RetryPolicy;
///
/// let policy = RetryPolicy::new(3, Duration::from_millis(500));
/// assert_eq!(policy.max_retries, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts after the initial call.
    pub max_retries: u32,
    /// Fixed sleep between attempts.
    pub interval: Duration,
}

impl RetryPolicy {
    /// Creates a policy with the given bound and inter-attempt interval.
    pub fn new(max_retries: u32, interval: Duration) -> Self {
        Self {
            max_retries,
            interval,
        }
    }

    /// Decides whether a response status warrants another attempt.
    pub(crate) fn should_retry_status(
        &self,
        method: RestMethod,
        status: u16,
        attempt: u32,
    ) -> bool {
        method.is_idempotent()
            && attempt < self.max_retries
            && (status == 429 || status >= 500)
    }

    /// Decides whether a transport failure warrants another attempt.
    pub(crate) fn should_retry_error(
        &self,
        method: RestMethod,
        retryable: bool,
        attempt: u32,
    ) -> bool {
        method.is_idempotent() && attempt < self.max_retries && retryable
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}
