//! Transport-level failures.

use thiserror::Error;

/// Errors raised while performing the HTTP exchange.
///
/// These cover everything that can go wrong before a complete response
/// is in hand: a missing or malformed service URL, connection failures,
/// and exceeded deadlines.
#[derive(Debug, Error)]
pub enum TransportError {
    /// No service URL was configured on the client.
    #[error("no service URL configured; set a base URL before invoking operations")]
    MissingServiceUrl,

    /// The configured service URL could not be parsed or used as a base.
    #[error("invalid service URL `{url}`: {reason}")]
    InvalidUrl {
        /// The offending URL string.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// A caller-supplied header name could not be encoded.
    #[error("invalid header name `{name}`")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },

    /// The exchange did not complete within the deadline.
    #[error("request timed out after {duration_ms}ms")]
    Timeout {
        /// The deadline that elapsed, in milliseconds.
        duration_ms: u64,
    },

    /// The HTTP request failed in flight.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl TransportError {
    /// Returns `true` if retrying could plausibly succeed.
    ///
    /// Configuration problems (missing/invalid URL, bad header) are
    /// deterministic and never retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            Self::MissingServiceUrl | Self::InvalidUrl { .. } | Self::InvalidHeader { .. } => {
                false
            }
        }
    }
}
