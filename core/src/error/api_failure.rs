//! Structured errors reported by the remote service.

use std::fmt;

use crate::response::DetailedResponse;

/// The service completed the exchange but reported a failure.
///
/// Raised for non-2xx statuses, and for enveloped responses whose
/// `success` flag is false. When the body parses as an error envelope
/// its `errors` and `messages` arrays are preserved verbatim (as arrays
/// of string arrays, the shape the wire uses); otherwise a snippet of
/// the raw body stands in as the summary.
#[derive(Debug)]
pub struct ApiFailure {
    /// HTTP status code of the exchange.
    pub status: u16,
    /// Error groups from the envelope, when the body parsed.
    pub errors: Vec<Vec<String>>,
    /// Message groups from the envelope, when the body parsed.
    pub messages: Vec<Vec<String>>,
    /// The raw response the failure was decoded from.
    pub response: DetailedResponse,
}

impl ApiFailure {
    /// Returns the first error string reported by the service, if any.
    pub fn first_error(&self) -> Option<&str> {
        self.errors
            .iter()
            .flat_map(|group| group.iter())
            .map(String::as_str)
            .next()
    }

    /// Returns `true` if retrying could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        self.status == 429 || self.status >= 500
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "service returned HTTP {}", self.status)?;
        if let Some(first) = self.first_error() {
            write!(f, ": {first}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(status: u16, errors: Vec<Vec<String>>) -> ApiFailure {
        ApiFailure {
            status,
            errors,
            messages: Vec::new(),
            response: DetailedResponse::new(status, Default::default(), Default::default()),
        }
    }

    #[test]
    fn test_first_error_skips_empty_groups() {
        let err = failure(
            400,
            vec![vec![], vec!["zone not found".to_string()]],
        );
        assert_eq!(err.first_error(), Some("zone not found"));
    }

    #[test]
    fn test_display_includes_status() {
        let err = failure(404, vec![vec!["missing".to_string()]]);
        assert_eq!(err.to_string(), "service returned HTTP 404: missing");
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(failure(429, vec![]).is_retryable());
        assert!(failure(503, vec![]).is_retryable());
        assert!(!failure(404, vec![]).is_retryable());
    }
}
