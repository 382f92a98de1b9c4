//! Error types for service operations.
//!
//! Failures are grouped into the categories a caller can meaningfully
//! react to: local validation problems raised before any I/O, transport
//! failures, response-decoding failures, and structured errors returned
//! by the remote service. [`Error`] aggregates all of them so operation
//! signatures stay uniform while `match` still reaches each category.

mod api_failure;
mod auth_error;
mod decode_error;
mod transport_error;
mod validation_error;

pub use api_failure::ApiFailure;
pub use auth_error::AuthError;
pub use decode_error::DecodeError;
pub use transport_error::TransportError;
pub use validation_error::{not_empty, ValidationError};

use thiserror::Error;

use crate::response::DetailedResponse;

/// Top-level error type for all service operations.
///
/// Exactly one category applies to any failed call:
///
/// - [`Error::Validation`] - a required option field was missing or
///   empty; raised before any network I/O.
/// - [`Error::Auth`] - credentials could not be resolved or applied.
/// - [`Error::Transport`] - the exchange itself failed (missing base
///   URL, connection failure, deadline exceeded).
/// - [`Error::Decode`] - the exchange completed but the body could not
///   be decoded into the expected shape; the raw response rides along.
/// - [`Error::Api`] - the service answered with a non-success status
///   and (when parseable) a structured error envelope.
#[derive(Debug, Error)]
pub enum Error {
    /// A required option field is missing or empty.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Credential resolution or encoding failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The HTTP exchange failed before a response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The service reported a failure.
    #[error(transparent)]
    Api(#[from] ApiFailure),
}

impl Error {
    /// Returns the HTTP status code, when an exchange completed.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Decode(e) => Some(e.response().status),
            Self::Api(e) => Some(e.status),
            _ => None,
        }
    }

    /// Returns the raw response, when an exchange completed.
    ///
    /// Decode and remote-API failures keep the status, headers, and raw
    /// body of the exchange so callers can inspect what actually came
    /// back.
    pub fn detail(&self) -> Option<&DetailedResponse> {
        match self {
            Self::Decode(e) => Some(e.response()),
            Self::Api(e) => Some(&e.response),
            _ => None,
        }
    }

    /// Returns `true` if retrying the same call could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_retryable(),
            Self::Api(e) => e.is_retryable(),
            _ => false,
        }
    }
}
