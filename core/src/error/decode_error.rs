//! Response-decoding errors.

use thiserror::Error;

use crate::response::DetailedResponse;

/// The HTTP exchange completed but the body could not be decoded.
///
/// Distinct from transport failures: the status, headers, and raw body
/// of the exchange are available on the error, so callers can inspect
/// what the service actually sent.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body was not valid JSON, or a field's JSON type did not
    /// match the expected structure field type.
    #[error("failed to decode response body: {source}")]
    Json {
        /// The underlying decode failure, naming the offending field.
        #[source]
        source: serde_json::Error,
        /// The raw response the decode was attempted against.
        response: DetailedResponse,
    },

    /// A success envelope arrived without its `result` value.
    #[error("response envelope is missing its `result` value")]
    MissingResult {
        /// The raw response the envelope was decoded from.
        response: DetailedResponse,
    },
}

impl DecodeError {
    /// Returns the raw response of the failed decode.
    pub fn response(&self) -> &DetailedResponse {
        match self {
            Self::Json { response, .. } | Self::MissingResult { response } => response,
        }
    }
}
