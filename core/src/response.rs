//! Response types shared by every operation.
//!
//! Each completed exchange produces a [`DetailedResponse`] (status,
//! headers, raw body). Successful operations additionally carry a typed,
//! decoded result in an [`ApiResponse`]. Responses are immutable once
//! decoded; nothing in this module is mutated after construction.

use bytes::Bytes;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Status, headers, and raw body of a completed HTTP exchange.
///
/// Available on every outcome where an exchange actually completed:
/// attached to successful results, and carried by decode and remote-API
/// errors so the caller can inspect what the service sent.
#[derive(Debug, Clone, Default)]
pub struct DetailedResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// The raw, undecoded response body.
    pub body: Bytes,
}

impl DetailedResponse {
    /// Creates a detailed response from the parts of an exchange.
    pub fn new(status: u16, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Re-decodes the raw body into `T`.
    ///
    /// Useful for inspecting error bodies, or decoding a response into
    /// an alternative shape.
    ///
    /// ## Errors
    ///
    /// Returns the underlying decode failure if the body is not valid
    /// JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Returns the body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// A decoded operation result plus the raw exchange it came from.
///
/// `result` is the authoritative value. `messages` holds informational
/// message groups from the response envelope for enveloped endpoints,
/// and is empty elsewhere. `raw` always carries the exchange's status,
/// headers, and body.
#[derive(Debug)]
pub struct ApiResponse<T> {
    /// The decoded, typed result.
    pub result: T,
    /// Informational message groups from the envelope, when present.
    pub messages: Vec<Vec<String>>,
    /// The raw exchange the result was decoded from.
    pub raw: DetailedResponse,
}

/// The `{success, errors, messages, result}` wrapper the caching
/// endpoints answer with.
///
/// `errors` and `messages` are arrays of string arrays on the wire; the
/// nesting is preserved exactly as documented rather than flattened.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Whether the service considers the call successful.
    #[serde(default)]
    pub success: bool,
    /// Error groups; empty on success.
    #[serde(default)]
    pub errors: Vec<Vec<String>>,
    /// Informational message groups.
    #[serde(default)]
    pub messages: Vec<Vec<String>>,
    /// The wrapped result; absent on failures.
    pub result: Option<T>,
}
