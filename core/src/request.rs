//! Operation request descriptions.
//!
//! An [`OperationRequest`] is a pure value: building one performs no
//! network I/O. Service crates assemble a request from an operation's
//! options, then hand it to the client to invoke.

use std::time::Duration;

use crate::method::RestMethod;

/// An in-memory description of a single service operation call.
///
/// The path is an ordered list of segments: literal segments interleaved
/// with caller-supplied identifier values (segment, param, segment,
/// param, ...). Identifiers are percent-encoded when the URL is
/// assembled, so values like CRNs survive interpolation intact.
///
/// ## Examples
///
/// ```rust
/// use cis_core::{OperationRequest, RestMethod};
///
/// let req = OperationRequest::new(RestMethod::Get, "getPool")
///     .path_segment("instances")
///     .path_param("1407a753-a93f-4bb0-9784-bcfc269ee1b3")
///     .path_segment("pools")
///     .path_param("5365b73c-ce6f-4d6f-ad9f-d9c131b26370");
///
/// assert_eq!(req.operation_id(), "getPool");
/// ```
#[derive(Debug, Clone)]
pub struct OperationRequest {
    method: RestMethod,
    operation_id: &'static str,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    headers: Vec<(String, String)>,
    correlation_id: Option<String>,
    deadline: Option<Duration>,
}

impl OperationRequest {
    /// Creates a request for the named operation.
    ///
    /// The operation id is advertised in the diagnostic header sent with
    /// every request; it never affects routing.
    pub fn new(method: RestMethod, operation_id: &'static str) -> Self {
        Self {
            method,
            operation_id,
            segments: Vec::new(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
            correlation_id: None,
            deadline: None,
        }
    }

    /// Appends a literal path segment.
    pub fn path_segment(mut self, segment: &str) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Appends a caller-supplied path identifier.
    ///
    /// The value is percent-encoded during URL assembly. Callers are
    /// expected to have validated the value non-empty already; the
    /// service clients do this before building a request.
    pub fn path_param(mut self, value: &str) -> Self {
        self.segments.push(value.to_string());
        self
    }

    /// Appends a query parameter.
    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Attaches a JSON body built from an options value.
    ///
    /// Optional fields the caller left unset are omitted by their serde
    /// attributes, so the wire body contains only what was set.
    pub fn json_body<T: serde::Serialize>(mut self, body: &T) -> Self {
        self.body = Some(serde_json::to_value(body).unwrap_or_default());
        self
    }

    /// Adds a caller-supplied header. Later additions win over library
    /// defaults with the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds every entry of a caller-supplied header map.
    pub fn headers<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in entries {
            self.headers.push((name.into(), value.into()));
        }
        self
    }

    /// Sets the `X-Correlation-ID` value sent upstream.
    pub fn correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Sets a deadline for this call only.
    ///
    /// When it elapses the call returns a timeout transport error and
    /// the in-flight exchange is abandoned.
    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// The HTTP method of this request.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// The operation id advertised in diagnostic headers.
    pub fn operation_id(&self) -> &'static str {
        self.operation_id
    }

    pub(crate) fn segments(&self) -> &[String] {
        &self.segments
    }

    pub(crate) fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub(crate) fn body_value(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    pub(crate) fn header_entries(&self) -> &[(String, String)] {
        &self.headers
    }

    pub(crate) fn correlation(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub(crate) fn deadline_value(&self) -> Option<Duration> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_interleave_in_order() {
        let req = OperationRequest::new(RestMethod::Put, "purgeAll")
            .path_segment("v1")
            .path_param("crn:v1:bluemix")
            .path_segment("zones")
            .path_param("zone-1")
            .path_segment("purge_cache")
            .path_segment("purge_all");
        assert_eq!(
            req.segments(),
            &[
                "v1",
                "crn:v1:bluemix",
                "zones",
                "zone-1",
                "purge_cache",
                "purge_all"
            ]
        );
    }

    #[test]
    fn test_body_omits_unset_fields() {
        #[derive(serde::Serialize)]
        struct Body<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            value: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            other: Option<i64>,
        }

        let req = OperationRequest::new(RestMethod::Patch, "updateSetting").json_body(&Body {
            value: Some("aggressive"),
            other: None,
        });
        assert_eq!(
            req.body_value().unwrap(),
            &serde_json::json!({"value": "aggressive"})
        );
    }

    #[test]
    fn test_query_and_headers_accumulate() {
        let req = OperationRequest::new(RestMethod::Get, "listPools")
            .query("offset", 1)
            .query("limit", 20)
            .header("X-Custom", "a")
            .headers([("X-Other".to_string(), "b".to_string())]);
        assert_eq!(req.query_pairs().len(), 2);
        assert_eq!(req.header_entries().len(), 2);
    }
}
