//! The shared operation pipeline.
//!
//! [`ServiceClient`] owns everything every operation has in common: URL
//! assembly from path segments and identifiers, header composition,
//! the HTTP exchange itself (with optional bounded retries), and
//! decoding of the JSON response into a typed result. Service crates
//! implement each API operation as a thin call into one of the three
//! `invoke` variants.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::{instrument, Span};
use url::Url;

use crate::auth::Authenticator;
use crate::error::{ApiFailure, DecodeError, Error, TransportError};
use crate::request::OperationRequest;
use crate::response::{ApiResponse, DetailedResponse, Envelope};
use crate::retry::RetryPolicy;

/// Default request timeout when no per-call deadline is set.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
const ANALYTICS_HEADER: &str = "x-ibmcloud-sdk-analytics";
const CORRELATION_HEADER: &str = "x-correlation-id";

/// Builder for configuring a [`ServiceClient`].
///
/// All configuration is fixed once `build` is called; a built client is
/// safe to share across tasks.
#[derive(Debug)]
pub struct ServiceClientBuilder {
    service_name: String,
    service_version: String,
    base_url: Option<String>,
    authenticator: Authenticator,
    default_headers: Vec<(String, String)>,
    timeout: Duration,
    retry: Option<RetryPolicy>,
}

impl ServiceClientBuilder {
    fn new(service_name: impl Into<String>, service_version: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: service_version.into(),
            base_url: None,
            authenticator: Authenticator::NoAuth,
            default_headers: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            retry: None,
        }
    }

    /// Sets the service base URL.
    ///
    /// An empty value is treated as unset; invoking an operation on a
    /// client with no base URL yields a transport error naming the
    /// missing service URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the authenticator applied to every request.
    pub fn authenticator(mut self, authenticator: Authenticator) -> Self {
        self.authenticator = authenticator;
        self
    }

    /// Adds a header sent on every request.
    ///
    /// Per-request headers with the same name take precedence.
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Sets the default timeout applied when a call has no deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enables bounded retries for idempotent requests.
    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = Some(policy);
        self
    }

    /// Fills the base URL and authenticator from `<PREFIX>_*`
    /// environment variables (`<PREFIX>_URL`, `<PREFIX>_AUTH_TYPE`,
    /// `<PREFIX>_APIKEY`, `<PREFIX>_USERNAME`, `<PREFIX>_PASSWORD`).
    ///
    /// ## Errors
    ///
    /// Returns an error when the credential variables are inconsistent
    /// with the selected auth type.
    pub fn from_env(mut self, prefix: &str) -> Result<Self, Error> {
        if let Ok(url) = std::env::var(format!("{prefix}_URL")) {
            self.base_url = Some(url);
        }
        self.authenticator = Authenticator::from_env(prefix)?;
        Ok(self)
    }

    /// Builds the client.
    ///
    /// ## Errors
    ///
    /// Returns a transport error if the base URL does not parse, or if
    /// the underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<ServiceClient, Error> {
        let base_url = match self.base_url.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                let url = Url::parse(raw).map_err(|e| TransportError::InvalidUrl {
                    url: raw.to_string(),
                    reason: e.to_string(),
                })?;
                if url.cannot_be_a_base() {
                    return Err(TransportError::InvalidUrl {
                        url: raw.to_string(),
                        reason: "cannot be used as a base URL".to_string(),
                    }
                    .into());
                }
                Some(url)
            }
        };

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(TransportError::Request)?;

        Ok(ServiceClient {
            http,
            base_url,
            authenticator: self.authenticator,
            service_name: self.service_name,
            service_version: self.service_version,
            default_headers: self.default_headers,
            timeout: self.timeout,
            retry: self.retry,
        })
    }
}

/// Shared HTTP pipeline for one service.
///
/// Holds the configuration every operation uses: base URL,
/// authenticator, diagnostic identity, default headers, timeout, and
/// the optional retry policy. The client is immutable after build and
/// cheap to share; concurrency is entirely the caller's choice.
///
/// ## Examples
///
/// ```rust,ignore
/// use cis_core::{ServiceClient, Authenticator};
///
/// let client = ServiceClient::builder("caching", "v1")
///     .base_url("https://api.cis.cloud.ibm.com")
///     .authenticator(Authenticator::BearerToken { token: api_key })
///     .build()?;
/// ```
#[derive(Debug)]
pub struct ServiceClient {
    http: reqwest::Client,
    base_url: Option<Url>,
    authenticator: Authenticator,
    service_name: String,
    service_version: String,
    default_headers: Vec<(String, String)>,
    timeout: Duration,
    retry: Option<RetryPolicy>,
}

impl ServiceClient {
    /// Creates a builder for a service identified by name and version.
    ///
    /// The identity is advertised in the diagnostic header on every
    /// request; it never affects routing.
    pub fn builder(
        service_name: impl Into<String>,
        service_version: impl Into<String>,
    ) -> ServiceClientBuilder {
        ServiceClientBuilder::new(service_name, service_version)
    }

    /// The configured base URL, if any.
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Performs a request and decodes the top-level JSON body into `T`.
    ///
    /// Used by list/detail endpoints that answer with the resource
    /// itself rather than a `{success, ..., result}` envelope.
    pub async fn invoke<T: DeserializeOwned>(
        &self,
        request: OperationRequest,
    ) -> Result<ApiResponse<T>, Error> {
        let detail = self.exchange(&request).await?;
        match serde_json::from_slice::<T>(&detail.body) {
            Ok(result) => Ok(ApiResponse {
                result,
                messages: Vec::new(),
                raw: detail,
            }),
            Err(source) => Err(DecodeError::Json {
                source,
                response: detail,
            }
            .into()),
        }
    }

    /// Performs a request and unwraps an enveloped JSON body.
    ///
    /// The body must decode as `{success, errors, messages, result}`
    /// with `result` holding a `T`. A decoded envelope with
    /// `success == false` becomes a remote-API error carrying the
    /// envelope's error groups; a success envelope without a `result`
    /// is a decode error.
    pub async fn invoke_enveloped<T: DeserializeOwned>(
        &self,
        request: OperationRequest,
    ) -> Result<ApiResponse<T>, Error> {
        let detail = self.exchange(&request).await?;
        let envelope: Envelope<T> = match serde_json::from_slice(&detail.body) {
            Ok(envelope) => envelope,
            Err(source) => {
                return Err(DecodeError::Json {
                    source,
                    response: detail,
                }
                .into())
            }
        };
        if !envelope.success {
            return Err(ApiFailure {
                status: detail.status,
                errors: envelope.errors,
                messages: envelope.messages,
                response: detail,
            }
            .into());
        }
        match envelope.result {
            Some(result) => Ok(ApiResponse {
                result,
                messages: envelope.messages,
                raw: detail,
            }),
            None => Err(DecodeError::MissingResult { response: detail }.into()),
        }
    }

    /// Performs a request without decoding a body.
    ///
    /// Used by DELETE endpoints, which answer with no meaningful body;
    /// only the detailed response is returned.
    pub async fn invoke_unit(&self, request: OperationRequest) -> Result<DetailedResponse, Error> {
        self.exchange(&request).await
    }

    /// Performs the HTTP exchange for a request, retrying idempotent
    /// calls per the configured policy, and converts non-2xx statuses
    /// into remote-API errors.
    #[instrument(
        name = "service_request",
        skip(self, request),
        fields(
            http.method = %request.method(),
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            operation = request.operation_id(),
        )
    )]
    async fn exchange(&self, request: &OperationRequest) -> Result<DetailedResponse, Error> {
        let url = self.compose_url(request)?;
        Span::current().record("http.url", url.as_str());
        let headers = self.compose_headers(request)?;

        let mut attempt: u32 = 0;
        loop {
            let outcome = self.send_once(request, url.clone(), headers.clone()).await;

            if let Some(policy) = self.retry {
                let again = match &outcome {
                    Ok(detail) if !detail.is_success() => {
                        policy.should_retry_status(request.method(), detail.status, attempt)
                    }
                    Err(err) => {
                        policy.should_retry_error(request.method(), err.is_retryable(), attempt)
                    }
                    Ok(_) => false,
                };
                if again {
                    attempt += 1;
                    tracing::debug!(attempt, "retrying request");
                    tokio::time::sleep(policy.interval).await;
                    continue;
                }
            }

            let detail = outcome?;
            Span::current().record("http.status_code", detail.status);
            if detail.is_success() {
                return Ok(detail);
            }
            return Err(self.api_failure_from(detail).into());
        }
    }

    async fn send_once(
        &self,
        request: &OperationRequest,
        url: Url,
        headers: HeaderMap,
    ) -> Result<DetailedResponse, Error> {
        let timeout = request.deadline_value().unwrap_or(self.timeout);

        let mut builder = self
            .http
            .request(request.method().to_reqwest(), url)
            .headers(headers)
            .timeout(timeout);
        if let Some(body) = request.body_value() {
            builder = builder.json(body);
        }
        builder = self.authenticator.apply(builder)?;

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout {
                    duration_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                }
            } else {
                TransportError::Request(e)
            }
        })?;

        let status = response.status().as_u16();
        let response_headers = response.headers().clone();
        let body = response.bytes().await.map_err(TransportError::Request)?;
        Ok(DetailedResponse::new(status, response_headers, body))
    }

    /// Assembles the full URL: base URL, then literal segments and
    /// percent-encoded identifiers in request order, then query pairs.
    fn compose_url(&self, request: &OperationRequest) -> Result<Url, TransportError> {
        let base = self
            .base_url
            .as_ref()
            .ok_or(TransportError::MissingServiceUrl)?;
        let mut url = base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            segments.extend(request.segments().iter().map(String::as_str));
        }
        if !request.query_pairs().is_empty() {
            url.query_pairs_mut().extend_pairs(
                request
                    .query_pairs()
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str())),
            );
        }
        Ok(url)
    }

    /// Composes headers in order of increasing precedence: diagnostic
    /// identity, content negotiation, client defaults, correlation id,
    /// per-request caller headers.
    fn compose_headers(&self, request: &OperationRequest) -> Result<HeaderMap, TransportError> {
        let mut headers = HeaderMap::new();

        let agent = format!("{}-rust-sdk/{}", self.service_name, SDK_VERSION);
        if let Ok(value) = HeaderValue::from_str(&agent) {
            headers.insert(USER_AGENT, value);
        }
        let analytics = format!(
            "service_name={};service_version={};operation_id={}",
            self.service_name,
            self.service_version,
            request.operation_id()
        );
        if let Ok(value) = HeaderValue::from_str(&analytics) {
            headers.insert(HeaderName::from_static(ANALYTICS_HEADER), value);
        }

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if request.body_value().is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        for (name, value) in self
            .default_headers
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
        {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                TransportError::InvalidHeader {
                    name: name.to_string(),
                }
            })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|_| TransportError::InvalidHeader {
                    name: name.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        if let Some(id) = request.correlation() {
            let value = HeaderValue::from_str(id).map_err(|_| TransportError::InvalidHeader {
                name: CORRELATION_HEADER.to_string(),
            })?;
            headers.insert(HeaderName::from_static(CORRELATION_HEADER), value);
        }

        for (name, value) in request
            .header_entries()
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
        {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                TransportError::InvalidHeader {
                    name: name.to_string(),
                }
            })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|_| TransportError::InvalidHeader {
                    name: name.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }

    /// Builds a remote-API error from a non-success exchange, keeping
    /// the envelope's error and message groups when the body parses.
    fn api_failure_from(&self, detail: DetailedResponse) -> ApiFailure {
        let (errors, messages) = match detail.json::<Envelope<serde_json::Value>>() {
            Ok(envelope) => (envelope.errors, envelope.messages),
            Err(_) => (Vec::new(), Vec::new()),
        };
        ApiFailure {
            status: detail.status,
            errors,
            messages,
            response: detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::RestMethod;

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Widget {
        id: String,
        size: i64,
    }

    async fn client_for(server: &MockServer) -> ServiceClient {
        ServiceClient::builder("widgets", "v1")
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_invoke_decodes_top_level_object() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/widgets/w1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Widget {
                id: "w1".to_string(),
                size: 3,
            }))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let request = OperationRequest::new(RestMethod::Get, "getWidget")
            .path_segment("widgets")
            .path_param("w1");
        let response: ApiResponse<Widget> = client.invoke(request).await.unwrap();
        assert_eq!(response.result.id, "w1");
        assert_eq!(response.raw.status, 200);
        assert!(response.messages.is_empty());
    }

    #[tokio::test]
    async fn test_invoke_enveloped_unwraps_result_and_messages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/widgets/w2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "errors": [],
                "messages": [["Messages"]],
                "result": {"id": "w2", "size": 9}
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let request = OperationRequest::new(RestMethod::Get, "getWidget")
            .path_segment("widgets")
            .path_param("w2");
        let response: ApiResponse<Widget> = client.invoke_enveloped(request).await.unwrap();
        assert_eq!(response.result.size, 9);
        assert_eq!(response.messages, vec![vec!["Messages".to_string()]]);
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/widgets/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "success": false,
                "errors": [["widget not found"]],
                "messages": [],
                "result": null
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let request = OperationRequest::new(RestMethod::Get, "getWidget")
            .path_segment("widgets")
            .path_param("missing");
        let err = client.invoke::<Widget>(request).await.unwrap_err();
        match err {
            Error::Api(failure) => {
                assert_eq!(failure.status, 404);
                assert_eq!(failure.first_error(), Some("widget not found"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error_with_raw_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/widgets/bad"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("} this is not valid json {"),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let request = OperationRequest::new(RestMethod::Get, "getWidget")
            .path_segment("widgets")
            .path_param("bad");
        let err = client.invoke::<Widget>(request).await.unwrap_err();
        let detail = err.detail().expect("decode errors carry the raw response");
        assert_eq!(detail.status, 200);
        assert!(matches!(err, Error::Decode(DecodeError::Json { .. })));
    }

    #[tokio::test]
    async fn test_missing_base_url_is_transport_error() {
        let client = ServiceClient::builder("widgets", "v1").build().unwrap();
        let request = OperationRequest::new(RestMethod::Get, "getWidget").path_segment("widgets");
        let err = client.invoke::<Widget>(request).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Transport(TransportError::MissingServiceUrl)
        ));
        assert!(err.to_string().contains("no service URL"));
        assert!(err.detail().is_none());
    }

    #[tokio::test]
    async fn test_empty_base_url_is_treated_as_missing() {
        let client = ServiceClient::builder("widgets", "v1")
            .base_url("")
            .build()
            .unwrap();
        let request = OperationRequest::new(RestMethod::Get, "getWidget").path_segment("widgets");
        let err = client.invoke::<Widget>(request).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Transport(TransportError::MissingServiceUrl)
        ));
    }

    #[tokio::test]
    async fn test_deadline_exceeded_then_succeeds_without_deadline() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/widgets/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(Widget {
                        id: "slow".to_string(),
                        size: 1,
                    })
                    .set_delay(Duration::from_millis(100)),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;

        let deadlined = OperationRequest::new(RestMethod::Get, "getWidget")
            .path_segment("widgets")
            .path_param("slow")
            .deadline(Duration::from_millis(80));
        let err = client.invoke::<Widget>(deadlined).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Transport(TransportError::Timeout { duration_ms: 80 })
        ));

        let unbounded = OperationRequest::new(RestMethod::Get, "getWidget")
            .path_segment("widgets")
            .path_param("slow");
        let response = client.invoke::<Widget>(unbounded).await.unwrap();
        assert_eq!(response.result.id, "slow");
    }

    #[tokio::test]
    async fn test_retry_recovers_idempotent_call() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/widgets/flaky"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/widgets/flaky"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Widget {
                id: "flaky".to_string(),
                size: 2,
            }))
            .mount(&server)
            .await;

        let client = ServiceClient::builder("widgets", "v1")
            .base_url(server.uri())
            .retry(RetryPolicy::new(2, Duration::from_millis(10)))
            .build()
            .unwrap();
        let request = OperationRequest::new(RestMethod::Get, "getWidget")
            .path_segment("widgets")
            .path_param("flaky");
        let response = client.invoke::<Widget>(request).await.unwrap();
        assert_eq!(response.result.id, "flaky");
    }

    #[tokio::test]
    async fn test_post_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/widgets"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = ServiceClient::builder("widgets", "v1")
            .base_url(server.uri())
            .retry(RetryPolicy::new(3, Duration::from_millis(10)))
            .build()
            .unwrap();
        let request = OperationRequest::new(RestMethod::Post, "createWidget")
            .path_segment("widgets")
            .json_body(&serde_json::json!({"size": 5}));
        let err = client.invoke::<Widget>(request).await.unwrap_err();
        assert_eq!(err.status_code(), Some(503));
    }

    #[tokio::test]
    async fn test_caller_headers_override_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/widgets/w1"))
            .and(header("x-flavor", "per-request"))
            .and(header("x-correlation-id", "corr-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Widget {
                id: "w1".to_string(),
                size: 1,
            }))
            .mount(&server)
            .await;

        let client = ServiceClient::builder("widgets", "v1")
            .base_url(server.uri())
            .default_header("X-Flavor", "default")
            .build()
            .unwrap();
        let request = OperationRequest::new(RestMethod::Get, "getWidget")
            .path_segment("widgets")
            .path_param("w1")
            .correlation_id("corr-123")
            .header("X-Flavor", "per-request");
        client.invoke::<Widget>(request).await.unwrap();
    }

    #[tokio::test]
    async fn test_diagnostic_headers_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/widgets/w1"))
            .and(header(
                "x-ibmcloud-sdk-analytics",
                "service_name=widgets;service_version=v1;operation_id=getWidget",
            ))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Widget {
                id: "w1".to_string(),
                size: 1,
            }))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let request = OperationRequest::new(RestMethod::Get, "getWidget")
            .path_segment("widgets")
            .path_param("w1");
        client.invoke::<Widget>(request).await.unwrap();
    }

    #[tokio::test]
    async fn test_path_identifiers_are_percent_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/crn:v1:bluemix:public/zones/z1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Widget {
                id: "z1".to_string(),
                size: 1,
            }))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let request = OperationRequest::new(RestMethod::Get, "getZone")
            .path_segment("v1")
            .path_param("crn:v1:bluemix:public")
            .path_segment("zones")
            .path_param("z1");
        let url = client.compose_url(&request).unwrap();
        assert!(url.path().ends_with("/zones/z1"));
        client.invoke::<Widget>(request).await.unwrap();
    }

    #[tokio::test]
    async fn test_query_parameters_are_appended() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/widgets"))
            .and(query_param("offset", "1"))
            .and(query_param("limit", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let request = OperationRequest::new(RestMethod::Get, "listWidgets")
            .path_segment("widgets")
            .query("offset", 1)
            .query("limit", 20);
        client.invoke::<Vec<Widget>>(request).await.unwrap();
    }

    #[test]
    fn test_invalid_base_url_rejected_at_build() {
        let err = ServiceClient::builder("widgets", "v1")
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Transport(TransportError::InvalidUrl { .. })
        ));
    }
}
