//! The zone caching client.

use std::time::Duration;

use serde::Serialize;

use cis_core::error::not_empty;
use cis_core::{
    ApiResponse, Authenticator, Error, OperationRequest, RestMethod, RetryPolicy, ServiceClient,
};

use crate::models::{CacheLevelSetting, PurgeReceipt, ToggleSetting, TtlSetting};
use crate::options::{
    PurgeAllOptions, PurgeByCacheTagsOptions, PurgeByHostsOptions, PurgeByUrlsOptions,
    UpdateBrowserCacheTtlOptions, UpdateCacheLevelOptions, UpdateDevelopmentModeOptions,
    UpdateQueryStringSortOptions, UpdateServeStaleContentOptions,
};

const SERVICE_NAME: &str = "caching";
const SERVICE_VERSION: &str = "v1";

#[derive(Serialize)]
struct PurgeByUrlsBody<'a> {
    files: &'a [String],
}

#[derive(Serialize)]
struct PurgeByCacheTagsBody<'a> {
    tags: &'a [String],
}

#[derive(Serialize)]
struct PurgeByHostsBody<'a> {
    hosts: &'a [String],
}

#[derive(Serialize)]
struct UpdateValueBody<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<T>,
}

/// Builder for a [`CachingClient`].
#[derive(Debug)]
pub struct CachingClientBuilder {
    service: cis_core::ServiceClientBuilder,
    crn: String,
    zone_id: String,
}

impl CachingClientBuilder {
    fn new() -> Self {
        Self {
            service: ServiceClient::builder(SERVICE_NAME, SERVICE_VERSION),
            crn: String::new(),
            zone_id: String::new(),
        }
    }

    /// Sets the service base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.service = self.service.base_url(base_url);
        self
    }

    /// Sets the authenticator applied to every request.
    pub fn authenticator(mut self, authenticator: Authenticator) -> Self {
        self.service = self.service.authenticator(authenticator);
        self
    }

    /// Adds a header sent on every request.
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.service = self.service.default_header(name, value);
        self
    }

    /// Sets the default timeout applied when a call has no deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.service = self.service.timeout(timeout);
        self
    }

    /// Enables bounded retries for idempotent requests.
    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.service = self.service.retry(policy);
        self
    }

    /// Fills the base URL and authenticator from `<PREFIX>_*`
    /// environment variables.
    ///
    /// ## Errors
    ///
    /// Returns an error when the credential variables are inconsistent
    /// with the selected auth type.
    pub fn from_env(mut self, prefix: &str) -> Result<Self, Error> {
        self.service = self.service.from_env(prefix)?;
        Ok(self)
    }

    /// Sets the full CRN of the service instance.
    pub fn crn(mut self, crn: impl Into<String>) -> Self {
        self.crn = crn.into();
        self
    }

    /// Sets the zone identifier.
    pub fn zone_id(mut self, zone_id: impl Into<String>) -> Self {
        self.zone_id = zone_id.into();
        self
    }

    /// Builds the client.
    ///
    /// ## Errors
    ///
    /// Returns a transport error if the base URL does not parse. The
    /// CRN and zone id are validated per call rather than here, so a
    /// client can be built before they are known.
    pub fn build(self) -> Result<CachingClient, Error> {
        Ok(CachingClient {
            service: self.service.build()?,
            crn: self.crn,
            zone_id: self.zone_id,
        })
    }
}

/// Client for the zone caching API.
///
/// Every operation is scoped to the instance CRN and zone id the client
/// was built with; both are validated non-empty before a request is
/// issued. All settings endpoints answer with the
/// `{success, errors, messages, result}` envelope, and the decoded
/// `result` is returned with the envelope's messages preserved.
///
/// ## Examples
///
/// ```rust,ignore
/// use cis_caching::{CachingClient, PurgeByUrlsOptions};
///
/// let client = CachingClient::builder()
///     .from_env("CIS")?
///     .crn(crn)
///     .zone_id(zone_id)
///     .build()?;
///
/// let receipt = client
///     .purge_by_urls(PurgeByUrlsOptions {
///         files: vec!["http://www.example.com/cat_picture.jpg".into()],
///         ..Default::default()
///     })
///     .await?;
/// println!("purge {}", receipt.result.id);
/// ```
#[derive(Debug)]
pub struct CachingClient {
    service: ServiceClient,
    crn: String,
    zone_id: String,
}

impl CachingClient {
    /// Creates a builder.
    pub fn builder() -> CachingClientBuilder {
        CachingClientBuilder::new()
    }

    /// Purges everything the zone has cached.
    pub async fn purge_all(
        &self,
        options: PurgeAllOptions,
    ) -> Result<ApiResponse<PurgeReceipt>, Error> {
        let request = self
            .purge_request(RestMethod::Put, "purgeAll", "purge_all")?
            .headers(options.headers);
        let request = apply_deadline(request, options.deadline);
        self.service.invoke_enveloped(request).await
    }

    /// Purges cached copies of the given URLs.
    pub async fn purge_by_urls(
        &self,
        options: PurgeByUrlsOptions,
    ) -> Result<ApiResponse<PurgeReceipt>, Error> {
        let request = self
            .purge_request(RestMethod::Put, "purgeByUrls", "purge_by_urls")?
            .json_body(&PurgeByUrlsBody {
                files: &options.files,
            })
            .headers(options.headers);
        let request = apply_deadline(request, options.deadline);
        self.service.invoke_enveloped(request).await
    }

    /// Purges cached content carrying the given cache tags.
    pub async fn purge_by_cache_tags(
        &self,
        options: PurgeByCacheTagsOptions,
    ) -> Result<ApiResponse<PurgeReceipt>, Error> {
        let request = self
            .purge_request(RestMethod::Put, "purgeByCacheTags", "purge_by_cache_tags")?
            .json_body(&PurgeByCacheTagsBody {
                tags: &options.tags,
            })
            .headers(options.headers);
        let request = apply_deadline(request, options.deadline);
        self.service.invoke_enveloped(request).await
    }

    /// Purges cached content for the given hosts.
    pub async fn purge_by_hosts(
        &self,
        options: PurgeByHostsOptions,
    ) -> Result<ApiResponse<PurgeReceipt>, Error> {
        let request = self
            .purge_request(RestMethod::Put, "purgeByHosts", "purge_by_hosts")?
            .json_body(&PurgeByHostsBody {
                hosts: &options.hosts,
            })
            .headers(options.headers);
        let request = apply_deadline(request, options.deadline);
        self.service.invoke_enveloped(request).await
    }

    /// Reads the zone cache level.
    pub async fn cache_level(&self) -> Result<ApiResponse<CacheLevelSetting>, Error> {
        let request = self.setting_request(RestMethod::Get, "getCacheLevel", "cache_level")?;
        self.service.invoke_enveloped(request).await
    }

    /// Updates the zone cache level.
    pub async fn update_cache_level(
        &self,
        options: UpdateCacheLevelOptions,
    ) -> Result<ApiResponse<CacheLevelSetting>, Error> {
        let request = self
            .setting_request(RestMethod::Patch, "updateCacheLevel", "cache_level")?
            .json_body(&UpdateValueBody {
                value: options.value,
            })
            .headers(options.headers);
        let request = apply_deadline(request, options.deadline);
        self.service.invoke_enveloped(request).await
    }

    /// Reads the browser cache TTL.
    pub async fn browser_cache_ttl(&self) -> Result<ApiResponse<TtlSetting>, Error> {
        let request =
            self.setting_request(RestMethod::Get, "getBrowserCacheTTL", "browser_cache_ttl")?;
        self.service.invoke_enveloped(request).await
    }

    /// Updates the browser cache TTL.
    pub async fn update_browser_cache_ttl(
        &self,
        options: UpdateBrowserCacheTtlOptions,
    ) -> Result<ApiResponse<TtlSetting>, Error> {
        let request = self
            .setting_request(
                RestMethod::Patch,
                "updateBrowserCacheTtl",
                "browser_cache_ttl",
            )?
            .json_body(&UpdateValueBody {
                value: options.value,
            })
            .headers(options.headers);
        let request = apply_deadline(request, options.deadline);
        self.service.invoke_enveloped(request).await
    }

    /// Reads the development-mode toggle.
    pub async fn development_mode(&self) -> Result<ApiResponse<ToggleSetting>, Error> {
        let request =
            self.setting_request(RestMethod::Get, "getDevelopmentMode", "development_mode")?;
        self.service.invoke_enveloped(request).await
    }

    /// Updates the development-mode toggle.
    pub async fn update_development_mode(
        &self,
        options: UpdateDevelopmentModeOptions,
    ) -> Result<ApiResponse<ToggleSetting>, Error> {
        let request = self
            .setting_request(
                RestMethod::Patch,
                "updateDevelopmentMode",
                "development_mode",
            )?
            .json_body(&UpdateValueBody {
                value: options.value,
            })
            .headers(options.headers);
        let request = apply_deadline(request, options.deadline);
        self.service.invoke_enveloped(request).await
    }

    /// Reads the query-string-sort toggle.
    pub async fn query_string_sort(&self) -> Result<ApiResponse<ToggleSetting>, Error> {
        let request =
            self.setting_request(RestMethod::Get, "getQueryStringSort", "query_string_sort")?;
        self.service.invoke_enveloped(request).await
    }

    /// Updates the query-string-sort toggle.
    pub async fn update_query_string_sort(
        &self,
        options: UpdateQueryStringSortOptions,
    ) -> Result<ApiResponse<ToggleSetting>, Error> {
        let request = self
            .setting_request(
                RestMethod::Patch,
                "updateQueryStringSort",
                "query_string_sort",
            )?
            .json_body(&UpdateValueBody {
                value: options.value,
            })
            .headers(options.headers);
        let request = apply_deadline(request, options.deadline);
        self.service.invoke_enveloped(request).await
    }

    /// Reads the serve-stale-content toggle.
    pub async fn serve_stale_content(&self) -> Result<ApiResponse<ToggleSetting>, Error> {
        let request = self.setting_request(
            RestMethod::Get,
            "getServeStaleContent",
            "serve_stale_content",
        )?;
        self.service.invoke_enveloped(request).await
    }

    /// Updates the serve-stale-content toggle.
    pub async fn update_serve_stale_content(
        &self,
        options: UpdateServeStaleContentOptions,
    ) -> Result<ApiResponse<ToggleSetting>, Error> {
        let request = self
            .setting_request(
                RestMethod::Patch,
                "updateServeStaleContent",
                "serve_stale_content",
            )?
            .json_body(&UpdateValueBody {
                value: options.value,
            })
            .headers(options.headers);
        let request = apply_deadline(request, options.deadline);
        self.service.invoke_enveloped(request).await
    }

    /// Builds the `/v1/{crn}/zones/{zone_id}` prefix every operation
    /// shares, validating both identifiers first.
    fn zone_request(
        &self,
        method: RestMethod,
        operation_id: &'static str,
    ) -> Result<OperationRequest, Error> {
        not_empty("crn", &self.crn)?;
        not_empty("zone_id", &self.zone_id)?;
        Ok(OperationRequest::new(method, operation_id)
            .path_segment("v1")
            .path_param(&self.crn)
            .path_segment("zones")
            .path_param(&self.zone_id))
    }

    fn purge_request(
        &self,
        method: RestMethod,
        operation_id: &'static str,
        action: &'static str,
    ) -> Result<OperationRequest, Error> {
        Ok(self
            .zone_request(method, operation_id)?
            .path_segment("purge_cache")
            .path_segment(action))
    }

    fn setting_request(
        &self,
        method: RestMethod,
        operation_id: &'static str,
        setting: &'static str,
    ) -> Result<OperationRequest, Error> {
        Ok(self
            .zone_request(method, operation_id)?
            .path_segment("settings")
            .path_segment(setting))
    }
}

fn apply_deadline(
    request: OperationRequest,
    deadline: Option<Duration>,
) -> OperationRequest {
    match deadline {
        Some(deadline) => request.deadline(deadline),
        None => request,
    }
}
