//! The global load balancer client.

use std::time::Duration;

use serde::Serialize;

use cis_core::error::not_empty;
use cis_core::{
    ApiResponse, Authenticator, DetailedResponse, Error, OperationRequest, RestMethod,
    RetryPolicy, ServiceClient,
};

use crate::models::{
    AzPool, HealthcheckHeader, HealthcheckMethod, LoadBalancer, LoadBalancerPage, Monitor,
    MonitorPage, MonitorType, OriginInput, Pool, PoolPage,
};
use crate::options::{
    CreateLoadBalancerOptions, CreateMonitorOptions, CreatePoolOptions,
    DeleteLoadBalancerOptions, DeleteMonitorOptions, DeletePoolOptions, GetLoadBalancerOptions,
    GetMonitorOptions, GetPoolOptions, ListLoadBalancersOptions, ListMonitorsOptions,
    ListPoolsOptions, UpdateLoadBalancerOptions, UpdateMonitorOptions, UpdatePoolOptions,
};

const SERVICE_NAME: &str = "global_load_balancers";
const SERVICE_VERSION: &str = "v1";

#[derive(Serialize)]
struct LoadBalancerConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback_pool: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_pools: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    az_pools: Option<&'a [AzPool]>,
}

#[derive(Serialize)]
struct PoolConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    healthy_origins_threshold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    origins: Option<&'a [OriginInput]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    monitor: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_channel: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    healthcheck_region: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    healthcheck_subnets: Option<&'a [String]>,
}

#[derive(Serialize)]
struct MonitorConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    monitor_type: Option<MonitorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interval: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    retries: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<HealthcheckMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    headers: Option<&'a [HealthcheckHeader]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allow_insecure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected_codes: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected_body: Option<&'a str>,
}

/// Builder for a [`GlbClient`].
#[derive(Debug)]
pub struct GlbClientBuilder {
    service: cis_core::ServiceClientBuilder,
}

impl GlbClientBuilder {
    fn new() -> Self {
        Self {
            service: ServiceClient::builder(SERVICE_NAME, SERVICE_VERSION),
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

    /// Builds the client.
    ///
    /// ## Errors
    ///
    /// Returns a transport error if the base URL does not parse.
    pub fn build(self) -> Result<GlbClient, Error> {
        Ok(GlbClient {
            service: self.service.build()?,
        })
    }
}

/// Client for the global load balancer API: load balancers, pools, and
/// health check monitors.
///
/// Path identifiers travel in each operation's options and are
/// validated non-empty before a request is issued. Responses decode the
/// top-level JSON object; deletes return only the detailed response.
///
/// ## Examples
///
/// ```rust,ignore
/// use dns_glb::{GlbClient, ListLoadBalancersOptions};
///
/// let client = GlbClient::builder().from_env("DNS_SVCS")?.build()?;
///
/// let page = client
///     .list_load_balancers(ListLoadBalancersOptions {
///         instance_id: instance_id.clone(),
///         dnszone_id: dnszone_id.clone(),
///         ..Default::default()
///     })
///     .await?;
/// for lb in &page.result.load_balancers {
///     println!("{} ({:?})", lb.name, lb.health);
/// }
/// ```
#[derive(Debug)]
pub struct GlbClient {
    service: ServiceClient,
}

impl GlbClient {
    /// Creates a builder.
    pub fn builder() -> GlbClientBuilder {
        GlbClientBuilder::new()
    }

    // ------------------------------------------------------------------
    // Load balancers
    // ------------------------------------------------------------------

    /// Lists a zone's load balancers, one page at a time.
    ///
    /// The decoded page carries `first`/`next` links; following them is
    /// up to the caller.
    pub async fn list_load_balancers(
        &self,
        options: ListLoadBalancersOptions,
    ) -> Result<ApiResponse<LoadBalancerPage>, Error> {
        let mut request = self.lb_collection(
            RestMethod::Get,
            "listLoadBalancers",
            &options.instance_id,
            &options.dnszone_id,
        )?;
        if let Some(offset) = options.offset {
            request = request.query("offset", offset);
        }
        if let Some(limit) = options.limit {
            request = request.query("limit", limit);
        }
        let request = finish(request, options.x_correlation_id, options.deadline);
        self.service.invoke(request).await
    }

    /// Creates a load balancer.
    pub async fn create_load_balancer(
        &self,
        options: CreateLoadBalancerOptions,
    ) -> Result<ApiResponse<LoadBalancer>, Error> {
        let request = self
            .lb_collection(
                RestMethod::Post,
                "createLoadBalancer",
                &options.instance_id,
                &options.dnszone_id,
            )?
            .json_body(&LoadBalancerConfig {
                name: options.name.as_deref(),
                description: options.description.as_deref(),
                enabled: options.enabled,
                ttl: options.ttl,
                fallback_pool: options.fallback_pool.as_deref(),
                default_pools: options.default_pools.as_deref(),
                az_pools: options.az_pools.as_deref(),
            });
        let request = finish(request, options.x_correlation_id, options.deadline);
        self.service.invoke(request).await
    }

    /// Fetches one load balancer.
    pub async fn get_load_balancer(
        &self,
        options: GetLoadBalancerOptions,
    ) -> Result<ApiResponse<LoadBalancer>, Error> {
        not_empty("lb_id", &options.lb_id)?;
        let request = self
            .lb_collection(
                RestMethod::Get,
                "getLoadBalancer",
                &options.instance_id,
                &options.dnszone_id,
            )?
            .path_param(&options.lb_id);
        let request = finish(request, options.x_correlation_id, options.deadline);
        self.service.invoke(request).await
    }

    /// Replaces a load balancer's configuration.
    pub async fn update_load_balancer(
        &self,
        options: UpdateLoadBalancerOptions,
    ) -> Result<ApiResponse<LoadBalancer>, Error> {
        not_empty("lb_id", &options.lb_id)?;
        let request = self
            .lb_collection(
                RestMethod::Put,
                "updateLoadBalancer",
                &options.instance_id,
                &options.dnszone_id,
            )?
            .path_param(&options.lb_id)
            .json_body(&LoadBalancerConfig {
                name: options.name.as_deref(),
                description: options.description.as_deref(),
                enabled: options.enabled,
                ttl: options.ttl,
                fallback_pool: options.fallback_pool.as_deref(),
                default_pools: options.default_pools.as_deref(),
                az_pools: options.az_pools.as_deref(),
            });
        let request = finish(request, options.x_correlation_id, options.deadline);
        self.service.invoke(request).await
    }

    /// Deletes a load balancer. Returns only the detailed response; the
    /// service sends no body.
    pub async fn delete_load_balancer(
        &self,
        options: DeleteLoadBalancerOptions,
    ) -> Result<DetailedResponse, Error> {
        not_empty("lb_id", &options.lb_id)?;
        let request = self
            .lb_collection(
                RestMethod::Delete,
                "deleteLoadBalancer",
                &options.instance_id,
                &options.dnszone_id,
            )?
            .path_param(&options.lb_id);
        let request = finish(request, options.x_correlation_id, options.deadline);
        self.service.invoke_unit(request).await
    }

    // ------------------------------------------------------------------
    // Pools
    // ------------------------------------------------------------------

    /// Lists an instance's pools, one page at a time.
    pub async fn list_pools(
        &self,
        options: ListPoolsOptions,
    ) -> Result<ApiResponse<PoolPage>, Error> {
        let mut request = self.instance_collection(
            RestMethod::Get,
            "listPools",
            &options.instance_id,
            "pools",
        )?;
        if let Some(offset) = options.offset {
            request = request.query("offset", offset);
        }
        if let Some(limit) = options.limit {
            request = request.query("limit", limit);
        }
        let request = finish(request, options.x_correlation_id, options.deadline);
        self.service.invoke(request).await
    }

    /// Creates a pool.
    pub async fn create_pool(
        &self,
        options: CreatePoolOptions,
    ) -> Result<ApiResponse<Pool>, Error> {
        let request = self
            .instance_collection(RestMethod::Post, "createPool", &options.instance_id, "pools")?
            .json_body(&PoolConfig {
                name: options.name.as_deref(),
                description: options.description.as_deref(),
                enabled: options.enabled,
                healthy_origins_threshold: options.healthy_origins_threshold,
                origins: options.origins.as_deref(),
                monitor: options.monitor.as_deref(),
                notification_channel: options.notification_channel.as_deref(),
                healthcheck_region: options.healthcheck_region.as_deref(),
                healthcheck_subnets: options.healthcheck_subnets.as_deref(),
            });
        let request = finish(request, options.x_correlation_id, options.deadline);
        self.service.invoke(request).await
    }

    /// Fetches one pool.
    pub async fn get_pool(&self, options: GetPoolOptions) -> Result<ApiResponse<Pool>, Error> {
        not_empty("pool_id", &options.pool_id)?;
        let request = self
            .instance_collection(RestMethod::Get, "getPool", &options.instance_id, "pools")?
            .path_param(&options.pool_id);
        let request = finish(request, options.x_correlation_id, options.deadline);
        self.service.invoke(request).await
    }

    /// Replaces a pool's configuration.
    pub async fn update_pool(
        &self,
        options: UpdatePoolOptions,
    ) -> Result<ApiResponse<Pool>, Error> {
        not_empty("pool_id", &options.pool_id)?;
        let request = self
            .instance_collection(RestMethod::Put, "updatePool", &options.instance_id, "pools")?
            .path_param(&options.pool_id)
            .json_body(&PoolConfig {
                name: options.name.as_deref(),
                description: options.description.as_deref(),
                enabled: options.enabled,
                healthy_origins_threshold: options.healthy_origins_threshold,
                origins: options.origins.as_deref(),
                monitor: options.monitor.as_deref(),
                notification_channel: options.notification_channel.as_deref(),
                healthcheck_region: options.healthcheck_region.as_deref(),
                healthcheck_subnets: options.healthcheck_subnets.as_deref(),
            });
        let request = finish(request, options.x_correlation_id, options.deadline);
        self.service.invoke(request).await
    }

    /// Deletes a pool. Returns only the detailed response.
    pub async fn delete_pool(
        &self,
        options: DeletePoolOptions,
    ) -> Result<DetailedResponse, Error> {
        not_empty("pool_id", &options.pool_id)?;
        let request = self
            .instance_collection(
                RestMethod::Delete,
                "deletePool",
                &options.instance_id,
                "pools",
            )?
            .path_param(&options.pool_id);
        let request = finish(request, options.x_correlation_id, options.deadline);
        self.service.invoke_unit(request).await
    }

    // ------------------------------------------------------------------
    // Monitors
    // ------------------------------------------------------------------

    /// Lists an instance's monitors, one page at a time.
    pub async fn list_monitors(
        &self,
        options: ListMonitorsOptions,
    ) -> Result<ApiResponse<MonitorPage>, Error> {
        let mut request = self.instance_collection(
            RestMethod::Get,
            "listMonitors",
            &options.instance_id,
            "monitors",
        )?;
        if let Some(offset) = options.offset {
            request = request.query("offset", offset);
        }
        if let Some(limit) = options.limit {
            request = request.query("limit", limit);
        }
        let request = finish(request, options.x_correlation_id, options.deadline);
        self.service.invoke(request).await
    }

    /// Creates a monitor.
    pub async fn create_monitor(
        &self,
        options: CreateMonitorOptions,
    ) -> Result<ApiResponse<Monitor>, Error> {
        let request = self
            .instance_collection(
                RestMethod::Post,
                "createMonitor",
                &options.instance_id,
                "monitors",
            )?
            .json_body(&MonitorConfig {
                name: options.name.as_deref(),
                description: options.description.as_deref(),
                monitor_type: options.monitor_type,
                port: options.port,
                interval: options.interval,
                retries: options.retries,
                timeout: options.timeout,
                method: options.method,
                path: options.path.as_deref(),
                headers: options.healthcheck_headers.as_deref(),
                allow_insecure: options.allow_insecure,
                expected_codes: options.expected_codes.as_deref(),
                expected_body: options.expected_body.as_deref(),
            });
        let request = finish(request, options.x_correlation_id, options.deadline);
        self.service.invoke(request).await
    }

    /// Fetches one monitor.
    pub async fn get_monitor(
        &self,
        options: GetMonitorOptions,
    ) -> Result<ApiResponse<Monitor>, Error> {
        not_empty("monitor_id", &options.monitor_id)?;
        let request = self
            .instance_collection(
                RestMethod::Get,
                "getMonitor",
                &options.instance_id,
                "monitors",
            )?
            .path_param(&options.monitor_id);
        let request = finish(request, options.x_correlation_id, options.deadline);
        self.service.invoke(request).await
    }

    /// Replaces a monitor's configuration.
    pub async fn update_monitor(
        &self,
        options: UpdateMonitorOptions,
    ) -> Result<ApiResponse<Monitor>, Error> {
        not_empty("monitor_id", &options.monitor_id)?;
        let request = self
            .instance_collection(
                RestMethod::Put,
                "updateMonitor",
                &options.instance_id,
                "monitors",
            )?
            .path_param(&options.monitor_id)
            .json_body(&MonitorConfig {
                name: options.name.as_deref(),
                description: options.description.as_deref(),
                monitor_type: options.monitor_type,
                port: options.port,
                interval: options.interval,
                retries: options.retries,
                timeout: options.timeout,
                method: options.method,
                path: options.path.as_deref(),
                headers: options.healthcheck_headers.as_deref(),
                allow_insecure: options.allow_insecure,
                expected_codes: options.expected_codes.as_deref(),
                expected_body: options.expected_body.as_deref(),
            });
        let request = finish(request, options.x_correlation_id, options.deadline);
        self.service.invoke(request).await
    }

    /// Deletes a monitor. Returns only the detailed response.
    pub async fn delete_monitor(
        &self,
        options: DeleteMonitorOptions,
    ) -> Result<DetailedResponse, Error> {
        not_empty("monitor_id", &options.monitor_id)?;
        let request = self
            .instance_collection(
                RestMethod::Delete,
                "deleteMonitor",
                &options.instance_id,
                "monitors",
            )?
            .path_param(&options.monitor_id);
        let request = finish(request, options.x_correlation_id, options.deadline);
        self.service.invoke_unit(request).await
    }

    /// Builds `/instances/{instance_id}/dnszones/{dnszone_id}/load_balancers`,
    /// validating both identifiers first.
    fn lb_collection(
        &self,
        method: RestMethod,
        operation_id: &'static str,
        instance_id: &str,
        dnszone_id: &str,
    ) -> Result<OperationRequest, Error> {
        not_empty("instance_id", instance_id)?;
        not_empty("dnszone_id", dnszone_id)?;
        Ok(OperationRequest::new(method, operation_id)
            .path_segment("instances")
            .path_param(instance_id)
            .path_segment("dnszones")
            .path_param(dnszone_id)
            .path_segment("load_balancers"))
    }

    /// Builds `/instances/{instance_id}/{collection}` for pools and
    /// monitors, validating the instance id first.
    fn instance_collection(
        &self,
        method: RestMethod,
        operation_id: &'static str,
        instance_id: &str,
        collection: &'static str,
    ) -> Result<OperationRequest, Error> {
        not_empty("instance_id", instance_id)?;
        Ok(OperationRequest::new(method, operation_id)
            .path_segment("instances")
            .path_param(instance_id)
            .path_segment(collection))
    }
}

fn finish(
    mut request: OperationRequest,
    correlation_id: Option<String>,
    deadline: Option<Duration>,
) -> OperationRequest {
    if let Some(id) = correlation_id {
        request = request.correlation_id(id);
    }
    if let Some(deadline) = deadline {
        request = request.deadline(deadline);
    }
    request
}
