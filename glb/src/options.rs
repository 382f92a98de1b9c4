//! Option values for the global load balancer operations.
//!
//! Every options struct carries the path identifiers its operation
//! needs (`instance_id`, a `dnszone_id` for load balancer operations,
//! and the resource id for get/update/delete), the body fields the
//! caller wants to send, an optional `x_correlation_id` echoed
//! upstream, and an optional per-call deadline. Unset body fields are
//! omitted from the request entirely.
//!
//! Options are short-lived values: construct with struct-update syntax
//! over `Default`, call the operation, drop them.
//!
//! ```rust
//! use dns_glb::CreateLoadBalancerOptions;
//!
//! let options = CreateLoadBalancerOptions {
//!     instance_id: "1407a753-a93f-4bb0-9784-bcfc269ee1b3".to_string(),
//!     dnszone_id: "5365b73c-ce6f-4d6f-ad9f-d9c131b26370".to_string(),
//!     name: Some("glb.example.com".to_string()),
//!     fallback_pool: Some("24ccf79a-4ae0-4769-b4c8-17f8f230072e".to_string()),
//!     ..Default::default()
//! };
//! ```

use std::time::Duration;

use crate::models::{AzPool, HealthcheckHeader, HealthcheckMethod, MonitorType, OriginInput};

/// Options for listing a zone's load balancers.
#[derive(Debug, Clone, Default)]
pub struct ListLoadBalancersOptions {
    /// Service instance id.
    pub instance_id: String,
    /// DNS zone id.
    pub dnszone_id: String,
    /// Offset of the first item to return.
    pub offset: Option<i64>,
    /// Maximum number of items to return.
    pub limit: Option<i64>,
    /// Correlation id echoed upstream.
    pub x_correlation_id: Option<String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for creating a load balancer.
#[derive(Debug, Clone, Default)]
pub struct CreateLoadBalancerOptions {
    /// Service instance id.
    pub instance_id: String,
    /// DNS zone id.
    pub dnszone_id: String,
    /// Load balancer name.
    pub name: Option<String>,
    /// Descriptive text.
    pub description: Option<String>,
    /// Whether the load balancer answers queries.
    pub enabled: Option<bool>,
    /// Time to live of the DNS answer, in seconds.
    pub ttl: Option<i64>,
    /// Pool used when every default pool is down.
    pub fallback_pool: Option<String>,
    /// Pools answering when no zone mapping applies, in failover order.
    pub default_pools: Option<Vec<String>>,
    /// Per-availability-zone pool mappings.
    pub az_pools: Option<Vec<AzPool>>,
    /// Correlation id echoed upstream.
    pub x_correlation_id: Option<String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for fetching one load balancer.
#[derive(Debug, Clone, Default)]
pub struct GetLoadBalancerOptions {
    /// Service instance id.
    pub instance_id: String,
    /// DNS zone id.
    pub dnszone_id: String,
    /// Load balancer id.
    pub lb_id: String,
    /// Correlation id echoed upstream.
    pub x_correlation_id: Option<String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for replacing a load balancer's configuration.
#[derive(Debug, Clone, Default)]
pub struct UpdateLoadBalancerOptions {
    /// Service instance id.
    pub instance_id: String,
    /// DNS zone id.
    pub dnszone_id: String,
    /// Load balancer id.
    pub lb_id: String,
    /// Load balancer name.
    pub name: Option<String>,
    /// Descriptive text.
    pub description: Option<String>,
    /// Whether the load balancer answers queries.
    pub enabled: Option<bool>,
    /// Time to live of the DNS answer, in seconds.
    pub ttl: Option<i64>,
    /// Pool used when every default pool is down.
    pub fallback_pool: Option<String>,
    /// Pools answering when no zone mapping applies, in failover order.
    pub default_pools: Option<Vec<String>>,
    /// Per-availability-zone pool mappings.
    pub az_pools: Option<Vec<AzPool>>,
    /// Correlation id echoed upstream.
    pub x_correlation_id: Option<String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for deleting a load balancer.
#[derive(Debug, Clone, Default)]
pub struct DeleteLoadBalancerOptions {
    /// Service instance id.
    pub instance_id: String,
    /// DNS zone id.
    pub dnszone_id: String,
    /// Load balancer id.
    pub lb_id: String,
    /// Correlation id echoed upstream.
    pub x_correlation_id: Option<String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for listing an instance's pools.
#[derive(Debug, Clone, Default)]
pub struct ListPoolsOptions {
    /// Service instance id.
    pub instance_id: String,
    /// Offset of the first item to return.
    pub offset: Option<i64>,
    /// Maximum number of items to return.
    pub limit: Option<i64>,
    /// Correlation id echoed upstream.
    pub x_correlation_id: Option<String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for creating a pool.
#[derive(Debug, Clone, Default)]
pub struct CreatePoolOptions {
    /// Service instance id.
    pub instance_id: String,
    /// Pool name.
    pub name: Option<String>,
    /// Descriptive text.
    pub description: Option<String>,
    /// Whether the pool is eligible for traffic.
    pub enabled: Option<bool>,
    /// Origins that must be healthy for the pool to count as up.
    pub healthy_origins_threshold: Option<i64>,
    /// The pool's origins.
    pub origins: Option<Vec<OriginInput>>,
    /// Monitor probing this pool's origins.
    pub monitor: Option<String>,
    /// Webhook notified on health changes.
    pub notification_channel: Option<String>,
    /// Region health checks probe from.
    pub healthcheck_region: Option<String>,
    /// Subnets health checks probe from.
    pub healthcheck_subnets: Option<Vec<String>>,
    /// Correlation id echoed upstream.
    pub x_correlation_id: Option<String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for fetching one pool.
#[derive(Debug, Clone, Default)]
pub struct GetPoolOptions {
    /// Service instance id.
    pub instance_id: String,
    /// Pool id.
    pub pool_id: String,
    /// Correlation id echoed upstream.
    pub x_correlation_id: Option<String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for replacing a pool's configuration.
#[derive(Debug, Clone, Default)]
pub struct UpdatePoolOptions {
    /// Service instance id.
    pub instance_id: String,
    /// Pool id.
    pub pool_id: String,
    /// Pool name.
    pub name: Option<String>,
    /// Descriptive text.
    pub description: Option<String>,
    /// Whether the pool is eligible for traffic.
    pub enabled: Option<bool>,
    /// Origins that must be healthy for the pool to count as up.
    pub healthy_origins_threshold: Option<i64>,
    /// The pool's origins.
    pub origins: Option<Vec<OriginInput>>,
    /// Monitor probing this pool's origins.
    pub monitor: Option<String>,
    /// Webhook notified on health changes.
    pub notification_channel: Option<String>,
    /// Region health checks probe from.
    pub healthcheck_region: Option<String>,
    /// Subnets health checks probe from.
    pub healthcheck_subnets: Option<Vec<String>>,
    /// Correlation id echoed upstream.
    pub x_correlation_id: Option<String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for deleting a pool.
#[derive(Debug, Clone, Default)]
pub struct DeletePoolOptions {
    /// Service instance id.
    pub instance_id: String,
    /// Pool id.
    pub pool_id: String,
    /// Correlation id echoed upstream.
    pub x_correlation_id: Option<String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for listing an instance's monitors.
#[derive(Debug, Clone, Default)]
pub struct ListMonitorsOptions {
    /// Service instance id.
    pub instance_id: String,
    /// Offset of the first item to return.
    pub offset: Option<i64>,
    /// Maximum number of items to return.
    pub limit: Option<i64>,
    /// Correlation id echoed upstream.
    pub x_correlation_id: Option<String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for creating a monitor.
#[derive(Debug, Clone, Default)]
pub struct CreateMonitorOptions {
    /// Service instance id.
    pub instance_id: String,
    /// Monitor name.
    pub name: Option<String>,
    /// Descriptive text.
    pub description: Option<String>,
    /// Probe protocol.
    pub monitor_type: Option<MonitorType>,
    /// Port probed; defaults per protocol when unset.
    pub port: Option<i64>,
    /// Seconds between probes.
    pub interval: Option<i64>,
    /// Retries before an origin is marked unhealthy.
    pub retries: Option<i64>,
    /// Seconds before a probe attempt times out.
    pub timeout: Option<i64>,
    /// HTTP method used by HTTP(S) probes.
    pub method: Option<HealthcheckMethod>,
    /// Path requested by HTTP(S) probes.
    pub path: Option<String>,
    /// Headers sent with HTTP(S) probes.
    pub healthcheck_headers: Option<Vec<HealthcheckHeader>>,
    /// Whether invalid TLS certificates are tolerated.
    pub allow_insecure: Option<bool>,
    /// Status codes counted as healthy, e.g. `2xx`.
    pub expected_codes: Option<String>,
    /// Substring the probe body must contain.
    pub expected_body: Option<String>,
    /// Correlation id echoed upstream.
    pub x_correlation_id: Option<String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for fetching one monitor.
#[derive(Debug, Clone, Default)]
pub struct GetMonitorOptions {
    /// Service instance id.
    pub instance_id: String,
    /// Monitor id.
    pub monitor_id: String,
    /// Correlation id echoed upstream.
    pub x_correlation_id: Option<String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for replacing a monitor's configuration.
#[derive(Debug, Clone, Default)]
pub struct UpdateMonitorOptions {
    /// Service instance id.
    pub instance_id: String,
    /// Monitor id.
    pub monitor_id: String,
    /// Monitor name.
    pub name: Option<String>,
    /// Descriptive text.
    pub description: Option<String>,
    /// Probe protocol.
    pub monitor_type: Option<MonitorType>,
    /// Port probed; defaults per protocol when unset.
    pub port: Option<i64>,
    /// Seconds between probes.
    pub interval: Option<i64>,
    /// Retries before an origin is marked unhealthy.
    pub retries: Option<i64>,
    /// Seconds before a probe attempt times out.
    pub timeout: Option<i64>,
    /// HTTP method used by HTTP(S) probes.
    pub method: Option<HealthcheckMethod>,
    /// Path requested by HTTP(S) probes.
    pub path: Option<String>,
    /// Headers sent with HTTP(S) probes.
    pub healthcheck_headers: Option<Vec<HealthcheckHeader>>,
    /// Whether invalid TLS certificates are tolerated.
    pub allow_insecure: Option<bool>,
    /// Status codes counted as healthy, e.g. `2xx`.
    pub expected_codes: Option<String>,
    /// Substring the probe body must contain.
    pub expected_body: Option<String>,
    /// Correlation id echoed upstream.
    pub x_correlation_id: Option<String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for deleting a monitor.
#[derive(Debug, Clone, Default)]
pub struct DeleteMonitorOptions {
    /// Service instance id.
    pub instance_id: String,
    /// Monitor id.
    pub monitor_id: String,
    /// Correlation id echoed upstream.
    pub x_correlation_id: Option<String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}
