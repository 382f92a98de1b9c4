//! Typed resources for the global load balancer API.
//!
//! Load balancers, pools, and monitors are server-owned records: the
//! service assigns their ids and computes their health fields, and the
//! client never sends a decoded resource back on a request. Request
//! payloads are built separately from the operation options. Fields
//! that reference other resources (a load balancer's pool ids, a
//! pool's monitor id) are opaque strings; the service alone enforces
//! their validity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Health state the service computes for load balancers and pools.
///
/// Unrecognized values decode as [`Health::Unknown`] instead of failing
/// the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Health {
    /// Enough origins are healthy.
    Up,
    /// No origins are healthy.
    Down,
    /// Some origins are unhealthy.
    Degraded,
    /// A value this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Protocol a monitor probes origins with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum MonitorType {
    /// Plain HTTP probe.
    Http,
    /// HTTPS probe.
    Https,
    /// TCP connect probe.
    Tcp,
}

/// HTTP method an HTTP(S) monitor uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum HealthcheckMethod {
    /// Probe with GET.
    Get,
    /// Probe with HEAD.
    Head,
}

/// Pagination link wrapping an `href`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRef {
    /// Absolute URL of the referenced page.
    pub href: String,
}

/// Mapping of an availability zone to the pools serving it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AzPool {
    /// Availability zone name, e.g. `us-south-1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// Pool ids serving this zone.
    #[serde(default)]
    pub pools: Vec<String>,
}

/// A global load balancer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancer {
    /// Server-assigned identifier.
    #[serde(default)]
    pub id: String,
    /// Load balancer name.
    #[serde(default)]
    pub name: String,
    /// Descriptive text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the load balancer answers queries.
    #[serde(default)]
    pub enabled: bool,
    /// Time to live of the DNS answer, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    /// Health computed across the default pools.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,
    /// Pool used when every default pool is down.
    #[serde(default)]
    pub fallback_pool: String,
    /// Pools answering when no zone mapping applies, in failover order.
    #[serde(default)]
    pub default_pools: Vec<String>,
    /// Per-availability-zone pool mappings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub az_pools: Vec<AzPool>,
    /// When the load balancer was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    /// When the load balancer last changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
}

/// An origin as decoded from pool responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    /// Origin name.
    #[serde(default)]
    pub name: String,
    /// Descriptive text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Address the origin answers on (IP or hostname).
    #[serde(default)]
    pub address: String,
    /// Whether the origin receives traffic.
    #[serde(default)]
    pub enabled: bool,
    /// Health of this origin as probed by the pool's monitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<bool>,
    /// Why the last health check failed, when it did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_failure_reason: Option<String>,
}

/// An origin as supplied on pool create/update requests.
///
/// Requests never carry the computed health fields, so this is a
/// separate, smaller shape than [`Origin`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginInput {
    /// Origin name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Descriptive text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Address the origin answers on (IP or hostname).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Whether the origin receives traffic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// A pool of origins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    /// Server-assigned identifier.
    #[serde(default)]
    pub id: String,
    /// Pool name.
    #[serde(default)]
    pub name: String,
    /// Descriptive text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the pool is eligible for traffic.
    #[serde(default)]
    pub enabled: bool,
    /// Origins that must be healthy for the pool to count as up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healthy_origins_threshold: Option<i64>,
    /// The pool's origins, with computed health.
    #[serde(default)]
    pub origins: Vec<Origin>,
    /// Monitor probing this pool's origins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor: Option<String>,
    /// Webhook notified on health changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_channel: Option<String>,
    /// Health computed from the origins and threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,
    /// Region health checks probe from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healthcheck_region: Option<String>,
    /// Subnets health checks probe from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub healthcheck_subnets: Vec<String>,
    /// When the pool was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    /// When the pool last changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
}

/// A header sent with HTTP(S) health check probes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthcheckHeader {
    /// Header name.
    pub name: String,
    /// Header values.
    pub value: Vec<String>,
}

/// A health check monitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    /// Server-assigned identifier.
    #[serde(default)]
    pub id: String,
    /// Monitor name.
    #[serde(default)]
    pub name: String,
    /// Descriptive text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Probe protocol.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub monitor_type: Option<MonitorType>,
    /// Port probed; defaults per protocol when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    /// Seconds between probes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    /// Retries before an origin is marked unhealthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<i64>,
    /// Seconds before a probe attempt times out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    /// HTTP method used by HTTP(S) probes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<HealthcheckMethod>,
    /// Path requested by HTTP(S) probes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Headers sent with HTTP(S) probes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<HealthcheckHeader>,
    /// Whether invalid TLS certificates are tolerated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_insecure: Option<bool>,
    /// Status codes counted as healthy, e.g. `2xx`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_codes: Option<String>,
    /// Substring the probe body must contain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_body: Option<String>,
    /// When the monitor was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    /// When the monitor last changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
}

/// One page of load balancers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPage {
    /// The page's load balancers.
    #[serde(default)]
    pub load_balancers: Vec<LoadBalancer>,
    /// Offset of this page within the collection.
    #[serde(default)]
    pub offset: i64,
    /// Maximum number of items per page.
    #[serde(default)]
    pub limit: i64,
    /// Number of items on this page.
    #[serde(default)]
    pub count: i64,
    /// Total items in the collection.
    #[serde(default)]
    pub total_count: i64,
    /// Link to the first page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<PageRef>,
    /// Link to the next page, when one exists. The client decodes the
    /// link but never follows it on its own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PageRef>,
}

/// One page of pools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolPage {
    /// The page's pools.
    #[serde(default)]
    pub pools: Vec<Pool>,
    /// Offset of this page within the collection.
    #[serde(default)]
    pub offset: i64,
    /// Maximum number of items per page.
    #[serde(default)]
    pub limit: i64,
    /// Number of items on this page.
    #[serde(default)]
    pub count: i64,
    /// Total items in the collection.
    #[serde(default)]
    pub total_count: i64,
    /// Link to the first page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<PageRef>,
    /// Link to the next page, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PageRef>,
}

/// One page of monitors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorPage {
    /// The page's monitors.
    #[serde(default)]
    pub monitors: Vec<Monitor>,
    /// Offset of this page within the collection.
    #[serde(default)]
    pub offset: i64,
    /// Maximum number of items per page.
    #[serde(default)]
    pub limit: i64,
    /// Number of items on this page.
    #[serde(default)]
    pub count: i64,
    /// Total items in the collection.
    #[serde(default)]
    pub total_count: i64,
    /// Link to the first page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<PageRef>,
    /// Link to the next page, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PageRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_unknown_catch_all() {
        let health: Health = serde_json::from_str("\"CRITICAL\"").unwrap();
        assert_eq!(health, Health::Unknown);
        let health: Health = serde_json::from_str("\"DEGRADED\"").unwrap();
        assert_eq!(health, Health::Degraded);
    }

    #[test]
    fn test_monitor_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&MonitorType::Https).unwrap(),
            "\"HTTPS\""
        );
        assert_eq!(MonitorType::Tcp.to_string(), "TCP");
    }

    #[test]
    fn test_load_balancer_round_trip() {
        let lb = LoadBalancer {
            id: "5365b73c-ce6f-4d6f-ad9f-d9c131b26370".to_string(),
            name: "glb.example.com".to_string(),
            description: Some("us east glb".to_string()),
            enabled: true,
            ttl: Some(120),
            health: Some(Health::Degraded),
            fallback_pool: "24ccf79a-4ae0-4769-b4c8-17f8f230072e".to_string(),
            default_pools: vec!["p1".to_string(), "p2".to_string()],
            az_pools: vec![AzPool {
                availability_zone: Some("us-south-1".to_string()),
                pools: vec!["0fc0bb7c-2fab-476e-8b9b-40fa14bf8e3d".to_string()],
            }],
            created_on: Some("2019-01-01T05:20:00.12345Z".parse().unwrap()),
            modified_on: Some("2019-01-01T05:20:00.12345Z".parse().unwrap()),
        };
        let json = serde_json::to_string(&lb).unwrap();
        let decoded: LoadBalancer = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, lb);
    }

    #[test]
    fn test_monitor_type_field_renames() {
        let monitor = Monitor {
            id: "m1".to_string(),
            name: "healthcheck-monitor".to_string(),
            monitor_type: Some(MonitorType::Https),
            method: Some(HealthcheckMethod::Get),
            expected_codes: Some("2xx".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&monitor).unwrap();
        assert_eq!(json["type"], "HTTPS");
        assert_eq!(json["method"], "GET");
        let decoded: Monitor = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, monitor);
    }

    #[test]
    fn test_page_tolerates_missing_links() {
        let page: PoolPage =
            serde_json::from_str(r#"{"pools": [], "offset": 0, "limit": 20}"#).unwrap();
        assert!(page.first.is_none());
        assert!(page.next.is_none());
        assert_eq!(page.total_count, 0);
    }
}
