//! Client for the IBM Cloud DNS Services global load balancer API.
//!
//! Covers the three resource families and their full CRUD surface:
//! load balancers (scoped to an instance and DNS zone), origin pools,
//! and health check monitors (scoped to an instance). Every operation
//! is a single HTTPS/JSON exchange through the shared pipeline in
//! [`cis_core`]; list operations decode page structures with
//! `first`/`next` links the caller may follow, and deletes return only
//! the detailed response.
//!
//! ## Example
//!
//! ```rust,ignore
//! use dns_glb::{GlbClient, CreateMonitorOptions, MonitorType};
//!
//! let client = GlbClient::builder().from_env("DNS_SVCS")?.build()?;
//!
//! let monitor = client
//!     .create_monitor(CreateMonitorOptions {
//!         instance_id: instance_id.clone(),
//!         name: Some("healthcheck-monitor".to_string()),
//!         monitor_type: Some(MonitorType::Https),
//!         expected_codes: Some("2xx".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("created monitor {}", monitor.result.id);
//! ```

mod client;
mod models;
mod options;

pub use client::{GlbClient, GlbClientBuilder};
pub use models::{
    AzPool, Health, HealthcheckHeader, HealthcheckMethod, LoadBalancer, LoadBalancerPage,
    Monitor, MonitorPage, MonitorType, Origin, OriginInput, PageRef, Pool, PoolPage,
};
pub use options::{
    CreateLoadBalancerOptions, CreateMonitorOptions, CreatePoolOptions,
    DeleteLoadBalancerOptions, DeleteMonitorOptions, DeletePoolOptions, GetLoadBalancerOptions,
    GetMonitorOptions, GetPoolOptions, ListLoadBalancersOptions, ListMonitorsOptions,
    ListPoolsOptions, UpdateLoadBalancerOptions, UpdateMonitorOptions, UpdatePoolOptions,
};

// The error and response types operations return come from the core
// crate; re-export the ones callers name in signatures.
pub use cis_core::{ApiResponse, Authenticator, DetailedResponse, Error, RetryPolicy};
