//! Client for the IBM Cloud Internet Services zone caching API.
//!
//! Covers cache purges (everything, by URL, by cache tag, by host) and
//! the zone cache settings (cache level, browser cache TTL, development
//! mode, query string sort, serve stale content). Every operation is a
//! single HTTPS/JSON exchange through the shared pipeline in
//! [`cis_core`]; responses arrive wrapped in the service's
//! `{success, errors, messages, result}` envelope and are returned
//! unwrapped as typed results.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cis_caching::{CachingClient, UpdateCacheLevelOptions, CacheLevel};
//!
//! let client = CachingClient::builder()
//!     .base_url("https://api.cis.cloud.ibm.com")
//!     .from_env("CIS")?
//!     .crn(crn)
//!     .zone_id(zone_id)
//!     .build()?;
//!
//! let setting = client
//!     .update_cache_level(UpdateCacheLevelOptions {
//!         value: Some(CacheLevel::Aggressive),
//!         ..Default::default()
//!     })
//!     .await?;
//! assert_eq!(setting.result.value, CacheLevel::Aggressive);
//! ```

mod client;
mod models;
mod options;

pub use client::{CachingClient, CachingClientBuilder};
pub use models::{
    CacheLevel, CacheLevelSetting, PurgeReceipt, Toggle, ToggleSetting, TtlSetting,
};
pub use options::{
    PurgeAllOptions, PurgeByCacheTagsOptions, PurgeByHostsOptions, PurgeByUrlsOptions,
    UpdateBrowserCacheTtlOptions, UpdateCacheLevelOptions, UpdateDevelopmentModeOptions,
    UpdateQueryStringSortOptions, UpdateServeStaleContentOptions,
};

// The error and response types operations return come from the core
// crate; re-export the ones callers name in signatures.
pub use cis_core::{ApiResponse, Authenticator, DetailedResponse, Error, RetryPolicy};
