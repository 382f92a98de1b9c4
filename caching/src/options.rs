//! Option values for the caching operations.
//!
//! Options are short-lived value objects constructed immediately before
//! a call and discarded after it. They are plain data: build them with
//! struct-update syntax over `Default` rather than setter chains.
//!
//! ```rust
//! use cis_caching::{PurgeByUrlsOptions, UpdateCacheLevelOptions, CacheLevel};
//!
//! let purge = PurgeByUrlsOptions {
//!     files: vec!["http://www.example.com/cat_picture.jpg".to_string()],
//!     ..Default::default()
//! };
//!
//! let update = UpdateCacheLevelOptions {
//!     value: Some(CacheLevel::Aggressive),
//!     ..Default::default()
//! };
//! ```

use std::collections::HashMap;
use std::time::Duration;

use crate::models::{CacheLevel, Toggle};

/// Options for purging a zone's entire cache.
#[derive(Debug, Clone, Default)]
pub struct PurgeAllOptions {
    /// Extra headers sent with this call only.
    pub headers: HashMap<String, String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for purging cached content by URL.
#[derive(Debug, Clone, Default)]
pub struct PurgeByUrlsOptions {
    /// URLs whose cached copies should be purged.
    pub files: Vec<String>,
    /// Extra headers sent with this call only.
    pub headers: HashMap<String, String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for purging cached content by cache tag.
#[derive(Debug, Clone, Default)]
pub struct PurgeByCacheTagsOptions {
    /// Cache tags whose content should be purged.
    pub tags: Vec<String>,
    /// Extra headers sent with this call only.
    pub headers: HashMap<String, String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for purging cached content by host.
#[derive(Debug, Clone, Default)]
pub struct PurgeByHostsOptions {
    /// Hosts whose cached content should be purged.
    pub hosts: Vec<String>,
    /// Extra headers sent with this call only.
    pub headers: HashMap<String, String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for updating the zone cache level.
#[derive(Debug, Clone, Default)]
pub struct UpdateCacheLevelOptions {
    /// New cache level; unset fields are omitted from the request body.
    pub value: Option<CacheLevel>,
    /// Extra headers sent with this call only.
    pub headers: HashMap<String, String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for updating the browser cache TTL.
#[derive(Debug, Clone, Default)]
pub struct UpdateBrowserCacheTtlOptions {
    /// New TTL in seconds; unset fields are omitted from the body.
    pub value: Option<i64>,
    /// Extra headers sent with this call only.
    pub headers: HashMap<String, String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for toggling development mode.
#[derive(Debug, Clone, Default)]
pub struct UpdateDevelopmentModeOptions {
    /// New on/off value; unset fields are omitted from the body.
    pub value: Option<Toggle>,
    /// Extra headers sent with this call only.
    pub headers: HashMap<String, String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for toggling query-string sorting.
#[derive(Debug, Clone, Default)]
pub struct UpdateQueryStringSortOptions {
    /// New on/off value; unset fields are omitted from the body.
    pub value: Option<Toggle>,
    /// Extra headers sent with this call only.
    pub headers: HashMap<String, String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}

/// Options for toggling serve-stale-content.
#[derive(Debug, Clone, Default)]
pub struct UpdateServeStaleContentOptions {
    /// New on/off value; unset fields are omitted from the body.
    pub value: Option<Toggle>,
    /// Extra headers sent with this call only.
    pub headers: HashMap<String, String>,
    /// Per-call deadline.
    pub deadline: Option<Duration>,
}
