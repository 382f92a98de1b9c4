//! HTTP methods used by the networking service APIs.

use strum::{Display, EnumString};

/// HTTP methods the networking service endpoints are invoked with.
///
/// Only the verbs the wrapped APIs actually use are represented. The
/// caching settings endpoints patch a setting in place, cache purges are
/// PUTs against an action path, and the load balancer endpoints replace
/// whole resources with PUT.
///
/// ## Examples
///
/// ```rust
/// use cis_core::RestMethod;
///
/// let method = RestMethod::Patch;
/// assert!(method.has_body());
/// assert!(!method.is_idempotent());
///
/// let parsed: RestMethod = "DELETE".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Delete);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource or setting.
    Get,
    /// HTTP POST - Create a resource.
    Post,
    /// HTTP PUT - Replace a resource, or trigger a purge action.
    Put,
    /// HTTP PATCH - Update a setting in place.
    Patch,
    /// HTTP DELETE - Remove a resource.
    Delete,
}

impl RestMethod {
    /// Returns `true` if this method typically carries a request body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Returns `true` if this method is idempotent.
    ///
    /// Retries are confined to idempotent methods; POST and PATCH are
    /// never retried.
    pub fn is_idempotent(&self) -> bool {
        !matches!(self, Self::Post | Self::Patch)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}
