//! Shared request pipeline for the IBM Cloud networking service clients.
//!
//! Every operation in the service crates follows the same shape: build
//! a request description from an options value, perform one HTTP
//! exchange, and decode the JSON response into a typed result. This
//! crate implements that pipeline once:
//!
//! - [`OperationRequest`] - an in-memory request description: verb,
//!   interleaved path segments and percent-encoded identifiers, query
//!   pairs, optional JSON body, caller headers, optional deadline.
//! - [`ServiceClient`] - URL assembly, header composition, the exchange
//!   itself (with optional bounded retries for idempotent verbs), and
//!   decoding into plain, enveloped, or bodyless results.
//! - [`error`] - the failure taxonomy: validation before I/O, transport,
//!   decode (carrying the raw response), and remote-API errors.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cis_core::{Authenticator, OperationRequest, RestMethod, ServiceClient};
//!
//! let client = ServiceClient::builder("caching", "v1")
//!     .base_url("https://api.cis.cloud.ibm.com")
//!     .authenticator(Authenticator::from_env("CIS")?)
//!     .build()?;
//!
//! let request = OperationRequest::new(RestMethod::Get, "getCacheLevel")
//!     .path_segment("v1")
//!     .path_param(&crn)
//!     .path_segment("zones")
//!     .path_param(&zone_id)
//!     .path_segment("settings")
//!     .path_segment("cache_level");
//!
//! let setting = client.invoke_enveloped::<CacheLevelSetting>(request).await?;
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod method;
pub mod request;
pub mod response;
pub mod retry;

// Re-exports for convenience
pub use auth::Authenticator;
pub use client::{ServiceClient, ServiceClientBuilder};
pub use error::{ApiFailure, AuthError, DecodeError, Error, TransportError, ValidationError};
pub use method::RestMethod;
pub use request::OperationRequest;
pub use response::{ApiResponse, DetailedResponse, Envelope};
pub use retry::RetryPolicy;
