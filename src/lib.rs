//! Resilient client library for the CMS backend.
//!
//! Wraps an HTTP transport with two pre-configured request handles: one that
//! attaches credentials when the target endpoint requires them, and one that
//! never does. Both share the same interceptor pipeline:
//!
//! ```text
//! caller
//!     → client (build request descriptor)
//!     → visibility (public allowlist: suppress or attach bearer token)
//!     → session (tag request with x-session-id)
//!     → transport (reqwest)
//!     → resilience (classify failure, single jittered retry)
//!     → session (401: clear identity, redirect to login origin)
//!     → caller (response or typed error)
//! ```
//!
//! # Design Decisions
//! - Session state (token, session id) is injected, never ambient
//! - Exactly one automatic retry, and only for transient network failures
//! - Non-401 HTTP errors pass through untouched; presentation is the
//!   caller's job

pub mod client;
pub mod config;
pub mod observability;
pub mod resilience;
pub mod resources;
pub mod session;
pub mod visibility;

pub use client::{ApiClient, ApiError, ApiRequest, ApiResult, CredentialPolicy};
pub use config::ClientConfig;
pub use session::{LoginRedirect, Session, SessionStore};
pub use visibility::Allowlist;
