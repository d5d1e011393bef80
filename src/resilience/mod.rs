//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to backend:
//!     → On failure: retries.rs (classify: transient or not)
//!     → If transient and first attempt: backoff.rs (jittered delay)
//!     → Reissue identical request exactly once
//! ```
//!
//! # Design Decisions
//! - One retry, never more; a second transient failure is the caller's
//! - HTTP error responses are never retried, whatever the status
//! - Jittered backoff prevents synchronized retry bursts

pub mod backoff;
pub mod retries;

pub use backoff::retry_delay;
pub use retries::is_transient;
