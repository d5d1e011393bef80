//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! client pipeline produces:
//!     → logging.rs (structured log events, request-scoped fields)
//!     → metrics.rs (counters: requests, retries, teardowns)
//! ```
//!
//! # Design Decisions
//! - Every dispatch carries a correlation id through its log events
//! - Metrics go through the `metrics` facade; the embedding host decides
//!   whether to install a recorder

pub mod logging;
pub mod metrics;
