//! Client subsystem.
//!
//! # Data Flow
//! ```text
//! caller
//!     → request.rs (build descriptor: method, path, query, body)
//!     → dispatch.rs (visibility check, header injection, send,
//!       classify failure, single retry, 401 teardown)
//!     → error.rs (typed failure back to the caller)
//! ```

pub mod dispatch;
pub mod error;
pub mod request;

pub use dispatch::{ApiClient, CredentialPolicy};
pub use error::{ApiError, ApiResult};
pub use request::{ApiRequest, X_SESSION_ID};
