//! Client error taxonomy.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the client pipeline.
///
/// The pipeline never swallows a failure: every call resolves, retries
/// once, or ends in exactly one of these.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failed with no server response. The single automatic
    /// retry has already been spent by the time callers see this.
    #[error("network error: {0}")]
    Transient(#[source] reqwest::Error),

    /// The backend rejected our credentials. Session teardown has already
    /// run when this reaches the caller.
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-success status, passed through untouched.
    #[error("HTTP {status}")]
    Http {
        status: StatusCode,
        /// Response body, best effort; empty when unreadable.
        body: String,
    },

    /// Local JSON (de)serialization failure.
    #[error("malformed JSON payload")]
    Logic(String),
}

impl ApiError {
    pub(crate) fn logic(detail: impl std::fmt::Display) -> Self {
        ApiError::Logic(detail.to_string())
    }

    /// The HTTP status behind this error, when a response arrived at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Transient(_) | ApiError::Logic(_) => None,
        }
    }
}

/// Result type for client operations.
pub type ApiResult<T> = Result<T, ApiError>;
