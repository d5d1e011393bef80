//! Request descriptors.
//!
//! # Responsibilities
//! - Carry everything needed to (re)build one physical request
//! - Stay cheap to clone: the retry rebuilds the attempt from this
//!
//! # Design Decisions
//! - Bodies are serialized to `serde_json::Value` up front, so a
//!   malformed payload fails before anything is sent
//! - The descriptor is immutable after construction; retry bookkeeping
//!   lives in the dispatch state machine, not here

use reqwest::Method;
use serde::Serialize;

use crate::client::error::{ApiError, ApiResult};

/// Header carrying the view-tracking session id on every request.
pub const X_SESSION_ID: &str = "x-session-id";

/// Descriptor for one logical API call. Created per call, reissued
/// verbatim on the single retry, discarded after resolution.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the configured base URL, starting with '/'.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body. Serialization happens here so the caller gets
    /// the failure before any network traffic.
    pub fn with_json<B: Serialize>(mut self, body: &B) -> ApiResult<Self> {
        let value = serde_json::to_value(body).map_err(ApiError::logic)?;
        self.body = Some(value);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let request = ApiRequest::new(Method::GET, "/news")
            .with_query("page", "2")
            .with_query("sort", "published_at");
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/news");
        assert_eq!(request.query.len(), 2);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_with_json() {
        let request = ApiRequest::new(Method::POST, "/admin/news")
            .with_json(&serde_json::json!({"title": "hello"}))
            .unwrap();
        assert_eq!(request.body.unwrap()["title"], "hello");
    }
}
