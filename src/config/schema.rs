//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the API client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the REST backend (e.g., "https://api.example.org").
    pub base_url: String,

    /// External login origin for the hard redirect on session expiry.
    pub login_origin: String,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Retry configuration.
    pub retries: RetryConfig,

    /// Session storage settings.
    pub session: SessionConfig,

    /// Additions to the public-endpoint allowlist.
    pub visibility: VisibilityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// TCP connect timeout in seconds.
    pub connect_secs: u64,

    /// Whole-request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 10,
            request_secs: 30,
        }
    }
}

/// Retry configuration.
///
/// The pipeline performs at most one retry regardless of these settings;
/// they only shape the backoff window before that retry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Whether the single transient-failure retry is enabled.
    pub enabled: bool,

    /// Base delay before the retry (milliseconds).
    pub base_delay_ms: u64,

    /// Upper bound of the random jitter added to the base delay.
    pub jitter_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_delay_ms: 400,
            jitter_ms: 250,
        }
    }
}

/// Session storage settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Optional path for persisting the durable storage bin as JSON.
    /// When unset, identity state lives in memory only.
    pub persistence_path: Option<String>,
}

/// Additions to the public-endpoint allowlist.
///
/// Config can only widen the built-in table, never shrink it: endpoints the
/// backend serves unauthenticated must stay credential-free even if a stale
/// token is present.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Extra exact (method, path) rules.
    pub public_exact: Vec<EndpointRule>,

    /// Extra (method, path-prefix) rules.
    pub public_prefixes: Vec<EndpointRule>,
}

/// A single (method, path) predicate from config.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointRule {
    /// HTTP method, uppercase (e.g., "GET").
    #[serde(default = "default_method")]
    pub method: String,

    /// Exact path or path prefix, depending on the rule list.
    pub path: String,
}

fn default_method() -> String {
    "GET".to_string()
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default tracing filter when RUST_LOG is unset.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "cms_client=info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert!(config.retries.enabled);
        assert_eq!(config.retries.base_delay_ms, 400);
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(config.visibility.public_exact.is_empty());
    }

    #[test]
    fn test_minimal_toml() {
        let config: ClientConfig = toml::from_str(
            r#"
            base_url = "https://api.example.org"
            login_origin = "https://login.example.org"

            [[visibility.public_prefixes]]
            path = "/docs/"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "https://api.example.org");
        assert_eq!(config.visibility.public_prefixes.len(), 1);
        assert_eq!(config.visibility.public_prefixes[0].method, "GET");
    }
}
