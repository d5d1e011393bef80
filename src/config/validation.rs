//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate URLs parse and carry an http(s) scheme
//! - Validate value ranges (timeouts > 0)
//! - Validate allowlist additions are well-formed
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the client

use url::Url;

use crate::config::schema::{ClientConfig, EndpointRule};

/// A single semantic problem found in a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "retries.base_delay_ms").
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a deserialized config, collecting every problem found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_http_url(&config.base_url, "base_url", &mut errors);
    check_http_url(&config.login_origin, "login_origin", &mut errors);

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.connect_secs".into(),
            message: "must be greater than zero".into(),
        });
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.request_secs".into(),
            message: "must be greater than zero".into(),
        });
    }

    if config.retries.enabled && config.retries.base_delay_ms == 0 && config.retries.jitter_ms == 0
    {
        errors.push(ValidationError {
            field: "retries".into(),
            message: "retry enabled with a zero backoff window".into(),
        });
    }

    for (i, rule) in config.visibility.public_exact.iter().enumerate() {
        check_rule(rule, &format!("visibility.public_exact[{}]", i), &mut errors);
    }
    for (i, rule) in config.visibility.public_prefixes.iter().enumerate() {
        check_rule(
            rule,
            &format!("visibility.public_prefixes[{}]", i),
            &mut errors,
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_http_url(value: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if value.is_empty() {
        errors.push(ValidationError {
            field: field.into(),
            message: "must be set".into(),
        });
        return;
    }
    match Url::parse(value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError {
            field: field.into(),
            message: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError {
            field: field.into(),
            message: format!("invalid URL: {}", e),
        }),
    }
}

fn check_rule(rule: &EndpointRule, field: &str, errors: &mut Vec<ValidationError>) {
    if !rule.path.starts_with('/') {
        errors.push(ValidationError {
            field: field.into(),
            message: format!("path '{}' must start with '/'", rule.path),
        });
    }
    if rule.method.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push(ValidationError {
            field: field.into(),
            message: format!("method '{}' must be uppercase", rule.method),
        });
    }
}
