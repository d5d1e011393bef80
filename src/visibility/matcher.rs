//! Public-endpoint matching logic.
//!
//! # Responsibilities
//! - Match exact (method, path) pairs
//! - Match (method, path-prefix) pairs
//! - Combine rules with OR semantics into one allowlist
//!
//! # Design Decisions
//! - Path matching is case-sensitive, methods are exact
//! - Query strings are ignored; only the path decides visibility
//! - No regex to guarantee O(n) matching over a small fixed table

use reqwest::Method;

use crate::config::schema::VisibilityConfig;

/// Trait for matching an endpoint against a visibility rule.
pub trait EndpointMatcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the (method, path) pair matches this rule.
    fn matches(&self, method: &Method, path: &str) -> bool;
}

/// Matches one exact (method, path) pair.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    method: Method,
    path: String,
}

impl ExactMatcher {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }
}

impl EndpointMatcher for ExactMatcher {
    fn matches(&self, method: &Method, path: &str) -> bool {
        *method == self.method && path == self.path
    }
}

/// Matches any path under a prefix, for one method.
#[derive(Debug, Clone)]
pub struct PrefixMatcher {
    method: Method,
    prefix: String,
}

impl PrefixMatcher {
    pub fn new(method: Method, prefix: impl Into<String>) -> Self {
        Self {
            method,
            prefix: prefix.into(),
        }
    }
}

impl EndpointMatcher for PrefixMatcher {
    fn matches(&self, method: &Method, path: &str) -> bool {
        *method == self.method && path.starts_with(&self.prefix)
    }
}

/// The public-endpoint allowlist: a fixed rule table with OR semantics.
#[derive(Debug)]
pub struct Allowlist {
    rules: Vec<Box<dyn EndpointMatcher>>,
}

impl Allowlist {
    /// The built-in table covering every endpoint the backend serves
    /// unauthenticated.
    pub fn standard() -> Self {
        let rules: Vec<Box<dyn EndpointMatcher>> = vec![
            Box::new(ExactMatcher::new(Method::GET, "/news")),
            Box::new(ExactMatcher::new(Method::GET, "/team")),
            Box::new(ExactMatcher::new(Method::GET, "/partners")),
            Box::new(ExactMatcher::new(Method::GET, "/links")),
            Box::new(ExactMatcher::new(Method::GET, "/notices")),
            Box::new(ExactMatcher::new(Method::POST, "/auth/login")),
            Box::new(PrefixMatcher::new(Method::GET, "/news/")),
            Box::new(PrefixMatcher::new(Method::GET, "/content/")),
        ];
        Self { rules }
    }

    /// The built-in table widened by config additions. Config can only add
    /// rules, never remove built-in ones.
    pub fn from_config(config: &VisibilityConfig) -> Self {
        let mut list = Self::standard();
        for rule in &config.public_exact {
            if let Ok(method) = rule.method.parse::<Method>() {
                list.rules
                    .push(Box::new(ExactMatcher::new(method, rule.path.clone())));
            }
        }
        for rule in &config.public_prefixes {
            if let Ok(method) = rule.method.parse::<Method>() {
                list.rules
                    .push(Box::new(PrefixMatcher::new(method, rule.path.clone())));
            }
        }
        list
    }

    /// Returns true if the endpoint must be called without credentials.
    pub fn is_public(&self, method: &Method, path: &str) -> bool {
        self.rules.iter().any(|r| r.matches(method, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::EndpointRule;

    #[test]
    fn test_exact_matcher() {
        let matcher = ExactMatcher::new(Method::GET, "/news");
        assert!(matcher.matches(&Method::GET, "/news"));
        assert!(!matcher.matches(&Method::POST, "/news"));
        assert!(!matcher.matches(&Method::GET, "/news/42"));
    }

    #[test]
    fn test_prefix_matcher() {
        let matcher = PrefixMatcher::new(Method::GET, "/content/");
        assert!(matcher.matches(&Method::GET, "/content/about"));
        assert!(matcher.matches(&Method::GET, "/content/team"));
        assert!(!matcher.matches(&Method::GET, "/admin/content"));
        assert!(!matcher.matches(&Method::PUT, "/content/about"));
    }

    #[test]
    fn test_standard_table() {
        let list = Allowlist::standard();

        assert!(list.is_public(&Method::GET, "/news"));
        assert!(list.is_public(&Method::GET, "/news/7"));
        assert!(list.is_public(&Method::POST, "/auth/login"));
        assert!(list.is_public(&Method::GET, "/content/partners"));

        // Admin surface always carries credentials.
        assert!(!list.is_public(&Method::POST, "/admin/news"));
        assert!(!list.is_public(&Method::GET, "/admin/links"));
        assert!(!list.is_public(&Method::GET, "/stats/overview"));
        // Same path, wrong method.
        assert!(!list.is_public(&Method::DELETE, "/news"));
    }

    #[test]
    fn test_config_widens_table() {
        let config = VisibilityConfig {
            public_exact: vec![EndpointRule {
                method: "GET".into(),
                path: "/health".into(),
            }],
            public_prefixes: vec![EndpointRule {
                method: "GET".into(),
                path: "/docs/".into(),
            }],
        };
        let list = Allowlist::from_config(&config);

        assert!(list.is_public(&Method::GET, "/health"));
        assert!(list.is_public(&Method::GET, "/docs/setup"));
        // Built-ins survive.
        assert!(list.is_public(&Method::GET, "/news"));
    }
}
