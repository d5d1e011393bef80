//! Endpoint visibility subsystem.
//!
//! Decides, per outgoing request, whether the target endpoint is public.
//! Public endpoints must never carry the bearer token, even when one sits
//! in storage: a stale or invalid token would turn a request that should
//! succeed unauthenticated into a 401.

pub mod matcher;

pub use matcher::{Allowlist, EndpointMatcher, ExactMatcher, PrefixMatcher};
