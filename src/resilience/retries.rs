//! Transient-failure classification.
//!
//! # Responsibilities
//! - Decide whether a transport error is worth the single retry
//!
//! # Design Decisions
//! - Transient means no server response arrived: timeouts, refused
//!   connections, DNS failures, connections dropped mid-flight. The
//!   classification is deliberately coarse; finer distinctions buy nothing
//!   when the budget is one retry either way
//! - Anything the server actually answered is never transient

/// Returns true if the error is a transport-level failure with no server
/// response behind it.
pub fn is_transient(err: &reqwest::Error) -> bool {
    if err.is_builder() || err.is_decode() {
        return false;
    }
    err.is_timeout() || err.is_connect() || err.is_request()
}
