//! Metrics collection.
//!
//! # Metrics
//! - `cms_client_requests_total` (counter): physical requests by method, status
//! - `cms_client_retries_total` (counter): transient-failure retries
//! - `cms_client_session_teardowns_total` (counter): 401 teardowns
//!
//! # Design Decisions
//! - Counters only; latency histograms belong to the embedding host
//! - Status label is the numeric code, or "network_error" when no response
//!   arrived

use metrics::counter;

/// Record one physical request attempt and its outcome.
pub fn record_request(method: &str, status: Option<u16>) {
    let status_label = match status {
        Some(code) => code.to_string(),
        None => "network_error".to_string(),
    };
    counter!(
        "cms_client_requests_total",
        "method" => method.to_string(),
        "status" => status_label,
    )
    .increment(1);
}

/// Record one transient-failure retry.
pub fn record_retry(method: &str) {
    counter!("cms_client_retries_total", "method" => method.to_string()).increment(1);
}

/// Record one 401 session teardown.
pub fn record_session_teardown() {
    counter!("cms_client_session_teardowns_total").increment(1);
}
