//! Retry backoff with jitter.

use std::time::Duration;

use rand::Rng;

/// Calculate the delay before the single retry: a fixed base plus a random
/// jitter bounded by `jitter_ms`.
pub fn retry_delay(base_ms: u64, jitter_ms: u64) -> Duration {
    let jitter = if jitter_ms > 0 {
        rand::thread_rng().gen_range(0..=jitter_ms)
    } else {
        0
    };

    Duration::from_millis(base_ms.saturating_add(jitter))
}
