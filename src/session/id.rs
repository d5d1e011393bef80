//! Session id generation.
//!
//! Format: `sess-<unix seconds>-<6 random alphanumerics>`. The id only has
//! to be unique enough for coarse view-tracking correlation; collisions are
//! harmless and it carries no authentication weight.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::distributions::Alphanumeric;
use rand::Rng;

const PREFIX: &str = "sess";
const SUFFIX_LEN: usize = 6;

/// Generate a fresh session id.
pub fn generate() -> String {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(char::from)
        .collect();

    format!("{}-{}-{}", PREFIX, ts, suffix)
}
