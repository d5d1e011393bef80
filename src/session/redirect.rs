//! Login redirect hook.
//!
//! The 401 teardown ends in a hard navigation to an external login origin.
//! What "navigate" means depends on the host embedding the client, so the
//! seam is a trait: tests record calls, the CLI just logs, an embedding
//! shell can swap in a real navigation.

use url::Url;

/// Hook invoked when the session is torn down.
pub trait LoginRedirect: Send + Sync {
    /// Where the host currently is, if it has a notion of location.
    /// `None` means the guard cannot tell and the redirect proceeds.
    fn current_origin(&self) -> Option<Url>;

    /// Perform the hard redirect to the login origin.
    fn redirect(&self, target: &Url);
}

/// Redirect hook for headless hosts: records the intent in the log and
/// nothing else.
#[derive(Debug, Default)]
pub struct LogOnlyRedirect;

impl LoginRedirect for LogOnlyRedirect {
    fn current_origin(&self) -> Option<Url> {
        None
    }

    fn redirect(&self, target: &Url) {
        tracing::warn!(target = %target, "Session expired, login required");
    }
}
