//! Session state subsystem.
//!
//! # Data Flow
//! ```text
//! login response
//!     → store.rs (durable bin: token + profile)
//! first request
//!     → id.rs (generate session id)
//!     → store.rs (volatile bin: session_id)
//! HTTP 401
//!     → Session::expire (clear identity, guarded redirect)
//! ```
//!
//! # Design Decisions
//! - All session state is injected into the client, never ambient
//! - Durable vs volatile bins mirror their different lifetimes: identity
//!   survives restarts (when persistence is on), the session id does not
//! - The redirect target is a fixed external origin; the guard makes the
//!   teardown idempotent when we are already there

pub mod id;
pub mod redirect;
pub mod store;

pub use redirect::{LogOnlyRedirect, LoginRedirect};
pub use store::{SessionStore, SESSION_ID_KEY, TOKEN_KEY, USER_KEY};

use std::sync::Arc;

use url::Url;

use crate::config::schema::SessionConfig;
use crate::observability::metrics;

/// Everything the client needs to know about the current session: the two
/// storage bins plus the login-origin redirect hook.
#[derive(Clone)]
pub struct Session {
    store: SessionStore,
    redirect: Arc<dyn LoginRedirect>,
    login_origin: Url,
}

impl Session {
    pub fn new(store: SessionStore, redirect: Arc<dyn LoginRedirect>, login_origin: Url) -> Self {
        Self {
            store,
            redirect,
            login_origin,
        }
    }

    /// Build a session from config with an in-memory or file-backed store.
    pub fn from_config(
        config: &SessionConfig,
        redirect: Arc<dyn LoginRedirect>,
        login_origin: Url,
    ) -> std::io::Result<Self> {
        let store = match &config.persistence_path {
            Some(path) => SessionStore::load_from_file(path)?,
            None => SessionStore::new(None),
        };
        Ok(Self::new(store, redirect, login_origin))
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn login_origin(&self) -> &Url {
        &self.login_origin
    }

    /// Tear down the session after the backend rejected our credentials.
    ///
    /// Clears the token and cached profile, then redirects to the login
    /// origin unless the current location is already there. Runs on every
    /// 401; the origin guard is what keeps it idempotent.
    pub fn expire(&self) {
        self.store.clear_identity();
        metrics::record_session_teardown();

        let already_there = self
            .redirect
            .current_origin()
            .map(|origin| same_origin(&origin, &self.login_origin))
            .unwrap_or(false);

        if already_there {
            tracing::debug!(
                login_origin = %self.login_origin,
                "Session expired while already at login origin, skipping redirect"
            );
            return;
        }

        tracing::info!(
            login_origin = %self.login_origin,
            "Session expired, redirecting to login"
        );
        self.redirect.redirect(&self.login_origin);
    }
}

/// Compare scheme, host and port; paths and queries are irrelevant here.
fn same_origin(a: &Url, b: &Url) -> bool {
    a.origin() == b.origin()
}
