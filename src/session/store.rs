//! Session storage bins.
//!
//! Two key/value bins with different lifetimes, modeled after the two kinds
//! of browser storage the backend expects its clients to use:
//! - durable: identity state (`token`, `user`), optionally persisted to a
//!   JSON file across restarts
//! - volatile: the per-tab session id, memory only

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;

use crate::session::id;

/// Durable key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Durable key holding the cached profile blob.
pub const USER_KEY: &str = "user";
/// Volatile key holding the view-tracking session id.
pub const SESSION_ID_KEY: &str = "session_id";

/// Thread-safe session storage shared by both client handles.
#[derive(Clone, Default)]
pub struct SessionStore {
    durable: Arc<DashMap<String, String>>,
    volatile: Arc<DashMap<String, String>>,
    persistence_path: Option<PathBuf>,
}

impl SessionStore {
    /// Create an empty store. The path, when given, is where the durable
    /// bin is saved; nothing is written until identity state changes.
    pub fn new(persistence_path: Option<PathBuf>) -> Self {
        Self {
            durable: Arc::new(DashMap::new()),
            volatile: Arc::new(DashMap::new()),
            persistence_path,
        }
    }

    /// Load the durable bin from a file if it exists.
    pub fn load_from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let store = Self::new(Some(path.to_path_buf()));
        if path.exists() {
            let file = File::open(path)?;
            let reader = BufReader::new(file);
            let map: HashMap<String, String> = serde_json::from_reader(reader)?;

            for (k, v) in map {
                store.durable.insert(k, v);
            }
            tracing::info!(
                entries = store.durable.len(),
                path = %path.display(),
                "Loaded session state"
            );
        }
        Ok(store)
    }

    /// Save the durable bin. No-op without a persistence path.
    pub fn save_to_file(&self) -> std::io::Result<()> {
        if let Some(path) = &self.persistence_path {
            let file = File::create(path)?;
            let writer = BufWriter::new(file);

            let map: HashMap<String, String> = self
                .durable
                .iter()
                .map(|r| (r.key().clone(), r.value().clone()))
                .collect();

            serde_json::to_writer(writer, &map)?;
        }
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.durable.get(TOKEN_KEY).map(|r| r.value().clone())
    }

    pub fn set_token(&self, token: impl Into<String>) {
        self.durable.insert(TOKEN_KEY.to_string(), token.into());
        self.persist_best_effort();
    }

    pub fn user_profile(&self) -> Option<serde_json::Value> {
        self.durable
            .get(USER_KEY)
            .and_then(|r| serde_json::from_str(r.value()).ok())
    }

    pub fn set_user_profile(&self, profile: &serde_json::Value) {
        self.durable
            .insert(USER_KEY.to_string(), profile.to_string());
        self.persist_best_effort();
    }

    /// Drop the token and cached profile. Used on logout and on 401.
    pub fn clear_identity(&self) {
        self.durable.remove(TOKEN_KEY);
        self.durable.remove(USER_KEY);
        self.persist_best_effort();
    }

    /// The session id, generated and stored on first use. Stable for the
    /// lifetime of this store.
    pub fn session_id(&self) -> String {
        self.volatile
            .entry(SESSION_ID_KEY.to_string())
            .or_insert_with(|| {
                let sid = id::generate();
                tracing::debug!(session_id = %sid, "Generated session id");
                sid
            })
            .value()
            .clone()
    }

    /// Read an arbitrary durable entry (e.g., preference blobs).
    pub fn get(&self, key: &str) -> Option<String> {
        self.durable.get(key).map(|r| r.value().clone())
    }

    /// Write an arbitrary durable entry.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.durable.insert(key.into(), value.into());
        self.persist_best_effort();
    }

    fn persist_best_effort(&self) {
        if let Err(e) = self.save_to_file() {
            tracing::warn!(error = %e, "Failed to persist session state");
        }
    }
}
