//! Document store configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Environment variable holding the connection string.
pub const URI_VAR: &str = "MONGO_URI";
/// Environment variable holding the database name.
pub const DATABASE_VAR: &str = "MONGO_DB";
/// Environment variable holding the collection name.
pub const COLLECTION_VAR: &str = "MONGO_COLLECTION";

/// Connection settings for the sample collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Connection string
    pub uri: String,
    /// Database name
    pub database: String,
    /// Collection samples are inserted into
    pub collection: String,
    /// Upper bound on the initial connection handshake, in seconds
    pub connect_timeout_secs: u64,
}

impl StorageConfig {
    /// Create a configuration with the default handshake timeout.
    pub fn new(
        uri: impl Into<String>,
        database: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            collection: collection.into(),
            connect_timeout_secs: crate::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }

    /// Set the handshake timeout.
    pub fn with_connect_timeout_secs(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    /// Handshake timeout as a [`Duration`].
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Build a configuration from a variable lookup.
    ///
    /// Returns `None` when any of the three variables is missing or blank,
    /// which means samples go to the console instead.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Some(Self::new(
            get(URI_VAR)?,
            get(DATABASE_VAR)?,
            get(COLLECTION_VAR)?,
        ))
    }

    /// Build a configuration from the process environment.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load `env_file` into the environment, then read the configuration.
    ///
    /// A missing or unreadable file is not fatal; variables already set in
    /// the environment still apply and are never overridden by the file.
    pub fn load(env_file: &Path) -> Option<Self> {
        match dotenvy::from_path(env_file) {
            Ok(()) => info!("Loaded environment from {}", env_file.display()),
            Err(e) => warn!("Could not load {}: {}", env_file.display(), e),
        }

        let config = Self::from_env();
        if config.is_none() {
            warn!(
                "{}, {} or {} not set, results will only be printed to the terminal",
                URI_VAR, DATABASE_VAR, COLLECTION_VAR
            );
        }
        config
    }
}
