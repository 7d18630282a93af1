//! Environment-driven server configuration.

use std::env;
use thiserror::Error;

/// Default bind address when `TASKBOARD_ADDR` is unset.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Errors returned while reading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `TASKBOARD_STORE` names an unknown backend.
    #[error("unknown store backend '{0}', expected 'memory' or 'postgres'")]
    UnknownStore(String),

    /// The Postgres backend was selected without a connection string.
    #[error("DATABASE_URL must be set when the postgres store is selected")]
    MissingDatabaseUrl,
}

/// Persistence backend selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// Volatile in-process store; records do not survive a restart.
    Memory,
    /// Diesel-backed `PostgreSQL` store.
    Postgres {
        /// Connection string passed to the r2d2 pool.
        database_url: String,
    },
}

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Selected persistence backend.
    pub store: StoreConfig,
}

impl Config {
    /// Reads configuration from process environment variables.
    ///
    /// `TASKBOARD_ADDR` sets the bind address (default `127.0.0.1:3000`).
    /// `TASKBOARD_STORE` selects `memory` or `postgres`; when unset, the
    /// presence of `DATABASE_URL` selects Postgres.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unknown store name or a missing
    /// `DATABASE_URL` with the Postgres store selected.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through an injectable variable lookup.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("TASKBOARD_ADDR")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let database_url = lookup("DATABASE_URL").filter(|value| !value.trim().is_empty());

        let store = match lookup("TASKBOARD_STORE").as_deref().map(str::trim) {
            None | Some("") => database_url.map_or(StoreConfig::Memory, |url| {
                StoreConfig::Postgres { database_url: url }
            }),
            Some("memory") => StoreConfig::Memory,
            Some("postgres") => StoreConfig::Postgres {
                database_url: database_url.ok_or(ConfigError::MissingDatabaseUrl)?,
            },
            Some(other) => return Err(ConfigError::UnknownStore(other.to_owned())),
        };

        Ok(Self { bind_addr, store })
    }
}
