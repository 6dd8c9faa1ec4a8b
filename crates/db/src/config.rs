//! # Store Configuration
//!
//! Settings for the database-backed binaries, read from environment variables:
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 5)
//! - `LOG_LEVEL`: trace, debug, info, warn or error (default: "info")

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// PostgreSQL database connection string
    pub database_url: String,

    /// Maximum number of pooled connections
    pub max_connections: u32,

    /// Log level for the application
    pub log_level: Level,
}

impl StoreConfig {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// - `DATABASE_URL` is not set
    /// - `DATABASE_MAX_CONNECTIONS` is not a positive integer
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`StoreConfig::from_env`] but with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| eyre::eyre!("DATABASE_URL environment variable must be set"))?;

        let max_connections: u32 = lookup("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse()
            .wrap_err("Invalid DATABASE_MAX_CONNECTIONS value")?;
        if max_connections == 0 {
            eyre::bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }

        let log_level = parse_log_level(lookup("LOG_LEVEL").as_deref().unwrap_or("info"));

        Ok(Self {
            database_url,
            max_connections,
            log_level,
        })
    }
}

/// Unknown values fall back to `INFO`.
pub fn parse_log_level(value: &str) -> Level {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
