//! Service configuration
//!
//! Loaded from an optional JSON file (`climate-api.json` by default). Every
//! field has a default, so a missing file or a partial one is fine. CLI flags
//! are applied on top by the `cli` module.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::HttpServerConfig;

/// Longest "last year" window accepted, in days (a century)
pub const MAX_WINDOW_DAYS: i64 = 36_500;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "./climate-api.json";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub queries: QueryConfig,
}

/// Dataset location and pool sizing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite dataset (default: "hawaii.sqlite")
    #[serde(default = "default_database_path")]
    pub path: PathBuf,

    /// Upper bound on pooled read connections (default: 4)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds to wait for a free connection (default: 30)
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

/// How the "last year" cutoff is anchored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutoffMode {
    /// Anchor at `QueryConfig::reference_date`
    #[default]
    Fixed,
    /// Anchor at the most recent measurement date in the dataset
    Latest,
}

/// Parameters of the "last year" queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Reference date the cutoff is computed from (default: 2017-08-23)
    #[serde(default = "default_reference_date")]
    pub reference_date: NaiveDate,

    #[serde(default)]
    pub cutoff_mode: CutoffMode,

    /// Days subtracted from the reference date (default: 365)
    #[serde(default = "default_window_days")]
    pub window_days: i64,

    /// Station served by the tobs route (default: "USC00519281")
    #[serde(default = "default_primary_station")]
    pub primary_station: String,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("hawaii.sqlite")
}

fn default_max_connections() -> u32 {
    4
}

fn default_acquire_timeout_secs() -> u64 {
    30
}

fn default_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 8, 23).unwrap_or_default()
}

fn default_window_days() -> i64 {
    365
}

fn default_primary_station() -> String {
    "USC00519281".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            reference_date: default_reference_date(),
            cutoff_mode: CutoffMode::default(),
            window_days: default_window_days(),
            primary_station: default_primary_station(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: ApiConfig = serde_json::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file, or fall back to defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Reject values no query could run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.max_connections must be > 0".to_string(),
            ));
        }

        if !(0..=MAX_WINDOW_DAYS).contains(&self.queries.window_days) {
            return Err(ConfigError::Invalid(format!(
                "queries.window_days must be between 0 and {}",
                MAX_WINDOW_DAYS
            )));
        }

        if self.queries.primary_station.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "queries.primary_station must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
