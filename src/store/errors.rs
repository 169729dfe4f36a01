//! Error types for the climate data store.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Climate store errors
///
/// Everything except `Query` is raised while opening the store and is fatal
/// at startup.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened
    #[error("Failed to open climate database '{}': {source}", .path.display())]
    Connect {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },

    /// A required table is absent from the dataset
    #[error("Climate database is missing table '{0}'")]
    MissingTable(&'static str),

    /// A required column is absent from a table
    #[error("Table '{table}' is missing column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    /// A read query failed
    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),
}

impl StoreError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Connect { .. } => "CLIMATE_STORE_UNREACHABLE",
            StoreError::MissingTable(_) => "CLIMATE_STORE_MISSING_TABLE",
            StoreError::MissingColumn { .. } => "CLIMATE_STORE_MISSING_COLUMN",
            StoreError::Query(_) => "CLIMATE_STORE_QUERY_FAILED",
        }
    }

    /// Whether the error can only happen while opening the store
    pub fn is_startup_error(&self) -> bool {
        !matches!(self, StoreError::Query(_))
    }
}
