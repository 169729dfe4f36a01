//! Error types for the query layer.

use chrono::NaiveDate;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Query layer errors
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The cutoff date falls outside the representable calendar
    #[error("Cutoff {window_days} days before {reference} is out of range")]
    CutoffOutOfRange {
        reference: NaiveDate,
        window_days: i64,
    },
}

impl QueryError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::Store(e) => e.code(),
            QueryError::CutoffOutOfRange { .. } => "CLIMATE_QUERY_CUTOFF_OUT_OF_RANGE",
        }
    }
}
