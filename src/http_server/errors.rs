//! # HTTP Errors
//!
//! Request-time failures. Every one maps to a bare 500; the cause is logged
//! and never echoed to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::query::QueryError;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Route handler errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// The query layer failed while answering a request
    #[error("{0}")]
    Query(#[from] QueryError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Query(e) => {
                tracing::error!(code = e.code(), error = %e, "request failed");
            }
        }
        let reason = status.canonical_reason().unwrap_or("Internal Server Error");
        (status, reason).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::store::StoreError;
    use chrono::NaiveDate;

    #[test]
    fn test_store_failure_is_server_error() {
        let err = ApiError::from(QueryError::from(StoreError::Query(sqlx::Error::PoolTimedOut)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_cutoff_out_of_range_is_server_error() {
        let err = ApiError::from(QueryError::CutoffOutOfRange {
            reference: NaiveDate::from_ymd_opt(2017, 8, 23).unwrap(),
            window_days: i64::MAX,
        });
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
