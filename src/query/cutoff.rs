//! Cutoff date for the "last year" queries

use chrono::{NaiveDate, TimeDelta};

use crate::config::{CutoffMode, QueryConfig};
use crate::store::ClimateStore;

use super::errors::{QueryError, QueryResult};

/// Date format of the `measurement.date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `reference - window_days`, or `None` if that leaves the calendar
pub fn cutoff_from(reference: NaiveDate, window_days: i64) -> Option<NaiveDate> {
    reference.checked_sub_signed(TimeDelta::try_days(window_days)?)
}

/// Format a date the way the dataset stores it
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Resolve the date the cutoff is anchored at.
///
/// In `Latest` mode an empty dataset or an unparsable stored date falls back
/// to the configured reference date.
pub async fn reference_date(store: &ClimateStore, config: &QueryConfig) -> QueryResult<NaiveDate> {
    if config.cutoff_mode == CutoffMode::Fixed {
        return Ok(config.reference_date);
    }

    let latest = store.latest_measurement().await?;
    let Some(latest) = latest else {
        tracing::warn!(
            fallback = %config.reference_date,
            "dataset has no measurements, using configured reference date"
        );
        return Ok(config.reference_date);
    };

    match NaiveDate::parse_from_str(&latest.date, DATE_FORMAT) {
        Ok(date) => Ok(date),
        Err(e) => {
            tracing::warn!(
                stored = %latest.date,
                fallback = %config.reference_date,
                error = %e,
                "latest measurement date is not a calendar date, using configured reference date"
            );
            Ok(config.reference_date)
        }
    }
}

/// Resolve the cutoff as a string ready to bind against `measurement.date`
pub async fn resolve(store: &ClimateStore, config: &QueryConfig) -> QueryResult<String> {
    let reference = reference_date(store, config).await?;
    let cutoff = cutoff_from(reference, config.window_days).ok_or(QueryError::CutoffOutOfRange {
        reference,
        window_days: config.window_days,
    })?;
    Ok(format_date(cutoff))
}
