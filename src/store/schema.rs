//! Dataset schema declaration and startup check
//!
//! The API never creates tables. `DATASET_DDL` documents the layout of the
//! `hawaii.sqlite` dataset (and is what test fixtures are built from);
//! `verify` fails fast when the opened file does not match it.

use sqlx::SqlitePool;

use super::errors::{StoreError, StoreResult};

/// Table holding one row per observation
pub const MEASUREMENT_TABLE: &str = "measurement";

/// Table holding one row per observing station
pub const STATION_TABLE: &str = "station";

/// Columns each table must expose for the read queries to work
pub const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    (MEASUREMENT_TABLE, &["station", "date", "prcp", "tobs"]),
    (STATION_TABLE, &["station"]),
];

/// Layout of the climate dataset
pub const DATASET_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS measurement (
    id      INTEGER NOT NULL PRIMARY KEY,
    station TEXT,
    date    TEXT,
    prcp    FLOAT,
    tobs    FLOAT
);

CREATE TABLE IF NOT EXISTS station (
    id        INTEGER NOT NULL PRIMARY KEY,
    station   TEXT,
    name      TEXT,
    latitude  FLOAT,
    longitude FLOAT,
    elevation FLOAT
);

CREATE INDEX IF NOT EXISTS idx_measurement_date ON measurement (date);
CREATE INDEX IF NOT EXISTS idx_measurement_station ON measurement (station);
"#;

/// Check that every required table and column is present.
pub async fn verify(pool: &SqlitePool) -> StoreResult<()> {
    for &(table, columns) in REQUIRED_COLUMNS {
        let present: Vec<String> =
            sqlx::query_scalar("SELECT name FROM pragma_table_info(?1)")
                .bind(table)
                .fetch_all(pool)
                .await?;

        if present.is_empty() {
            return Err(StoreError::MissingTable(table));
        }

        for &column in columns {
            if !present.iter().any(|name| name.eq_ignore_ascii_case(column)) {
                return Err(StoreError::MissingColumn { table, column });
            }
        }
    }

    tracing::debug!("climate dataset schema verified");
    Ok(())
}
