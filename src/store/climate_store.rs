//! Read-only access to the climate dataset
//!
//! Every method acquires its own connection from the pool for the duration
//! of one query. The pool is opened read-only, so concurrent requests never
//! observe a write.

use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::errors::{StoreError, StoreResult};
use super::models::{
    DatasetSummary, Measurement, PrecipitationReading, Station, TemperatureStats,
};
use super::schema;
use crate::config::DatabaseConfig;

const PRECIPITATION_SINCE: &str = r#"
SELECT date, CAST(prcp AS REAL) AS prcp
FROM measurement
WHERE date >= ?1
"#;

const STATION_IDS: &str = "SELECT station FROM station";

const STATIONS: &str = r#"
SELECT id, station, name,
       CAST(latitude AS REAL) AS latitude,
       CAST(longitude AS REAL) AS longitude,
       CAST(elevation AS REAL) AS elevation
FROM station
"#;

const TEMPERATURES_SINCE: &str = r#"
SELECT CAST(tobs AS REAL)
FROM measurement
WHERE station = ?1 AND date >= ?2
"#;

const TEMPERATURE_STATS_FROM: &str = r#"
SELECT CAST(MIN(tobs) AS REAL) AS min,
       AVG(tobs) AS avg,
       CAST(MAX(tobs) AS REAL) AS max
FROM measurement
WHERE date >= ?1
"#;

const TEMPERATURE_STATS_BETWEEN: &str = r#"
SELECT CAST(MIN(tobs) AS REAL) AS min,
       AVG(tobs) AS avg,
       CAST(MAX(tobs) AS REAL) AS max
FROM measurement
WHERE date >= ?1 AND date <= ?2
"#;

const LATEST_MEASUREMENT: &str = r#"
SELECT id, station, date,
       CAST(prcp AS REAL) AS prcp,
       CAST(tobs AS REAL) AS tobs
FROM measurement
ORDER BY date DESC
LIMIT 1
"#;

const SUMMARY: &str = r#"
SELECT (SELECT COUNT(*) FROM measurement) AS measurement_count,
       (SELECT COUNT(*) FROM station) AS station_count,
       (SELECT MIN(date) FROM measurement) AS first_date,
       (SELECT MAX(date) FROM measurement) AS last_date
"#;

/// Handle on the climate dataset
#[derive(Debug, Clone)]
pub struct ClimateStore {
    pool: SqlitePool,
}

impl ClimateStore {
    /// Open the dataset read-only and verify its schema.
    ///
    /// Fails if the file does not exist; the store never creates one.
    pub async fn open(config: &DatabaseConfig) -> StoreResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_with(options)
            .await
            .map_err(|source| StoreError::Connect {
                path: config.path.clone(),
                source,
            })?;

        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, verifying the schema first
    pub async fn from_pool(pool: SqlitePool) -> StoreResult<Self> {
        schema::verify(&pool).await?;
        Ok(Self { pool })
    }

    /// `(date, prcp)` for every measurement on or after `cutoff`, in store order
    pub async fn precipitation_since(&self, cutoff: &str) -> StoreResult<Vec<PrecipitationReading>> {
        let rows = sqlx::query_as(PRECIPITATION_SINCE)
            .bind(cutoff)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Every station identifier, in store order. A NULL identifier is kept
    /// as `None` rather than failing the whole listing.
    pub async fn station_ids(&self) -> StoreResult<Vec<Option<String>>> {
        let ids = sqlx::query_scalar(STATION_IDS).fetch_all(&self.pool).await?;
        Ok(ids)
    }

    /// Full station records, in store order
    pub async fn stations(&self) -> StoreResult<Vec<Station>> {
        let stations = sqlx::query_as(STATIONS).fetch_all(&self.pool).await?;
        Ok(stations)
    }

    /// Observed temperatures of one station on or after `cutoff`, in store order
    pub async fn temperatures_since(&self, station: &str, cutoff: &str) -> StoreResult<Vec<f64>> {
        let temps = sqlx::query_scalar(TEMPERATURES_SINCE)
            .bind(station)
            .bind(cutoff)
            .fetch_all(&self.pool)
            .await?;
        Ok(temps)
    }

    /// MIN/AVG/MAX of `tobs` for `start <= date` (and `date <= end` if given).
    ///
    /// The bounds are compared as text, exactly as supplied.
    pub async fn temperature_stats(&self, start: &str, end: Option<&str>) -> StoreResult<TemperatureStats> {
        let stats = match end {
            Some(end) => {
                sqlx::query_as(TEMPERATURE_STATS_BETWEEN)
                    .bind(start)
                    .bind(end)
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as(TEMPERATURE_STATS_FROM)
                    .bind(start)
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(stats)
    }

    /// The measurement with the greatest date, if any
    pub async fn latest_measurement(&self) -> StoreResult<Option<Measurement>> {
        let latest = sqlx::query_as(LATEST_MEASUREMENT)
            .fetch_optional(&self.pool)
            .await?;
        Ok(latest)
    }

    /// Row counts and date range of the dataset
    pub async fn summary(&self) -> StoreResult<DatasetSummary> {
        let (measurement_count, station_count, first_date, last_date): (
            i64,
            i64,
            Option<String>,
            Option<String>,
        ) = sqlx::query_as(SUMMARY).fetch_one(&self.pool).await?;

        Ok(DatasetSummary {
            measurement_count,
            station_count,
            first_date,
            last_date,
        })
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
