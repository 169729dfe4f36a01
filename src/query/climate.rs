//! The read operations behind each API route

use std::collections::BTreeMap;

use crate::config::QueryConfig;
use crate::store::{ClimateStore, TemperatureStats};

use super::cutoff;
use super::errors::QueryResult;

/// Date → precipitation, with dates in ascending order
pub type PrecipitationByDate = BTreeMap<String, Option<f64>>;

/// Text served at `/`
pub const WELCOME_TEXT: &str = "Welcome to the Hawaii Climate Analysis API\n\
Available Routes:\n\
/api/v1.0/precipitation\n\
/api/v1.0/stations\n\
/api/v1.0/tobs\n\
/api/v1.0/temp/<start>\n\
/api/v1.0/temp/<start>/<end>\n";

/// Query layer over the climate store
#[derive(Debug, Clone)]
pub struct ClimateQueries {
    store: ClimateStore,
    config: QueryConfig,
}

impl ClimateQueries {
    pub fn new(store: ClimateStore, config: QueryConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &ClimateStore {
        &self.store
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Static description of the available routes
    pub fn welcome(&self) -> &'static str {
        WELCOME_TEXT
    }

    /// Precipitation for the last year, keyed by date.
    ///
    /// When several stations report the same date, the row returned last by
    /// the store wins.
    pub async fn precipitation(&self) -> QueryResult<PrecipitationByDate> {
        let cutoff = cutoff::resolve(&self.store, &self.config).await?;
        let readings = self.store.precipitation_since(&cutoff).await?;

        let mut by_date = PrecipitationByDate::new();
        for reading in readings {
            by_date.insert(reading.date, reading.prcp);
        }

        tracing::debug!(cutoff = %cutoff, dates = by_date.len(), "precipitation query");
        Ok(by_date)
    }

    /// Every station identifier, in store order; NULL identifiers stay `None`
    pub async fn stations(&self) -> QueryResult<Vec<Option<String>>> {
        Ok(self.store.station_ids().await?)
    }

    /// Last year's temperature observations of the primary station
    pub async fn tobs(&self) -> QueryResult<Vec<f64>> {
        let cutoff = cutoff::resolve(&self.store, &self.config).await?;
        let temps = self
            .store
            .temperatures_since(&self.config.primary_station, &cutoff)
            .await?;

        tracing::debug!(
            cutoff = %cutoff,
            station = %self.config.primary_station,
            observations = temps.len(),
            "tobs query"
        );
        Ok(temps)
    }

    /// MIN/AVG/MAX temperature from `start`, optionally up to `end` (inclusive).
    ///
    /// Neither bound is validated; a range matching nothing yields all-`None`.
    pub async fn temperature_stats(&self, start: &str, end: Option<&str>) -> QueryResult<TemperatureStats> {
        Ok(self.store.temperature_stats(start, end).await?)
    }
}
