//! Record shapes of the climate dataset
//!
//! The `measurement` and `station` tables are declared here rather than
//! discovered from the database at startup. `schema.rs` checks that the
//! opened file actually has these columns.

use serde::Serialize;
use sqlx::FromRow;

/// One weather observation
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Measurement {
    pub id: i64,
    /// Identifier of the observing station
    pub station: String,
    /// Observation date, stored as `YYYY-MM-DD` text
    pub date: String,
    /// Precipitation amount, absent on days without a reading
    pub prcp: Option<f64>,
    /// Observed temperature
    pub tobs: f64,
}

/// Metadata for one observing site
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Station {
    pub id: i64,
    /// Station identifier; NULL in the dataset reads as `None`
    pub station: Option<String>,
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

/// The `(date, prcp)` projection of a measurement
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

/// Temperature aggregate over a date range
///
/// Every field is `None` when no measurement matched. On the wire this is
/// the positional array `[min, avg, max]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, FromRow)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureStats {
    /// True when the aggregate covered zero rows
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }
}

impl Serialize for TemperatureStats {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.min, self.avg, self.max).serialize(serializer)
    }
}

/// Overview of what the opened dataset holds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub measurement_count: i64,
    pub station_count: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}
