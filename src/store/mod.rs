//! # Climate Data Store
//!
//! Read-only access to the `measurement` and `station` tables of a
//! pre-populated SQLite dataset.

mod climate_store;
pub mod errors;
pub mod models;
pub mod schema;

pub use climate_store::ClimateStore;
pub use errors::{StoreError, StoreResult};
pub use models::{DatasetSummary, Measurement, PrecipitationReading, Station, TemperatureStats};
