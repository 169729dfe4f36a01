//! # Climate API HTTP Server Module
//!
//! Axum server exposing the climate dataset as JSON.
//!
//! # Endpoints
//!
//! - `/` - Route listing (plain text)
//! - `/api/v1.0/precipitation` - Last year's precipitation by date
//! - `/api/v1.0/stations` - Station identifiers
//! - `/api/v1.0/tobs` - Last year's temperatures of the primary station
//! - `/api/v1.0/temp/{start}[/{end}]` - `[min, avg, max]` temperature

pub mod climate_routes;
pub mod config;
pub mod errors;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
