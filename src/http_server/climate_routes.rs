//! Climate HTTP Routes
//!
//! The welcome page and the four `/api/v1.0` query endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::query::{ClimateQueries, PrecipitationByDate};
use crate::store::TemperatureStats;

use super::errors::ApiResult;

/// Shared state type
pub type ClimateState = Arc<ClimateQueries>;

/// Create climate routes
pub fn climate_routes(state: ClimateState) -> Router {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/temp/{start}", get(temp_from_handler))
        .route("/api/v1.0/temp/{start}/{end}", get(temp_range_handler))
        .with_state(state)
}

/// Route listing, as plain text
async fn welcome_handler(State(queries): State<ClimateState>) -> &'static str {
    queries.welcome()
}

/// Last year's precipitation by date
async fn precipitation_handler(
    State(queries): State<ClimateState>,
) -> ApiResult<Json<PrecipitationByDate>> {
    Ok(Json(queries.precipitation().await?))
}

/// All station identifiers
async fn stations_handler(
    State(queries): State<ClimateState>,
) -> ApiResult<Json<Vec<Option<String>>>> {
    Ok(Json(queries.stations().await?))
}

/// Last year's temperature observations of the primary station
async fn tobs_handler(State(queries): State<ClimateState>) -> ApiResult<Json<Vec<f64>>> {
    Ok(Json(queries.tobs().await?))
}

/// `[min, avg, max]` from `start` onwards
async fn temp_from_handler(
    State(queries): State<ClimateState>,
    Path(start): Path<String>,
) -> ApiResult<Json<TemperatureStats>> {
    Ok(Json(queries.temperature_stats(&start, None).await?))
}

/// `[min, avg, max]` between `start` and `end`, both inclusive
async fn temp_range_handler(
    State(queries): State<ClimateState>,
    Path((start, end)): Path<(String, String)>,
) -> ApiResult<Json<TemperatureStats>> {
    Ok(Json(queries.temperature_stats(&start, Some(end.as_str())).await?))
}
