//! Climate Store and Query Layer Tests
//!
//! Exercise the read queries against an on-disk fixture dataset:
//! - last-year cutoff and last-write-wins precipitation
//! - store-order station and tobs listings
//! - MIN/AVG/MAX with open and closed date ranges
//! - fixed vs latest cutoff anchoring

mod common;

use chrono::NaiveDate;
use climate_api::config::{CutoffMode, QueryConfig};
use climate_api::query::{cutoff, ClimateQueries, QueryError};
use climate_api::store::{ClimateStore, StoreError, TemperatureStats};
use common::*;
use tempfile::TempDir;

// =============================================================================
// Opening
// =============================================================================

#[tokio::test]
async fn test_open_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    let err = ClimateStore::open(&database_config(&tmp.path().join("absent.sqlite")))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Connect { .. }));
    assert!(err.is_startup_error());
}

#[tokio::test]
async fn test_open_without_measurement_table_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("stations-only.sqlite");

    let options = sqlx::sqlite::SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true);
    let pool = sqlx::SqlitePool::connect_with(options).await.unwrap();
    sqlx::query("CREATE TABLE station (id INTEGER PRIMARY KEY, station TEXT)")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    let err = ClimateStore::open(&database_config(&path)).await.unwrap_err();
    assert!(matches!(err, StoreError::MissingTable("measurement")));
}

#[tokio::test]
async fn test_summary_and_latest_measurement() {
    let (_tmp, path) = fixture_dataset().await;
    let store = ClimateStore::open(&database_config(&path)).await.unwrap();

    let summary = store.summary().await.unwrap();
    assert_eq!(summary.measurement_count, MEASUREMENTS.len() as i64);
    assert_eq!(summary.station_count, STATIONS.len() as i64);
    assert_eq!(summary.first_date.as_deref(), Some("2010-01-01"));
    assert_eq!(summary.last_date.as_deref(), Some("2017-08-23"));

    let latest = store.latest_measurement().await.unwrap().unwrap();
    assert_eq!(latest.date, "2017-08-23");
    assert_eq!(latest.station, PRIMARY_STATION);

    let stations = store.stations().await.unwrap();
    assert_eq!(stations.len(), STATIONS.len());
    assert_eq!(stations[2].name.as_deref(), Some("WAIHEE 837.5, HI US"));
}

// =============================================================================
// Query Layer
// =============================================================================

#[tokio::test]
async fn test_precipitation_respects_cutoff() {
    let (_tmp, queries) = fixture_queries(QueryConfig::default()).await;
    let precip = queries.precipitation().await.unwrap();

    let dates: Vec<&str> = precip.keys().map(String::as_str).collect();
    assert_eq!(
        dates,
        vec!["2016-08-23", "2017-01-15", "2017-01-20", "2017-02-01", "2017-08-23"]
    );
    assert!(dates.iter().all(|d| *d >= "2016-08-23"));
}

#[tokio::test]
async fn test_precipitation_last_row_wins_for_shared_date() {
    let (_tmp, queries) = fixture_queries(QueryConfig::default()).await;
    let precip = queries.precipitation().await.unwrap();

    // Three stations reported 2016-08-23; the last inserted row is 1.79
    assert_eq!(precip["2016-08-23"], Some(1.79));
}

#[tokio::test]
async fn test_precipitation_passes_null_through() {
    let (_tmp, queries) = fixture_queries(QueryConfig::default()).await;
    let precip = queries.precipitation().await.unwrap();

    assert_eq!(precip.get("2017-01-15"), Some(&None));
}

#[tokio::test]
async fn test_stations_in_store_order() {
    let (_tmp, queries) = fixture_queries(QueryConfig::default()).await;
    let stations = queries.stations().await.unwrap();

    let expected: Vec<Option<String>> = STATIONS
        .iter()
        .map(|(id, _)| Some(id.to_string()))
        .collect();
    assert_eq!(stations, expected);
}

#[tokio::test]
async fn test_stations_keep_null_identifier() {
    let (_tmp, path) = fixture_dataset().await;
    execute(&path, "INSERT INTO station (station, name) VALUES (NULL, 'UNLABELLED')").await;

    let store = ClimateStore::open(&database_config(&path)).await.unwrap();
    let queries = ClimateQueries::new(store, QueryConfig::default());
    let stations = queries.stations().await.unwrap();

    assert_eq!(stations.len(), STATIONS.len() + 1);
    assert_eq!(stations.last(), Some(&None));
}

#[tokio::test]
async fn test_tobs_only_primary_station_since_cutoff() {
    let (_tmp, queries) = fixture_queries(QueryConfig::default()).await;
    let temps = queries.tobs().await.unwrap();

    assert_eq!(temps, vec![77.0, 70.0, 79.0]);
}

#[tokio::test]
async fn test_tobs_for_configured_station() {
    let config = QueryConfig {
        primary_station: "USC00513117".to_string(),
        ..Default::default()
    };
    let (_tmp, queries) = fixture_queries(config).await;

    assert_eq!(queries.tobs().await.unwrap(), vec![76.0, 58.0]);
}

#[tokio::test]
async fn test_stats_open_range() {
    let (_tmp, queries) = fixture_queries(QueryConfig::default()).await;
    let stats = queries.temperature_stats("2017-01-01", None).await.unwrap();

    assert_eq!(
        stats,
        TemperatureStats {
            min: Some(58.0),
            avg: Some(67.25),
            max: Some(79.0),
        }
    );
}

#[tokio::test]
async fn test_stats_closed_range_is_inclusive() {
    let (_tmp, queries) = fixture_queries(QueryConfig::default()).await;
    let stats = queries
        .temperature_stats("2017-01-15", Some("2017-01-20"))
        .await
        .unwrap();

    assert_eq!(stats.min, Some(62.0));
    assert_eq!(stats.avg, Some(66.0));
    assert_eq!(stats.max, Some(70.0));
}

#[tokio::test]
async fn test_stats_after_last_date_is_empty() {
    let (_tmp, queries) = fixture_queries(QueryConfig::default()).await;
    let stats = queries.temperature_stats("2018-01-01", None).await.unwrap();

    assert!(stats.is_empty());
}

#[tokio::test]
async fn test_stats_malformed_start_is_not_an_error() {
    let (_tmp, queries) = fixture_queries(QueryConfig::default()).await;

    // Compared as text: "yesterday" sorts after every ISO date
    let stats = queries.temperature_stats("yesterday", None).await.unwrap();
    assert!(stats.is_empty());
}

// =============================================================================
// Cutoff Anchoring
// =============================================================================

fn early_reference() -> QueryConfig {
    QueryConfig {
        reference_date: NaiveDate::from_ymd_opt(2010, 6, 1).unwrap(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_fixed_mode_uses_configured_reference() {
    let (_tmp, queries) = fixture_queries(early_reference()).await;

    let cutoff = cutoff::resolve(queries.store(), queries.config()).await.unwrap();
    assert_eq!(cutoff, "2009-06-01");

    // Every dataset date is after 2009-06-01
    assert_eq!(queries.precipitation().await.unwrap().len(), 7);
}

#[tokio::test]
async fn test_latest_mode_uses_dataset_last_date() {
    let config = QueryConfig {
        cutoff_mode: CutoffMode::Latest,
        ..early_reference()
    };
    let (_tmp, queries) = fixture_queries(config).await;

    let cutoff = cutoff::resolve(queries.store(), queries.config()).await.unwrap();
    assert_eq!(cutoff, "2016-08-23");
    assert_eq!(queries.tobs().await.unwrap(), vec![77.0, 70.0, 79.0]);
}

#[tokio::test]
async fn test_latest_mode_on_empty_dataset_falls_back() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("empty.sqlite");
    write_dataset(&path, STATIONS, &[]).await;

    let store = ClimateStore::open(&database_config(&path)).await.unwrap();
    let config = QueryConfig {
        cutoff_mode: CutoffMode::Latest,
        ..Default::default()
    };

    let reference = cutoff::reference_date(&store, &config).await.unwrap();
    assert_eq!(reference, config.reference_date);
}

#[tokio::test]
async fn test_latest_mode_with_unparsable_date_falls_back() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad-date.sqlite");
    write_dataset(
        &path,
        STATIONS,
        &[
            (PRIMARY_STATION, "2017-08-23", Some(0.0), 79.0),
            (PRIMARY_STATION, "not-a-date", Some(0.1), 75.0),
        ],
    )
    .await;

    let store = ClimateStore::open(&database_config(&path)).await.unwrap();
    let config = QueryConfig {
        cutoff_mode: CutoffMode::Latest,
        ..early_reference()
    };

    // "not-a-date" sorts after every ISO date, so it is the latest row
    let latest = store.latest_measurement().await.unwrap().unwrap();
    assert_eq!(latest.date, "not-a-date");

    let reference = cutoff::reference_date(&store, &config).await.unwrap();
    assert_eq!(reference, config.reference_date);
}

#[tokio::test]
async fn test_window_past_calendar_start_is_an_error() {
    let config = QueryConfig {
        window_days: 1_000_000_000,
        ..Default::default()
    };
    let (_tmp, queries) = fixture_queries(config).await;

    let err = queries.precipitation().await.unwrap_err();
    assert!(matches!(
        err,
        QueryError::CutoffOutOfRange {
            window_days: 1_000_000_000,
            ..
        }
    ));
    assert!(queries.tobs().await.is_err());

    // Routes without a cutoff are unaffected
    assert_eq!(queries.stations().await.unwrap().len(), STATIONS.len());
}
