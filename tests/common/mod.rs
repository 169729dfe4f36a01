//! Shared fixture: a small on-disk climate dataset

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use climate_api::config::{DatabaseConfig, QueryConfig};
use climate_api::query::ClimateQueries;
use climate_api::store::schema::DATASET_DDL;
use climate_api::store::ClimateStore;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

pub const PRIMARY_STATION: &str = "USC00519281";

pub const STATIONS: &[(&str, &str)] = &[
    ("USC00519397", "WAIKIKI 717.2, HI US"),
    ("USC00513117", "KANEOHE 838.1, HI US"),
    ("USC00519281", "WAIHEE 837.5, HI US"),
];

/// (station, date, prcp, tobs), inserted in this order
pub const MEASUREMENTS: &[(&str, &str, Option<f64>, f64)] = &[
    ("USC00519397", "2010-01-01", Some(0.08), 65.0),
    ("USC00519397", "2016-08-22", Some(0.40), 76.0),
    ("USC00519397", "2016-08-23", Some(0.00), 81.0),
    ("USC00513117", "2016-08-23", Some(0.15), 76.0),
    ("USC00519281", "2016-08-23", Some(1.79), 77.0),
    ("USC00519281", "2017-01-15", None, 70.0),
    ("USC00519397", "2017-01-20", Some(0.02), 62.0),
    ("USC00519281", "2017-08-23", Some(0.00), 79.0),
    ("USC00519281", "2016-08-22", Some(0.50), 90.0),
    ("USC00513117", "2017-02-01", Some(0.30), 58.0),
];

/// Write a dataset file with the given rows
pub async fn write_dataset(
    path: &Path,
    stations: &[(&str, &str)],
    measurements: &[(&str, &str, Option<f64>, f64)],
) {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::raw_sql(DATASET_DDL).execute(&pool).await.unwrap();

    for (station, name) in stations {
        sqlx::query("INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?1, ?2, 21.3, -157.8, 3.0)")
            .bind(*station)
            .bind(*name)
            .execute(&pool)
            .await
            .unwrap();
    }

    for (station, date, prcp, tobs) in measurements {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
            .bind(*station)
            .bind(*date)
            .bind(*prcp)
            .bind(*tobs)
            .execute(&pool)
            .await
            .unwrap();
    }

    pool.close().await;
}

/// Run extra statements against an existing dataset file
pub async fn execute(path: &Path, sql: &str) {
    let options = SqliteConnectOptions::new().filename(path);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::raw_sql(sql).execute(&pool).await.unwrap();
    pool.close().await;
}

/// Temp dir holding the standard fixture dataset
pub async fn fixture_dataset() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("hawaii.sqlite");
    write_dataset(&path, STATIONS, MEASUREMENTS).await;
    (tmp, path)
}

pub fn database_config(path: &Path) -> DatabaseConfig {
    DatabaseConfig {
        path: path.to_path_buf(),
        ..Default::default()
    }
}

/// Open the standard fixture through the query layer
pub async fn fixture_queries(config: QueryConfig) -> (TempDir, ClimateQueries) {
    let (tmp, path) = fixture_dataset().await;
    let store = ClimateStore::open(&database_config(&path)).await.unwrap();
    (tmp, ClimateQueries::new(store, config))
}
