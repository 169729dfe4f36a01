//! climate-api - A read-only HTTP API over a climate observation dataset
//!
//! Serves precipitation and temperature observations from a pre-populated
//! SQLite file (`measurement` and `station` tables) as JSON.
//!
//! - `store`: read-only pooled access to the dataset
//! - `query`: one bounded read per API operation
//! - `http_server`: axum router and listener
//! - `config`: JSON configuration with defaults
//! - `cli`: `serve` and `inspect` commands

pub mod cli;
pub mod config;
pub mod http_server;
pub mod query;
pub mod store;
