//! CLI command implementations
//!
//! `serve` and `inspect` share the same boot sequence: load config, apply
//! flag overrides, open the dataset read-only. Any failure along the way is
//! fatal.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::config::ApiConfig;
use crate::http_server::HttpServer;
use crate::query::ClimateQueries;
use crate::store::{ClimateStore, DatasetSummary, Measurement, Station};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Flag values that take precedence over the config file
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub database: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl Overrides {
    /// Apply every flag that was given
    pub fn apply(self, config: &mut ApiConfig) {
        if let Some(database) = self.database {
            config.database.path = database;
        }
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

/// Output of the `inspect` command
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub database: PathBuf,
    pub summary: DatasetSummary,
    pub latest_measurement: Option<Measurement>,
    pub stations: Vec<Station>,
}

/// Parse arguments, set up logging and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    init_tracing();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            database,
            host,
            port,
        } => serve(
            &config,
            Overrides {
                database,
                host,
                port,
            },
        ),
        Command::Inspect { config, database } => inspect(
            &config,
            Overrides {
                database,
                ..Default::default()
            },
        ),
    }
}

/// Install the global tracing subscriber, writing to stderr
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config file (if present) and apply flag overrides
pub fn load_config(config_path: &Path, overrides: Overrides) -> CliResult<ApiConfig> {
    let mut config = ApiConfig::load_or_default(config_path)?;
    overrides.apply(&mut config);
    config.validate()?;
    Ok(config)
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

/// Run the HTTP API until Ctrl-C
pub fn serve(config_path: &Path, overrides: Overrides) -> CliResult<()> {
    let config = load_config(config_path, overrides)?;

    runtime()?.block_on(async {
        let store = ClimateStore::open(&config.database).await?;
        tracing::info!(
            database = %config.database.path.display(),
            cutoff_mode = ?config.queries.cutoff_mode,
            "climate dataset opened"
        );

        let queries = ClimateQueries::new(store.clone(), config.queries.clone());
        let server = HttpServer::with_config(config.server.clone(), queries);

        let result = server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)));

        store.close().await;
        result
    })
}

/// Print a summary of the dataset
pub fn inspect(config_path: &Path, overrides: Overrides) -> CliResult<()> {
    let config = load_config(config_path, overrides)?;

    let report = runtime()?.block_on(async {
        let store = ClimateStore::open(&config.database).await?;
        let report = build_report(&store, config.database.path.clone()).await;
        store.close().await;
        report
    })?;

    write_json(&report)
}

/// Gather everything `inspect` prints
pub async fn build_report(store: &ClimateStore, database: PathBuf) -> CliResult<InspectReport> {
    Ok(InspectReport {
        database,
        summary: store.summary().await?,
        latest_measurement: store.latest_measurement().await?,
        stations: store.stations().await?,
    })
}
