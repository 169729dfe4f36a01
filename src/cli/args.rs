//! CLI argument definitions using clap
//!
//! Commands:
//! - climate-api serve [--config <path>] [--database <path>] [--host <host>] [--port <port>]
//! - climate-api inspect [--config <path>] [--database <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// Climate API - read-only HTTP access to a climate observation dataset
#[derive(Parser, Debug)]
#[command(name = "climate-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API until terminated
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// SQLite dataset, overrides `database.path`
        #[arg(long)]
        database: Option<PathBuf>,

        /// Host to bind, overrides `server.host`
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overrides `server.port`
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print a JSON summary of the dataset and exit
    Inspect {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// SQLite dataset, overrides `database.path`
        #[arg(long)]
        database: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
