//! CLI module for the climate API
//!
//! Provides command-line interface for:
//! - serve: Open the dataset and run the HTTP API
//! - inspect: Print a JSON summary of the dataset

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{build_report, inspect, load_config, run, run_command, serve, InspectReport, Overrides};
pub use errors::{CliError, CliErrorCode, CliResult};
