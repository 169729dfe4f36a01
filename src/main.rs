//! climate-api entry point
//!
//! Parses arguments and delegates to `cli::run`. Errors are printed to
//! stderr and the process exits with status 1.

use climate_api::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
