//! Address checker - Main entry point
//!
//! Reads one raw address per line from stdin and writes a report for each
//! to stdout. Exits with a non-zero status if any address was invalid.

use address_book_fields::{AddressChecker, Config};
use anyhow::Result;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Logging goes to stderr; stdout carries the reports
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Checking addresses (format: {}, private: {})",
        config.output_format, config.mark_private
    );

    let checker = AddressChecker::new(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = checker.run(stdin.lock(), BufWriter::new(stdout.lock()))?;

    if summary.all_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
