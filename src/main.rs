//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `relay_locator` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use relay_locator::initialization::init_logger_with;
use relay_locator::{run_locate, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the lookup using the library
    match run_locate(config).await {
        Ok(report) => {
            // Print user-friendly summary
            println!(
                "✅ Located {}/{} relay{} in {:.1}s",
                report.located,
                report.total_endpoints,
                if report.total_endpoints == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            println!("Results written to {}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("relay_locator error: {:#}", e);
            process::exit(1);
        }
    }
}
