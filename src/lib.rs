//! relay_locator library: relay URL geolocation.
//!
//! This library resolves relay URLs (e.g. `wss://relay.example.com:4443/path`)
//! to approximate geographic coordinates. Each URL is normalized to a bare
//! hostname, resolved to an IPv4 address, and looked up in an immutable
//! interval index built from the DB-IP range dataset. Results are collected in
//! input order and written as CSV.
//!
//! # Example
//!
//! ```no_run
//! use relay_locator::{run_locate, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     output: PathBuf::from("relays_geo.csv"),
//!     input: Some(PathBuf::from("relays.txt")),
//!     ..Default::default()
//! };
//!
//! let report = run_locate(config).await?;
//! println!("Located {}/{} relays", report.located, report.total_endpoints);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod addr;
pub mod config;
pub mod endpoint;
pub mod error_handling;
pub mod geodb;
pub mod initialization;
pub mod output;
pub mod pipeline;
pub mod resolve;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use run::{run_locate, LocateReport};

// Internal run module (contains the main lookup orchestration)
mod run {
    use std::io::IsTerminal;
    use std::path::PathBuf;
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use log::{info, warn};
    use tokio::io::{AsyncBufReadExt, BufReader};

    use crate::config::Config;
    use crate::error_handling::LookupStats;
    use crate::geodb::{ensure_dataset, load_index};
    use crate::initialization::init_resolver;
    use crate::output::write_csv;
    use crate::pipeline::run_pipeline;
    use crate::resolve::HostResolver;

    /// Results of a relay geolocation run.
    ///
    /// Contains summary statistics about the completed run.
    #[derive(Debug, Clone)]
    pub struct LocateReport {
        /// Total number of endpoints read from the input
        pub total_endpoints: usize,
        /// Number of endpoints successfully located
        pub located: usize,
        /// Path to the CSV file containing results
        pub output_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a relay geolocation pass with the provided configuration.
    ///
    /// This is the main entry point for the library. It makes sure the range
    /// dataset is present (downloading it on first use), builds the interval
    /// index, reads endpoints from the input file or standard input, resolves
    /// and locates them concurrently, and writes the output CSV.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The dataset cannot be acquired, decompressed, or read
    /// - The output file cannot be created or written
    ///
    /// Per-endpoint failures (unresolvable hostnames, addresses outside every
    /// range) never fail the run; those endpoints are simply absent from the
    /// output.
    pub async fn run_locate(config: Config) -> Result<LocateReport> {
        let start_time = std::time::Instant::now();

        ensure_dataset(&config.dataset)
            .await
            .context("Failed to acquire range dataset")?;

        info!("Loading IP range dataset into memory...");
        let index = load_index(&config.dataset).context("Failed to load range dataset")?;
        info!("Loaded {} IP ranges", index.len());
        let index = Arc::new(index);

        let endpoints = read_endpoints(&config).await;
        if endpoints.is_empty() {
            warn!("No endpoints provided via input file or stdin");
        } else {
            info!("Processing {} relays...", endpoints.len());
        }

        let resolver: Arc<dyn HostResolver> =
            init_resolver().context("Failed to initialize DNS resolver")?;
        let stats = Arc::new(LookupStats::new());

        let outcomes = run_pipeline(
            &endpoints,
            resolver,
            Arc::clone(&index),
            Arc::clone(&stats),
            config.max_concurrency,
        )
        .await;

        let located: Vec<_> = outcomes.into_iter().flatten().collect();
        let written = write_csv(&config.output, &located)?;

        stats.log_summary();

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!(
            "Successfully located {}/{} relays in {:.1}s",
            written,
            endpoints.len(),
            elapsed_seconds
        );

        Ok(LocateReport {
            total_endpoints: endpoints.len(),
            located: written,
            output_path: config.output.clone(),
            elapsed_seconds,
        })
    }

    /// Reads the endpoint list, preserving input order.
    ///
    /// With `--input`, reads from that file; a missing file is an empty list
    /// with a warning, not an error, so only dataset failures can abort the
    /// run. Without `--input`, reads standard input, but only when it is not
    /// an interactive terminal. Blank lines are ignored.
    async fn read_endpoints(config: &Config) -> Vec<String> {
        let mut endpoints = Vec::new();

        if let Some(path) = &config.input {
            let file = match tokio::fs::File::open(path).await {
                Ok(file) => file,
                Err(e) => {
                    warn!("Cannot open input file {}: {e}", path.display());
                    return endpoints;
                }
            };
            let mut lines = BufReader::new(file).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    endpoints.push(trimmed.to_string());
                }
            }
        } else {
            if std::io::stdin().is_terminal() {
                return endpoints;
            }
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    endpoints.push(trimmed.to_string());
                }
            }
        }

        endpoints
    }
}
