//! Configuration constants.
//!
//! This module defines the operational parameters used throughout the
//! application: the dataset location, timeouts, retry counts, and concurrency
//! defaults.

/// Remote location of the compressed DB-IP range dataset.
///
/// The file is a gzipped CSV keyed by numeric IPv4 range bounds. It is
/// downloaded once, decompressed next to the configured dataset path, and the
/// compressed artifact is removed afterwards.
pub const DATASET_URL: &str = "https://raw.githubusercontent.com/sapics/ip-location-db/refs/heads/main/dbip-city/dbip-city-ipv4-num.csv.gz";

/// Default local path of the decompressed dataset.
pub const DEFAULT_DATASET_PATH: &str = "dbip-city-ipv4-num.csv";

// Network operation timeouts
/// DNS query timeout in seconds.
/// Most queries complete in well under a second; 5s fails fast on slow or
/// unresponsive DNS servers without dropping endpoints on ordinary latency.
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// DNS retry attempts per query.
pub const DNS_ATTEMPTS: usize = 2;
/// Whole-download timeout in seconds. The compressed dataset is tens of
/// megabytes, so this is deliberately generous.
pub const DOWNLOAD_TIMEOUT_SECS: u64 = 300;

/// Maximum download attempts before the run is declared fatal.
pub const MAX_DOWNLOAD_RETRIES: u32 = 3;

/// Default cap on simultaneously outstanding resolutions (semaphore limit).
/// Resolution is the only suspending operation; one permit per in-flight DNS
/// query keeps large input lists from overwhelming the resolver.
pub const DEFAULT_MAX_CONCURRENCY: usize = 64;
