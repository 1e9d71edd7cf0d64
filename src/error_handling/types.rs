//! Error type definitions.
//!
//! This module defines the error taxonomy: fatal errors that abort the run
//! (dataset acquisition and loading), typed per-unit errors, and the
//! per-endpoint failure kinds tracked for diagnostics.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    #[allow(dead_code)] // Reserved for future use if resolver construction can fail
    DnsResolverError(String),
}

/// Error parsing a dotted-quad IPv4 literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddrError {
    /// Malformed address text: wrong segment count, non-numeric segment, or
    /// out-of-range octet.
    #[error("invalid IPv4 address: {0}")]
    InvalidAddress(String),
}

/// Error types for dataset acquisition and loading.
///
/// Every variant is fatal for the run: without the range dataset no lookups
/// are possible, so `main` exits non-zero.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Download of the compressed dataset failed after all retries.
    #[error("failed to download dataset from {url}: {source}")]
    Download {
        /// The remote dataset URL.
        url: String,
        /// The underlying HTTP error.
        #[source]
        source: reqwest::Error,
    },

    /// The dataset server answered with a non-success status.
    #[error("dataset server returned {status} for {url}")]
    DownloadStatus {
        /// The remote dataset URL.
        url: String,
        /// The HTTP status received.
        status: reqwest::StatusCode,
    },

    /// Decompression of the downloaded archive failed.
    #[error("failed to decompress dataset archive {path}: {source}")]
    Decompress {
        /// Path of the compressed artifact.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A filesystem operation on the dataset failed.
    #[error("dataset I/O error on {path}: {source}")]
    Io {
        /// Path the operation targeted.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The dataset file could not be read as CSV.
    #[error("failed to read dataset {path}: {source}")]
    Read {
        /// Path of the dataset file.
        path: PathBuf,
        /// The underlying CSV error.
        #[source]
        source: csv::Error,
    },
}

/// Reasons a single endpoint can fail to produce a located outcome.
///
/// These never escalate: each one collapses to an absent outcome for that
/// endpoint and is recorded in [`super::LookupStats`] for the end-of-run
/// summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    /// Normalization left nothing to resolve.
    EmptyHostname,
    /// DNS resolution failed (unknown host, timeout, network error).
    ResolveFailed,
    /// Resolution succeeded but returned no IPv4 addresses.
    NoAddress,
    /// The resolved address falls outside every range in the index.
    NoGeoMatch,
}

impl FailureKind {
    /// Human-readable label used in the statistics summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::EmptyHostname => "empty hostname after normalization",
            FailureKind::ResolveFailed => "DNS resolution failed",
            FailureKind::NoAddress => "no IPv4 address returned",
            FailureKind::NoGeoMatch => "no matching IP range",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
