//! Error handling and lookup statistics.
//!
//! This module provides:
//! - Typed error definitions for initialization, address parsing, and dataset
//!   handling
//! - Per-endpoint failure kinds and their thread-safe counters
//!
//! Dataset errors are the only fatal class; everything local to one dataset
//! row or one endpoint is skipped or collapsed to an absent outcome.

mod stats;
mod types;

// Re-export public API
pub use stats::LookupStats;
pub use types::{AddrError, DatasetError, FailureKind, InitializationError};
