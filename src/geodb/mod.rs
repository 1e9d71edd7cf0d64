//! IP-range geolocation database.
//!
//! This module provides:
//! - The immutable interval index queried by the pipeline
//! - The dataset loader that builds the index from the DB-IP CSV
//! - Acquisition of the dataset file when it is missing locally

mod acquire;
mod index;
mod loader;

// Re-export public API
pub use acquire::ensure_dataset;
pub use index::{GeoIndex, RangeRecord};
pub use loader::load_index;
