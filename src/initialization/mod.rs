//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger
//! - DNS resolver
//! - Concurrency semaphore

mod logger;
mod resolver;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Initializes a semaphore for controlling concurrency.
///
/// The semaphore caps how many resolution tasks are in flight at once; every
/// pipeline task acquires one permit for its whole lifetime.
///
/// # Arguments
///
/// * `count` - Maximum number of concurrent operations allowed
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}
