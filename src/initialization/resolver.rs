//! DNS resolver initialization.
//!
//! This module provides the function to initialize the DNS resolver with
//! proper timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the DNS resolver for hostname lookups.
///
/// Creates a resolver using the default configuration with aggressive
/// timeouts, so a slow or unresponsive DNS server costs one endpoint a few
/// seconds instead of stalling the run.
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across
/// tasks, or an error if initialization fails.
pub fn init_resolver() -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    use hickory_resolver::config::{ResolverConfig, ResolverOpts};

    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;
    // ndots = 0 prevents search-domain appending on bare relay hostnames
    opts.ndots = 0;

    Ok(Arc::new(TokioAsyncResolver::tokio(
        ResolverConfig::default(),
        opts,
    )))
}
