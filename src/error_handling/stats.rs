//! Per-endpoint failure statistics.
//!
//! Tracks how many endpoints were dropped for each [`FailureKind`] using atomic
//! counters, so concurrent lookup tasks can record failures without locking.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::info;
use strum::IntoEnumIterator;

use super::types::FailureKind;

/// Thread-safe failure counters for one pipeline run.
///
/// All kinds are initialized to zero on creation. Shared across tasks with
/// `Arc`.
pub struct LookupStats {
    failures: HashMap<FailureKind, AtomicUsize>,
}

impl LookupStats {
    /// Creates a tracker with every failure kind zeroed.
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in FailureKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }
        LookupStats { failures }
    }

    /// Increments the counter for one failure kind.
    pub fn increment(&self, kind: FailureKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment counter for {:?} which is not in the map. \
                 This indicates a bug in LookupStats initialization.",
                kind
            );
        }
    }

    /// Returns the count recorded for one failure kind.
    pub fn count(&self, kind: FailureKind) -> usize {
        self.failures
            .get(&kind)
            .map(|counter| counter.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Returns the total number of failed endpoints across all kinds.
    pub fn total(&self) -> usize {
        self.failures
            .values()
            .map(|counter| counter.load(Ordering::Relaxed))
            .sum()
    }

    /// Logs a breakdown of failure counts, one line per non-zero kind.
    pub fn log_summary(&self) {
        let total = self.total();
        if total == 0 {
            return;
        }
        info!("Unlocated endpoints ({} total):", total);
        for kind in FailureKind::iter() {
            let count = self.count(kind);
            if count > 0 {
                info!("   {}: {}", kind.as_str(), count);
            }
        }
    }
}

impl Default for LookupStats {
    fn default() -> Self {
        Self::new()
    }
}
