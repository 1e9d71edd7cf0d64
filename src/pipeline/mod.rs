//! Resolve-then-locate pipeline.
//!
//! Drives one independent lookup per input endpoint: normalize the URL,
//! resolve the hostname to an IPv4 address, and query the interval index.
//! Endpoints run concurrently under a semaphore cap, but outcomes are
//! collected positionally so the output order always matches the input order.

use std::sync::Arc;

use log::{debug, warn};

use crate::addr::format_ipv4;
use crate::endpoint::normalize;
use crate::error_handling::{FailureKind, LookupStats};
use crate::geodb::GeoIndex;
use crate::initialization::init_semaphore;
use crate::resolve::HostResolver;

/// A successfully located endpoint.
///
/// Carries the original raw endpoint string, not the normalized hostname, so
/// output rows match the input list verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    /// The raw endpoint string as it appeared in the input.
    pub endpoint: String,
    /// Latitude text from the matched range record.
    pub latitude: String,
    /// Longitude text from the matched range record.
    pub longitude: String,
}

/// Resolves one endpoint and looks it up in the index.
///
/// Every failure mode collapses to `None` for this endpoint only: empty
/// hostname after normalization, DNS failure, zero returned addresses, or no
/// containing range. Failures are recorded in `stats` and logged at debug;
/// they never escalate past this endpoint.
pub async fn resolve_and_locate(
    raw: &str,
    resolver: &dyn HostResolver,
    index: &GeoIndex,
    stats: &LookupStats,
) -> Option<Located> {
    let hostname = normalize(raw);
    if hostname.is_empty() {
        stats.increment(FailureKind::EmptyHostname);
        debug!("No hostname in endpoint {raw:?}");
        return None;
    }

    let addresses = match resolver.resolve_ipv4(hostname).await {
        Ok(addresses) => addresses,
        Err(e) => {
            stats.increment(FailureKind::ResolveFailed);
            debug!("Resolution failed for {hostname}: {e:#}");
            return None;
        }
    };

    // First returned address wins, deterministically.
    let Some(address) = addresses.first() else {
        stats.increment(FailureKind::NoAddress);
        debug!("No IPv4 addresses for {hostname}");
        return None;
    };

    let ip = u32::from(*address);
    match index.lookup(ip) {
        Some(record) => Some(Located {
            endpoint: raw.to_string(),
            latitude: record.latitude.clone(),
            longitude: record.longitude.clone(),
        }),
        None => {
            stats.increment(FailureKind::NoGeoMatch);
            debug!("Geolocation failed for {hostname} ({})", format_ipv4(ip));
            None
        }
    }
}

/// Runs the pipeline over every endpoint concurrently.
///
/// One task is spawned per endpoint, gated by a semaphore with
/// `max_concurrency` permits. The returned vector lines up positionally with
/// `endpoints`: slot `i` holds the outcome for `endpoints[i]` regardless of
/// which task finished first. A panicked task costs its own slot a `None` and
/// nothing else.
pub async fn run_pipeline(
    endpoints: &[String],
    resolver: Arc<dyn HostResolver>,
    index: Arc<GeoIndex>,
    stats: Arc<LookupStats>,
    max_concurrency: usize,
) -> Vec<Option<Located>> {
    let semaphore = init_semaphore(max_concurrency);

    let mut handles = Vec::with_capacity(endpoints.len());
    for raw in endpoints {
        let raw = raw.clone();
        let resolver = Arc::clone(&resolver);
        let index = Arc::clone(&index);
        let stats = Arc::clone(&stats);
        let semaphore = Arc::clone(&semaphore);
        handles.push(tokio::spawn(async move {
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    warn!("Semaphore closed, skipping endpoint: {raw}");
                    return None;
                }
            };
            resolve_and_locate(&raw, resolver.as_ref(), &index, &stats).await
        }));
    }

    // join_all preserves handle order, which is spawn order, which is input
    // order.
    let mut outcomes = Vec::with_capacity(handles.len());
    for result in futures::future::join_all(handles).await {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(join_error) => {
                warn!("Lookup task panicked: {join_error:?}");
                outcomes.push(None);
            }
        }
    }
    outcomes
}
