//! Hostname resolution.
//!
//! The pipeline only needs one operation from DNS: IPv4 addresses for a
//! hostname. That operation is behind the [`HostResolver`] trait so tests can
//! script resolution outcomes; production uses the hickory resolver built by
//! [`crate::initialization::init_resolver`].

use std::net::Ipv4Addr;

use anyhow::{Error, Result};
use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

/// Source of IPv4 addresses for hostnames.
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host` to its IPv4 addresses (A records only).
    ///
    /// Address order is whatever the resolver returns; the pipeline takes the
    /// first address deterministically and does not re-sort. An empty vector
    /// is a valid success result.
    async fn resolve_ipv4(&self, host: &str) -> Result<Vec<Ipv4Addr>>;
}

#[async_trait]
impl HostResolver for TokioAsyncResolver {
    async fn resolve_ipv4(&self, host: &str) -> Result<Vec<Ipv4Addr>> {
        let response = self.ipv4_lookup(host).await.map_err(Error::new)?;
        Ok(response.iter().map(|a| a.0).collect())
    }
}
