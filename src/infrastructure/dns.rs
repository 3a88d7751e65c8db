//! System name resolution via the tokio resolver.

use async_trait::async_trait;

use crate::domain::resolver::NameResolver;

/// [`NameResolver`] backed by the operating system's resolver through
/// `tokio::net::lookup_host`.
#[derive(Debug, Default, Clone)]
pub struct DnsResolver;

impl DnsResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NameResolver for DnsResolver {
    async fn resolve(&self, hostname: &str) -> bool {
        // lookup_host wants a port; any port works for an existence check.
        match tokio::net::lookup_host((hostname, 80)).await {
            Ok(mut addrs) => addrs.next().is_some(),
            Err(e) => {
                tracing::debug!(hostname, error = %e, "name resolution failed");
                false
            }
        }
    }
}
