//! Name resolution port consumed by the URL validator.

use async_trait::async_trait;

/// Checks whether a hostname resolves to at least one network address.
///
/// This is the only I/O the validator performs. The outcome is deliberately
/// coarse: `true` means the host exists right now, `false` covers both
/// NXDOMAIN and resolver infrastructure failures. Results are never cached;
/// every submission re-resolves.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NameResolver: Send + Sync {
    async fn resolve(&self, hostname: &str) -> bool;
}
