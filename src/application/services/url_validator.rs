//! URL acceptance checks performed before any registry mutation.

use std::sync::Arc;

use crate::domain::resolver::NameResolver;
use crate::error::AppError;
use url::Url;

/// Why a submission was rejected.
///
/// Kept internal: the outward contract collapses every variant into a
/// single `invalid url` rejection, but the distinction is logged so that
/// "malformed" and "unresolvable" remain diagnosable.
#[derive(Debug, thiserror::Error)]
enum UrlRejection {
    #[error("empty submission")]
    Empty,

    #[error("malformed url: {0}")]
    Malformed(String),

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("url has no hostname")]
    MissingHost,

    #[error("hostname did not resolve: {0}")]
    Unresolvable(String),
}

/// Validates submitted URL strings.
///
/// A submission is accepted when it parses as an absolute `http` or
/// `https` URL whose hostname currently resolves. The name-resolution
/// check is the only I/O in validation and runs once per call; nothing
/// is cached, so repeated submissions re-resolve.
pub struct UrlValidator {
    resolver: Arc<dyn NameResolver>,
}

impl UrlValidator {
    /// Creates a validator backed by the given resolver.
    pub fn new(resolver: Arc<dyn NameResolver>) -> Self {
        Self { resolver }
    }

    /// Validates a raw submission.
    ///
    /// Returns the URL string unchanged on acceptance. The registry
    /// deduplicates by exact string equality, so no normalization is
    /// applied here.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with the message `invalid url` for
    /// every rejection, whether syntactic or a resolution failure.
    pub async fn validate(&self, raw: &str) -> Result<String, AppError> {
        match self.check(raw).await {
            Ok(()) => Ok(raw.to_string()),
            Err(rejection) => {
                tracing::debug!(%rejection, "rejected url submission");
                Err(AppError::bad_request("invalid url"))
            }
        }
    }

    async fn check(&self, raw: &str) -> Result<(), UrlRejection> {
        if raw.is_empty() {
            return Err(UrlRejection::Empty);
        }

        let url = Url::parse(raw).map_err(|e| UrlRejection::Malformed(e.to_string()))?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(UrlRejection::UnsupportedScheme(other.to_string())),
        }

        let host = url.host_str().ok_or(UrlRejection::MissingHost)?;

        if !self.resolver.resolve(host).await {
            return Err(UrlRejection::Unresolvable(host.to_string()));
        }

        Ok(())
    }
}
