//! DTOs for the short URL creation endpoint.

use serde::{Deserialize, Serialize};

/// Form payload for `POST /api/shorturl`.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The URL to shorten.
    pub url: String,
}

/// Successful creation response.
///
/// Both fields are always present; `short_url` is the numeric id, not a
/// formatted link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: i64,
}
