//! Mapping entity representing a shortened URL.

/// A URL mapping: one original URL bound to one numeric short id.
///
/// Mappings are create-once, read-many. Neither field changes after the
/// registry has persisted the row, and no delete path exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    /// Positive, unique, monotonically assigned identifier.
    pub short_id: i64,
    /// The URL exactly as submitted. Dedup compares this by string equality,
    /// so `https://example.com` and `https://example.com/` are distinct.
    pub original_url: String,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(short_id: i64, original_url: impl Into<String>) -> Self {
        Self {
            short_id,
            original_url: original_url.into(),
        }
    }
}
