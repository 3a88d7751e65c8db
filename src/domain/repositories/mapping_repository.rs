//! Repository trait for URL mapping data access.

use crate::domain::entities::Mapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the URL ↔ short id store.
///
/// The registry is the only caller. The store is passive: it persists what
/// it is given and enforces exactly one constraint, uniqueness of
/// `short_id`, which turns concurrent id races into reportable conflicts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryMappingRepository`] - in-process map, used in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Finds a mapping by exact string equality on the original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_url(&self, original_url: &str) -> Result<Option<Mapping>, AppError>;

    /// Finds a mapping by its short id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_id(&self, short_id: i64) -> Result<Option<Mapping>, AppError>;

    /// Returns the largest short id currently stored, or `None` when the
    /// store is empty.
    ///
    /// The registry derives the next id from this at creation time instead
    /// of keeping an in-process counter, so assignment survives restarts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_max_id(&self) -> Result<Option<i64>, AppError>;

    /// Persists a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `short_id` is already taken.
    /// Returns [`AppError::Internal`] on other store errors.
    async fn insert(&self, original_url: &str, short_id: i64) -> Result<Mapping, AppError>;
}
