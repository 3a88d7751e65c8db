//! Short id assignment and resolution service.

use std::sync::Arc;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// The registry owning the URL ↔ short id mapping.
///
/// Creation is idempotent: resubmitting an already-registered URL returns
/// the existing mapping. New ids derive from the store's current maximum
/// at creation time rather than an in-process counter, so assignment
/// stays monotonic across restarts and multiple instances.
///
/// Callers must validate URLs before handing them in; the registry does
/// not re-validate.
pub struct ShortenerService {
    mappings: Arc<dyn MappingRepository>,
}

impl ShortenerService {
    /// Creates a new registry over the given store.
    pub fn new(mappings: Arc<dyn MappingRepository>) -> Self {
        Self { mappings }
    }

    /// Returns the mapping for `url`, creating one if none exists.
    ///
    /// The dedup lookup, max-id read and insert are not atomic against a
    /// concurrent first submission of the same URL. The store's uniqueness
    /// constraint on `short_id` turns that race into a conflict, which is
    /// retried exactly once with a fresh max-id read before escalating.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the retry also conflicts or on any
    /// other store failure.
    pub async fn get_or_create(&self, url: &str) -> Result<Mapping, AppError> {
        if let Some(existing) = self.mappings.find_by_url(url).await? {
            return Ok(existing);
        }

        match self.insert_with_next_id(url).await {
            Err(AppError::Conflict { .. }) => {
                tracing::debug!(url, "short id contention, retrying with a fresh max id");
                match self.insert_with_next_id(url).await {
                    Err(AppError::Conflict { .. }) => Err(AppError::internal("Server error")),
                    other => other,
                }
            }
            other => other,
        }
    }

    /// Looks up a mapping by its short id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no mapping has that id, distinct
    /// from the validation rejection the transport applies to non-numeric
    /// identifiers.
    pub async fn resolve_id(&self, short_id: i64) -> Result<Mapping, AppError> {
        self.mappings
            .find_by_id(short_id)
            .await?
            .ok_or_else(|| AppError::not_found("No short URL found for given input"))
    }

    /// Returns the largest assigned id, if any. Used by the health check
    /// as a cheap store probe.
    pub async fn current_max_id(&self) -> Result<Option<i64>, AppError> {
        self.mappings.find_max_id().await
    }

    async fn insert_with_next_id(&self, url: &str) -> Result<Mapping, AppError> {
        let next_id = self.mappings.find_max_id().await?.unwrap_or(0) + 1;
        self.mappings.insert(url, next_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockMappingRepository;
    use mockall::Sequence;

    fn service(mock: MockMappingRepository) -> ShortenerService {
        ShortenerService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_first_submission_gets_id_one() {
        let mut mock = MockMappingRepository::new();
        mock.expect_find_by_url().times(1).returning(|_| Ok(None));
        mock.expect_find_max_id().times(1).returning(|| Ok(None));
        mock.expect_insert()
            .withf(|url, id| url == "https://www.freecodecamp.org" && *id == 1)
            .times(1)
            .returning(|url, id| Ok(Mapping::new(id, url)));

        let mapping = service(mock)
            .get_or_create("https://www.freecodecamp.org")
            .await
            .unwrap();

        assert_eq!(mapping.short_id, 1);
        assert_eq!(mapping.original_url, "https://www.freecodecamp.org");
    }

    #[tokio::test]
    async fn test_next_id_is_max_plus_one() {
        let mut mock = MockMappingRepository::new();
        mock.expect_find_by_url().times(1).returning(|_| Ok(None));
        mock.expect_find_max_id().times(1).returning(|| Ok(Some(41)));
        mock.expect_insert()
            .withf(|_, id| *id == 42)
            .times(1)
            .returning(|url, id| Ok(Mapping::new(id, url)));

        let mapping = service(mock)
            .get_or_create("https://example.com")
            .await
            .unwrap();

        assert_eq!(mapping.short_id, 42);
    }

    #[tokio::test]
    async fn test_duplicate_submission_returns_existing_mapping() {
        let mut mock = MockMappingRepository::new();
        let existing = Mapping::new(7, "https://example.com");
        mock.expect_find_by_url()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock.expect_find_max_id().times(0);
        mock.expect_insert().times(0);

        let mapping = service(mock)
            .get_or_create("https://example.com")
            .await
            .unwrap();

        assert_eq!(mapping.short_id, 7);
    }

    #[tokio::test]
    async fn test_conflict_retries_once_with_fresh_max_id() {
        let mut mock = MockMappingRepository::new();
        let mut seq = Sequence::new();

        mock.expect_find_by_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        mock.expect_find_max_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(Some(5)));
        // A concurrent request won the insert with id 6.
        mock.expect_insert()
            .withf(|_, id| *id == 6)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(AppError::conflict("short id already assigned")));
        mock.expect_find_max_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(Some(6)));
        mock.expect_insert()
            .withf(|_, id| *id == 7)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|url, id| Ok(Mapping::new(id, url)));

        let mapping = service(mock)
            .get_or_create("https://example.com")
            .await
            .unwrap();

        assert_eq!(mapping.short_id, 7);
    }

    #[tokio::test]
    async fn test_second_conflict_escalates_to_internal() {
        let mut mock = MockMappingRepository::new();
        mock.expect_find_by_url().times(1).returning(|_| Ok(None));
        mock.expect_find_max_id().times(2).returning(|| Ok(Some(5)));
        mock.expect_insert()
            .times(2)
            .returning(|_, _| Err(AppError::conflict("short id already assigned")));

        let err = service(mock)
            .get_or_create("https://example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_store_failure_is_not_retried() {
        let mut mock = MockMappingRepository::new();
        mock.expect_find_by_url().times(1).returning(|_| Ok(None));
        mock.expect_find_max_id().times(1).returning(|| Ok(None));
        mock.expect_insert()
            .times(1)
            .returning(|_, _| Err(AppError::internal("Server error")));

        let err = service(mock)
            .get_or_create("https://example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_resolve_id_found() {
        let mut mock = MockMappingRepository::new();
        let stored = Mapping::new(3, "https://example.com");
        mock.expect_find_by_id()
            .withf(|id| *id == 3)
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        let mapping = service(mock).resolve_id(3).await.unwrap();

        assert_eq!(mapping.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_id_absent_is_not_found() {
        let mut mock = MockMappingRepository::new();
        mock.expect_find_by_id().times(1).returning(|_| Ok(None));

        let err = service(mock).resolve_id(999_999).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
