//! In-memory implementation of the mapping repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Mapping store backed by a mutex-guarded `BTreeMap`, keyed by short id.
///
/// Enforces the same uniqueness constraint on `short_id` as the PostgreSQL
/// table, so the registry's conflict handling is exercised identically.
/// Used by the integration tests; nothing persists across restarts.
#[derive(Debug, Default)]
pub struct InMemoryMappingRepository {
    mappings: Mutex<BTreeMap<i64, String>>,
}

impl InMemoryMappingRepository {
    /// Creates an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mappings currently stored.
    pub fn len(&self) -> usize {
        self.mappings.lock().expect("mapping store poisoned").len()
    }

    /// Returns true when no mappings are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn find_by_url(&self, original_url: &str) -> Result<Option<Mapping>, AppError> {
        let mappings = self.mappings.lock().expect("mapping store poisoned");

        // BTreeMap iterates in id order, so a duplicate URL (which the
        // registry never produces) would resolve to its lowest id.
        Ok(mappings
            .iter()
            .find(|(_, url)| url.as_str() == original_url)
            .map(|(&short_id, url)| Mapping::new(short_id, url.clone())))
    }

    async fn find_by_id(&self, short_id: i64) -> Result<Option<Mapping>, AppError> {
        let mappings = self.mappings.lock().expect("mapping store poisoned");

        Ok(mappings
            .get(&short_id)
            .map(|url| Mapping::new(short_id, url.clone())))
    }

    async fn find_max_id(&self) -> Result<Option<i64>, AppError> {
        let mappings = self.mappings.lock().expect("mapping store poisoned");

        Ok(mappings.last_key_value().map(|(&short_id, _)| short_id))
    }

    async fn insert(&self, original_url: &str, short_id: i64) -> Result<Mapping, AppError> {
        let mut mappings = self.mappings.lock().expect("mapping store poisoned");

        if mappings.contains_key(&short_id) {
            return Err(AppError::conflict("short id already assigned"));
        }

        mappings.insert(short_id, original_url.to_string());
        Ok(Mapping::new(short_id, original_url))
    }
}
