//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// PostgreSQL repository for mapping storage and retrieval.
///
/// The `mappings` table declares `short_id` as its primary key; a
/// concurrent insert of the same id fails that constraint and surfaces as
/// [`AppError::Conflict`] via the `From<sqlx::Error>` mapping, which is
/// what drives the registry's single retry.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn find_by_url(&self, original_url: &str) -> Result<Option<Mapping>, AppError> {
        let row: Option<(i64, String)> = sqlx::query_as(
            "SELECT short_id, original_url FROM mappings WHERE original_url = $1 \
             ORDER BY short_id LIMIT 1",
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|(short_id, original_url)| Mapping::new(short_id, original_url)))
    }

    async fn find_by_id(&self, short_id: i64) -> Result<Option<Mapping>, AppError> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT short_id, original_url FROM mappings WHERE short_id = $1")
                .bind(short_id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(|(short_id, original_url)| Mapping::new(short_id, original_url)))
    }

    async fn find_max_id(&self) -> Result<Option<i64>, AppError> {
        let max: Option<i64> = sqlx::query_scalar("SELECT MAX(short_id) FROM mappings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(max)
    }

    async fn insert(&self, original_url: &str, short_id: i64) -> Result<Mapping, AppError> {
        sqlx::query("INSERT INTO mappings (short_id, original_url) VALUES ($1, $2)")
            .bind(short_id)
            .bind(original_url)
            .execute(self.pool.as_ref())
            .await?;

        Ok(Mapping::new(short_id, original_url))
    }
}
