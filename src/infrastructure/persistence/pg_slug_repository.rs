//! PostgreSQL implementation of the slug repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::entities::{NewSlugRecord, SlugId, SlugRecord, StyleOptions};
use crate::domain::repositories::{SlugRepository, StoreError};

/// Row shape of the `qr_codes` table.
#[derive(sqlx::FromRow)]
struct SlugRow {
    id: i64,
    slug: String,
    url: Option<String>,
    style: Json<StyleOptions>,
    created_at: DateTime<Utc>,
}

impl From<SlugRow> for SlugRecord {
    fn from(row: SlugRow) -> Self {
        SlugRecord::new(
            SlugId(row.id),
            row.slug,
            row.url,
            row.created_at,
            row.style.0,
        )
    }
}

/// PostgreSQL repository for slug records.
///
/// Uniqueness is enforced by the `qr_codes_slug_key` constraint; inserts use
/// `ON CONFLICT DO NOTHING` so a taken slug is reported without raising a
/// database error. `created_at` comes from the database clock.
pub struct PgSlugRepository {
    pool: Arc<PgPool>,
}

impl PgSlugRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Every database error surfaces as an unavailable store; conflicts are
/// detected through `ON CONFLICT` instead of error codes.
fn unavailable(e: sqlx::Error) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

#[async_trait]
impl SlugRepository for PgSlugRepository {
    async fn insert(&self, record: NewSlugRecord) -> Result<SlugRecord, StoreError> {
        let row = sqlx::query_as::<_, SlugRow>(
            r#"
            INSERT INTO qr_codes (slug, url, style)
            VALUES ($1, $2, $3)
            ON CONFLICT (slug) DO NOTHING
            RETURNING id, slug, url, style, created_at
            "#,
        )
        .bind(&record.slug)
        .bind(&record.destination_url)
        .bind(Json(&record.style))
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(unavailable)?;

        row.map(SlugRecord::from)
            .ok_or(StoreError::Conflict(record.slug))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<SlugRecord>, StoreError> {
        let row = sqlx::query_as::<_, SlugRow>(
            r#"
            SELECT id, slug, url, style, created_at
            FROM qr_codes
            WHERE slug = $1
            LIMIT 1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(unavailable)?;

        Ok(row.map(SlugRecord::from))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM qr_codes")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(unavailable)?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(unavailable)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_errors_map_to_unavailable() {
        let err = unavailable(sqlx::Error::PoolTimedOut);

        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
