//! Repository trait for the slug keyspace.

use crate::domain::entities::{NewSlugRecord, SlugRecord};
use async_trait::async_trait;

/// Errors reported by a slug store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A record with the same slug already exists; nothing was written.
    #[error("slug '{0}' already exists")]
    Conflict(String),

    /// The store could not be reached or failed to execute the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Access to the shared collection of slug records.
///
/// The store is the only synchronization point between registration and
/// resolution, so implementations must make [`SlugRepository::insert`] an
/// atomic conditional write keyed on the slug.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSlugRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemorySlugRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SlugRepository: Send + Sync {
    /// Inserts a record only if no record with the same slug exists.
    ///
    /// The store assigns `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if the slug is taken (no write happens).
    /// Returns [`StoreError::Unavailable`] on infrastructure failures.
    async fn insert(&self, record: NewSlugRecord) -> Result<SlugRecord, StoreError>;

    /// Finds the single record whose slug equals `slug` exactly.
    ///
    /// No normalization or case folding is applied.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on infrastructure failures.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<SlugRecord>, StoreError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on infrastructure failures.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Verifies that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if it is not.
    async fn ping(&self) -> Result<(), StoreError>;
}
