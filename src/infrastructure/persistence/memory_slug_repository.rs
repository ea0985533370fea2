//! In-memory implementation of the slug repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{NewSlugRecord, SlugId, SlugRecord};
use crate::domain::repositories::{SlugRepository, StoreError};

/// Slug store held in process memory.
///
/// Used for tests and for `STORE_BACKEND=memory` development runs. Records
/// are lost on restart. The shard-locked entry API makes the conditional
/// insert atomic, matching the unique constraint of the PostgreSQL store.
#[derive(Debug, Default)]
pub struct MemorySlugRepository {
    records: DashMap<String, SlugRecord>,
    next_id: AtomicI64,
}

impl MemorySlugRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SlugRepository for MemorySlugRepository {
    async fn insert(&self, record: NewSlugRecord) -> Result<SlugRecord, StoreError> {
        match self.records.entry(record.slug.clone()) {
            Entry::Occupied(_) => Err(StoreError::Conflict(record.slug)),
            Entry::Vacant(vacant) => {
                let id = SlugId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
                let stored = SlugRecord::new(
                    id,
                    record.slug,
                    record.destination_url,
                    Utc::now(),
                    record.style,
                );
                vacant.insert(stored.clone());
                Ok(stored)
            }
        }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<SlugRecord>, StoreError> {
        Ok(self.records.get(slug).map(|entry| entry.value().clone()))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.records.len() as i64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
