#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use qr_fire::domain::entities::{NewSlugRecord, SlugRecord, StyleOptions};
use qr_fire::domain::repositories::{SlugRepository, StoreError};
use qr_fire::infrastructure::persistence::MemorySlugRepository;
use qr_fire::routes::router;
use qr_fire::state::AppState;
use std::sync::Arc;

pub const ORIGIN: &str = "https://qr.example.com";

/// Store that fails every operation, standing in for an unreachable database.
pub struct FailingStore;

#[async_trait]
impl SlugRepository for FailingStore {
    async fn insert(&self, _record: NewSlugRecord) -> Result<SlugRecord, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn find_by_slug(&self, _slug: &str) -> Result<Option<SlugRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

pub fn memory_store() -> Arc<MemorySlugRepository> {
    Arc::new(MemorySlugRepository::new())
}

pub fn create_test_state(store: Arc<dyn SlugRepository>) -> AppState {
    AppState::new(store, ORIGIN)
}

pub fn create_test_server(store: Arc<dyn SlugRepository>) -> TestServer {
    TestServer::new(router(create_test_state(store))).unwrap()
}

/// Writes a record straight into the store, bypassing validation.
pub async fn insert_record(store: &dyn SlugRepository, slug: &str, url: Option<&str>) -> SlugRecord {
    store
        .insert(NewSlugRecord {
            slug: slug.to_string(),
            destination_url: url.map(str::to_string),
            style: StyleOptions::default(),
        })
        .await
        .unwrap()
}
