//! Slug store implementations and the process-wide connection pool.
//!
//! - [`PgSlugRepository`] - PostgreSQL-backed store
//! - [`MemorySlugRepository`] - In-process store for tests and development
//! - [`shared_pool`] - One PostgreSQL pool per process

pub mod memory_slug_repository;
pub mod pg_slug_repository;

pub use memory_slug_repository::MemorySlugRepository;
pub use pg_slug_repository::PgSlugRepository;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::config::Config;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Returns the process-wide PostgreSQL pool, connecting and migrating on
/// first use.
///
/// Concurrent and repeated calls share a single initialization; later calls
/// ignore `config` and return a handle to the existing pool.
///
/// # Errors
///
/// Returns an error if the first connection or the migrations fail. A failed
/// initialization is retried by the next call.
pub async fn shared_pool(config: &Config) -> Result<PgPool> {
    let pool = POOL
        .get_or_try_init(|| async {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres store")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Migrations applied");

            Ok::<_, anyhow::Error>(pool)
        })
        .await?;

    Ok(pool.clone())
}
