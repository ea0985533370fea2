//! HTTP server initialization and runtime setup.
//!
//! Selects the slug store, wires services and runs the Axum server until a
//! shutdown signal arrives.

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::SlugRepository;
use crate::infrastructure::persistence::{MemorySlugRepository, PgSlugRepository, shared_pool};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The slug store (PostgreSQL pool with migrations, or in-memory)
/// - Registry, resolver and QR services sharing that store
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;
    let state = AppState::new(store, config.public_origin.clone());

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Creates the configured slug store.
pub async fn build_store(config: &Config) -> Result<Arc<dyn SlugRepository>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let pool = shared_pool(config).await?;
            tracing::info!("Slug store: PostgreSQL");
            Ok(Arc::new(PgSlugRepository::new(Arc::new(pool))))
        }
        StoreBackend::Memory => {
            tracing::warn!("Slug store: in-memory, records are lost on restart");
            Ok(Arc::new(MemorySlugRepository::new()))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
