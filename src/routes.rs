//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`         - Landing page
//! - `GET  /health`   - Health check
//! - `GET  /{slug}`   - Slug redirect
//! - `/api/*`         - JSON API
//! - anything else    - HTML not-found page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
///
/// Static segments (`/health`, `/api/...`) take precedence over the
/// `/{slug}` capture, which is one reason those names are reserved.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::public_routes())
        .route("/health", get(health_handler))
        .route("/{slug}", get(redirect_handler))
        .nest("/api", api::routes::routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] wrapped so that
/// `/wow-doge/` and `/wow-doge` hit the same route.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
