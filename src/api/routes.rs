//! API route configuration.

use crate::api::handlers::{download_handler, qr_handler, register_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /qr-codes`                 - Register a slug
/// - `GET  /qr-codes/{slug}/download` - Download the QR code of a registered slug
/// - `POST /qr`                       - Render a QR code for any slug
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/qr-codes", post(register_handler))
        .route("/qr-codes/{slug}/download", get(download_handler))
        .route("/qr", post(qr_handler))
}
