//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthResponse};
use crate::state::AppState;

/// Returns service health with the store check.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Store reachable
/// - **503 Service Unavailable**: Store unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "Connected, 42 slugs" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let response = HealthResponse::from_store_check(check_store(&state).await);

    if response.checks.store.is_ok() {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_store(state: &AppState) -> CheckStatus {
    let result = match state.store.ping().await {
        Ok(()) => state.store.count().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(count) => CheckStatus::ok(format!("Connected, {} slugs", count)),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            CheckStatus::error("Store unreachable")
        }
    }
}
