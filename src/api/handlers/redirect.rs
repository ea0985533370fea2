//! Handler for slug redirects.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::application::services::Outcome;
use crate::state::AppState;
use crate::web::handlers::{not_found_page, unavailable_page};

/// Redirects a slug to its destination URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// The path segment is looked up exactly as received; no case folding or
/// sanitization happens here.
///
/// # Responses
///
/// - `307 Temporary Redirect` to the destination
/// - `404 Not Found` HTML page when the slug is unknown or has no destination
/// - `503 Service Unavailable` HTML page when the store cannot be queried
pub async fn redirect_handler(Path(slug): Path<String>, State(state): State<AppState>) -> Response {
    match state.resolver.resolve(&slug).await {
        Ok(Outcome::Redirect(url)) => {
            debug!("Redirecting '{}' to {}", slug, url);
            Redirect::temporary(&url).into_response()
        }
        Ok(Outcome::NotFound) => not_found_page(),
        Err(_) => unavailable_page(),
    }
}
