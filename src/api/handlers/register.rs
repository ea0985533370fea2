//! Handler for slug registration.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::register::{RegisterRequest, RegisterResponse};
use crate::domain::entities::SlugCandidate;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::slug::sanitize_slug;

/// Registers a slug pointing at a destination URL.
///
/// # Endpoint
///
/// `POST /api/qr-codes`
///
/// # Request Body
///
/// ```json
/// {
///   "slug": "Wow Doge",
///   "url": "https://example.com/page",
///   "style": { "dot_shape": "rounded", "foreground_color": "#222222" }
/// }
/// ```
///
/// The slug is sanitized first (lowercased, whitespace to `-`, other
/// characters dropped), so the example registers `wow-doge`.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "id": 1, "slug": "wow-doge", "short_url": "https://qr.example.com/wow-doge" }
/// ```
///
/// # Errors
///
/// - `400` with `details.fields.slug` / `details.fields.url` messages
/// - `409` if the slug is already taken
/// - `503` if the store is unavailable
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    payload.validate()?;

    let slug = sanitize_slug(&payload.slug);
    let candidate = SlugCandidate::new(slug.clone(), payload.url).with_style(payload.style);

    let id = state.registry.create(candidate).await?;
    let short_url = state.qr_service.payload(Some(&slug));

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id,
            slug,
            short_url,
        }),
    ))
}
