//! Handlers for QR code downloads.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::qr::{DownloadQuery, QrRequest};
use crate::application::services::{QrDownload, QrExport};
use crate::error::AppError;
use crate::state::AppState;

/// Renders a QR code for any slug, registered or not.
///
/// # Endpoint
///
/// `POST /api/qr`
///
/// Encodes `<origin>/<slug>`, or `<origin>` when no slug is given. The
/// filename defaults to the slug, then to `qr-fire-code`.
///
/// # Request Body
///
/// ```json
/// { "slug": "wow-doge", "format": "svg", "style": { "dot_shape": "dots" } }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation or rendering fails.
pub async fn qr_handler(
    State(state): State<AppState>,
    Json(payload): Json<QrRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let download = state.qr_service.export(QrExport {
        slug: payload.slug,
        style: payload.style,
        format: payload.format,
        filename: payload.filename,
        size: payload.size,
    })?;

    Ok(attachment(download))
}

/// Renders the QR code of a registered slug with its stored style.
///
/// # Endpoint
///
/// `GET /api/qr-codes/{slug}/download?format=png&filename=poster&size=512`
///
/// # Errors
///
/// - `404` if the slug is not registered
/// - `503` if the store is unavailable
pub async fn download_handler(
    Path(slug): Path<String>,
    Query(query): Query<DownloadQuery>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    query.validate()?;

    let download = state
        .qr_service
        .export_registered(&slug, query.format, query.filename, query.size)
        .await?;

    Ok(attachment(download))
}

/// Wraps rendered bytes in a downloadable response.
fn attachment(download: QrDownload) -> Response {
    (
        [
            (header::CONTENT_TYPE, download.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", download.filename),
            ),
        ],
        download.bytes,
    )
        .into_response()
}
