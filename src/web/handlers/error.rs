//! Service-unavailable page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorTemplate {}

/// `503 Service Unavailable` HTML page, shown when the store cannot be
/// queried while resolving a slug.
pub fn unavailable_page() -> Response {
    (StatusCode::SERVICE_UNAVAILABLE, ErrorTemplate {}).into_response()
}
