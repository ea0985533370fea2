//! Not-found page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {}

/// `404 Not Found` HTML page.
pub fn not_found_page() -> Response {
    (StatusCode::NOT_FOUND, NotFoundTemplate {}).into_response()
}

/// Router fallback for paths no route matches.
pub async fn not_found_handler() -> Response {
    not_found_page()
}
