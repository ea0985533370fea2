//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::state::AppState;

/// Template for the landing page.
///
/// Renders `templates/home.html` with the public origin that short URLs
/// are built on.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub public_origin: String,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate {
        public_origin: state.qr_service.public_origin().to_string(),
    }
}
