//! DTOs for slug registration.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{SlugId, StyleOptions};

/// Request to register a slug.
///
/// Missing `slug` or `url` deserialize as empty strings so they are reported
/// as field-level validation messages rather than as malformed JSON.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Free-form slug; sanitized before registration.
    #[serde(default)]
    #[validate(length(max = 64, message = "Slug must be at most 64 characters."))]
    pub slug: String,

    /// Destination URL (must be absolute HTTP/HTTPS).
    #[serde(default)]
    #[validate(length(max = 2048, message = "Destination URL is too long."))]
    pub url: String,

    /// QR code style stored with the slug.
    #[serde(default)]
    #[validate(nested)]
    pub style: StyleOptions,
}

/// Confirmation of a registered slug.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: SlugId,
    pub slug: String,
    /// Final public URL, `<origin>/<slug>`.
    pub short_url: String,
}
