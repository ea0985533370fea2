//! Destination URL validation.
//!
//! Destinations are stored exactly as submitted. This module only decides
//! whether a string is acceptable, so anything `Url::parse` would silently
//! strip (tabs, newlines, surrounding spaces) is rejected up front: the
//! stored string must be usable verbatim as a `Location` header.

use url::Url;

/// Errors that can occur while validating a destination URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Destination URL is required.")]
    Missing,

    #[error("Please enter a valid URL.")]
    InvalidFormat(String),

    #[error("Please enter a valid URL.")]
    UnsupportedProtocol(String),
}

impl UrlValidationError {
    /// Machine-readable reason for API error details.
    pub fn reason(&self) -> String {
        match self {
            Self::Missing => "missing".to_string(),
            Self::InvalidFormat(e) => e.clone(),
            Self::UnsupportedProtocol(scheme) => format!("unsupported scheme '{}'", scheme),
        }
    }
}

/// Checks that `input` is an absolute `http` or `https` URL.
///
/// Rejects `javascript:`, `data:`, `file:` and other schemes, and any input
/// containing whitespace or control characters.
///
/// # Errors
///
/// Returns [`UrlValidationError::Missing`] for empty input,
/// [`UrlValidationError::InvalidFormat`] for unparseable or relative URLs or
/// input with whitespace/control characters, and
/// [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn validate_destination_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Missing);
    }

    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(UrlValidationError::InvalidFormat(
            "contains whitespace or control characters".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(UrlValidationError::UnsupportedProtocol(other.to_string())),
    }
}
