//! Slug sanitization and validation.
//!
//! Sanitization is applied only where a slug is registered. Resolution uses
//! the raw path segment, so `WOW-DOGE` never reaches the `wow-doge` record.

use regex::Regex;
use std::sync::LazyLock;

/// Accepted slug grammar.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("valid slug regex"));

/// Slugs shadowed by fixed routes of the service.
pub const RESERVED_SLUGS: &[&str] = &["api", "health", "static"];

/// Reasons a slug is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    #[error("Slug is required.")]
    Empty,

    #[error("Slug can only contain lowercase letters, digits, and hyphens.")]
    InvalidCharacters,

    #[error("This slug is reserved.")]
    Reserved,
}

/// Turns free-form user input into slug grammar.
///
/// Lowercases, replaces each run of whitespace with a single hyphen, and
/// drops every remaining character outside `[a-z0-9-]`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(sanitize_slug("Wow Doge!"), "wow-doge");
/// assert_eq!(sanitize_slug("  Spaced   Out "), "-spaced-out-");
/// ```
pub fn sanitize_slug(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            out.push(c);
        }
    }

    out
}

/// Checks a slug against the registration grammar.
///
/// # Errors
///
/// Returns [`SlugError`] describing the first rule the slug breaks.
pub fn validate_slug(slug: &str) -> Result<(), SlugError> {
    if slug.is_empty() {
        return Err(SlugError::Empty);
    }

    if !SLUG_REGEX.is_match(slug) {
        return Err(SlugError::InvalidCharacters);
    }

    if RESERVED_SLUGS.contains(&slug) {
        return Err(SlugError::Reserved);
    }

    Ok(())
}
