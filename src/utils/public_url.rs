//! Public URL construction shared by registration responses and QR payloads.

/// Builds `<origin>/<slug>`, or just `<origin>` when no slug is chosen yet.
///
/// Trailing slashes on `origin` are trimmed so the result never contains `//`
/// before the slug.
pub fn build_public_url(origin: &str, slug: Option<&str>) -> String {
    let origin = origin.trim_end_matches('/');

    match slug {
        Some(slug) if !slug.is_empty() => format!("{}/{}", origin, slug),
        _ => origin.to_string(),
    }
}
