//! Helper functions for slug handling, URL validation, and public URLs.
//!
//! - [`slug`] - Slug sanitization and grammar validation
//! - [`url_validator`] - Destination URL validation
//! - [`public_url`] - `<origin>/<slug>` construction

pub mod public_url;
pub mod slug;
pub mod url_validator;
