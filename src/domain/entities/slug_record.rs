//! Slug record entity: one registered slug and where it points.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::style::StyleOptions;

/// Store-assigned identifier of a slug record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlugId(pub i64);

impl fmt::Display for SlugId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted slug with its destination and QR style.
///
/// Records are written once and never modified. `destination_url` is
/// optional because the store may hold records written without one; such
/// records resolve exactly like a missing slug.
#[derive(Debug, Clone, PartialEq)]
pub struct SlugRecord {
    pub id: SlugId,
    pub slug: String,
    pub destination_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub style: StyleOptions,
}

impl SlugRecord {
    /// Creates a new SlugRecord instance.
    pub fn new(
        id: SlugId,
        slug: String,
        destination_url: Option<String>,
        created_at: DateTime<Utc>,
        style: StyleOptions,
    ) -> Self {
        Self {
            id,
            slug,
            destination_url,
            created_at,
            style,
        }
    }

    /// Returns the destination if it is present and non-empty.
    pub fn redirect_target(&self) -> Option<&str> {
        self.destination_url
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}

/// Input data for inserting a record. `created_at` is left to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSlugRecord {
    pub slug: String,
    pub destination_url: Option<String>,
    pub style: StyleOptions,
}

/// A registration request as received from a caller, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SlugCandidate {
    pub slug: String,
    pub destination_url: String,
    pub style: StyleOptions,
}

impl SlugCandidate {
    pub fn new(slug: impl Into<String>, destination_url: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            destination_url: destination_url.into(),
            style: StyleOptions::default(),
        }
    }

    pub fn with_style(mut self, style: StyleOptions) -> Self {
        self.style = style;
        self
    }
}
