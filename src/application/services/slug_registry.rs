//! Slug registration service.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::entities::{NewSlugRecord, SlugCandidate, SlugId};
use crate::domain::repositories::{SlugRepository, StoreError};
use crate::utils::slug::{SlugError, validate_slug};
use crate::utils::url_validator::{UrlValidationError, validate_destination_url};

/// Reasons a registration is rejected.
///
/// The first three are client-input errors the user can correct.
/// `StoreUnavailable` is an infrastructure failure and is never retried.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("{0}")]
    InvalidSlug(#[from] SlugError),

    #[error("{0}")]
    InvalidUrl(#[from] UrlValidationError),

    #[error("slug '{0}' is already taken")]
    DuplicateSlug(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<StoreError> for RegistrationError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Conflict(slug) => Self::DuplicateSlug(slug),
            StoreError::Unavailable(reason) => Self::StoreUnavailable(reason),
        }
    }
}

/// Owns writes to the slug keyspace.
///
/// Uniqueness is guaranteed by the store's conditional insert. The
/// preceding lookup only turns the common duplicate case into an early
/// rejection; a registration that loses a race against a concurrent one is
/// still reported as [`RegistrationError::DuplicateSlug`].
pub struct SlugRegistry {
    repository: Arc<dyn SlugRepository>,
}

impl SlugRegistry {
    /// Creates a new registry over the given store.
    pub fn new(repository: Arc<dyn SlugRepository>) -> Self {
        Self { repository }
    }

    /// Validates and persists a candidate as a new slug record.
    ///
    /// Performs exactly one write on success and none on any rejection.
    ///
    /// # Errors
    ///
    /// - [`RegistrationError::InvalidSlug`] if the slug is empty, breaks
    ///   `[a-z0-9-]+`, or is reserved
    /// - [`RegistrationError::InvalidUrl`] if the destination is missing,
    ///   malformed, or not HTTP(S)
    /// - [`RegistrationError::DuplicateSlug`] if the slug is taken
    /// - [`RegistrationError::StoreUnavailable`] on store failures
    pub async fn create(&self, candidate: SlugCandidate) -> Result<SlugId, RegistrationError> {
        validate_slug(&candidate.slug)?;
        validate_destination_url(&candidate.destination_url)?;

        let existing = self
            .repository
            .find_by_slug(&candidate.slug)
            .await
            .inspect_err(|e| error!("Slug lookup failed for '{}': {}", candidate.slug, e))?;

        if existing.is_some() {
            return Err(RegistrationError::DuplicateSlug(candidate.slug));
        }

        let record = self
            .repository
            .insert(NewSlugRecord {
                slug: candidate.slug,
                destination_url: Some(candidate.destination_url),
                style: candidate.style,
            })
            .await
            .inspect_err(|e| {
                if let StoreError::Unavailable(_) = e {
                    error!("Slug insert failed: {}", e);
                }
            })?;

        info!(slug = %record.slug, id = %record.id, "Registered slug");

        Ok(record.id)
    }
}
