//! Slug resolution service.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::repositories::{SlugRepository, StoreError};

/// Result of resolving a slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A record exists and carries a non-empty destination.
    Redirect(String),
    /// No record exists, or the record has no destination.
    NotFound,
}

/// Failure to reach a decision.
///
/// Store errors are never folded into [`Outcome::NotFound`]; callers render a
/// distinct error page instead of a false not-found.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<StoreError> for ResolveError {
    fn from(e: StoreError) -> Self {
        Self::StoreUnavailable(e.to_string())
    }
}

/// Read-only lookup from slug to redirect outcome.
pub struct RedirectResolver {
    repository: Arc<dyn SlugRepository>,
}

impl RedirectResolver {
    /// Creates a new resolver over the given store.
    pub fn new(repository: Arc<dyn SlugRepository>) -> Self {
        Self { repository }
    }

    /// Resolves a raw slug taken from the request path.
    ///
    /// The slug is matched exactly as given. A record without a destination
    /// yields the same [`Outcome::NotFound`] as a missing record.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::StoreUnavailable`] if the store query fails.
    pub async fn resolve(&self, slug: &str) -> Result<Outcome, ResolveError> {
        let record = self
            .repository
            .find_by_slug(slug)
            .await
            .inspect_err(|e| error!("Slug lookup failed for '{}': {}", slug, e))?;

        let outcome = match record.as_ref().and_then(|r| r.redirect_target()) {
            Some(url) => Outcome::Redirect(url.to_string()),
            None => Outcome::NotFound,
        };

        debug!(slug, found = record.is_some(), ?outcome, "Resolved slug");

        Ok(outcome)
    }
}
