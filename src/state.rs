//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{QrService, RedirectResolver, SlugRegistry};
use crate::domain::repositories::SlugRepository;

/// Services shared by all requests.
///
/// Every service holds the same store handle; there is no other shared state
/// between registration and resolution.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<SlugRegistry>,
    pub resolver: Arc<RedirectResolver>,
    pub qr_service: Arc<QrService>,
    pub store: Arc<dyn SlugRepository>,
}

impl AppState {
    /// Wires all services to one store.
    pub fn new(store: Arc<dyn SlugRepository>, public_origin: impl Into<String>) -> Self {
        Self {
            registry: Arc::new(SlugRegistry::new(store.clone())),
            resolver: Arc::new(RedirectResolver::new(store.clone())),
            qr_service: Arc::new(QrService::new(public_origin, store.clone())),
            store,
        }
    }
}
