//! Business logic services for the application layer.

pub mod qr_service;
pub mod redirect_resolver;
pub mod slug_registry;

pub use qr_service::{QrDownload, QrError, QrExport, QrService};
pub use redirect_resolver::{Outcome, RedirectResolver, ResolveError};
pub use slug_registry::{RegistrationError, SlugRegistry};
