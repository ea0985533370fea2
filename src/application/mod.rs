//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::SlugRepository`] trait
//! and provide the operations HTTP handlers and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::slug_registry::SlugRegistry`] - Slug registration with uniqueness enforcement
//! - [`services::redirect_resolver::RedirectResolver`] - Slug to redirect resolution
//! - [`services::qr_service::QrService`] - QR payload construction and export

pub mod services;
