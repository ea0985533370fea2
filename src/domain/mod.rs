//! Domain layer: entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Slug records and their QR style options
//! - [`repositories`] - Store trait implemented by the infrastructure layer
//!
//! The domain layer has no dependency on HTTP or on a concrete store.
//! Registration and resolution logic lives in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
