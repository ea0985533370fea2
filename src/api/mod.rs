//! JSON API layer.
//!
//! Translates HTTP requests into registry, resolver and QR operations.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
