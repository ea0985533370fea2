//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-memory slug stores
//! - [`qr`] - QR code rendering and image export

pub mod persistence;
pub mod qr;
