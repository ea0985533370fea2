//! Core domain entities.
//!
//! - [`SlugRecord`] - A registered slug and its destination
//! - [`NewSlugRecord`] - Insert payload handed to the store
//! - [`SlugCandidate`] - Unvalidated registration input
//! - [`StyleOptions`] - Cosmetic QR code options kept with each record

pub mod slug_record;
pub mod style;

pub use slug_record::{NewSlugRecord, SlugCandidate, SlugId, SlugRecord};
pub use style::{CornerDotShape, CornerSquareShape, DotShape, StyleOptions};
