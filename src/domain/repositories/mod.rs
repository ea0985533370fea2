//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod slug_repository;

pub use slug_repository::{SlugRepository, StoreError};

#[cfg(test)]
pub use slug_repository::MockSlugRepository;
