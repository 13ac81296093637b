//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod category_counter;
pub mod post_repository;

pub use category_counter::CategoryCounter;
pub use post_repository::{PostFilter, PostQuery, PostRepository, PostSort};

#[cfg(test)]
pub use category_counter::MockCategoryCounter;
#[cfg(test)]
pub use post_repository::MockPostRepository;
