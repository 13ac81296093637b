//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain traits using SQLx with
//! runtime-checked queries.
//!
//! # Implementations
//!
//! - [`PgPostRepository`] - Post storage and retrieval
//! - [`PgCategoryCounter`] - Category count bookkeeping and name resolution

pub mod pg_category_counter;
pub mod pg_post_repository;

pub use pg_category_counter::PgCategoryCounter;
pub use pg_post_repository::PgPostRepository;
