//! Application services orchestrating domain operations.

pub mod post_service;

pub use post_service::{PostPage, PostService};
