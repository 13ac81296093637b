//! Core business entities.

pub mod category;
pub mod post;

pub use category::{Category, CategoryId};
pub use post::{NewPost, Post, PostId, PostPatch};
