//! Error taxonomy for the blog post service.
//!
//! Every failure mode is a distinct variant propagated unmodified to the
//! caller. The service performs no retries and no compensating actions:
//! a failure mid-sequence (for example after a counter update) leaves the
//! earlier side effects in place.

use thiserror::Error;

/// All errors surfaced by the post service and its adapters.
#[derive(Debug, Error)]
pub enum AppError {
    /// A negative page number was requested.
    #[error("page number must not be negative")]
    PageWrong,

    /// An empty category name was supplied where one is required.
    #[error("category name must not be empty")]
    CategoryNameMissing,

    /// A post with the same title already exists.
    #[error("a post with this title already exists")]
    TitleExists,

    /// A post was submitted without a category reference.
    #[error("post is missing its category reference")]
    CategoryMissing,

    /// The store reported that no document was created.
    #[error("store reported no created post")]
    AddFailed,

    /// An id-keyed operation was called without an identifier.
    #[error("post id is missing")]
    IdMissing,

    /// The store reported that zero posts were modified.
    #[error("store reported no modified posts")]
    UpdateFailed,

    /// A lookup by id matched nothing.
    #[error("post not found")]
    PostNotFound,

    /// The store reported that removal failed.
    #[error("store reported a failed removal")]
    DeleteFailed,

    /// A category name could not be resolved to an identifier.
    #[error("category not found: {0}")]
    CategoryNotFound(String),

    /// Underlying database driver failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Returns true for the not-found family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PostNotFound | Self::CategoryNotFound(_))
    }
}
