//! Repository trait and query specification for post data access.

use crate::domain::entities::{CategoryId, NewPost, Post, PostId, PostPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Filter over posts. Fields set to `None` do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFilter {
    pub id: Option<PostId>,
    pub title: Option<String>,
    pub category_id: Option<CategoryId>,
}

impl PostFilter {
    /// Filter matching a single post by id.
    pub fn by_id(id: PostId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Filter matching posts with an exact title.
    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Filter matching posts in a category.
    pub fn by_category(category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }
}

/// Sort order for listing queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSort {
    /// Newest first by creation timestamp.
    CreatedAtDesc,
    /// Descending by identifier.
    IdDesc,
}

/// Full specification of a listing query: filter, ordering, a limit/offset
/// window, and whether the category relation should be expanded.
#[derive(Debug, Clone)]
pub struct PostQuery {
    pub filter: PostFilter,
    pub sort: PostSort,
    pub limit: i64,
    pub offset: i64,
    pub populate_category: bool,
}

/// Repository interface for post storage.
///
/// The capability set mirrors a generic document-collection driver: count,
/// find, find-one, insert, update, remove. Query execution, indexing, and
/// persistence guarantees belong to the implementation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPostRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Counts posts matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on driver errors.
    async fn count(&self, filter: &PostFilter) -> Result<i64, AppError>;

    /// Runs a listing query and returns one window of posts.
    ///
    /// Internal bookkeeping fields (the version column) are never part of
    /// the returned entities.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on driver errors.
    async fn find(&self, query: PostQuery) -> Result<Vec<Post>, AppError>;

    /// Returns the first post matching the filter, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on driver errors.
    async fn find_one(&self, filter: &PostFilter) -> Result<Option<Post>, AppError>;

    /// Inserts a post and returns the created entity.
    ///
    /// Returns `Ok(None)` when the store reports that nothing was created.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on driver errors.
    async fn insert(&self, new_post: NewPost) -> Result<Option<Post>, AppError>;

    /// Applies a partial update to every post matching the filter.
    ///
    /// Only fields present in [`PostPatch`] are modified. Returns the number
    /// of posts affected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on driver errors.
    async fn update(&self, filter: &PostFilter, patch: PostPatch) -> Result<u64, AppError>;

    /// Removes every post matching the filter.
    ///
    /// Returns `true` when at least one post was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on driver errors.
    async fn remove(&self, filter: &PostFilter) -> Result<bool, AppError>;
}
