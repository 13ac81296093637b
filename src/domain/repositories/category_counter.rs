//! Collaborator trait for category count bookkeeping.

use crate::domain::entities::CategoryId;
use crate::error::AppError;
use async_trait::async_trait;

/// External collaborator that owns category bookkeeping.
///
/// The denormalized `blog_count` on a category is maintained exclusively
/// through this interface; nothing else in the system writes it.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCategoryCounter`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryCounter: Send + Sync {
    /// Resolves a category name to its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CategoryNotFound`] when no category carries the
    /// name, [`AppError::Database`] on driver errors.
    async fn id_for_name(&self, name: &str) -> Result<CategoryId, AppError>;

    /// Increments the category's post count by one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on driver errors.
    async fn increase_count(&self, category_id: &CategoryId) -> Result<(), AppError>;

    /// Decrements the category's post count by one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on driver errors.
    async fn decrease_count(&self, category_id: &CategoryId) -> Result<(), AppError>;
}
