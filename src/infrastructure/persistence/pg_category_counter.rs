//! PostgreSQL implementation of the category counter collaborator.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::CategoryId;
use crate::domain::repositories::CategoryCounter;
use crate::error::AppError;

/// PostgreSQL-backed category count bookkeeping.
///
/// Counter updates are plain unconditional writes; two call sites
/// (create/delete and category change on update) share them without
/// coordination.
pub struct PgCategoryCounter {
    pool: Arc<PgPool>,
}

impl PgCategoryCounter {
    /// Creates a new counter with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryCounter for PgCategoryCounter {
    async fn id_for_name(&self, name: &str) -> Result<CategoryId, AppError> {
        let id: Option<String> = sqlx::query_scalar("SELECT id FROM categories WHERE name = $1")
            .bind(name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        id.map(CategoryId)
            .ok_or_else(|| AppError::CategoryNotFound(name.to_string()))
    }

    async fn increase_count(&self, category_id: &CategoryId) -> Result<(), AppError> {
        sqlx::query("UPDATE categories SET blog_count = blog_count + 1 WHERE id = $1")
            .bind(&category_id.0)
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }

    async fn decrease_count(&self, category_id: &CategoryId) -> Result<(), AppError> {
        sqlx::query("UPDATE categories SET blog_count = blog_count - 1 WHERE id = $1")
            .bind(&category_id.0)
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
