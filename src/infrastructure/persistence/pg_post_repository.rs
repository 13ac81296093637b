//! PostgreSQL implementation of the post repository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{Category, CategoryId, NewPost, Post, PostId, PostPatch};
use crate::domain::repositories::{PostFilter, PostQuery, PostRepository, PostSort};
use crate::error::AppError;

/// PostgreSQL repository for post storage and retrieval.
///
/// Queries are checked at runtime so the crate builds without a live
/// database. The `version` column is bumped on every update and never
/// selected into the entity.
pub struct PgPostRepository {
    pool: Arc<PgPool>,
}

impl PgPostRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Shared predicate over the three filter fields; unset fields bind NULL
/// and fall through.
const FILTER_SQL: &str = "($1::text IS NULL OR p.id = $1) \
     AND ($2::text IS NULL OR p.title = $2) \
     AND ($3::text IS NULL OR p.category_id = $3)";

fn filter_binds(filter: &PostFilter) -> (Option<String>, Option<String>, Option<String>) {
    (
        filter.id.as_ref().map(|id| id.0.clone()),
        filter.title.clone(),
        filter.category_id.as_ref().map(|id| id.0.clone()),
    )
}

fn map_post(row: &PgRow, populated: bool) -> Result<Post, sqlx::Error> {
    let category = if populated {
        let category_id: Option<String> = row.try_get("cat_id")?;
        category_id
            .map(|id| -> Result<Category, sqlx::Error> {
                Ok(Category {
                    id: CategoryId(id),
                    name: row.try_get("cat_name")?,
                    blog_count: row.try_get("cat_blog_count")?,
                })
            })
            .transpose()?
    } else {
        None
    };

    Ok(Post {
        id: PostId(row.try_get("id")?),
        title: row.try_get("title")?,
        category_id: CategoryId(row.try_get("category_id")?),
        category,
        read_count: row.try_get("read_count")?,
        created_at: row.try_get("created_at")?,
        extra: row.try_get("extra")?,
    })
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn count(&self, filter: &PostFilter) -> Result<i64, AppError> {
        let (id, title, category_id) = filter_binds(filter);

        let count: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM posts p WHERE {FILTER_SQL}"
        ))
        .bind(id)
        .bind(title)
        .bind(category_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn find(&self, query: PostQuery) -> Result<Vec<Post>, AppError> {
        let (id, title, category_id) = filter_binds(&query.filter);

        let order = match query.sort {
            PostSort::CreatedAtDesc => "p.created_at DESC",
            PostSort::IdDesc => "p.id DESC",
        };

        let sql = if query.populate_category {
            format!(
                "SELECT p.id, p.title, p.category_id, p.read_count, p.created_at, p.extra, \
                        c.id AS cat_id, c.name AS cat_name, c.blog_count AS cat_blog_count \
                 FROM posts p \
                 LEFT JOIN categories c ON c.id = p.category_id \
                 WHERE {FILTER_SQL} \
                 ORDER BY {order} \
                 LIMIT $4 OFFSET $5"
            )
        } else {
            format!(
                "SELECT p.id, p.title, p.category_id, p.read_count, p.created_at, p.extra \
                 FROM posts p \
                 WHERE {FILTER_SQL} \
                 ORDER BY {order} \
                 LIMIT $4 OFFSET $5"
            )
        };

        let rows = sqlx::query(&sql)
            .bind(id)
            .bind(title)
            .bind(category_id)
            .bind(query.limit)
            .bind(query.offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.iter()
            .map(|row| map_post(row, query.populate_category).map_err(AppError::from))
            .collect()
    }

    async fn find_one(&self, filter: &PostFilter) -> Result<Option<Post>, AppError> {
        let (id, title, category_id) = filter_binds(filter);

        let row = sqlx::query(&format!(
            "SELECT p.id, p.title, p.category_id, p.read_count, p.created_at, p.extra \
             FROM posts p WHERE {FILTER_SQL} LIMIT 1"
        ))
        .bind(id)
        .bind(title)
        .bind(category_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.as_ref()
            .map(|r| map_post(r, false).map_err(AppError::from))
            .transpose()
    }

    async fn insert(&self, new_post: NewPost) -> Result<Option<Post>, AppError> {
        let category_id = new_post.category_id.as_ref().map(|id| id.0.clone());

        let row = sqlx::query(
            "INSERT INTO posts (title, category_id, extra) \
             VALUES ($1, $2, $3) \
             RETURNING id, title, category_id, read_count, created_at, extra",
        )
        .bind(&new_post.title)
        .bind(category_id)
        .bind(&new_post.extra)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.as_ref()
            .map(|r| map_post(r, false).map_err(AppError::from))
            .transpose()
    }

    async fn update(&self, filter: &PostFilter, patch: PostPatch) -> Result<u64, AppError> {
        let (id, title, category_id) = filter_binds(filter);
        let patch_category = patch.category_id.as_ref().map(|c| c.0.clone());

        let result = sqlx::query(&format!(
            "UPDATE posts p SET \
                 title = COALESCE($4, p.title), \
                 category_id = COALESCE($5, p.category_id), \
                 read_count = COALESCE($6, p.read_count), \
                 extra = COALESCE($7, p.extra), \
                 version = p.version + 1 \
             WHERE {FILTER_SQL}"
        ))
        .bind(id)
        .bind(title)
        .bind(category_id)
        .bind(patch.title)
        .bind(patch_category)
        .bind(patch.read_count)
        .bind(patch.extra)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn remove(&self, filter: &PostFilter) -> Result<bool, AppError> {
        let (id, title, category_id) = filter_binds(filter);

        let result = sqlx::query(&format!("DELETE FROM posts p WHERE {FILTER_SQL}"))
            .bind(id)
            .bind(title)
            .bind(category_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
