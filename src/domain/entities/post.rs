//! Post entity and its creation/update inputs.

use crate::domain::entities::{Category, CategoryId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque, store-assigned post identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

impl PostId {
    /// Returns true when no identifier was actually supplied.
    pub fn is_missing(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for PostId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A blog post.
///
/// `category` is only filled by listing queries that request relation
/// expansion; point lookups leave it `None` and expose the raw
/// `category_id` reference instead. `read_count` is absent until the first
/// increment and is treated as 0 by consumers. `extra` carries arbitrary
/// caller-supplied fields, stored and returned opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub category_id: CategoryId,
    pub category: Option<Category>,
    pub read_count: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub extra: Value,
}

impl Post {
    /// Current read count, treating an absent value as 0.
    pub fn read_count_or_zero(&self) -> i64 {
        self.read_count.unwrap_or(0)
    }
}

/// Input data for creating a post.
///
/// `category_id` is optional at this stage so the service can reject a
/// missing reference with its own error rather than a type error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub extra: Value,
}

impl NewPost {
    pub fn new(title: impl Into<String>, category_id: Option<CategoryId>) -> Self {
        Self {
            title: title.into(),
            category_id,
            extra: Value::Null,
        }
    }
}

/// Partial update for an existing post.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub category_id: Option<CategoryId>,
    pub read_count: Option<i64>,
    pub extra: Option<Value>,
}

impl PostPatch {
    /// Patch that only moves the post to another category.
    pub fn category(category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }

    /// Patch that only rewrites the read count.
    pub fn read_count(count: i64) -> Self {
        Self {
            read_count: Some(count),
            ..Self::default()
        }
    }
}
