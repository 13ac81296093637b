//! Category entity referenced by posts.

use serde::{Deserialize, Serialize};

/// Opaque category identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A post classification.
///
/// Owned by an external component; `blog_count` is a denormalized tally of
/// posts in the category, maintained exclusively through
/// [`crate::domain::repositories::CategoryCounter`] and never mutated
/// directly by this crate's callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub blog_count: i64,
}
