#![allow(dead_code)]

//! In-memory implementations of the storage traits for exercising the full
//! service without a database.

use async_trait::async_trait;
use blog_service::prelude::*;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Backing state shared by the post repository and the category counter.
///
/// Post ids are zero-padded sequence numbers so lexicographic id ordering
/// matches insertion order, the way store-assigned monotonic ids behave.
#[derive(Default)]
pub struct InMemoryStore {
    posts: Mutex<Vec<Post>>,
    categories: Mutex<HashMap<String, Category>>,
    next_id: AtomicU64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a category with a zero post count.
    pub fn add_category(&self, id: &str, name: &str) {
        self.categories.lock().unwrap().insert(
            id.to_string(),
            Category {
                id: CategoryId::from(id),
                name: name.to_string(),
                blog_count: 0,
            },
        );
    }

    /// Current denormalized post count for a category.
    pub fn blog_count(&self, id: &str) -> i64 {
        self.categories.lock().unwrap()[id].blog_count
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    fn matches(post: &Post, filter: &PostFilter) -> bool {
        filter.id.as_ref().is_none_or(|id| post.id == *id)
            && filter.title.as_ref().is_none_or(|t| post.title == *t)
            && filter
                .category_id
                .as_ref()
                .is_none_or(|c| post.category_id == *c)
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn count(&self, filter: &PostFilter) -> Result<i64, AppError> {
        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().filter(|p| Self::matches(p, filter)).count() as i64)
    }

    async fn find(&self, query: PostQuery) -> Result<Vec<Post>, AppError> {
        let posts = self.posts.lock().unwrap();
        let categories = self.categories.lock().unwrap();

        let mut matched: Vec<Post> = posts
            .iter()
            .filter(|p| Self::matches(p, &query.filter))
            .cloned()
            .collect();

        match query.sort {
            PostSort::CreatedAtDesc => {
                matched.sort_by(|a, b| (&b.created_at, &b.id.0).cmp(&(&a.created_at, &a.id.0)));
            }
            PostSort::IdDesc => matched.sort_by(|a, b| b.id.0.cmp(&a.id.0)),
        }

        let window = matched
            .into_iter()
            .skip(query.offset.max(0) as usize)
            .take(query.limit.max(0) as usize)
            .map(|mut post| {
                if query.populate_category {
                    post.category = categories.get(&post.category_id.0).cloned();
                }
                post
            })
            .collect();

        Ok(window)
    }

    async fn find_one(&self, filter: &PostFilter) -> Result<Option<Post>, AppError> {
        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().find(|p| Self::matches(p, filter)).cloned())
    }

    async fn insert(&self, new_post: NewPost) -> Result<Option<Post>, AppError> {
        let category_id = new_post
            .category_id
            .expect("service checks the category before inserting");

        let seq = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let post = Post {
            id: PostId(format!("{seq:06}")),
            title: new_post.title,
            category_id,
            category: None,
            read_count: None,
            created_at: Utc::now(),
            extra: new_post.extra,
        };

        self.posts.lock().unwrap().push(post.clone());
        Ok(Some(post))
    }

    async fn update(&self, filter: &PostFilter, patch: PostPatch) -> Result<u64, AppError> {
        let mut posts = self.posts.lock().unwrap();
        let mut affected = 0;

        for post in posts.iter_mut().filter(|p| Self::matches(p, filter)) {
            if let Some(title) = &patch.title {
                post.title = title.clone();
            }
            if let Some(category_id) = &patch.category_id {
                post.category_id = category_id.clone();
            }
            if let Some(read_count) = patch.read_count {
                post.read_count = Some(read_count);
            }
            if let Some(extra) = &patch.extra {
                post.extra = extra.clone();
            }
            affected += 1;
        }

        Ok(affected)
    }

    async fn remove(&self, filter: &PostFilter) -> Result<bool, AppError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| !Self::matches(p, filter));
        Ok(posts.len() < before)
    }
}

#[async_trait]
impl CategoryCounter for InMemoryStore {
    async fn id_for_name(&self, name: &str) -> Result<CategoryId, AppError> {
        let categories = self.categories.lock().unwrap();
        categories
            .values()
            .find(|c| c.name == name)
            .map(|c| c.id.clone())
            .ok_or_else(|| AppError::CategoryNotFound(name.to_string()))
    }

    async fn increase_count(&self, category_id: &CategoryId) -> Result<(), AppError> {
        let mut categories = self.categories.lock().unwrap();
        if let Some(category) = categories.get_mut(&category_id.0) {
            category.blog_count += 1;
        }
        Ok(())
    }

    async fn decrease_count(&self, category_id: &CategoryId) -> Result<(), AppError> {
        let mut categories = self.categories.lock().unwrap();
        if let Some(category) = categories.get_mut(&category_id.0) {
            category.blog_count -= 1;
        }
        Ok(())
    }
}
