//! Blog post CRUD service with denormalized category count maintenance.

use std::sync::Arc;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::domain::entities::{CategoryId, NewPost, Post, PostId, PostPatch};
use crate::domain::repositories::{
    CategoryCounter, PostFilter, PostQuery, PostRepository, PostSort,
};
use crate::error::AppError;
use serde::Serialize;

/// One page of posts together with the total matching count.
///
/// `total` is the full count of posts matching the filter, independent of
/// the page window actually returned.
#[derive(Debug, Clone, Serialize)]
pub struct PostPage {
    pub total: i64,
    pub posts: Vec<Post>,
}

/// Facade over post storage and category count bookkeeping.
///
/// Each operation is a single stateless request: zero or more sequential
/// store calls that either complete or fail. Multi-step operations (create,
/// delete, category change on update) issue the post mutation and the
/// counter mutation as two independent calls with no transaction spanning
/// them; a failure between the steps leaves the earlier side effect in
/// place.
pub struct PostService<P: PostRepository, C: CategoryCounter> {
    posts: Arc<P>,
    categories: Arc<C>,
    page_size: i64,
}

impl<P: PostRepository, C: CategoryCounter> PostService<P, C> {
    /// Creates a service with the default page size.
    pub fn new(posts: Arc<P>, categories: Arc<C>) -> Self {
        Self::with_page_size(posts, categories, DEFAULT_PAGE_SIZE)
    }

    /// Creates a service with an explicit page size (see `BLOG_PAGE_SIZE`).
    pub fn with_page_size(posts: Arc<P>, categories: Arc<C>, page_size: i64) -> Self {
        Self {
            posts,
            categories,
            page_size,
        }
    }

    /// Offset for a 1-indexed page; pages 0 and 1 both start at the top.
    fn offset_for_page(&self, page: i64) -> i64 {
        if page <= 1 { 0 } else { (page - 1) * self.page_size }
    }

    /// Lists one page of posts, newest first, with the category relation
    /// expanded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::PageWrong`] when `page` is negative.
    pub async fn list_posts(
        &self,
        page: i64,
        category: Option<CategoryId>,
    ) -> Result<PostPage, AppError> {
        if page < 0 {
            return Err(AppError::PageWrong);
        }

        let filter = match category {
            Some(id) => PostFilter::by_category(id),
            None => PostFilter::default(),
        };

        let total = self.posts.count(&filter).await?;
        let posts = self
            .posts
            .find(PostQuery {
                filter,
                sort: PostSort::CreatedAtDesc,
                limit: self.page_size,
                offset: self.offset_for_page(page),
                populate_category: true,
            })
            .await?;

        Ok(PostPage { total, posts })
    }

    /// Lists one page of posts in the named category.
    ///
    /// The name is resolved to an identifier through the category counter
    /// collaborator. Sorted by id descending, unlike [`Self::list_posts`];
    /// the divergence is inherited behavior and callers rely on it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::PageWrong`] when `page` is negative,
    /// [`AppError::CategoryNameMissing`] when `category_name` is empty, and
    /// [`AppError::CategoryNotFound`] when the name resolves to nothing.
    pub async fn list_posts_by_category_name(
        &self,
        page: i64,
        category_name: &str,
    ) -> Result<PostPage, AppError> {
        if page < 0 {
            return Err(AppError::PageWrong);
        }
        if category_name.is_empty() {
            return Err(AppError::CategoryNameMissing);
        }

        let category_id = self.categories.id_for_name(category_name).await?;
        let filter = PostFilter::by_category(category_id);

        let total = self.posts.count(&filter).await?;
        let posts = self
            .posts
            .find(PostQuery {
                filter,
                sort: PostSort::IdDesc,
                limit: self.page_size,
                offset: self.offset_for_page(page),
                populate_category: true,
            })
            .await?;

        Ok(PostPage { total, posts })
    }

    /// Creates a post and bumps its category's post count.
    ///
    /// Title uniqueness is an explicit pre-check, not a store constraint;
    /// two concurrent creates with the same title can both pass it. The
    /// insert and the counter increment are two independent calls: when the
    /// increment fails the post stays created.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::TitleExists`] on a duplicate title,
    /// [`AppError::CategoryMissing`] when no category reference is given,
    /// and [`AppError::AddFailed`] when the store reports nothing created.
    pub async fn create_post(&self, new_post: NewPost) -> Result<(), AppError> {
        let existing = self
            .posts
            .find_one(&PostFilter::by_title(new_post.title.clone()))
            .await?;
        if existing.is_some() {
            return Err(AppError::TitleExists);
        }

        let category_id = new_post
            .category_id
            .clone()
            .ok_or(AppError::CategoryMissing)?;

        let created = self.posts.insert(new_post).await?;
        self.categories.increase_count(&category_id).await?;

        if created.is_none() {
            return Err(AppError::AddFailed);
        }

        tracing::debug!(category = %category_id, "post created");
        Ok(())
    }

    /// Applies a partial update to the post with the given id.
    ///
    /// When the patch moves the post to a different category, the counter
    /// transfer (decrement old, increment new) happens before the update is
    /// applied; a failing update does not roll the transfer back.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::IdMissing`] when `id` is empty,
    /// [`AppError::PostNotFound`] when a category change references a
    /// missing post, and [`AppError::UpdateFailed`] when zero posts were
    /// modified.
    pub async fn update_by_id(&self, id: &PostId, patch: PostPatch) -> Result<(), AppError> {
        if id.is_missing() {
            return Err(AppError::IdMissing);
        }

        if let Some(new_category) = patch.category_id.clone() {
            let current = self.get_by_id(id).await?;
            if new_category != current.category_id {
                self.categories.decrease_count(&current.category_id).await?;
                self.categories.increase_count(&new_category).await?;
            }
        }

        let modified = self.posts.update(&PostFilter::by_id(id.clone()), patch).await?;
        if modified == 0 {
            return Err(AppError::UpdateFailed);
        }
        Ok(())
    }

    /// Applies a partial update to every post matching an arbitrary filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UpdateFailed`] when zero posts matched.
    pub async fn update_by_condition(
        &self,
        condition: &PostFilter,
        update: PostPatch,
    ) -> Result<(), AppError> {
        let matched = self.posts.update(condition, update).await?;
        tracing::debug!(matched, "conditional update");
        if matched == 0 {
            return Err(AppError::UpdateFailed);
        }
        Ok(())
    }

    /// Fetches a single post by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::IdMissing`] when `id` is empty and
    /// [`AppError::PostNotFound`] when nothing matches.
    pub async fn get_by_id(&self, id: &PostId) -> Result<Post, AppError> {
        if id.is_missing() {
            return Err(AppError::IdMissing);
        }

        self.posts
            .find_one(&PostFilter::by_id(id.clone()))
            .await?
            .ok_or(AppError::PostNotFound)
    }

    /// Deletes a post and drops its category's post count by one.
    ///
    /// Fetch and removal are separate calls; a concurrent delete between
    /// them is unguarded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::IdMissing`] when `id` is empty,
    /// [`AppError::PostNotFound`] when the post does not exist, and
    /// [`AppError::DeleteFailed`] when the store reports a failed removal.
    pub async fn delete_post(&self, id: &PostId) -> Result<(), AppError> {
        if id.is_missing() {
            return Err(AppError::IdMissing);
        }

        let post = self.get_by_id(id).await?;
        let removed = self.posts.remove(&PostFilter::by_id(id.clone())).await?;
        self.categories.decrease_count(&post.category_id).await?;

        if !removed {
            return Err(AppError::DeleteFailed);
        }
        Ok(())
    }

    /// Bumps a post's read count by one.
    ///
    /// Read-modify-write: the current count is fetched (absent counts as 0)
    /// and `count + 1` is written back through [`Self::update_by_condition`].
    /// Concurrent increments can lose updates; there is no atomic increment
    /// at this layer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::IdMissing`] when `id` is empty and
    /// [`AppError::PostNotFound`] when the post does not exist.
    pub async fn increment_read_count(&self, id: &PostId) -> Result<(), AppError> {
        if id.is_missing() {
            return Err(AppError::IdMissing);
        }

        let post = self.get_by_id(id).await?;
        let count = post.read_count_or_zero();
        self.update_by_condition(
            &PostFilter::by_id(id.clone()),
            PostPatch::read_count(count + 1),
        )
        .await
    }
}
