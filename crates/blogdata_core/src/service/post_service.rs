//! Post use-case service.
//!
//! # Responsibility
//! - Provide create/update/get/list/delete entry points for posts.
//! - Re-validate only the field a per-field update touches.

use crate::model::post::{NewPost, Post, PostId};
use crate::repo::post_repo::{PostListQuery, PostRepository};
use crate::repo::{RepoError, RepoResult};
use crate::service::log_outcome;

/// Use-case service wrapper for Post operations.
pub struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates every field, inserts and reads back one Post.
    ///
    /// `category` must be exactly `Fiction` or `Non-Fiction`.
    pub fn create_post(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        summary: Option<String>,
        category: &str,
    ) -> RepoResult<Post> {
        let result = NewPost::new(title, content, summary, category)
            .map_err(RepoError::from)
            .and_then(|draft| self.repo.create_post(&draft))
            .and_then(|id| self.read_back(id));
        log_outcome("post_create", None, result)
    }

    pub fn retitle_post(&self, id: PostId, title: impl Into<String>) -> RepoResult<Post> {
        let title = title.into();
        let result = self.modify(id, |post| post.set_title(title).map_err(RepoError::from));
        log_outcome("post_update", Some(id), result)
    }

    pub fn rewrite_content(&self, id: PostId, content: impl Into<String>) -> RepoResult<Post> {
        let content = content.into();
        let result = self.modify(id, |post| post.set_content(content).map_err(RepoError::from));
        log_outcome("post_update", Some(id), result)
    }

    /// Replaces or clears (`None`) the summary.
    pub fn set_summary(&self, id: PostId, summary: Option<String>) -> RepoResult<Post> {
        let result = self.modify(id, |post| post.set_summary(summary).map_err(RepoError::from));
        log_outcome("post_update", Some(id), result)
    }

    pub fn recategorize_post(&self, id: PostId, category: &str) -> RepoResult<Post> {
        let result = self.modify(id, |post| {
            post.set_category(category).map_err(RepoError::from)
        });
        log_outcome("post_update", Some(id), result)
    }

    pub fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        self.repo.get_post(id)
    }

    pub fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>> {
        self.repo.list_posts(query)
    }

    pub fn delete_post(&self, id: PostId) -> RepoResult<()> {
        log_outcome("post_delete", Some(id), self.repo.delete_post(id))
    }

    fn modify(
        &self,
        id: PostId,
        apply: impl FnOnce(&mut Post) -> RepoResult<()>,
    ) -> RepoResult<Post> {
        let mut post = self
            .repo
            .get_post(id)?
            .ok_or(RepoError::NotFound { entity: "post", id })?;
        apply(&mut post)?;
        self.repo.update_post(&post)?;
        self.read_back(id)
    }

    fn read_back(&self, id: PostId) -> RepoResult<Post> {
        self.repo.get_post(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("post {id} missing in read-back after write"))
        })
    }
}
