//! Blog post use cases.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Blog, CreateBlog, UpdateBlog};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::{BlogRepository, ListOptions};
use crate::utils::slugify;

/// Blog service trait for dependency injection.
///
/// By default, operations exclude soft-deleted posts; the trash view
/// goes through `list_deleted`.
#[async_trait]
pub trait BlogService: Send + Sync {
    /// Published posts for the public site
    async fn list_published(&self) -> AppResult<Vec<Blog>>;

    /// All active posts for the admin list
    async fn list_blogs(&self) -> AppResult<Vec<Blog>>;

    /// Soft-deleted posts awaiting restore
    async fn list_deleted_blogs(&self) -> AppResult<Vec<Blog>>;

    async fn get_blog(&self, id: Uuid) -> AppResult<Blog>;

    /// Public lookup; only published, active posts resolve
    async fn get_published_by_slug(&self, slug: &str) -> AppResult<Blog>;

    async fn create_blog(&self, input: CreateBlog) -> AppResult<Blog>;

    async fn update_blog(&self, id: Uuid, input: UpdateBlog) -> AppResult<Blog>;

    /// Soft delete, recording who deleted
    async fn delete_blog(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<Blog>;

    async fn restore_blog(&self, id: Uuid) -> AppResult<Blog>;

    async fn set_published(&self, id: Uuid, value: bool) -> AppResult<Blog>;
}

/// Concrete implementation backed by the blog repository.
pub struct BlogManager<R: BlogRepository> {
    repo: Arc<R>,
}

impl<R: BlogRepository> BlogManager<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: BlogRepository> BlogService for BlogManager<R> {
    async fn list_published(&self) -> AppResult<Vec<Blog>> {
        self.repo.list(ListOptions::published()).await
    }

    async fn list_blogs(&self) -> AppResult<Vec<Blog>> {
        self.repo.list(ListOptions::active()).await
    }

    async fn list_deleted_blogs(&self) -> AppResult<Vec<Blog>> {
        let all = self.repo.list(ListOptions::with_deleted()).await?;
        Ok(all.into_iter().filter(|b| !b.is_active()).collect())
    }

    async fn get_blog(&self, id: Uuid) -> AppResult<Blog> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn get_published_by_slug(&self, slug: &str) -> AppResult<Blog> {
        let blog = self.repo.find_by_slug(slug).await?.ok_or(AppError::NotFound)?;
        if !blog.published {
            return Err(AppError::NotFound);
        }
        Ok(blog)
    }

    async fn create_blog(&self, input: CreateBlog) -> AppResult<Blog> {
        // Slug falls back to the Turkish title, the site's primary locale
        let slug = match &input.slug {
            Some(slug) => slugify(slug),
            None => slugify(&input.title.tr),
        };
        if slug.is_empty() {
            return Err(AppError::validation("Slug cannot be empty"));
        }
        self.repo.create(input, slug).await
    }

    async fn update_blog(&self, id: Uuid, input: UpdateBlog) -> AppResult<Blog> {
        let input = UpdateBlog {
            slug: match input.slug {
                Some(raw) => {
                    let slug = slugify(&raw);
                    if slug.is_empty() {
                        return Err(AppError::validation("Slug cannot be empty"));
                    }
                    Some(slug)
                }
                None => None,
            },
            ..input
        };
        self.repo.update(id, input).await
    }

    async fn delete_blog(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<Blog> {
        self.repo.delete(id, actor).await
    }

    async fn restore_blog(&self, id: Uuid) -> AppResult<Blog> {
        self.repo.restore(id).await
    }

    async fn set_published(&self, id: Uuid, value: bool) -> AppResult<Blog> {
        self.repo.set_published(id, value).await
    }
}
