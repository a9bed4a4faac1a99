//! Blog repository - sole reader/writer of the `blogs` table.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, Set,
};
use uuid::Uuid;

use crate::domain::{Blog, CreateBlog, UpdateBlog};
use crate::errors::{AppError, AppResult};
use crate::infra::changefeed::ChangeFeed;
use crate::infra::entities::blog::{self, ActiveModel, Entity as BlogEntity};
use crate::infra::repositories::base::{ContentRepository, ListOptions, SoftDeletable};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

impl SoftDeletable for BlogEntity {
    const TABLE: &'static str = "blogs";

    fn id_col() -> Self::Column {
        blog::Column::Id
    }

    fn deleted_at_col() -> Self::Column {
        blog::Column::DeletedAt
    }

    fn deleted_by_col() -> Self::Column {
        blog::Column::DeletedBy
    }

    fn updated_at_col() -> Self::Column {
        blog::Column::UpdatedAt
    }

    fn published_col() -> Option<Self::Column> {
        Some(blog::Column::Published)
    }

    fn default_order() -> (Self::Column, Order) {
        (blog::Column::CreatedAt, Order::Desc)
    }
}

/// Blog data access contract
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn list(&self, opts: ListOptions) -> AppResult<Vec<Blog>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Blog>>;
    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Blog>>;
    /// Slug lookup spanning soft-deleted rows, used by uniqueness checks
    async fn find_by_slug_with_deleted(&self, slug: &str) -> AppResult<Option<Blog>>;
    async fn create(&self, input: CreateBlog, slug: String) -> AppResult<Blog>;
    async fn update(&self, id: Uuid, input: UpdateBlog) -> AppResult<Blog>;
    /// Soft delete; surfaces on the feed as an UPDATE with `deleted_at` set
    async fn delete(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<Blog>;
    async fn restore(&self, id: Uuid) -> AppResult<Blog>;
    async fn set_published(&self, id: Uuid, value: bool) -> AppResult<Blog>;
}

/// SeaORM-backed implementation
pub struct BlogStore {
    inner: ContentRepository<BlogEntity>,
}

impl BlogStore {
    pub fn new(db: DatabaseConnection, feed: Arc<ChangeFeed>) -> Self {
        Self {
            inner: ContentRepository::new(db, feed),
        }
    }

    async fn find_model_by_slug(&self, slug: &str, with_deleted: bool) -> AppResult<Option<blog::Model>> {
        let mut query = BlogEntity::find().filter(blog::Column::Slug.eq(slug));
        if !with_deleted {
            query = query.filter(blog::Column::DeletedAt.is_null());
        }
        query.one(self.inner.db()).await.map_err(Into::into)
    }
}

#[async_trait]
impl BlogRepository for BlogStore {
    async fn list(&self, opts: ListOptions) -> AppResult<Vec<Blog>> {
        let models = self.inner.list(&opts).await?;
        Ok(models.into_iter().map(Blog::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Blog>> {
        Ok(self.inner.find_by_id(id).await?.map(Blog::from))
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Blog>> {
        Ok(self.find_model_by_slug(slug, false).await?.map(Blog::from))
    }

    async fn find_by_slug_with_deleted(&self, slug: &str) -> AppResult<Option<Blog>> {
        Ok(self.find_model_by_slug(slug, true).await?.map(Blog::from))
    }

    async fn create(&self, input: CreateBlog, slug: String) -> AppResult<Blog> {
        if !input.title.is_complete() {
            return Err(AppError::validation("Both title variants are required"));
        }
        // Uniqueness spans soft-deleted rows so a restore can never
        // produce two rows resolving to the same slug
        if self.find_model_by_slug(&slug, true).await?.is_some() {
            return Err(AppError::conflict("Blog slug"));
        }

        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            slug: Set(slug),
            category: Set(input.category),
            emoji: Set(input.emoji),
            title_tr: Set(input.title.tr),
            title_en: Set(input.title.en),
            excerpt_tr: Set(input.excerpt.as_ref().map(|e| e.tr.clone())),
            excerpt_en: Set(input.excerpt.map(|e| e.en)),
            content_tr: Set(input.content.as_ref().map(|c| c.tr.clone())),
            content_en: Set(input.content.map(|c| c.en)),
            published: Set(input.published),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            deleted_by: Set(None),
        }
        .insert(self.inner.db())
        .await?;

        let blog = Blog::from(model);
        self.inner.feed().publish_insert(BlogEntity::TABLE, &blog);
        Ok(blog)
    }

    async fn update(&self, id: Uuid, input: UpdateBlog) -> AppResult<Blog> {
        let model = self.inner.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        let old = Blog::from(model.clone());

        if let Some(slug) = &input.slug {
            if slug != &old.slug && self.find_model_by_slug(slug, true).await?.is_some() {
                return Err(AppError::conflict("Blog slug"));
            }
        }

        let mut active: ActiveModel = model.into();
        if let Some(slug) = input.slug {
            active.slug = Set(slug);
        }
        if let Some(category) = input.category {
            active.category = Set(category);
        }
        if let Some(emoji) = input.emoji {
            active.emoji = Set(Some(emoji));
        }
        if let Some(title) = input.title {
            if !title.is_complete() {
                return Err(AppError::validation("Both title variants are required"));
            }
            active.title_tr = Set(title.tr);
            active.title_en = Set(title.en);
        }
        if let Some(excerpt) = input.excerpt {
            active.excerpt_tr = Set(Some(excerpt.tr));
            active.excerpt_en = Set(Some(excerpt.en));
        }
        if let Some(content) = input.content {
            active.content_tr = Set(Some(content.tr));
            active.content_en = Set(Some(content.en));
        }
        if let Some(published) = input.published {
            active.published = Set(published);
        }
        active.updated_at = Set(Utc::now());

        let blog = Blog::from(active.update(self.inner.db()).await?);
        self.inner
            .feed()
            .publish_update(BlogEntity::TABLE, Some(&old), &blog);
        Ok(blog)
    }

    async fn delete(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<Blog> {
        let old = self.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        let blog = Blog::from(self.inner.soft_delete(id, actor).await?);
        self.inner
            .feed()
            .publish_update(BlogEntity::TABLE, Some(&old), &blog);
        Ok(blog)
    }

    async fn restore(&self, id: Uuid) -> AppResult<Blog> {
        let blog = Blog::from(self.inner.restore(id).await?);
        self.inner.feed().publish_update(BlogEntity::TABLE, None, &blog);
        Ok(blog)
    }

    async fn set_published(&self, id: Uuid, value: bool) -> AppResult<Blog> {
        let blog = Blog::from(
            self.inner
                .set_flag(id, blog::Column::Published, value)
                .await?,
        );
        self.inner.feed().publish_update(BlogEntity::TABLE, None, &blog);
        Ok(blog)
    }
}
