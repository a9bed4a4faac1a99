//! Project repository - sole reader/writer of the `projects` table.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, Set,
};
use uuid::Uuid;

use crate::domain::{CreateProject, Project, UpdateProject};
use crate::errors::{AppError, AppResult};
use crate::infra::changefeed::ChangeFeed;
use crate::infra::entities::project::{self, ActiveModel, Entity as ProjectEntity};
use crate::infra::repositories::base::{ContentRepository, ListOptions, SoftDeletable};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

impl SoftDeletable for ProjectEntity {
    const TABLE: &'static str = "projects";

    fn id_col() -> Self::Column {
        project::Column::Id
    }

    fn deleted_at_col() -> Self::Column {
        project::Column::DeletedAt
    }

    fn deleted_by_col() -> Self::Column {
        project::Column::DeletedBy
    }

    fn updated_at_col() -> Self::Column {
        project::Column::UpdatedAt
    }

    fn published_col() -> Option<Self::Column> {
        Some(project::Column::Published)
    }

    fn featured_col() -> Option<Self::Column> {
        Some(project::Column::Featured)
    }

    // Explicit manual ordering, not recency
    fn default_order() -> (Self::Column, Order) {
        (project::Column::OrderIndex, Order::Asc)
    }
}

/// Project data access contract
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list(&self, opts: ListOptions) -> AppResult<Vec<Project>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>>;
    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Project>>;
    async fn find_by_slug_with_deleted(&self, slug: &str) -> AppResult<Option<Project>>;
    async fn create(&self, input: CreateProject, slug: String) -> AppResult<Project>;
    async fn update(&self, id: Uuid, input: UpdateProject) -> AppResult<Project>;
    async fn delete(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<Project>;
    async fn restore(&self, id: Uuid) -> AppResult<Project>;
    async fn set_published(&self, id: Uuid, value: bool) -> AppResult<Project>;
    async fn set_featured(&self, id: Uuid, value: bool) -> AppResult<Project>;
}

/// SeaORM-backed implementation
pub struct ProjectStore {
    inner: ContentRepository<ProjectEntity>,
}

impl ProjectStore {
    pub fn new(db: DatabaseConnection, feed: Arc<ChangeFeed>) -> Self {
        Self {
            inner: ContentRepository::new(db, feed),
        }
    }

    async fn find_model_by_slug(
        &self,
        slug: &str,
        with_deleted: bool,
    ) -> AppResult<Option<project::Model>> {
        let mut query = ProjectEntity::find().filter(project::Column::Slug.eq(slug));
        if !with_deleted {
            query = query.filter(project::Column::DeletedAt.is_null());
        }
        query.one(self.inner.db()).await.map_err(Into::into)
    }

    fn publish_update(&self, old: Option<&Project>, new: &Project) {
        self.inner.feed().publish_update(ProjectEntity::TABLE, old, new);
    }
}

#[async_trait]
impl ProjectRepository for ProjectStore {
    async fn list(&self, opts: ListOptions) -> AppResult<Vec<Project>> {
        let models = self.inner.list(&opts).await?;
        Ok(models.into_iter().map(Project::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>> {
        Ok(self.inner.find_by_id(id).await?.map(Project::from))
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Project>> {
        Ok(self.find_model_by_slug(slug, false).await?.map(Project::from))
    }

    async fn find_by_slug_with_deleted(&self, slug: &str) -> AppResult<Option<Project>> {
        Ok(self.find_model_by_slug(slug, true).await?.map(Project::from))
    }

    async fn create(&self, input: CreateProject, slug: String) -> AppResult<Project> {
        if !input.title.is_complete() {
            return Err(AppError::validation("Both title variants are required"));
        }
        if self.find_model_by_slug(&slug, true).await?.is_some() {
            return Err(AppError::conflict("Project slug"));
        }

        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            slug: Set(slug),
            category: Set(input.category),
            title_tr: Set(input.title.tr),
            title_en: Set(input.title.en),
            description_tr: Set(input.description.as_ref().map(|d| d.tr.clone())),
            description_en: Set(input.description.map(|d| d.en)),
            tech: Set(serde_json::json!(input.tech)),
            link: Set(input.link),
            image_url: Set(input.image_url),
            order_index: Set(input.order_index.unwrap_or(0)),
            published: Set(input.published),
            featured: Set(input.featured),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            deleted_by: Set(None),
        }
        .insert(self.inner.db())
        .await?;

        let record = Project::from(model);
        self.inner.feed().publish_insert(ProjectEntity::TABLE, &record);
        Ok(record)
    }

    async fn update(&self, id: Uuid, input: UpdateProject) -> AppResult<Project> {
        let model = self.inner.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        let old = Project::from(model.clone());

        if let Some(slug) = &input.slug {
            if slug != &old.slug && self.find_model_by_slug(slug, true).await?.is_some() {
                return Err(AppError::conflict("Project slug"));
            }
        }

        let mut active: ActiveModel = model.into();
        if let Some(slug) = input.slug {
            active.slug = Set(slug);
        }
        if let Some(category) = input.category {
            active.category = Set(category);
        }
        if let Some(title) = input.title {
            if !title.is_complete() {
                return Err(AppError::validation("Both title variants are required"));
            }
            active.title_tr = Set(title.tr);
            active.title_en = Set(title.en);
        }
        if let Some(description) = input.description {
            active.description_tr = Set(Some(description.tr));
            active.description_en = Set(Some(description.en));
        }
        if let Some(tech) = input.tech {
            active.tech = Set(serde_json::json!(tech));
        }
        if let Some(link) = input.link {
            active.link = Set(Some(link));
        }
        if let Some(image_url) = input.image_url {
            active.image_url = Set(Some(image_url));
        }
        if let Some(order_index) = input.order_index {
            active.order_index = Set(order_index);
        }
        if let Some(published) = input.published {
            active.published = Set(published);
        }
        if let Some(featured) = input.featured {
            active.featured = Set(featured);
        }
        active.updated_at = Set(Utc::now());

        let record = Project::from(active.update(self.inner.db()).await?);
        self.publish_update(Some(&old), &record);
        Ok(record)
    }

    async fn delete(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<Project> {
        let old = self.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        let record = Project::from(self.inner.soft_delete(id, actor).await?);
        self.publish_update(Some(&old), &record);
        Ok(record)
    }

    async fn restore(&self, id: Uuid) -> AppResult<Project> {
        let record = Project::from(self.inner.restore(id).await?);
        self.publish_update(None, &record);
        Ok(record)
    }

    async fn set_published(&self, id: Uuid, value: bool) -> AppResult<Project> {
        let record = Project::from(
            self.inner
                .set_flag(id, project::Column::Published, value)
                .await?,
        );
        self.publish_update(None, &record);
        Ok(record)
    }

    async fn set_featured(&self, id: Uuid, value: bool) -> AppResult<Project> {
        let record = Project::from(
            self.inner
                .set_flag(id, project::Column::Featured, value)
                .await?,
        );
        self.publish_update(None, &record);
        Ok(record)
    }
}
