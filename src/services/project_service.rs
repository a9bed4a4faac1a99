//! Project portfolio use cases.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CreateProject, Project, UpdateProject};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::{ListOptions, ProjectRepository};
use crate::utils::slugify;

/// Project service trait for dependency injection.
#[async_trait]
pub trait ProjectService: Send + Sync {
    /// Published projects for the public site, optionally featured only
    async fn list_published(&self, featured_only: bool) -> AppResult<Vec<Project>>;

    /// All active projects for the admin list
    async fn list_projects(&self) -> AppResult<Vec<Project>>;

    /// Soft-deleted projects awaiting restore
    async fn list_deleted_projects(&self) -> AppResult<Vec<Project>>;

    async fn get_project(&self, id: Uuid) -> AppResult<Project>;

    /// Public lookup; only published, active projects resolve
    async fn get_published_by_slug(&self, slug: &str) -> AppResult<Project>;

    async fn create_project(&self, input: CreateProject) -> AppResult<Project>;

    async fn update_project(&self, id: Uuid, input: UpdateProject) -> AppResult<Project>;

    async fn delete_project(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<Project>;

    async fn restore_project(&self, id: Uuid) -> AppResult<Project>;

    async fn set_published(&self, id: Uuid, value: bool) -> AppResult<Project>;

    async fn set_featured(&self, id: Uuid, value: bool) -> AppResult<Project>;
}

/// Concrete implementation backed by the project repository.
pub struct ProjectManager<R: ProjectRepository> {
    repo: Arc<R>,
}

impl<R: ProjectRepository> ProjectManager<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: ProjectRepository> ProjectService for ProjectManager<R> {
    async fn list_published(&self, featured_only: bool) -> AppResult<Vec<Project>> {
        let mut opts = ListOptions::published();
        if featured_only {
            opts = opts.featured();
        }
        self.repo.list(opts).await
    }

    async fn list_projects(&self) -> AppResult<Vec<Project>> {
        self.repo.list(ListOptions::active()).await
    }

    async fn list_deleted_projects(&self) -> AppResult<Vec<Project>> {
        let all = self.repo.list(ListOptions::with_deleted()).await?;
        Ok(all.into_iter().filter(|p| p.deleted_at.is_some()).collect())
    }

    async fn get_project(&self, id: Uuid) -> AppResult<Project> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn get_published_by_slug(&self, slug: &str) -> AppResult<Project> {
        let project = self.repo.find_by_slug(slug).await?.ok_or(AppError::NotFound)?;
        if !project.published {
            return Err(AppError::NotFound);
        }
        Ok(project)
    }

    async fn create_project(&self, input: CreateProject) -> AppResult<Project> {
        let slug = match &input.slug {
            Some(slug) => slugify(slug),
            None => slugify(&input.title.tr),
        };
        if slug.is_empty() {
            return Err(AppError::validation("Slug cannot be empty"));
        }
        self.repo.create(input, slug).await
    }

    async fn update_project(&self, id: Uuid, input: UpdateProject) -> AppResult<Project> {
        let input = UpdateProject {
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

    async fn delete_project(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<Project> {
        self.repo.delete(id, actor).await
    }

    async fn restore_project(&self, id: Uuid) -> AppResult<Project> {
        self.repo.restore(id).await
    }

    async fn set_published(&self, id: Uuid, value: bool) -> AppResult<Project> {
        self.repo.set_published(id, value).await
    }

    async fn set_featured(&self, id: Uuid, value: bool) -> AppResult<Project> {
        self.repo.set_featured(id, value).await
    }
}
