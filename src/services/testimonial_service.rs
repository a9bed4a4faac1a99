//! Testimonial use cases.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CreateTestimonial, Testimonial, UpdateTestimonial};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::{ListOptions, TestimonialRepository};

/// Testimonial service trait for dependency injection.
#[async_trait]
pub trait TestimonialService: Send + Sync {
    /// Published testimonials for the public site, optionally featured only
    async fn list_published(&self, featured_only: bool) -> AppResult<Vec<Testimonial>>;

    /// All active testimonials for the admin list
    async fn list_testimonials(&self) -> AppResult<Vec<Testimonial>>;

    /// Soft-deleted testimonials awaiting restore
    async fn list_deleted_testimonials(&self) -> AppResult<Vec<Testimonial>>;

    async fn get_testimonial(&self, id: Uuid) -> AppResult<Testimonial>;

    async fn create_testimonial(&self, input: CreateTestimonial) -> AppResult<Testimonial>;

    async fn update_testimonial(&self, id: Uuid, input: UpdateTestimonial)
        -> AppResult<Testimonial>;

    async fn delete_testimonial(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<Testimonial>;

    async fn restore_testimonial(&self, id: Uuid) -> AppResult<Testimonial>;

    async fn set_published(&self, id: Uuid, value: bool) -> AppResult<Testimonial>;

    async fn set_featured(&self, id: Uuid, value: bool) -> AppResult<Testimonial>;
}

/// Concrete implementation backed by the testimonial repository.
pub struct TestimonialManager<R: TestimonialRepository> {
    repo: Arc<R>,
}

impl<R: TestimonialRepository> TestimonialManager<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: TestimonialRepository> TestimonialService for TestimonialManager<R> {
    async fn list_published(&self, featured_only: bool) -> AppResult<Vec<Testimonial>> {
        let mut opts = ListOptions::published();
        if featured_only {
            opts = opts.featured();
        }
        self.repo.list(opts).await
    }

    async fn list_testimonials(&self) -> AppResult<Vec<Testimonial>> {
        self.repo.list(ListOptions::active()).await
    }

    async fn list_deleted_testimonials(&self) -> AppResult<Vec<Testimonial>> {
        let all = self.repo.list(ListOptions::with_deleted()).await?;
        Ok(all.into_iter().filter(|t| t.is_deleted()).collect())
    }

    async fn get_testimonial(&self, id: Uuid) -> AppResult<Testimonial> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn create_testimonial(&self, input: CreateTestimonial) -> AppResult<Testimonial> {
        self.repo.create(input).await
    }

    async fn update_testimonial(
        &self,
        id: Uuid,
        input: UpdateTestimonial,
    ) -> AppResult<Testimonial> {
        self.repo.update(id, input).await
    }

    async fn delete_testimonial(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<Testimonial> {
        self.repo.delete(id, actor).await
    }

    async fn restore_testimonial(&self, id: Uuid) -> AppResult<Testimonial> {
        self.repo.restore(id).await
    }

    async fn set_published(&self, id: Uuid, value: bool) -> AppResult<Testimonial> {
        self.repo.set_published(id, value).await
    }

    async fn set_featured(&self, id: Uuid, value: bool) -> AppResult<Testimonial> {
        self.repo.set_featured(id, value).await
    }
}
