//! Testimonial repository - sole reader/writer of the `testimonials` table.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Order, Set};
use uuid::Uuid;

use crate::domain::{CreateTestimonial, Testimonial, UpdateTestimonial};
use crate::errors::{AppError, AppResult};
use crate::infra::changefeed::ChangeFeed;
use crate::infra::entities::testimonial::{self, ActiveModel, Entity as TestimonialEntity};
use crate::infra::repositories::base::{ContentRepository, ListOptions, SoftDeletable};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

impl SoftDeletable for TestimonialEntity {
    const TABLE: &'static str = "testimonials";

    fn id_col() -> Self::Column {
        testimonial::Column::Id
    }

    fn deleted_at_col() -> Self::Column {
        testimonial::Column::DeletedAt
    }

    fn deleted_by_col() -> Self::Column {
        testimonial::Column::DeletedBy
    }

    fn updated_at_col() -> Self::Column {
        testimonial::Column::UpdatedAt
    }

    fn published_col() -> Option<Self::Column> {
        Some(testimonial::Column::Published)
    }

    fn featured_col() -> Option<Self::Column> {
        Some(testimonial::Column::Featured)
    }

    fn default_order() -> (Self::Column, Order) {
        (testimonial::Column::OrderIndex, Order::Asc)
    }
}

/// Testimonial data access contract
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn list(&self, opts: ListOptions) -> AppResult<Vec<Testimonial>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Testimonial>>;
    async fn create(&self, input: CreateTestimonial) -> AppResult<Testimonial>;
    async fn update(&self, id: Uuid, input: UpdateTestimonial) -> AppResult<Testimonial>;
    async fn delete(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<Testimonial>;
    async fn restore(&self, id: Uuid) -> AppResult<Testimonial>;
    async fn set_published(&self, id: Uuid, value: bool) -> AppResult<Testimonial>;
    async fn set_featured(&self, id: Uuid, value: bool) -> AppResult<Testimonial>;
}

/// SeaORM-backed implementation
pub struct TestimonialStore {
    inner: ContentRepository<TestimonialEntity>,
}

impl TestimonialStore {
    pub fn new(db: DatabaseConnection, feed: Arc<ChangeFeed>) -> Self {
        Self {
            inner: ContentRepository::new(db, feed),
        }
    }

    fn publish_update(&self, old: Option<&Testimonial>, new: &Testimonial) {
        self.inner
            .feed()
            .publish_update(TestimonialEntity::TABLE, old, new);
    }
}

#[async_trait]
impl TestimonialRepository for TestimonialStore {
    async fn list(&self, opts: ListOptions) -> AppResult<Vec<Testimonial>> {
        let models = self.inner.list(&opts).await?;
        Ok(models.into_iter().map(Testimonial::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Testimonial>> {
        Ok(self.inner.find_by_id(id).await?.map(Testimonial::from))
    }

    async fn create(&self, input: CreateTestimonial) -> AppResult<Testimonial> {
        if !input.quote.is_complete() {
            return Err(AppError::validation("Both quote variants are required"));
        }

        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            company: Set(input.company),
            role_tr: Set(input.role.as_ref().map(|r| r.tr.clone())),
            role_en: Set(input.role.map(|r| r.en)),
            quote_tr: Set(input.quote.tr),
            quote_en: Set(input.quote.en),
            rating: Set(input.rating),
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

        let record = Testimonial::from(model);
        self.inner
            .feed()
            .publish_insert(TestimonialEntity::TABLE, &record);
        Ok(record)
    }

    async fn update(&self, id: Uuid, input: UpdateTestimonial) -> AppResult<Testimonial> {
        let model = self.inner.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        let old = Testimonial::from(model.clone());

        let mut active: ActiveModel = model.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(company) = input.company {
            active.company = Set(Some(company));
        }
        if let Some(role) = input.role {
            active.role_tr = Set(Some(role.tr));
            active.role_en = Set(Some(role.en));
        }
        if let Some(quote) = input.quote {
            if !quote.is_complete() {
                return Err(AppError::validation("Both quote variants are required"));
            }
            active.quote_tr = Set(quote.tr);
            active.quote_en = Set(quote.en);
        }
        if let Some(rating) = input.rating {
            active.rating = Set(rating);
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

        let record = Testimonial::from(active.update(self.inner.db()).await?);
        self.publish_update(Some(&old), &record);
        Ok(record)
    }

    async fn delete(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<Testimonial> {
        let old = self.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        let record = Testimonial::from(self.inner.soft_delete(id, actor).await?);
        self.publish_update(Some(&old), &record);
        Ok(record)
    }

    async fn restore(&self, id: Uuid) -> AppResult<Testimonial> {
        let record = Testimonial::from(self.inner.restore(id).await?);
        self.publish_update(None, &record);
        Ok(record)
    }

    async fn set_published(&self, id: Uuid, value: bool) -> AppResult<Testimonial> {
        let record = Testimonial::from(
            self.inner
                .set_flag(id, testimonial::Column::Published, value)
                .await?,
        );
        self.publish_update(None, &record);
        Ok(record)
    }

    async fn set_featured(&self, id: Uuid, value: bool) -> AppResult<Testimonial> {
        let record = Testimonial::from(
            self.inner
                .set_flag(id, testimonial::Column::Featured, value)
                .await?,
        );
        self.publish_update(None, &record);
        Ok(record)
    }
}
