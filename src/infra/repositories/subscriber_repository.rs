//! Newsletter subscriber repository - sole reader/writer of
//! `newsletter_subscribers`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, Set,
};
use uuid::Uuid;

use crate::domain::{SubscribeRequest, Subscriber, SubscriberStatus};
use crate::errors::{AppError, AppResult};
use crate::infra::changefeed::ChangeFeed;
use crate::infra::entities::subscriber::{self, ActiveModel, Entity as SubscriberEntity};
use crate::infra::repositories::base::{ContentRepository, ListOptions, SoftDeletable};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

impl SoftDeletable for SubscriberEntity {
    const TABLE: &'static str = "newsletter_subscribers";

    fn id_col() -> Self::Column {
        subscriber::Column::Id
    }

    fn deleted_at_col() -> Self::Column {
        subscriber::Column::DeletedAt
    }

    fn deleted_by_col() -> Self::Column {
        subscriber::Column::DeletedBy
    }

    fn updated_at_col() -> Self::Column {
        subscriber::Column::UpdatedAt
    }

    fn status_col() -> Option<Self::Column> {
        Some(subscriber::Column::Status)
    }

    fn default_order() -> (Self::Column, Order) {
        (subscriber::Column::CreatedAt, Order::Desc)
    }
}

/// Subscriber data access contract
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    async fn list(&self, opts: ListOptions) -> AppResult<Vec<Subscriber>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Subscriber>>;
    /// Email lookup spanning soft-deleted rows; email is unique table-wide
    async fn find_by_email_with_deleted(&self, email: &str) -> AppResult<Option<Subscriber>>;
    async fn create(&self, input: SubscribeRequest) -> AppResult<Subscriber>;
    /// Flip an unsubscribed/bounced row back to active in place
    async fn reactivate(&self, id: Uuid, source: Option<String>) -> AppResult<Subscriber>;
    async fn unsubscribe(&self, id: Uuid) -> AppResult<Subscriber>;
    async fn delete(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<Subscriber>;
    async fn restore(&self, id: Uuid) -> AppResult<Subscriber>;
}

/// SeaORM-backed implementation
pub struct SubscriberStore {
    inner: ContentRepository<SubscriberEntity>,
}

impl SubscriberStore {
    pub fn new(db: DatabaseConnection, feed: Arc<ChangeFeed>) -> Self {
        Self {
            inner: ContentRepository::new(db, feed),
        }
    }

    fn publish_update(&self, old: Option<&Subscriber>, new: &Subscriber) {
        self.inner
            .feed()
            .publish_update(SubscriberEntity::TABLE, old, new);
    }
}

#[async_trait]
impl SubscriberRepository for SubscriberStore {
    async fn list(&self, opts: ListOptions) -> AppResult<Vec<Subscriber>> {
        let models = self.inner.list(&opts).await?;
        Ok(models.into_iter().map(Subscriber::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Subscriber>> {
        Ok(self.inner.find_by_id(id).await?.map(Subscriber::from))
    }

    async fn find_by_email_with_deleted(&self, email: &str) -> AppResult<Option<Subscriber>> {
        let model = SubscriberEntity::find()
            .filter(subscriber::Column::Email.eq(email))
            .one(self.inner.db())
            .await?;
        Ok(model.map(Subscriber::from))
    }

    async fn create(&self, input: SubscribeRequest) -> AppResult<Subscriber> {
        if self.find_by_email_with_deleted(&input.email).await?.is_some() {
            return Err(AppError::conflict("Subscriber"));
        }

        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(input.email),
            name: Set(input.name),
            status: Set(SubscriberStatus::Active.as_str().to_string()),
            source: Set(input.source),
            subscribed_at: Set(now),
            unsubscribed_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            deleted_by: Set(None),
        }
        .insert(self.inner.db())
        .await?;

        let sub = Subscriber::from(model);
        self.inner
            .feed()
            .publish_insert(SubscriberEntity::TABLE, &sub);
        Ok(sub)
    }

    async fn reactivate(&self, id: Uuid, source: Option<String>) -> AppResult<Subscriber> {
        let model = self.inner.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        let old = Subscriber::from(model.clone());

        let now = Utc::now();
        let mut active: ActiveModel = model.into();
        active.status = Set(SubscriberStatus::Active.as_str().to_string());
        active.subscribed_at = Set(now);
        active.unsubscribed_at = Set(None);
        if let Some(source) = source {
            active.source = Set(Some(source));
        }
        active.updated_at = Set(now);

        let sub = Subscriber::from(active.update(self.inner.db()).await?);
        self.publish_update(Some(&old), &sub);
        Ok(sub)
    }

    async fn unsubscribe(&self, id: Uuid) -> AppResult<Subscriber> {
        let model = self.inner.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        let old = Subscriber::from(model.clone());

        let now = Utc::now();
        let mut active: ActiveModel = model.into();
        active.status = Set(SubscriberStatus::Unsubscribed.as_str().to_string());
        active.unsubscribed_at = Set(Some(now));
        active.updated_at = Set(now);

        let sub = Subscriber::from(active.update(self.inner.db()).await?);
        self.publish_update(Some(&old), &sub);
        Ok(sub)
    }

    async fn delete(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<Subscriber> {
        let old = self.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        let sub = Subscriber::from(self.inner.soft_delete(id, actor).await?);
        self.publish_update(Some(&old), &sub);
        Ok(sub)
    }

    async fn restore(&self, id: Uuid) -> AppResult<Subscriber> {
        let sub = Subscriber::from(self.inner.restore(id).await?);
        self.publish_update(None, &sub);
        Ok(sub)
    }
}
