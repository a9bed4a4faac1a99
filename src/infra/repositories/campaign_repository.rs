//! Email campaign repository - sole reader/writer of `email_campaigns`.
//!
//! Campaign `delete` is a genuine row removal, unlike every other
//! content table. Campaigns are operational send records; once delivery
//! counters exist a restore has no meaning, so the soft-delete path is
//! deliberately not offered here.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Order, Set};
use uuid::Uuid;

use crate::domain::{Campaign, CampaignStatus, CreateCampaign, UpdateCampaign};
use crate::errors::{AppError, AppResult};
use crate::infra::changefeed::ChangeFeed;
use crate::infra::entities::campaign::{self, ActiveModel, Entity as CampaignEntity};
use crate::infra::repositories::base::{ContentRepository, ListOptions, SoftDeletable};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

impl SoftDeletable for CampaignEntity {
    const TABLE: &'static str = "email_campaigns";

    fn id_col() -> Self::Column {
        campaign::Column::Id
    }

    fn deleted_at_col() -> Self::Column {
        campaign::Column::DeletedAt
    }

    fn deleted_by_col() -> Self::Column {
        campaign::Column::DeletedBy
    }

    fn updated_at_col() -> Self::Column {
        campaign::Column::UpdatedAt
    }

    fn status_col() -> Option<Self::Column> {
        Some(campaign::Column::Status)
    }

    fn default_order() -> (Self::Column, Order) {
        (campaign::Column::CreatedAt, Order::Desc)
    }
}

/// Campaign data access contract
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CampaignRepository: Send + Sync {
    async fn list(&self, opts: ListOptions) -> AppResult<Vec<Campaign>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Campaign>>;
    async fn create(&self, input: CreateCampaign) -> AppResult<Campaign>;
    async fn update(&self, id: Uuid, input: UpdateCampaign) -> AppResult<Campaign>;
    /// Hard delete; surfaces on the feed as a DELETE event
    async fn delete(&self, id: Uuid) -> AppResult<()>;
    /// Raw status write; forward-only enforcement lives in the service
    async fn set_status(&self, id: Uuid, status: CampaignStatus) -> AppResult<Campaign>;
    async fn set_recipient_count(&self, id: Uuid, count: i32) -> AppResult<Campaign>;
}

/// SeaORM-backed implementation
pub struct CampaignStore {
    inner: ContentRepository<CampaignEntity>,
}

impl CampaignStore {
    pub fn new(db: DatabaseConnection, feed: Arc<ChangeFeed>) -> Self {
        Self {
            inner: ContentRepository::new(db, feed),
        }
    }
}

#[async_trait]
impl CampaignRepository for CampaignStore {
    async fn list(&self, opts: ListOptions) -> AppResult<Vec<Campaign>> {
        let models = self.inner.list(&opts).await?;
        Ok(models.into_iter().map(Campaign::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Campaign>> {
        Ok(self.inner.find_by_id(id).await?.map(Campaign::from))
    }

    async fn create(&self, input: CreateCampaign) -> AppResult<Campaign> {
        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            subject: Set(input.subject),
            html_body: Set(input.html_body),
            text_body: Set(input.text_body),
            blog_id: Set(input.blog_id),
            status: Set(CampaignStatus::Draft.as_str().to_string()),
            recipient_count: Set(0),
            delivered_count: Set(0),
            opened_count: Set(0),
            clicked_count: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            deleted_by: Set(None),
        }
        .insert(self.inner.db())
        .await?;

        let record = Campaign::from(model);
        self.inner
            .feed()
            .publish_insert(CampaignEntity::TABLE, &record);
        Ok(record)
    }

    async fn update(&self, id: Uuid, input: UpdateCampaign) -> AppResult<Campaign> {
        let model = self.inner.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        let old = Campaign::from(model.clone());

        let mut active: ActiveModel = model.into();
        if let Some(subject) = input.subject {
            active.subject = Set(subject);
        }
        if let Some(html_body) = input.html_body {
            active.html_body = Set(html_body);
        }
        if let Some(text_body) = input.text_body {
            active.text_body = Set(Some(text_body));
        }
        if let Some(blog_id) = input.blog_id {
            active.blog_id = Set(Some(blog_id));
        }
        active.updated_at = Set(Utc::now());

        let record = Campaign::from(active.update(self.inner.db()).await?);
        self.inner
            .feed()
            .publish_update(CampaignEntity::TABLE, Some(&old), &record);
        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let old = self.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        let result = CampaignEntity::delete_by_id(id)
            .exec(self.inner.db())
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        self.inner
            .feed()
            .publish_delete(CampaignEntity::TABLE, &old);
        Ok(())
    }

    async fn set_status(&self, id: Uuid, status: CampaignStatus) -> AppResult<Campaign> {
        let model = self.inner.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        let old = Campaign::from(model.clone());

        let mut active: ActiveModel = model.into();
        active.status = Set(status.as_str().to_string());
        active.updated_at = Set(Utc::now());

        let record = Campaign::from(active.update(self.inner.db()).await?);
        self.inner
            .feed()
            .publish_update(CampaignEntity::TABLE, Some(&old), &record);
        Ok(record)
    }

    async fn set_recipient_count(&self, id: Uuid, count: i32) -> AppResult<Campaign> {
        let model = self.inner.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        let old = Campaign::from(model.clone());

        let mut active: ActiveModel = model.into();
        active.recipient_count = Set(count);
        active.updated_at = Set(Utc::now());

        let record = Campaign::from(active.update(self.inner.db()).await?);
        self.inner
            .feed()
            .publish_update(CampaignEntity::TABLE, Some(&old), &record);
        Ok(record)
    }
}
