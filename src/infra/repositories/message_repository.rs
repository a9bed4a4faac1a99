//! Contact message repository - sole reader/writer of `contact_messages`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Order, Set};
use uuid::Uuid;

use crate::domain::{ContactMessage, CreateContactMessage, MessageStatus};
use crate::errors::{AppError, AppResult};
use crate::infra::changefeed::ChangeFeed;
use crate::infra::entities::contact_message::{self, ActiveModel, Entity as MessageEntity};
use crate::infra::repositories::base::{ContentRepository, ListOptions, SoftDeletable};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

impl SoftDeletable for MessageEntity {
    const TABLE: &'static str = "contact_messages";

    fn id_col() -> Self::Column {
        contact_message::Column::Id
    }

    fn deleted_at_col() -> Self::Column {
        contact_message::Column::DeletedAt
    }

    fn deleted_by_col() -> Self::Column {
        contact_message::Column::DeletedBy
    }

    fn updated_at_col() -> Self::Column {
        contact_message::Column::UpdatedAt
    }

    fn status_col() -> Option<Self::Column> {
        Some(contact_message::Column::Status)
    }

    fn default_order() -> (Self::Column, Order) {
        (contact_message::Column::CreatedAt, Order::Desc)
    }
}

/// Contact message data access contract
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn list(&self, opts: ListOptions) -> AppResult<Vec<ContactMessage>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ContactMessage>>;
    /// Lookup spanning soft-deleted rows (detail view of a deleted message)
    async fn find_by_id_with_deleted(&self, id: Uuid) -> AppResult<Option<ContactMessage>>;
    async fn create(&self, input: CreateContactMessage) -> AppResult<ContactMessage>;
    /// Raw status write; forward-only enforcement lives in the service
    async fn set_status(&self, id: Uuid, status: MessageStatus) -> AppResult<ContactMessage>;
    async fn delete(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<ContactMessage>;
    async fn restore(&self, id: Uuid) -> AppResult<ContactMessage>;
}

/// SeaORM-backed implementation
pub struct MessageStore {
    inner: ContentRepository<MessageEntity>,
}

impl MessageStore {
    pub fn new(db: DatabaseConnection, feed: Arc<ChangeFeed>) -> Self {
        Self {
            inner: ContentRepository::new(db, feed),
        }
    }

    fn publish_update(&self, old: Option<&ContactMessage>, new: &ContactMessage) {
        self.inner
            .feed()
            .publish_update(MessageEntity::TABLE, old, new);
    }
}

#[async_trait]
impl MessageRepository for MessageStore {
    async fn list(&self, opts: ListOptions) -> AppResult<Vec<ContactMessage>> {
        let models = self.inner.list(&opts).await?;
        Ok(models.into_iter().map(ContactMessage::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ContactMessage>> {
        Ok(self.inner.find_by_id(id).await?.map(ContactMessage::from))
    }

    async fn find_by_id_with_deleted(&self, id: Uuid) -> AppResult<Option<ContactMessage>> {
        Ok(self
            .inner
            .find_by_id_with_deleted(id)
            .await?
            .map(ContactMessage::from))
    }

    async fn create(&self, input: CreateContactMessage) -> AppResult<ContactMessage> {
        // Consent is captured at submission and never mutable afterwards
        if !input.kvkk_consent {
            return Err(AppError::validation("KVKK consent is required"));
        }

        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            email: Set(input.email),
            phone: Set(input.phone),
            subject: Set(input.subject),
            message: Set(input.message),
            kvkk_consent: Set(input.kvkk_consent),
            status: Set(MessageStatus::New.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            deleted_by: Set(None),
        }
        .insert(self.inner.db())
        .await?;

        let message = ContactMessage::from(model);
        self.inner
            .feed()
            .publish_insert(MessageEntity::TABLE, &message);
        Ok(message)
    }

    async fn set_status(&self, id: Uuid, status: MessageStatus) -> AppResult<ContactMessage> {
        let model = self.inner.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        let old = ContactMessage::from(model.clone());

        let mut active: ActiveModel = model.into();
        active.status = Set(status.as_str().to_string());
        active.updated_at = Set(Utc::now());

        let message = ContactMessage::from(active.update(self.inner.db()).await?);
        self.publish_update(Some(&old), &message);
        Ok(message)
    }

    async fn delete(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<ContactMessage> {
        let old = self.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        let message = ContactMessage::from(self.inner.soft_delete(id, actor).await?);
        self.publish_update(Some(&old), &message);
        Ok(message)
    }

    async fn restore(&self, id: Uuid) -> AppResult<ContactMessage> {
        let message = ContactMessage::from(self.inner.restore(id).await?);
        self.publish_update(None, &message);
        Ok(message)
    }
}
