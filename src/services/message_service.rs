//! Contact message use cases: submission intake and the status state
//! machine.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{ContactMessage, CreateContactMessage, MessageStatus};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::{ListOptions, MessageRepository};

/// Contact message service trait for dependency injection.
#[async_trait]
pub trait MessageService: Send + Sync {
    /// Public contact form intake
    async fn submit(&self, input: CreateContactMessage) -> AppResult<ContactMessage>;

    /// Active messages, optionally filtered to one status
    async fn list_messages(&self, status: Option<MessageStatus>)
        -> AppResult<Vec<ContactMessage>>;

    /// Soft-deleted messages awaiting restore
    async fn list_deleted_messages(&self) -> AppResult<Vec<ContactMessage>>;

    /// Open a message in the admin detail view.
    ///
    /// Opening an unread active message marks it read as a side effect;
    /// a soft-deleted message is shown as-is with no status change.
    async fn open_message(&self, id: Uuid) -> AppResult<ContactMessage>;

    /// Move to `next`; backwards transitions are rejected as validation
    /// errors
    async fn advance_status(&self, id: Uuid, next: MessageStatus) -> AppResult<ContactMessage>;

    async fn delete_message(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<ContactMessage>;

    async fn restore_message(&self, id: Uuid) -> AppResult<ContactMessage>;
}

/// Concrete implementation backed by the message repository.
pub struct MessageManager<R: MessageRepository> {
    repo: Arc<R>,
}

impl<R: MessageRepository> MessageManager<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: MessageRepository> MessageService for MessageManager<R> {
    async fn submit(&self, input: CreateContactMessage) -> AppResult<ContactMessage> {
        self.repo.create(input).await
    }

    async fn list_messages(
        &self,
        status: Option<MessageStatus>,
    ) -> AppResult<Vec<ContactMessage>> {
        let opts = match status {
            Some(status) => ListOptions::active().status(status.as_str()),
            None => ListOptions::active(),
        };
        self.repo.list(opts).await
    }

    async fn list_deleted_messages(&self) -> AppResult<Vec<ContactMessage>> {
        let all = self.repo.list(ListOptions::with_deleted()).await?;
        Ok(all.into_iter().filter(|m| m.is_deleted()).collect())
    }

    async fn open_message(&self, id: Uuid) -> AppResult<ContactMessage> {
        let message = self
            .repo
            .find_by_id_with_deleted(id)
            .await?
            .ok_or(AppError::NotFound)?;

        if message.status == MessageStatus::New && !message.is_deleted() {
            return self.repo.set_status(id, MessageStatus::Read).await;
        }
        Ok(message)
    }

    async fn advance_status(&self, id: Uuid, next: MessageStatus) -> AppResult<ContactMessage> {
        let message = self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        if !message.status.can_advance_to(next) {
            return Err(AppError::validation(format!(
                "Cannot move message from {} back to {}",
                message.status, next
            )));
        }
        if message.status == next {
            return Ok(message);
        }
        self.repo.set_status(id, next).await
    }

    async fn delete_message(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<ContactMessage> {
        self.repo.delete(id, actor).await
    }

    async fn restore_message(&self, id: Uuid) -> AppResult<ContactMessage> {
        self.repo.restore(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockMessageRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn message(status: MessageStatus, deleted: bool) -> ContactMessage {
        ContactMessage {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            subject: None,
            message: "Merhaba".to_string(),
            kvkk_consent: true,
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: deleted.then(Utc::now),
            deleted_by: None,
        }
    }

    #[tokio::test]
    async fn test_opening_new_message_marks_it_read() {
        let mut repo = MockMessageRepository::new();
        let msg = message(MessageStatus::New, false);
        let id = msg.id;

        let found = msg.clone();
        repo.expect_find_by_id_with_deleted()
            .with(eq(id))
            .returning(move |_| Ok(Some(found.clone())));
        let read = ContactMessage {
            status: MessageStatus::Read,
            ..msg
        };
        repo.expect_set_status()
            .with(eq(id), eq(MessageStatus::Read))
            .returning(move |_, _| Ok(read.clone()));

        let service = MessageManager::new(Arc::new(repo));
        let opened = service.open_message(id).await.unwrap();
        assert_eq!(opened.status, MessageStatus::Read);
    }

    #[tokio::test]
    async fn test_opening_deleted_message_leaves_status_alone() {
        let mut repo = MockMessageRepository::new();
        let msg = message(MessageStatus::New, true);
        let id = msg.id;

        let found = msg.clone();
        repo.expect_find_by_id_with_deleted()
            .with(eq(id))
            .returning(move |_| Ok(Some(found.clone())));
        repo.expect_set_status().never();

        let service = MessageManager::new(Arc::new(repo));
        let opened = service.open_message(id).await.unwrap();
        assert_eq!(opened.status, MessageStatus::New);
    }

    #[tokio::test]
    async fn test_backwards_transition_is_rejected() {
        let mut repo = MockMessageRepository::new();
        let msg = message(MessageStatus::Archived, false);
        let id = msg.id;

        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(msg.clone())));
        repo.expect_set_status().never();

        let service = MessageManager::new(Arc::new(repo));
        let err = service
            .advance_status(id, MessageStatus::Read)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_same_status_is_idempotent() {
        let mut repo = MockMessageRepository::new();
        let msg = message(MessageStatus::Read, false);
        let id = msg.id;

        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(msg.clone())));
        repo.expect_set_status().never();

        let service = MessageManager::new(Arc::new(repo));
        let result = service.advance_status(id, MessageStatus::Read).await.unwrap();
        assert_eq!(result.status, MessageStatus::Read);
    }
}
