//! Newsletter subscriber use cases.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{SubscribeRequest, Subscriber, SubscriberStatus};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::{ListOptions, SubscriberRepository};

/// Subscriber service trait for dependency injection.
#[async_trait]
pub trait SubscriberService: Send + Sync {
    /// Public signup.
    ///
    /// The email column is unique across every row, so a returning
    /// address reactivates its old row (restoring it first if it was
    /// soft-deleted) instead of inserting a duplicate. Signing up while
    /// already active is a conflict.
    async fn subscribe(&self, input: SubscribeRequest) -> AppResult<Subscriber>;

    /// Flip to unsubscribed; the row stays for audit and re-signup
    async fn unsubscribe(&self, id: Uuid) -> AppResult<Subscriber>;

    /// Public self-service unsubscribe by address.
    ///
    /// Soft-deleted rows do not resolve; repeating an unsubscribe is a
    /// no-op rather than an error.
    async fn unsubscribe_by_email(&self, email: &str) -> AppResult<Subscriber>;

    /// Active subscribers, optionally filtered to one status
    async fn list_subscribers(
        &self,
        status: Option<SubscriberStatus>,
    ) -> AppResult<Vec<Subscriber>>;

    /// Soft-deleted subscribers awaiting restore
    async fn list_deleted_subscribers(&self) -> AppResult<Vec<Subscriber>>;

    async fn get_subscriber(&self, id: Uuid) -> AppResult<Subscriber>;

    async fn delete_subscriber(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<Subscriber>;

    async fn restore_subscriber(&self, id: Uuid) -> AppResult<Subscriber>;
}

/// Concrete implementation backed by the subscriber repository.
pub struct SubscriberManager<R: SubscriberRepository> {
    repo: Arc<R>,
}

impl<R: SubscriberRepository> SubscriberManager<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: SubscriberRepository> SubscriberService for SubscriberManager<R> {
    async fn subscribe(&self, input: SubscribeRequest) -> AppResult<Subscriber> {
        let existing = self.repo.find_by_email_with_deleted(&input.email).await?;
        match existing {
            None => self.repo.create(input).await,
            Some(sub) if sub.is_subscribed() => Err(AppError::conflict("Subscriber")),
            Some(sub) => {
                if sub.is_deleted() {
                    self.repo.restore(sub.id).await?;
                }
                self.repo.reactivate(sub.id, input.source).await
            }
        }
    }

    async fn unsubscribe(&self, id: Uuid) -> AppResult<Subscriber> {
        self.repo.unsubscribe(id).await
    }

    async fn unsubscribe_by_email(&self, email: &str) -> AppResult<Subscriber> {
        let sub = self
            .repo
            .find_by_email_with_deleted(email)
            .await?
            .filter(|s| !s.is_deleted())
            .ok_or(AppError::NotFound)?;

        if sub.status == SubscriberStatus::Unsubscribed {
            return Ok(sub);
        }
        self.repo.unsubscribe(sub.id).await
    }

    async fn list_subscribers(
        &self,
        status: Option<SubscriberStatus>,
    ) -> AppResult<Vec<Subscriber>> {
        let opts = match status {
            Some(status) => ListOptions::active().status(status.as_str()),
            None => ListOptions::active(),
        };
        self.repo.list(opts).await
    }

    async fn list_deleted_subscribers(&self) -> AppResult<Vec<Subscriber>> {
        let all = self.repo.list(ListOptions::with_deleted()).await?;
        Ok(all.into_iter().filter(|s| s.is_deleted()).collect())
    }

    async fn get_subscriber(&self, id: Uuid) -> AppResult<Subscriber> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn delete_subscriber(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<Subscriber> {
        self.repo.delete(id, actor).await
    }

    async fn restore_subscriber(&self, id: Uuid) -> AppResult<Subscriber> {
        self.repo.restore(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockSubscriberRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn subscriber(status: SubscriberStatus, deleted: bool) -> Subscriber {
        Subscriber {
            id: Uuid::new_v4(),
            email: "reader@example.com".to_string(),
            name: None,
            status,
            source: None,
            subscribed_at: Utc::now(),
            unsubscribed_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: deleted.then(Utc::now),
            deleted_by: None,
        }
    }

    fn request() -> SubscribeRequest {
        SubscribeRequest {
            email: "reader@example.com".to_string(),
            name: None,
            source: Some("footer".to_string()),
        }
    }

    #[tokio::test]
    async fn test_active_subscriber_cannot_resubscribe() {
        let mut repo = MockSubscriberRepository::new();
        let existing = subscriber(SubscriberStatus::Active, false);
        repo.expect_find_by_email_with_deleted()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_create().never();

        let service = SubscriberManager::new(Arc::new(repo));
        let err = service.subscribe(request()).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_unsubscribed_row_is_reactivated_not_duplicated() {
        let mut repo = MockSubscriberRepository::new();
        let existing = subscriber(SubscriberStatus::Unsubscribed, false);
        let id = existing.id;

        let found = existing.clone();
        repo.expect_find_by_email_with_deleted()
            .returning(move |_| Ok(Some(found.clone())));
        repo.expect_restore().never();
        repo.expect_create().never();
        let reactivated = Subscriber {
            status: SubscriberStatus::Active,
            ..existing
        };
        repo.expect_reactivate()
            .with(eq(id), eq(Some("footer".to_string())))
            .returning(move |_, _| Ok(reactivated.clone()));

        let service = SubscriberManager::new(Arc::new(repo));
        let sub = service.subscribe(request()).await.unwrap();
        assert_eq!(sub.status, SubscriberStatus::Active);
    }

    #[tokio::test]
    async fn test_soft_deleted_row_is_restored_before_reactivation() {
        let mut repo = MockSubscriberRepository::new();
        let existing = subscriber(SubscriberStatus::Unsubscribed, true);
        let id = existing.id;

        let found = existing.clone();
        repo.expect_find_by_email_with_deleted()
            .returning(move |_| Ok(Some(found.clone())));
        let restored = Subscriber {
            deleted_at: None,
            ..existing.clone()
        };
        repo.expect_restore()
            .with(eq(id))
            .returning(move |_| Ok(restored.clone()));
        let reactivated = Subscriber {
            status: SubscriberStatus::Active,
            deleted_at: None,
            ..existing
        };
        repo.expect_reactivate()
            .returning(move |_, _| Ok(reactivated.clone()));

        let service = SubscriberManager::new(Arc::new(repo));
        let sub = service.subscribe(request()).await.unwrap();
        assert!(sub.is_subscribed());
    }

    #[tokio::test]
    async fn test_self_service_unsubscribe_flips_status() {
        let mut repo = MockSubscriberRepository::new();
        let existing = subscriber(SubscriberStatus::Active, false);
        let id = existing.id;

        let found = existing.clone();
        repo.expect_find_by_email_with_deleted()
            .with(eq("reader@example.com"))
            .returning(move |_| Ok(Some(found.clone())));
        let flipped = Subscriber {
            status: SubscriberStatus::Unsubscribed,
            unsubscribed_at: Some(Utc::now()),
            ..existing
        };
        repo.expect_unsubscribe()
            .with(eq(id))
            .returning(move |_| Ok(flipped.clone()));

        let service = SubscriberManager::new(Arc::new(repo));
        let sub = service
            .unsubscribe_by_email("reader@example.com")
            .await
            .unwrap();
        assert_eq!(sub.status, SubscriberStatus::Unsubscribed);
    }

    #[tokio::test]
    async fn test_repeat_unsubscribe_is_a_noop() {
        let mut repo = MockSubscriberRepository::new();
        let existing = subscriber(SubscriberStatus::Unsubscribed, false);
        repo.expect_find_by_email_with_deleted()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_unsubscribe().never();

        let service = SubscriberManager::new(Arc::new(repo));
        let sub = service
            .unsubscribe_by_email("reader@example.com")
            .await
            .unwrap();
        assert_eq!(sub.status, SubscriberStatus::Unsubscribed);
    }

    #[tokio::test]
    async fn test_deleted_row_does_not_resolve_for_unsubscribe() {
        let mut repo = MockSubscriberRepository::new();
        let existing = subscriber(SubscriberStatus::Active, true);
        repo.expect_find_by_email_with_deleted()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_unsubscribe().never();

        let service = SubscriberManager::new(Arc::new(repo));
        let err = service
            .unsubscribe_by_email("reader@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn test_new_email_creates_row() {
        let mut repo = MockSubscriberRepository::new();
        repo.expect_find_by_email_with_deleted()
            .returning(|_| Ok(None));
        repo.expect_create()
            .returning(|_| Ok(subscriber(SubscriberStatus::Active, false)));

        let service = SubscriberManager::new(Arc::new(repo));
        assert!(service.subscribe(request()).await.is_ok());
    }
}
