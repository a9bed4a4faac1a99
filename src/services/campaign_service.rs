//! Email campaign use cases.
//!
//! Campaigns are the one content type without soft delete: a deleted
//! draft is gone for good. Deletion is blocked once delivery has
//! started.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Campaign, CampaignStatus, CreateCampaign, SubscriberStatus, UpdateCampaign};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::{CampaignRepository, ListOptions, SubscriberRepository};
use crate::jobs::{CampaignQueue, CampaignSendJob};
use crate::utils::clean_html;

/// Campaign service trait for dependency injection.
#[async_trait]
pub trait CampaignService: Send + Sync {
    async fn list_campaigns(&self) -> AppResult<Vec<Campaign>>;

    async fn get_campaign(&self, id: Uuid) -> AppResult<Campaign>;

    /// Create a draft; the HTML body is sanitized before storage
    async fn create_campaign(&self, input: CreateCampaign) -> AppResult<Campaign>;

    /// Edit a draft; campaigns past draft are immutable
    async fn update_campaign(&self, id: Uuid, input: UpdateCampaign) -> AppResult<Campaign>;

    /// Hard delete. Rejected while the campaign is sending.
    async fn delete_campaign(&self, id: Uuid) -> AppResult<()>;

    /// Move a draft to scheduled, snapshot the recipient count, and
    /// enqueue the delivery job
    async fn queue_campaign(&self, id: Uuid) -> AppResult<Campaign>;
}

/// Concrete implementation backed by the campaign repository and the
/// job queue.
pub struct CampaignManager<R, S, Q>
where
    R: CampaignRepository,
    S: SubscriberRepository,
    Q: CampaignQueue,
{
    repo: Arc<R>,
    subscribers: Arc<S>,
    queue: Arc<Q>,
}

impl<R, S, Q> CampaignManager<R, S, Q>
where
    R: CampaignRepository,
    S: SubscriberRepository,
    Q: CampaignQueue,
{
    pub fn new(repo: Arc<R>, subscribers: Arc<S>, queue: Arc<Q>) -> Self {
        Self {
            repo,
            subscribers,
            queue,
        }
    }
}

#[async_trait]
impl<R, S, Q> CampaignService for CampaignManager<R, S, Q>
where
    R: CampaignRepository,
    S: SubscriberRepository,
    Q: CampaignQueue,
{
    async fn list_campaigns(&self) -> AppResult<Vec<Campaign>> {
        self.repo.list(ListOptions::active()).await
    }

    async fn get_campaign(&self, id: Uuid) -> AppResult<Campaign> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn create_campaign(&self, input: CreateCampaign) -> AppResult<Campaign> {
        let input = CreateCampaign {
            html_body: clean_html(&input.html_body),
            ..input
        };
        self.repo.create(input).await
    }

    async fn update_campaign(&self, id: Uuid, input: UpdateCampaign) -> AppResult<Campaign> {
        let campaign = self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        if campaign.status != CampaignStatus::Draft {
            return Err(AppError::validation(
                "Only draft campaigns can be edited",
            ));
        }

        let input = UpdateCampaign {
            html_body: input.html_body.map(|body| clean_html(&body)),
            ..input
        };
        self.repo.update(id, input).await
    }

    async fn delete_campaign(&self, id: Uuid) -> AppResult<()> {
        let campaign = self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        if campaign.status == CampaignStatus::Sending {
            return Err(AppError::validation(
                "Cannot delete a campaign while it is sending",
            ));
        }
        self.repo.delete(id).await
    }

    async fn queue_campaign(&self, id: Uuid) -> AppResult<Campaign> {
        let campaign = self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)?;
        if campaign.status != CampaignStatus::Draft {
            return Err(AppError::validation(
                "Only draft campaigns can be queued",
            ));
        }

        let recipients = self
            .subscribers
            .list(ListOptions::active().status(SubscriberStatus::Active.as_str()))
            .await?;
        self.repo
            .set_recipient_count(id, recipients.len() as i32)
            .await?;

        let scheduled = self.repo.set_status(id, CampaignStatus::Scheduled).await?;
        self.queue.enqueue(CampaignSendJob::new(id)).await?;
        Ok(scheduled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::{MockCampaignRepository, MockSubscriberRepository};
    use crate::jobs::MockCampaignQueue;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn campaign(status: CampaignStatus) -> Campaign {
        Campaign {
            id: Uuid::new_v4(),
            subject: "News".to_string(),
            html_body: "<p>hi</p>".to_string(),
            text_body: None,
            blog_id: None,
            status,
            recipient_count: 0,
            delivered_count: 0,
            opened_count: 0,
            clicked_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
            deleted_by: None,
        }
    }

    #[tokio::test]
    async fn test_queueing_snapshots_recipients_and_enqueues() {
        let mut repo = MockCampaignRepository::new();
        let mut subs = MockSubscriberRepository::new();
        let mut queue = MockCampaignQueue::new();

        let draft = campaign(CampaignStatus::Draft);
        let id = draft.id;

        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(draft.clone())));
        subs.expect_list().returning(|_| Ok(Vec::new()));
        repo.expect_set_recipient_count()
            .with(eq(id), eq(0))
            .returning(move |_, _| Ok(campaign(CampaignStatus::Draft)));
        let scheduled = campaign(CampaignStatus::Scheduled);
        repo.expect_set_status()
            .with(eq(id), eq(CampaignStatus::Scheduled))
            .returning(move |_, _| Ok(scheduled.clone()));
        queue.expect_enqueue().times(1).returning(|_| Ok(()));

        let service = CampaignManager::new(Arc::new(repo), Arc::new(subs), Arc::new(queue));
        let result = service.queue_campaign(id).await.unwrap();
        assert_eq!(result.status, CampaignStatus::Scheduled);
    }

    #[tokio::test]
    async fn test_only_drafts_can_be_queued() {
        let mut repo = MockCampaignRepository::new();
        let subs = MockSubscriberRepository::new();
        let mut queue = MockCampaignQueue::new();

        let sent = campaign(CampaignStatus::Sent);
        let id = sent.id;
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(sent.clone())));
        queue.expect_enqueue().never();

        let service = CampaignManager::new(Arc::new(repo), Arc::new(subs), Arc::new(queue));
        let err = service.queue_campaign(id).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_sending_campaign_cannot_be_deleted() {
        let mut repo = MockCampaignRepository::new();
        let subs = MockSubscriberRepository::new();
        let queue = MockCampaignQueue::new();

        let sending = campaign(CampaignStatus::Sending);
        let id = sending.id;
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(sending.clone())));
        repo.expect_delete().never();

        let service = CampaignManager::new(Arc::new(repo), Arc::new(subs), Arc::new(queue));
        let err = service.delete_campaign(id).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_sanitizes_html_body() {
        let mut repo = MockCampaignRepository::new();
        let subs = MockSubscriberRepository::new();
        let queue = MockCampaignQueue::new();

        repo.expect_create()
            .withf(|input: &CreateCampaign| !input.html_body.contains("script"))
            .returning(|input| {
                Ok(Campaign {
                    html_body: input.html_body,
                    ..campaign(CampaignStatus::Draft)
                })
            });

        let service = CampaignManager::new(Arc::new(repo), Arc::new(subs), Arc::new(queue));
        let created = service
            .create_campaign(CreateCampaign {
                subject: "News".to_string(),
                html_body: "<p>hi</p><script>x()</script>".to_string(),
                text_body: None,
                blog_id: None,
            })
            .await
            .unwrap();
        assert!(!created.html_body.contains("script"));
    }
}
