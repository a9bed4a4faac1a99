//! Email campaign domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Campaign delivery lifecycle.
///
/// Forward-only: `draft -> scheduled -> sending -> sent | failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Scheduled,
    Sending,
    Sent,
    Failed,
}

impl CampaignStatus {
    fn rank(self) -> u8 {
        match self {
            CampaignStatus::Draft => 0,
            CampaignStatus::Scheduled => 1,
            CampaignStatus::Sending => 2,
            CampaignStatus::Sent => 3,
            CampaignStatus::Failed => 3,
        }
    }

    /// Whether a transition to `next` moves the lifecycle forward
    pub fn can_advance_to(self, next: CampaignStatus) -> bool {
        next.rank() >= self.rank()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CampaignStatus::Draft => "draft",
            CampaignStatus::Scheduled => "scheduled",
            CampaignStatus::Sending => "sending",
            CampaignStatus::Sent => "sent",
            CampaignStatus::Failed => "failed",
        }
    }
}

impl From<&str> for CampaignStatus {
    fn from(s: &str) -> Self {
        match s {
            "scheduled" => CampaignStatus::Scheduled,
            "sending" => CampaignStatus::Sending,
            "sent" => CampaignStatus::Sent,
            "failed" => CampaignStatus::Failed,
            _ => CampaignStatus::Draft,
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Email campaign.
///
/// Unlike the other content entities, campaigns are operational send
/// records: their delete is a genuine row removal, and the soft-delete
/// columns exist only to keep the shared table shape.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Campaign {
    pub id: Uuid,
    pub subject: String,
    /// Sanitized HTML body
    pub html_body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_body: Option<String>,
    /// Optional back-reference to a blog post this campaign announces
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog_id: Option<Uuid>,
    pub status: CampaignStatus,
    pub recipient_count: i32,
    pub delivered_count: i32,
    pub opened_count: i32,
    pub clicked_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_by: Option<Uuid>,
}

impl Campaign {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Campaign creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCampaign {
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "HTML body is required"))]
    pub html_body: String,
    pub text_body: Option<String>,
    pub blog_id: Option<Uuid>,
}

/// Campaign update payload; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCampaign {
    pub subject: Option<String>,
    pub html_body: Option<String>,
    pub text_body: Option<String>,
    pub blog_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_only_lifecycle() {
        assert!(CampaignStatus::Draft.can_advance_to(CampaignStatus::Scheduled));
        assert!(CampaignStatus::Sending.can_advance_to(CampaignStatus::Failed));
        assert!(!CampaignStatus::Sent.can_advance_to(CampaignStatus::Draft));
    }
}
