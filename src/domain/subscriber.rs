//! Newsletter subscriber domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Subscriber delivery status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberStatus {
    Active,
    Unsubscribed,
    Bounced,
}

impl SubscriberStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SubscriberStatus::Active => "active",
            SubscriberStatus::Unsubscribed => "unsubscribed",
            SubscriberStatus::Bounced => "bounced",
        }
    }
}

impl From<&str> for SubscriberStatus {
    fn from(s: &str) -> Self {
        match s {
            "unsubscribed" => SubscriberStatus::Unsubscribed,
            "bounced" => SubscriberStatus::Bounced,
            _ => SubscriberStatus::Active,
        }
    }
}

impl std::fmt::Display for SubscriberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Newsletter subscriber with soft delete support.
///
/// `email` is unique across all rows, soft-deleted ones included; an
/// unsubscribe flips `status` rather than removing the row, so a later
/// signup with the same address reactivates in place.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Subscriber {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub status: SubscriberStatus,
    /// Free-text origin tag (footer form, popup, import, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub subscribed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_by: Option<Uuid>,
}

impl Subscriber {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn is_subscribed(&self) -> bool {
        self.status == SubscriberStatus::Active && self.deleted_at.is_none()
    }
}

/// Public newsletter signup payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SubscribeRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub name: Option<String>,
    pub source: Option<String>,
}

/// Public self-service unsubscribe payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UnsubscribeRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}
