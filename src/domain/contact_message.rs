//! Contact message domain entity and status state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Contact message handling status.
///
/// Operators only ever move forward: `new -> read -> replied -> archived`.
/// Skipping ahead (e.g. archiving an unread message) is allowed, going
/// back is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    New,
    Read,
    Replied,
    Archived,
}

impl MessageStatus {
    fn rank(self) -> u8 {
        match self {
            MessageStatus::New => 0,
            MessageStatus::Read => 1,
            MessageStatus::Replied => 2,
            MessageStatus::Archived => 3,
        }
    }

    /// Whether a transition to `next` is a forward (or idempotent) move
    pub fn can_advance_to(self, next: MessageStatus) -> bool {
        next.rank() >= self.rank()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MessageStatus::New => "new",
            MessageStatus::Read => "read",
            MessageStatus::Replied => "replied",
            MessageStatus::Archived => "archived",
        }
    }
}

impl From<&str> for MessageStatus {
    fn from(s: &str) -> Self {
        match s {
            "read" => MessageStatus::Read,
            "replied" => MessageStatus::Replied,
            "archived" => MessageStatus::Archived,
            _ => MessageStatus::New,
        }
    }
}

impl std::fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Contact form submission with soft delete support
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    /// Consent-to-process flag captured at submission, never mutable
    pub kvkk_consent: bool,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_by: Option<Uuid>,
}

impl ContactMessage {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Public contact form payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateContactMessage {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    /// Must be true; submissions without consent are rejected
    pub kvkk_consent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_transitions() {
        assert!(MessageStatus::New.can_advance_to(MessageStatus::Read));
        assert!(MessageStatus::New.can_advance_to(MessageStatus::Archived));
        assert!(MessageStatus::Read.can_advance_to(MessageStatus::Replied));
    }

    #[test]
    fn test_backward_transitions_rejected() {
        assert!(!MessageStatus::Read.can_advance_to(MessageStatus::New));
        assert!(!MessageStatus::Archived.can_advance_to(MessageStatus::Replied));
    }

    #[test]
    fn test_idempotent_transition_allowed() {
        assert!(MessageStatus::Read.can_advance_to(MessageStatus::Read));
    }

    #[test]
    fn test_status_round_trip() {
        for s in ["new", "read", "replied", "archived"] {
            assert_eq!(MessageStatus::from(s).as_str(), s);
        }
    }
}
