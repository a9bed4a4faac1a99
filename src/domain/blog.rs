//! Blog post domain entity and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::localized::Bilingual;

/// Blog post entity with soft delete support
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Blog {
    pub id: Uuid,
    /// Unique, URL-safe identifier
    pub slug: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    pub title: Bilingual,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<Bilingual>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Bilingual>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft delete timestamp (None = active)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_by: Option<Uuid>,
}

impl Blog {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// Blog creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBlog {
    /// Optional explicit slug; generated from the Turkish title when absent
    pub slug: Option<String>,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    pub emoji: Option<String>,
    /// Both title variants are mandatory
    pub title: Bilingual,
    pub excerpt: Option<Bilingual>,
    pub content: Option<Bilingual>,
    #[serde(default)]
    pub published: bool,
}

/// Blog update payload; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBlog {
    pub slug: Option<String>,
    pub category: Option<String>,
    pub emoji: Option<String>,
    pub title: Option<Bilingual>,
    pub excerpt: Option<Bilingual>,
    pub content: Option<Bilingual>,
    pub published: Option<bool>,
}
