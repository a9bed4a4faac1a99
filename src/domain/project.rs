//! Project domain entity and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::localized::Bilingual;

/// Portfolio project entity with soft delete support
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub slug: String,
    pub category: String,
    pub title: Bilingual,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Bilingual>,
    /// Tech stack tags, display order preserved
    pub tech: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Explicit display position, ascending
    pub order_index: i32,
    pub published: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_by: Option<Uuid>,
}

impl Project {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Project creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProject {
    pub slug: Option<String>,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    pub title: Bilingual,
    pub description: Option<Bilingual>,
    #[serde(default)]
    pub tech: Vec<String>,
    #[validate(url(message = "Link must be a valid URL"))]
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub order_index: Option<i32>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
}

/// Project update payload; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProject {
    pub slug: Option<String>,
    pub category: Option<String>,
    pub title: Option<Bilingual>,
    pub description: Option<Bilingual>,
    pub tech: Option<Vec<String>>,
    #[validate(url(message = "Link must be a valid URL"))]
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub order_index: Option<i32>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
}
