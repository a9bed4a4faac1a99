//! Testimonial domain entity and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::localized::Bilingual;

/// Testimonial entity with soft delete support
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Bilingual>,
    pub quote: Bilingual,
    /// 1-5 inclusive
    pub rating: i32,
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

impl Testimonial {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Testimonial creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTestimonial {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub company: Option<String>,
    pub role: Option<Bilingual>,
    pub quote: Bilingual,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    pub order_index: Option<i32>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
}

/// Testimonial update payload; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTestimonial {
    pub name: Option<String>,
    pub company: Option<String>,
    pub role: Option<Bilingual>,
    pub quote: Option<Bilingual>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    pub order_index: Option<i32>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
}
