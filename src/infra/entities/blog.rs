//! SeaORM entity for the `blogs` table.

use sea_orm::entity::prelude::*;

use crate::domain::{self, Bilingual};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub slug: String,
    pub category: String,
    pub emoji: Option<String>,
    pub title_tr: String,
    pub title_en: String,
    pub excerpt_tr: Option<String>,
    pub excerpt_en: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content_tr: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content_en: Option<String>,
    pub published: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
    pub deleted_by: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for domain::Blog {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            slug: m.slug,
            category: m.category,
            emoji: m.emoji,
            title: Bilingual::new(m.title_tr, m.title_en),
            excerpt: Bilingual::from_columns(m.excerpt_tr, m.excerpt_en),
            content: Bilingual::from_columns(m.content_tr, m.content_en),
            published: m.published,
            created_at: m.created_at,
            updated_at: m.updated_at,
            deleted_at: m.deleted_at,
            deleted_by: m.deleted_by,
        }
    }
}
