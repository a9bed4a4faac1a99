//! SeaORM entity for the `projects` table.

use sea_orm::entity::prelude::*;

use crate::domain::{self, Bilingual};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub slug: String,
    pub category: String,
    pub title_tr: String,
    pub title_en: String,
    pub description_tr: Option<String>,
    pub description_en: Option<String>,
    /// JSON array of tech stack tags, order preserved
    pub tech: Json,
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub order_index: i32,
    pub published: bool,
    pub featured: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
    pub deleted_by: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for domain::Project {
    fn from(m: Model) -> Self {
        let tech: Vec<String> = serde_json::from_value(m.tech).unwrap_or_default();
        Self {
            id: m.id,
            slug: m.slug,
            category: m.category,
            title: Bilingual::new(m.title_tr, m.title_en),
            description: Bilingual::from_columns(m.description_tr, m.description_en),
            tech,
            link: m.link,
            image_url: m.image_url,
            order_index: m.order_index,
            published: m.published,
            featured: m.featured,
            created_at: m.created_at,
            updated_at: m.updated_at,
            deleted_at: m.deleted_at,
            deleted_by: m.deleted_by,
        }
    }
}
