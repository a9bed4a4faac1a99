//! SeaORM entity for the `testimonials` table.

use sea_orm::entity::prelude::*;

use crate::domain::{self, Bilingual};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "testimonials")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub company: Option<String>,
    pub role_tr: Option<String>,
    pub role_en: Option<String>,
    pub quote_tr: String,
    pub quote_en: String,
    pub rating: i32,
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

impl From<Model> for domain::Testimonial {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            company: m.company,
            role: Bilingual::from_columns(m.role_tr, m.role_en),
            quote: Bilingual::new(m.quote_tr, m.quote_en),
            rating: m.rating,
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
