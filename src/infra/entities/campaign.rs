//! SeaORM entity for the `email_campaigns` table.

use sea_orm::entity::prelude::*;

use crate::domain::{self, CampaignStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "email_campaigns")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub html_body: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub text_body: Option<String>,
    pub blog_id: Option<Uuid>,
    pub status: String,
    pub recipient_count: i32,
    pub delivered_count: i32,
    pub opened_count: i32,
    pub clicked_count: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
    pub deleted_by: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for domain::Campaign {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            subject: m.subject,
            html_body: m.html_body,
            text_body: m.text_body,
            blog_id: m.blog_id,
            status: CampaignStatus::from(m.status.as_str()),
            recipient_count: m.recipient_count,
            delivered_count: m.delivered_count,
            opened_count: m.opened_count,
            clicked_count: m.clicked_count,
            created_at: m.created_at,
            updated_at: m.updated_at,
            deleted_at: m.deleted_at,
            deleted_by: m.deleted_by,
        }
    }
}
