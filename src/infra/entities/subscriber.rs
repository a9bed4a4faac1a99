//! SeaORM entity for the `newsletter_subscribers` table.

use sea_orm::entity::prelude::*;

use crate::domain::{self, SubscriberStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "newsletter_subscribers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub name: Option<String>,
    pub status: String,
    pub source: Option<String>,
    pub subscribed_at: DateTimeUtc,
    pub unsubscribed_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
    pub deleted_by: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for domain::Subscriber {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            name: m.name,
            status: SubscriberStatus::from(m.status.as_str()),
            source: m.source,
            subscribed_at: m.subscribed_at,
            unsubscribed_at: m.unsubscribed_at,
            created_at: m.created_at,
            updated_at: m.updated_at,
            deleted_at: m.deleted_at,
            deleted_by: m.deleted_by,
        }
    }
}
