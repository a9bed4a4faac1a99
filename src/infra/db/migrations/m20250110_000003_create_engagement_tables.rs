//! Migration: Create the engagement tables (contact messages, newsletter
//! subscribers, email campaigns).

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactMessages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactMessages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContactMessages::Name).string().not_null())
                    .col(ColumnDef::new(ContactMessages::Email).string().not_null())
                    .col(ColumnDef::new(ContactMessages::Phone).string().null())
                    .col(ColumnDef::new(ContactMessages::Subject).string().null())
                    .col(ColumnDef::new(ContactMessages::Message).text().not_null())
                    .col(
                        ColumnDef::new(ContactMessages::KvkkConsent)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactMessages::Status)
                            .string()
                            .not_null()
                            .default("new"),
                    )
                    .col(
                        ColumnDef::new(ContactMessages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactMessages::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactMessages::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(ContactMessages::DeletedBy).uuid().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contact_messages_deleted_at")
                    .table(ContactMessages::Table)
                    .col(ContactMessages::DeletedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contact_messages_status")
                    .table(ContactMessages::Table)
                    .col(ContactMessages::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NewsletterSubscribers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NewsletterSubscribers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(NewsletterSubscribers::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(NewsletterSubscribers::Name).string().null())
                    .col(
                        ColumnDef::new(NewsletterSubscribers::Status)
                            .string()
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(NewsletterSubscribers::Source)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(NewsletterSubscribers::SubscribedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NewsletterSubscribers::UnsubscribedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(NewsletterSubscribers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NewsletterSubscribers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NewsletterSubscribers::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(NewsletterSubscribers::DeletedBy)
                            .uuid()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_newsletter_subscribers_deleted_at")
                    .table(NewsletterSubscribers::Table)
                    .col(NewsletterSubscribers::DeletedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmailCampaigns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmailCampaigns::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EmailCampaigns::Subject).string().not_null())
                    .col(ColumnDef::new(EmailCampaigns::HtmlBody).text().not_null())
                    .col(ColumnDef::new(EmailCampaigns::TextBody).text().null())
                    .col(ColumnDef::new(EmailCampaigns::BlogId).uuid().null())
                    .col(
                        ColumnDef::new(EmailCampaigns::Status)
                            .string()
                            .not_null()
                            .default("draft"),
                    )
                    .col(
                        ColumnDef::new(EmailCampaigns::RecipientCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(EmailCampaigns::DeliveredCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(EmailCampaigns::OpenedCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(EmailCampaigns::ClickedCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(EmailCampaigns::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmailCampaigns::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmailCampaigns::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(EmailCampaigns::DeletedBy).uuid().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmailCampaigns::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(NewsletterSubscribers::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(ContactMessages::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ContactMessages {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Subject,
    Message,
    KvkkConsent,
    Status,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
    DeletedBy,
}

#[derive(Iden)]
enum NewsletterSubscribers {
    Table,
    Id,
    Email,
    Name,
    Status,
    Source,
    SubscribedAt,
    UnsubscribedAt,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
    DeletedBy,
}

#[derive(Iden)]
enum EmailCampaigns {
    Table,
    Id,
    Subject,
    HtmlBody,
    TextBody,
    BlogId,
    Status,
    RecipientCount,
    DeliveredCount,
    OpenedCount,
    ClickedCount,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
    DeletedBy,
}
