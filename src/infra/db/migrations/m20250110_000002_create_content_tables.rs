//! Migration: Create the published-content tables (blogs, projects, testimonials).
//!
//! All three carry the soft-delete pair (`deleted_at`, `deleted_by`) from the
//! start, with a partial-scan friendly index on `deleted_at`.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blogs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Blogs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Blogs::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(Blogs::Category).string().not_null())
                    .col(ColumnDef::new(Blogs::Emoji).string().null())
                    .col(ColumnDef::new(Blogs::TitleTr).string().not_null())
                    .col(ColumnDef::new(Blogs::TitleEn).string().not_null())
                    .col(ColumnDef::new(Blogs::ExcerptTr).string().null())
                    .col(ColumnDef::new(Blogs::ExcerptEn).string().null())
                    .col(ColumnDef::new(Blogs::ContentTr).text().null())
                    .col(ColumnDef::new(Blogs::ContentEn).text().null())
                    .col(
                        ColumnDef::new(Blogs::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Blogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Blogs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Blogs::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Blogs::DeletedBy).uuid().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blogs_deleted_at")
                    .table(Blogs::Table)
                    .col(Blogs::DeletedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Projects::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Projects::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Projects::Category).string().not_null())
                    .col(ColumnDef::new(Projects::TitleTr).string().not_null())
                    .col(ColumnDef::new(Projects::TitleEn).string().not_null())
                    .col(ColumnDef::new(Projects::DescriptionTr).string().null())
                    .col(ColumnDef::new(Projects::DescriptionEn).string().null())
                    .col(ColumnDef::new(Projects::Tech).json_binary().not_null())
                    .col(ColumnDef::new(Projects::Link).string().null())
                    .col(ColumnDef::new(Projects::ImageUrl).string().null())
                    .col(
                        ColumnDef::new(Projects::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Projects::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Projects::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Projects::DeletedBy).uuid().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_projects_deleted_at")
                    .table(Projects::Table)
                    .col(Projects::DeletedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Testimonials::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Testimonials::Name).string().not_null())
                    .col(ColumnDef::new(Testimonials::Company).string().null())
                    .col(ColumnDef::new(Testimonials::RoleTr).string().null())
                    .col(ColumnDef::new(Testimonials::RoleEn).string().null())
                    .col(ColumnDef::new(Testimonials::QuoteTr).string().not_null())
                    .col(ColumnDef::new(Testimonials::QuoteEn).string().not_null())
                    .col(
                        ColumnDef::new(Testimonials::Rating)
                            .integer()
                            .not_null()
                            .default(5),
                    )
                    .col(
                        ColumnDef::new(Testimonials::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Testimonials::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Testimonials::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Testimonials::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Testimonials::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Testimonials::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Testimonials::DeletedBy).uuid().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_testimonials_deleted_at")
                    .table(Testimonials::Table)
                    .col(Testimonials::DeletedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Testimonials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Blogs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Blogs {
    Table,
    Id,
    Slug,
    Category,
    Emoji,
    TitleTr,
    TitleEn,
    ExcerptTr,
    ExcerptEn,
    ContentTr,
    ContentEn,
    Published,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
    DeletedBy,
}

#[derive(Iden)]
enum Projects {
    Table,
    Id,
    Slug,
    Category,
    TitleTr,
    TitleEn,
    DescriptionTr,
    DescriptionEn,
    Tech,
    Link,
    ImageUrl,
    OrderIndex,
    Published,
    Featured,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
    DeletedBy,
}

#[derive(Iden)]
enum Testimonials {
    Table,
    Id,
    Name,
    Company,
    RoleTr,
    RoleEn,
    QuoteTr,
    QuoteEn,
    Rating,
    OrderIndex,
    Published,
    Featured,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
    DeletedBy,
}
