//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20250110_000001_create_admin_users;
mod m20250110_000002_create_content_tables;
mod m20250110_000003_create_engagement_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250110_000001_create_admin_users::Migration),
            Box::new(m20250110_000002_create_content_tables::Migration),
            Box::new(m20250110_000003_create_engagement_tables::Migration),
        ]
    }
}
