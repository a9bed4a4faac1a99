//! Admin user repository - backs the auth service.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::domain::AdminUser;
use crate::errors::AppResult;
use crate::infra::entities::admin_user::{self, ActiveModel, Entity as AdminUserEntity};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Admin account data access contract
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AdminUserRepository: Send + Sync {
    /// Find active account by id (excludes deactivated)
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AdminUser>>;
    /// Find active account by email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<AdminUser>>;
    /// Email lookup spanning deactivated accounts, used at registration
    async fn find_by_email_with_deleted(&self, email: &str) -> AppResult<Option<AdminUser>>;
    async fn create(&self, email: String, password_hash: String, name: String)
        -> AppResult<AdminUser>;
}

/// SeaORM-backed implementation
pub struct AdminUserStore {
    db: DatabaseConnection,
}

impl AdminUserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminUserRepository for AdminUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AdminUser>> {
        let model = AdminUserEntity::find_by_id(id)
            .filter(admin_user::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?;
        Ok(model.map(AdminUser::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<AdminUser>> {
        let model = AdminUserEntity::find()
            .filter(admin_user::Column::Email.eq(email))
            .filter(admin_user::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?;
        Ok(model.map(AdminUser::from))
    }

    async fn find_by_email_with_deleted(&self, email: &str) -> AppResult<Option<AdminUser>> {
        let model = AdminUserEntity::find()
            .filter(admin_user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(model.map(AdminUser::from))
    }

    async fn create(
        &self,
        email: String,
        password_hash: String,
        name: String,
    ) -> AppResult<AdminUser> {
        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email),
            password_hash: Set(password_hash),
            name: Set(name),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        }
        .insert(&self.db)
        .await?;

        Ok(AdminUser::from(model))
    }
}
