//! Generic soft-delete repository over one content table.
//!
//! All six content tables share the same lifecycle columns, so the
//! query shapes for listing, soft delete, restore, and flag toggles are
//! written once here, generically over any entity implementing
//! [`SoftDeletable`]. Per-table stores wrap this with their typed
//! create/update/lookup methods and change-feed publishing.

use std::marker::PhantomData;
use std::sync::Arc;

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, PrimaryKeyTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::infra::changefeed::ChangeFeed;

/// Listing filters.
///
/// The active-only filter (`deleted_at IS NULL`) applies first unless
/// `include_deleted` is set; everything else composes by logical AND.
/// Filters targeting a column the entity lacks are ignored.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub published_only: bool,
    pub featured_only: bool,
    pub include_deleted: bool,
    pub status: Option<String>,
}

impl ListOptions {
    /// Active rows only, no further filtering
    pub fn active() -> Self {
        Self::default()
    }

    /// Everything, soft-deleted rows included
    pub fn with_deleted() -> Self {
        Self {
            include_deleted: true,
            ..Self::default()
        }
    }

    /// Published, active rows (the public-facing query)
    pub fn published() -> Self {
        Self {
            published_only: true,
            ..Self::default()
        }
    }

    pub fn featured(mut self) -> Self {
        self.featured_only = true;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Column layout contract for entities carrying the shared lifecycle shape.
pub trait SoftDeletable: EntityTrait {
    /// Backing table name, used as the change-feed channel key
    const TABLE: &'static str;

    fn id_col() -> Self::Column;
    fn deleted_at_col() -> Self::Column;
    fn deleted_by_col() -> Self::Column;
    fn updated_at_col() -> Self::Column;

    fn published_col() -> Option<Self::Column> {
        None
    }

    fn featured_col() -> Option<Self::Column> {
        None
    }

    fn status_col() -> Option<Self::Column> {
        None
    }

    /// Entity-specific default ordering for listings
    fn default_order() -> (Self::Column, Order);
}

/// Shared query/mutation engine for one soft-deletable table.
pub struct ContentRepository<E> {
    db: DatabaseConnection,
    feed: Arc<ChangeFeed>,
    _entity: PhantomData<E>,
}

impl<E> ContentRepository<E>
where
    E: SoftDeletable,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    pub fn new(db: DatabaseConnection, feed: Arc<ChangeFeed>) -> Self {
        Self {
            db,
            feed,
            _entity: PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn feed(&self) -> &ChangeFeed {
        &self.feed
    }

    /// List rows under the given filters with the entity's default order.
    pub async fn list(&self, opts: &ListOptions) -> AppResult<Vec<E::Model>> {
        let mut query = E::find();

        if !opts.include_deleted {
            query = query.filter(E::deleted_at_col().is_null());
        }
        if opts.published_only {
            if let Some(col) = E::published_col() {
                query = query.filter(col.eq(true));
            }
        }
        if opts.featured_only {
            if let Some(col) = E::featured_col() {
                query = query.filter(col.eq(true));
            }
        }
        if let Some(status) = &opts.status {
            if let Some(col) = E::status_col() {
                query = query.filter(col.eq(status.clone()));
            }
        }

        let (col, order) = E::default_order();
        query
            .order_by(col, order)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    /// Find an active row by id
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<E::Model>> {
        E::find_by_id(id)
            .filter(E::deleted_at_col().is_null())
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    /// Find a row by id, soft-deleted ones included
    pub async fn find_by_id_with_deleted(&self, id: Uuid) -> AppResult<Option<E::Model>> {
        E::find_by_id(id).one(&self.db).await.map_err(Into::into)
    }

    /// Soft delete an active row: stamps `deleted_at`/`deleted_by` in one
    /// write. Returns the refreshed row.
    pub async fn soft_delete(&self, id: Uuid, actor: Option<Uuid>) -> AppResult<E::Model> {
        let now = Utc::now();
        let result = E::update_many()
            .col_expr(E::deleted_at_col(), Expr::value(Some(now)))
            .col_expr(E::deleted_by_col(), Expr::value(actor))
            .col_expr(E::updated_at_col(), Expr::value(now))
            .filter(E::id_col().eq(id))
            .filter(E::deleted_at_col().is_null())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        self.find_by_id_with_deleted(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Restore a soft-deleted row: clears `deleted_at` and `deleted_by`
    /// atomically (one write, never one without the other).
    pub async fn restore(&self, id: Uuid) -> AppResult<E::Model> {
        let result = E::update_many()
            .col_expr(E::deleted_at_col(), Expr::value(None::<chrono::DateTime<Utc>>))
            .col_expr(E::deleted_by_col(), Expr::value(None::<Uuid>))
            .col_expr(E::updated_at_col(), Expr::value(Utc::now()))
            .filter(E::id_col().eq(id))
            .filter(E::deleted_at_col().is_not_null())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        self.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    /// Set a single boolean column through the normal update path
    /// (bumps `updated_at` exactly like any other update).
    pub async fn set_flag(&self, id: Uuid, column: E::Column, value: bool) -> AppResult<E::Model> {
        let result = E::update_many()
            .col_expr(column, Expr::value(value))
            .col_expr(E::updated_at_col(), Expr::value(Utc::now()))
            .filter(E::id_col().eq(id))
            .filter(E::deleted_at_col().is_null())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        self.find_by_id(id).await?.ok_or(AppError::NotFound)
    }
}
