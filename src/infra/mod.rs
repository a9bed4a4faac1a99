//! Infrastructure: persistence, change feed, and SeaORM entities.

pub mod changefeed;
pub mod db;
pub mod entities;
pub mod repositories;

pub use changefeed::{ChangeEvent, ChangeFeed, ChangeKind};
pub use db::Database;
