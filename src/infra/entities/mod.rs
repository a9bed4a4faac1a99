//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod admin_user;
pub mod blog;
pub mod campaign;
pub mod contact_message;
pub mod project;
pub mod subscriber;
pub mod testimonial;
