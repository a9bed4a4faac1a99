//! HTTP request handlers.

pub mod auth_handler;
pub mod blog_handler;
pub mod campaign_handler;
pub mod events_handler;
pub mod message_handler;
pub mod project_handler;
pub mod subscriber_handler;
pub mod testimonial_handler;

pub use auth_handler::{auth_routes, session_routes};
