//! Shared helpers.

pub mod sanitize;
pub mod slug;

pub use sanitize::clean_html;
pub use slug::slugify;
