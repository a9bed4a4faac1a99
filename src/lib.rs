//! Portfolio CMS - bilingual content backend with live admin sync
//!
//! This crate provides the backend for a bilingual (Turkish/English)
//! portfolio site: public content endpoints plus an authenticated admin
//! surface with soft-delete lifecycle and per-table live change streams.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, change feed)
//! - **admin**: Admin session primitives (live lists, subscriptions)
//! - **jobs**: Background campaign delivery
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response types
//! - **utils**: Utility functions and helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Start the campaign delivery worker
//! cargo run -- jobs work
//! ```

pub mod admin;
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod jobs;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use infra::{ChangeEvent, ChangeFeed, ChangeKind};
