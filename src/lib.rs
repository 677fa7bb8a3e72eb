//! Recipe API - recipes and users over HTTP.
//!
//! Serves list/filter, fetch-by-id, create and delete for recipes, plus
//! user registration and login, backed either by a relational database
//! (SeaORM) or by flat JSON files on disk.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Records, filters and id generation
//! - **services**: Recipe and user use cases
//! - **infra**: Record stores (JSON file, SQL) and migrations
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations (database backend)
//! cargo run -- migrate up
//!
//! # Load seed data into the configured store
//! cargo run -- seed --recipes seed/recipes.json --users seed/users.json
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, Recipe, RecipeFilter, User};
pub use errors::{AppError, AppResult};
pub use infra::Storage;
