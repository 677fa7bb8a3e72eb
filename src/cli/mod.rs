//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `seed` - Load recipes and users from JSON files

pub mod args;

pub use args::{Cli, Commands};
