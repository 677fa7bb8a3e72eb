//! Infrastructure layer - External systems integration
//!
//! This module handles all persistence concerns:
//! - Record stores (JSON files, SQL via SeaORM)
//! - Database connections and migrations
//! - The storage bundle handed to services

pub mod db;
pub mod repositories;
pub mod storage;

pub use db::{Database, Migrator};
pub use repositories::{JsonFileStore, RecordBuilder, RecordStore, SqlStore};
pub use storage::Storage;
