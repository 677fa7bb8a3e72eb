//! Repository layer - Data access abstraction
//!
//! Record stores provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod base;
pub(crate) mod entities;
mod file_store;
mod sql_store;

pub use base::{duplicate_id, ensure_unique_ids, RecordBuilder, RecordStore};
pub use file_store::JsonFileStore;
pub use sql_store::SqlStore;
