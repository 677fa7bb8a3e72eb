//! Backend-independent record store contract.
//!
//! Both the JSON file store and the SQL store implement [`RecordStore`];
//! services only ever see `Arc<dyn RecordStore<T>>`.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::Record;
use crate::errors::{AppError, AppResult};

/// Builds a new record from a snapshot of the current record set.
///
/// Runs inside the store's write path, so ids derived from the snapshot
/// cannot be taken by a concurrent writer before the insert lands.
pub type RecordBuilder<T> = Box<dyn FnOnce(&[T]) -> AppResult<T> + Send>;

/// Persistence for one entity type. Every mutation is durable before it returns.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// All records, in insertion order
    async fn list(&self) -> AppResult<Vec<T>>;

    /// Exact match on `id`
    async fn find_by_id(&self, id: &str) -> AppResult<Option<T>> {
        let same_id = |record: &T| record.id() == id;
        Ok(self.find_where(&same_id).await?.into_iter().next())
    }

    /// Records satisfying `predicate`, in insertion order
    async fn find_where(
        &self,
        predicate: &(dyn for<'p> Fn(&'p T) -> bool + Send + Sync),
    ) -> AppResult<Vec<T>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|record| predicate(record))
            .collect())
    }

    /// Append a record. Fails with `Conflict` if its id is already present.
    async fn insert(&self, record: T) -> AppResult<T> {
        self.insert_with(Box::new(move |_| Ok(record))).await
    }

    /// Build a record from the current snapshot and append it as one unit.
    async fn insert_with(&self, build: RecordBuilder<T>) -> AppResult<T>;

    /// Remove a record, returning it, or `None` if absent
    async fn delete_by_id(&self, id: &str) -> AppResult<Option<T>>;

    /// Overwrite the entire record set. Returns the number of records stored.
    async fn replace_all(&self, records: Vec<T>) -> AppResult<usize>;

    /// Check that the backend is reachable
    async fn ping(&self) -> AppResult<()> {
        self.list().await.map(|_| ())
    }
}

/// Conflict error for a duplicate record id.
pub fn duplicate_id<T: Record>() -> AppError {
    AppError::conflict(format!("{} ID", T::ENTITY))
}

/// Reject record sets that contain the same id twice.
pub fn ensure_unique_ids<T: Record>(records: &[T]) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            tracing::debug!(record_id = record.id(), "Duplicate id in record set");
            return Err(duplicate_id::<T>());
        }
    }
    Ok(())
}
