//! JSON file record store.
//!
//! The whole record set lives in one pretty-printed JSON array. Every
//! operation reads the full file; every mutation rewrites it (temp file +
//! rename). All access to a file goes through one async mutex, so
//! read-modify-write cycles never interleave.

use std::io;
use std::marker::PhantomData;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use super::base::{duplicate_id, ensure_unique_ids, RecordBuilder, RecordStore};
use crate::domain::Record;
use crate::errors::AppResult;

/// Record store backed by a single JSON file.
///
/// Create exactly one instance per file; the writer lock is per instance.
pub struct JsonFileStore<T> {
    path: PathBuf,
    writer: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T: Record> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Mutex::new(()),
            _records: PhantomData,
        }
    }

    /// Read the record set. A missing or blank file is an empty set.
    async fn load(&self) -> AppResult<Vec<T>> {
        match fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Rewrite the whole file with `records`.
    async fn persist(&self, records: &[T]) -> AppResult<()> {
        let mut bytes = serde_json::to_vec_pretty(records)?;
        bytes.push(b'\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, &bytes).await?;
        fs::rename(&staging, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for JsonFileStore<T> {
    async fn list(&self) -> AppResult<Vec<T>> {
        let _guard = self.writer.lock().await;
        self.load().await
    }

    async fn insert_with(&self, build: RecordBuilder<T>) -> AppResult<T> {
        let _guard = self.writer.lock().await;
        let mut records = self.load().await?;

        let record = build(records.as_slice())?;
        if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(duplicate_id::<T>());
        }

        records.push(record.clone());
        self.persist(&records).await?;

        tracing::debug!(
            store = %self.path.display(),
            record_id = record.id(),
            total = records.len(),
            "Record inserted"
        );
        Ok(record)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<Option<T>> {
        let _guard = self.writer.lock().await;
        let mut records = self.load().await?;

        let Some(position) = records.iter().position(|record| record.id() == id) else {
            return Ok(None);
        };
        let removed = records.remove(position);
        self.persist(&records).await?;

        tracing::debug!(store = %self.path.display(), record_id = id, "Record deleted");
        Ok(Some(removed))
    }

    async fn replace_all(&self, records: Vec<T>) -> AppResult<usize> {
        ensure_unique_ids(&records)?;

        let _guard = self.writer.lock().await;
        self.persist(&records).await?;

        tracing::debug!(store = %self.path.display(), total = records.len(), "Record set replaced");
        Ok(records.len())
    }
}
