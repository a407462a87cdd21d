//! File-based Record Store Adapter
//!
//! Stores all ranking records as a single JSON array on disk.
//! A missing or unreadable file is treated as an empty history.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::warn;

use crate::domain::ranking::RankingRecord;
use crate::ports::{RankingRecordStore, RecordStoreError};

/// File name used when no path is configured.
pub const DEFAULT_RECORD_FILE: &str = "wedding-gate-analytics.json";

/// JSON-file storage for ranking records
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Arc<Mutex<()>>,
}

impl FileRecordStore {
    /// Create a store backed by the given file
    ///
    /// # Example
    /// ```ignore
    /// let store = FileRecordStore::new("./data/wedding-gate-analytics.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<(), RecordStoreError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
                .await
                .map_err(|e| RecordStoreError::IoError(e.to_string())),
            _ => Ok(()),
        }
    }

    async fn read_records(&self) -> Result<Vec<RankingRecord>, RecordStoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)
            .await
            .map_err(|e| RecordStoreError::IoError(e.to_string()))?;

        match serde_json::from_str(&json) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Record file is not a valid record list, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }
}

#[async_trait]
impl RankingRecordStore for FileRecordStore {
    async fn append(&self, record: &RankingRecord) -> Result<(), RecordStoreError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records().await?;
        records.push(record.clone());

        let json = serde_json::to_string_pretty(&records)
            .map_err(|e| RecordStoreError::SerializationFailed(e.to_string()))?;

        self.ensure_parent_dir().await?;
        fs::write(&self.path, json)
            .await
            .map_err(|e| RecordStoreError::IoError(e.to_string()))
    }

    async fn snapshot(&self) -> Result<Vec<RankingRecord>, RecordStoreError> {
        self.read_records().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileRecordStore {
        FileRecordStore::new(dir.path().join(DEFAULT_RECORD_FILE))
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        assert!(store.snapshot().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn append_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let record = RankingRecord::new(8, Vec::new());

        store_in(&temp_dir).append(&record).await.unwrap();

        let reopened = store_in(&temp_dir);
        let records = reopened.snapshot().await.unwrap();
        assert_eq!(records, vec![record]);
    }

    #[tokio::test]
    async fn appends_accumulate_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let first = RankingRecord::new(8, Vec::new());
        let second = RankingRecord::new(8, Vec::new());

        store.append(&first).await.unwrap();
        store.append(&second).await.unwrap();

        let ids: Vec<_> = store.snapshot().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn corrupt_file_reads_as_empty_and_is_replaced_on_append() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(store.snapshot().await.unwrap().is_empty());

        let record = RankingRecord::new(3, Vec::new());
        store.append(&record).await.unwrap();
        assert_eq!(store.snapshot().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn creates_missing_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileRecordStore::new(temp_dir.path().join("nested/dir/records.json"));

        store.append(&RankingRecord::new(1, Vec::new())).await.unwrap();

        assert!(store.path().exists());
    }
}
