//! In-Memory Record Store Adapter
//!
//! Stores ranking records in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::ranking::RankingRecord;
use crate::ports::{RankingRecordStore, RecordStoreError};

/// In-memory storage for ranking records
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<Vec<RankingRecord>>>,
}

impl InMemoryRecordStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored records (useful for tests)
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }

    /// Get the number of stored records
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl RankingRecordStore for InMemoryRecordStore {
    async fn append(&self, record: &RankingRecord) -> Result<(), RecordStoreError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn snapshot(&self) -> Result<Vec<RankingRecord>, RecordStoreError> {
        Ok(self.records.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn append_then_snapshot_preserves_order() {
        let store = InMemoryRecordStore::new();
        let first = RankingRecord::new(8, Vec::new());
        let second = RankingRecord::new(8, Vec::new());

        store.append(&first).await.unwrap();
        store.append(&second).await.unwrap();

        let records = store.snapshot().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, first.id);
        assert_eq!(records[1].id, second.id);
    }

    #[tokio::test]
    async fn latest_returns_last_appended() {
        let store = InMemoryRecordStore::new();
        assert!(store.latest().await.unwrap().is_none());

        let record = RankingRecord::new(2, Vec::new());
        store.append(&record).await.unwrap();
        assert_eq!(store.latest().await.unwrap().map(|r| r.id), Some(record.id));
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let store = InMemoryRecordStore::new();
        let clone = store.clone();
        clone.append(&RankingRecord::new(1, Vec::new())).await.unwrap();
        assert_eq!(store.record_count().await, 1);

        store.clear().await;
        assert_eq!(clone.record_count().await, 0);
    }
}
