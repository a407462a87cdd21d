//! Ranking Record Store Port - Interface for persisting completed rankings.
//!
//! The store is append-only: records are added one at a time and read back
//! as a whole snapshot, in the order they were appended.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::ranking::RankingRecord;

/// Errors that can occur during record store operations
#[derive(Debug, thiserror::Error)]
pub enum RecordStoreError {
    #[error("Failed to serialize records: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<RecordStoreError> for DomainError {
    fn from(err: RecordStoreError) -> Self {
        DomainError::storage(err.to_string())
    }
}

/// Port for appending and reading ranking records
#[async_trait]
pub trait RankingRecordStore: Send + Sync {
    /// Append a record
    ///
    /// # Errors
    /// Returns `RecordStoreError` if the record cannot be written
    async fn append(&self, record: &RankingRecord) -> Result<(), RecordStoreError>;

    /// Return every record currently stored, oldest first
    ///
    /// # Errors
    /// Returns `RecordStoreError` if the backing storage cannot be read
    async fn snapshot(&self) -> Result<Vec<RankingRecord>, RecordStoreError>;

    /// Return the most recently appended record
    async fn latest(&self) -> Result<Option<RankingRecord>, RecordStoreError> {
        Ok(self.snapshot().await?.pop())
    }
}
