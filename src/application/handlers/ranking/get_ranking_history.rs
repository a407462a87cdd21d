//! GetRankingHistoryHandler - Query handler for recorded ranking runs.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::ranking::RankingRecord;
use crate::ports::RankingRecordStore;

/// Query for recorded runs, most recent first.
#[derive(Debug, Clone, Default)]
pub struct GetRankingHistoryQuery {
    /// Return at most this many records.
    pub limit: Option<usize>,
}

/// Handler for ranking history queries.
pub struct GetRankingHistoryHandler {
    store: Arc<dyn RankingRecordStore>,
}

impl GetRankingHistoryHandler {
    pub fn new(store: Arc<dyn RankingRecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetRankingHistoryQuery,
    ) -> Result<Vec<RankingRecord>, DomainError> {
        let mut records = self.store.snapshot().await?;
        records.reverse();
        if let Some(limit) = query.limit {
            records.truncate(limit);
        }
        Ok(records)
    }
}
