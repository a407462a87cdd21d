//! RankingRecord - a persisted snapshot of one completed ranking run.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::RankingResult;
use crate::domain::foundation::{RankingRunId, Timestamp};

/// A completed ranking, as appended to the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRecord {
    pub id: RankingRunId,
    pub computed_at: Timestamp,
    pub criteria_count: usize,
    pub results: Vec<RankingResult>,
}

impl RankingRecord {
    /// Creates a record stamped with the current time.
    pub fn new(criteria_count: usize, results: Vec<RankingResult>) -> Self {
        Self {
            id: RankingRunId::new(),
            computed_at: Timestamp::now(),
            criteria_count,
            results,
        }
    }

    /// Name of the rank-1 alternative, if any.
    pub fn winner_name(&self) -> Option<&str> {
        self.results
            .iter()
            .find(|r| r.rank == 1)
            .map(|r| r.name.as_str())
    }
}
