//! RunRankingHandler - Command handler for running a TOPSIS ranking.
//!
//! Validates responses, evaluates the decision matrix, logs each
//! intermediate stage, and optionally appends the outcome to the record store.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::analysis::{evaluate_ranking, RankingReport};
use crate::domain::foundation::RankingRunId;
use crate::domain::ranking::{Alternative, CriteriaSet, RankingError, RankingRecord};
use crate::ports::RankingRecordStore;

/// Command to rank a set of alternatives.
#[derive(Debug, Clone)]
pub struct RunRankingCommand {
    pub alternatives: Vec<Alternative>,
    pub criteria: CriteriaSet,
    /// Append the outcome to the record store.
    pub record: bool,
}

/// Result of a successful ranking run.
#[derive(Debug, Clone)]
pub struct RunRankingResult {
    pub report: RankingReport,
    /// Set when the run was recorded.
    pub record_id: Option<RankingRunId>,
}

/// Handler for ranking runs.
pub struct RunRankingHandler {
    store: Arc<dyn RankingRecordStore>,
}

impl RunRankingHandler {
    pub fn new(store: Arc<dyn RankingRecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: RunRankingCommand) -> Result<RunRankingResult, RankingError> {
        info!(
            alternatives = cmd.alternatives.len(),
            criteria = cmd.criteria.len(),
            "Starting TOPSIS ranking"
        );

        // 1. Validate and evaluate
        let report = match evaluate_ranking(&cmd.alternatives, &cmd.criteria) {
            Ok(report) => report,
            Err(err) => {
                warn!(error = %err, "Ranking rejected");
                return Err(err);
            }
        };

        // 2. Trace intermediate stages
        let evaluation = &report.evaluation;
        let matrix: Vec<Vec<u8>> = cmd.alternatives.iter().map(Alternative::scores).collect();
        debug!(stage = "decision_matrix", values = ?matrix);
        debug!(stage = "normalized", values = ?evaluation.normalized);
        debug!(stage = "weighted", values = ?evaluation.weighted);
        debug!(
            stage = "ideal_solutions",
            ideal = ?evaluation.ideal_solutions.ideal,
            negative_ideal = ?evaluation.ideal_solutions.negative_ideal
        );
        debug!(stage = "separation", values = ?evaluation.separation);
        debug!(stage = "closeness", values = ?evaluation.closeness);

        if let Some(winner) = report.winner() {
            info!(
                winner = %winner.name,
                closeness = winner.closeness,
                "Ranking complete"
            );
        }

        // 3. Record the run; failures do not discard the ranking
        let record_id = if cmd.record {
            let record = RankingRecord::new(cmd.criteria.len(), report.results.clone());
            match self.store.append(&record).await {
                Ok(()) => {
                    debug!(record_id = %record.id, "Ranking recorded");
                    Some(record.id)
                }
                Err(err) => {
                    warn!(error = %err, "Failed to record ranking");
                    None
                }
            }
        } else {
            None
        };

        Ok(RunRankingResult { report, record_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ranking::{palette_color, Criterion};
    use crate::ports::RecordStoreError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockRecordStore {
        records: Mutex<Vec<RankingRecord>>,
        fail_append: bool,
    }

    impl MockRecordStore {
        fn new() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
                fail_append: false,
            }
        }

        fn failing() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
                fail_append: true,
            }
        }

        fn appended(&self) -> Vec<RankingRecord> {
            self.records.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RankingRecordStore for MockRecordStore {
        async fn append(&self, record: &RankingRecord) -> Result<(), RecordStoreError> {
            if self.fail_append {
                return Err(RecordStoreError::IoError("disk full".to_string()));
            }
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn snapshot(&self) -> Result<Vec<RankingRecord>, RecordStoreError> {
            Ok(self.records.lock().unwrap().clone())
        }
    }

    fn criteria() -> CriteriaSet {
        CriteriaSet::new(vec![
            Criterion::new("Affordable?", 0.6, true, "Cost").unwrap(),
            Criterion::new("Available?", 0.4, true, "Availability").unwrap(),
        ])
        .unwrap()
    }

    fn alternatives(raw: &[(&str, [i8; 2])]) -> Vec<Alternative> {
        raw.iter()
            .enumerate()
            .map(|(i, (name, values))| {
                Alternative::from_raw(*name, values, palette_color(i)).unwrap()
            })
            .collect()
    }

    fn command(record: bool) -> RunRankingCommand {
        RunRankingCommand {
            alternatives: alternatives(&[("Y", [1, 0]), ("Z", [0, 0]), ("X", [1, 1])]),
            criteria: criteria(),
            record,
        }
    }

    #[tokio::test]
    async fn ranks_and_records_when_requested() {
        let store = Arc::new(MockRecordStore::new());
        let handler = RunRankingHandler::new(store.clone());

        let result = handler.handle(command(true)).await.unwrap();

        let names: Vec<_> = result.report.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["X", "Y", "Z"]);

        let appended = store.appended();
        assert_eq!(appended.len(), 1);
        assert_eq!(result.record_id, Some(appended[0].id));
        assert_eq!(appended[0].criteria_count, 2);
        assert_eq!(appended[0].winner_name(), Some("X"));
    }

    #[tokio::test]
    async fn does_not_record_unless_asked() {
        let store = Arc::new(MockRecordStore::new());
        let handler = RunRankingHandler::new(store.clone());

        let result = handler.handle(command(false)).await.unwrap();

        assert!(result.record_id.is_none());
        assert!(store.appended().is_empty());
    }

    #[tokio::test]
    async fn store_failure_still_returns_ranking() {
        let handler = RunRankingHandler::new(Arc::new(MockRecordStore::failing()));

        let result = handler.handle(command(true)).await.unwrap();

        assert!(result.record_id.is_none());
        assert_eq!(result.report.results.len(), 3);
    }

    #[tokio::test]
    async fn incomplete_responses_are_rejected_without_recording() {
        let store = Arc::new(MockRecordStore::new());
        let handler = RunRankingHandler::new(store.clone());
        let cmd = RunRankingCommand {
            alternatives: alternatives(&[("A", [1, 1]), ("B", [0, -1])]),
            criteria: criteria(),
            record: true,
        };

        let err = handler.handle(cmd).await.unwrap_err();

        match err {
            RankingError::IncompleteResponses {
                alternative_name,
                criterion_index,
                ..
            } => {
                assert_eq!(alternative_name, "B");
                assert_eq!(criterion_index, 1);
            }
            other => panic!("expected IncompleteResponses, got {:?}", other),
        }
        assert!(store.appended().is_empty());
    }

    #[tokio::test]
    async fn empty_alternatives_yield_empty_results() {
        let handler = RunRankingHandler::new(Arc::new(MockRecordStore::new()));
        let cmd = RunRankingCommand {
            alternatives: Vec::new(),
            criteria: criteria(),
            record: false,
        };

        let result = handler.handle(cmd).await.unwrap();
        assert!(result.report.results.is_empty());
        assert!(result.report.winner().is_none());
    }
}
