//! Error types for ranking sessions and runs.

use thiserror::Error;

use crate::domain::foundation::{AlternativeId, DomainError, ErrorCode, ValidationError};

/// Errors that can occur while editing a session or running a ranking.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    #[error(
        "Please answer all questions for {alternative_name} (question {number} is unanswered)",
        number = .criterion_index + 1
    )]
    IncompleteResponses {
        alternative_id: AlternativeId,
        alternative_name: String,
        criterion_index: usize,
    },

    #[error("{alternative_name} has {actual} responses, expected {expected}")]
    ResponseCountMismatch {
        alternative_name: String,
        expected: usize,
        actual: usize,
    },

    #[error("You need at least one vendor")]
    MinimumAlternatives,

    #[error("Alternative not found: {0}")]
    AlternativeNotFound(AlternativeId),

    #[error("Criterion index {index} is out of range for {count} criteria")]
    CriterionOutOfRange { index: usize, count: usize },

    #[error("Shape mismatch in {stage}: expected {expected}, got {actual}")]
    DimensionMismatch {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("A ranking run is already in progress")]
    RunInProgress,

    #[error("No ranking run is in progress")]
    NoActiveRun,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl RankingError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RankingError::IncompleteResponses { .. } => ErrorCode::IncompleteResponses,
            RankingError::ResponseCountMismatch { .. } => ErrorCode::ResponseCountMismatch,
            RankingError::MinimumAlternatives => ErrorCode::MinimumAlternatives,
            RankingError::AlternativeNotFound(_) => ErrorCode::AlternativeNotFound,
            RankingError::CriterionOutOfRange { .. } => ErrorCode::CriterionNotFound,
            RankingError::DimensionMismatch { .. } => ErrorCode::InternalError,
            RankingError::RunInProgress => ErrorCode::RunInProgress,
            RankingError::NoActiveRun => ErrorCode::NoActiveRun,
            RankingError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}

impl From<RankingError> for DomainError {
    fn from(err: RankingError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            RankingError::IncompleteResponses {
                alternative_id,
                alternative_name,
                criterion_index,
            } => domain
                .with_detail("alternative_id", alternative_id.to_string())
                .with_detail("alternative", alternative_name)
                .with_detail("criterion_index", criterion_index.to_string()),
            RankingError::ResponseCountMismatch {
                alternative_name, ..
            } => domain.with_detail("alternative", alternative_name),
            RankingError::AlternativeNotFound(id) => {
                domain.with_detail("alternative_id", id.to_string())
            }
            _ => domain,
        }
    }
}
