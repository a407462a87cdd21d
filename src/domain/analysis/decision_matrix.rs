//! Decision Matrix - m alternatives × n criteria of raw 0/1 scores.

use serde::{Deserialize, Serialize};

use crate::domain::ranking::{Alternative, RankingError};

/// Row-major matrix of f64 values.
pub type Matrix = Vec<Vec<f64>>;

/// Checks every alternative has exactly `criteria_count` answered responses.
///
/// Fails on the first offending alternative, in insertion order.
pub fn validate_responses(
    alternatives: &[Alternative],
    criteria_count: usize,
) -> Result<(), RankingError> {
    for alt in alternatives {
        if alt.responses.len() != criteria_count {
            return Err(RankingError::ResponseCountMismatch {
                alternative_name: alt.name.clone(),
                expected: criteria_count,
                actual: alt.responses.len(),
            });
        }
        if let Some(criterion_index) = alt.first_unanswered() {
            return Err(RankingError::IncompleteResponses {
                alternative_id: alt.id,
                alternative_name: alt.name.clone(),
                criterion_index,
            });
        }
    }
    Ok(())
}

/// The raw decision matrix: row i is alternative i, column j is criterion j.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    rows: Matrix,
    criteria_count: usize,
}

impl DecisionMatrix {
    /// Builds the matrix from fully answered alternatives.
    ///
    /// Validation runs first; nothing is built if any response is missing.
    pub fn build(
        alternatives: &[Alternative],
        criteria_count: usize,
    ) -> Result<Self, RankingError> {
        validate_responses(alternatives, criteria_count)?;

        let rows = alternatives
            .iter()
            .map(|alt| {
                alt.responses
                    .iter()
                    .map(|r| r.score().map(f64::from).unwrap_or(0.0))
                    .collect()
            })
            .collect();

        Ok(Self {
            rows,
            criteria_count,
        })
    }

    /// Creates a matrix directly from rows; every row must have the same length.
    pub fn from_rows(rows: Matrix) -> Result<Self, RankingError> {
        let criteria_count = rows.first().map(Vec::len).unwrap_or(0);
        if let Some(row) = rows.iter().find(|row| row.len() != criteria_count) {
            return Err(RankingError::DimensionMismatch {
                stage: "decision_matrix",
                expected: criteria_count,
                actual: row.len(),
            });
        }
        Ok(Self {
            rows,
            criteria_count,
        })
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of alternatives (m).
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of criteria (n).
    pub fn criteria_count(&self) -> usize {
        self.criteria_count
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of criterion `j` across all alternatives; `None` past the last column.
    pub fn column(&self, j: usize) -> Option<Vec<f64>> {
        if j >= self.criteria_count {
            return None;
        }
        Some(self.rows.iter().map(|row| row[j]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ranking::Response;

    fn alt(name: &str, raw: &[i8]) -> Alternative {
        Alternative::from_raw(name, raw, "#000000").unwrap()
    }

    #[test]
    fn build_preserves_insertion_and_criterion_order() {
        let alternatives = vec![alt("X", &[1, 0, 1]), alt("Y", &[0, 0, 1])];
        let matrix = DecisionMatrix::build(&alternatives, 3).unwrap();

        assert_eq!(matrix.alternative_count(), 2);
        assert_eq!(matrix.criteria_count(), 3);
        assert_eq!(matrix.rows()[0], vec![1.0, 0.0, 1.0]);
        assert_eq!(matrix.rows()[1], vec![0.0, 0.0, 1.0]);
        assert_eq!(matrix.column(2), Some(vec![1.0, 1.0]));
        assert_eq!(matrix.column(3), None);
    }

    #[test]
    fn build_fails_on_first_incomplete_alternative() {
        let alternatives = vec![alt("X", &[1, 1]), alt("Y", &[1, -1]), alt("Z", &[-1, -1])];
        let err = DecisionMatrix::build(&alternatives, 2).unwrap_err();

        match err {
            RankingError::IncompleteResponses {
                alternative_id,
                alternative_name,
                criterion_index,
            } => {
                assert_eq!(alternative_id, alternatives[1].id);
                assert_eq!(alternative_name, "Y");
                assert_eq!(criterion_index, 1);
            }
            other => panic!("Expected IncompleteResponses, got {:?}", other),
        }
    }

    #[test]
    fn build_rejects_wrong_response_count() {
        let alternatives = vec![Alternative::with_responses(
            "Short",
            vec![Response::Yes],
            "#000000",
        )];
        let err = DecisionMatrix::build(&alternatives, 2).unwrap_err();
        assert!(matches!(
            err,
            RankingError::ResponseCountMismatch { expected: 2, actual: 1, .. }
        ));
    }

    #[test]
    fn build_of_no_alternatives_is_empty() {
        let matrix = DecisionMatrix::build(&[], 8).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.criteria_count(), 8);
    }

    #[test]
    fn from_rows_infers_criteria_count() {
        let matrix = DecisionMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        assert_eq!(matrix.criteria_count(), 2);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = DecisionMatrix::from_rows(vec![vec![1.0, 1.0], vec![1.0]]).unwrap_err();
        assert_eq!(
            err,
            RankingError::DimensionMismatch {
                stage: "decision_matrix",
                expected: 2,
                actual: 1,
            }
        );
    }
}
