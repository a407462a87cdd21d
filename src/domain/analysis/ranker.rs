//! Ranker - orders alternatives by closeness and assigns ranks.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::{AlternativeId, Percentage};
use crate::domain::ranking::{Alternative, CriteriaSet, RankingError};

use super::{DecisionMatrix, TopsisAnalyzer, TopsisEvaluation};

/// One alternative's outcome of a ranking run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub alternative_id: AlternativeId,
    /// Display name at computation time.
    pub name: String,
    pub closeness: f64,
    pub percentage: Percentage,
    /// 1-based position after sorting by closeness.
    pub rank: usize,
    /// Raw 0/1 responses at computation time.
    pub original_values: Vec<u8>,
    pub color: String,
}

/// Ranked results plus the intermediate evaluation that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    pub results: Vec<RankingResult>,
    pub evaluation: TopsisEvaluation,
}

impl RankingReport {
    /// The rank-1 result, if there are any alternatives.
    pub fn winner(&self) -> Option<&RankingResult> {
        self.results.first()
    }
}

/// Ranking functions.
pub struct Ranker;

impl Ranker {
    /// Builds results from alternatives and their closeness scores.
    ///
    /// Sorting is stable, so equal scores keep insertion order. Ranks are
    /// `index + 1` after sorting. Alternatives are only read.
    ///
    /// Fails unless there is exactly one closeness score per alternative.
    pub fn rank(
        alternatives: &[Alternative],
        closeness: &[f64],
    ) -> Result<Vec<RankingResult>, RankingError> {
        if alternatives.len() != closeness.len() {
            return Err(RankingError::DimensionMismatch {
                stage: "closeness",
                expected: alternatives.len(),
                actual: closeness.len(),
            });
        }

        let mut results: Vec<RankingResult> = alternatives
            .iter()
            .zip(closeness)
            .map(|(alt, &closeness)| RankingResult {
                alternative_id: alt.id,
                name: alt.name.clone(),
                closeness,
                percentage: Percentage::from_fraction(closeness),
                rank: 0,
                original_values: alt.scores(),
                color: alt.color.clone(),
            })
            .collect();

        results.sort_by(|a, b| {
            b.closeness
                .partial_cmp(&a.closeness)
                .unwrap_or(Ordering::Equal)
        });

        for (i, result) in results.iter_mut().enumerate() {
            result.rank = i + 1;
        }

        Ok(results)
    }
}

/// Validates, evaluates and ranks in one synchronous pass.
///
/// Fails before any matrix math if an alternative is incomplete.
pub fn evaluate_ranking(
    alternatives: &[Alternative],
    criteria: &CriteriaSet,
) -> Result<RankingReport, RankingError> {
    let matrix = DecisionMatrix::build(alternatives, criteria.len())?;
    let evaluation = TopsisAnalyzer::evaluate(&matrix, criteria)?;
    let results = Ranker::rank(alternatives, &evaluation.closeness)?;
    Ok(RankingReport {
        results,
        evaluation,
    })
}

/// Ranks alternatives against criteria, returning results in rank order.
pub fn run_ranking(
    alternatives: &[Alternative],
    criteria: &CriteriaSet,
) -> Result<Vec<RankingResult>, RankingError> {
    evaluate_ranking(alternatives, criteria).map(|report| report.results)
}
