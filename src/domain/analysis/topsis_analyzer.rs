//! TOPSIS Analyzer - normalization, weighting, ideal solutions, separation and closeness.

use serde::{Deserialize, Serialize};

use crate::domain::ranking::{CriteriaSet, RankingError};

use super::{DecisionMatrix, Matrix};

/// Closeness assigned when an alternative's total separation is zero or not finite.
pub const NEUTRAL_CLOSENESS: f64 = 0.5;

/// Ideal and negative-ideal reference vectors, one entry per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealSolutions {
    pub ideal: Vec<f64>,
    pub negative_ideal: Vec<f64>,
}

/// Euclidean distances of one alternative to both reference vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeparationMeasure {
    pub distance_to_ideal: f64,
    pub distance_to_negative_ideal: f64,
}

impl SeparationMeasure {
    /// Sum of both distances.
    pub fn total(&self) -> f64 {
        self.distance_to_ideal + self.distance_to_negative_ideal
    }
}

/// Every intermediate stage of one TOPSIS evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisEvaluation {
    pub normalized: Matrix,
    pub weighted: Matrix,
    pub ideal_solutions: IdealSolutions,
    pub separation: Vec<SeparationMeasure>,
    /// Closeness per alternative, in matrix row order.
    pub closeness: Vec<f64>,
}

/// TOPSIS computation functions.
pub struct TopsisAnalyzer;

impl TopsisAnalyzer {
    /// Runs every stage over a decision matrix.
    ///
    /// Fails if the matrix width differs from the number of criteria.
    pub fn evaluate(
        matrix: &DecisionMatrix,
        criteria: &CriteriaSet,
    ) -> Result<TopsisEvaluation, RankingError> {
        if !matrix.is_empty() && matrix.criteria_count() != criteria.len() {
            return Err(RankingError::DimensionMismatch {
                stage: "criteria",
                expected: criteria.len(),
                actual: matrix.criteria_count(),
            });
        }

        let normalized = Self::normalize(matrix);
        let weighted = Self::weight(&normalized, criteria);
        let ideal_solutions = Self::ideal_solutions(&weighted, criteria);
        let separation = Self::separation_measures(&weighted, &ideal_solutions);
        let closeness = separation.iter().map(Self::closeness).collect();

        Ok(TopsisEvaluation {
            normalized,
            weighted,
            ideal_solutions,
            separation,
            closeness,
        })
    }

    /// Vector-normalizes each criterion column.
    ///
    /// # Algorithm
    /// `normalized[i][j] = matrix[i][j] / sqrt(Σ_i matrix[i][j]²)`
    ///
    /// # Edge Cases
    /// - Column of all zeros: every cell in that column is 0
    /// - Empty matrix: returns an empty matrix
    pub fn normalize(matrix: &DecisionMatrix) -> Matrix {
        let denominators: Vec<f64> = (0..matrix.criteria_count())
            .map(|j| {
                matrix
                    .rows()
                    .iter()
                    .map(|row| row[j].powi(2))
                    .sum::<f64>()
                    .sqrt()
            })
            .collect();

        matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&denominators)
                    .map(|(&value, &denom)| if denom == 0.0 { 0.0 } else { value / denom })
                    .collect()
            })
            .collect()
    }

    /// Scales each column by its criterion weight. Weights are used as given.
    pub fn weight(normalized: &[Vec<f64>], criteria: &CriteriaSet) -> Matrix {
        let weights = criteria.weights();
        normalized
            .iter()
            .map(|row| row.iter().zip(&weights).map(|(v, w)| v * w).collect())
            .collect()
    }

    /// Derives the ideal and negative-ideal vectors.
    ///
    /// Benefit criteria take the column maximum as ideal and the minimum as
    /// negative ideal; cost criteria take the reverse.
    ///
    /// # Edge Cases
    /// - No alternatives: both vectors are all zeros
    /// - Rows narrower than the criteria: missing cells are ignored
    pub fn ideal_solutions(weighted: &[Vec<f64>], criteria: &CriteriaSet) -> IdealSolutions {
        let mut ideal = Vec::with_capacity(criteria.len());
        let mut negative_ideal = Vec::with_capacity(criteria.len());

        for (j, criterion) in criteria.iter().enumerate() {
            let values: Vec<f64> = weighted
                .iter()
                .filter_map(|row| row.get(j).copied())
                .collect();
            if values.is_empty() {
                ideal.push(0.0);
                negative_ideal.push(0.0);
                continue;
            }

            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);

            if criterion.benefit {
                ideal.push(max);
                negative_ideal.push(min);
            } else {
                ideal.push(min);
                negative_ideal.push(max);
            }
        }

        IdealSolutions {
            ideal,
            negative_ideal,
        }
    }

    /// Computes each alternative's Euclidean distance to both reference vectors.
    ///
    /// A distance that comes out NaN is recorded as 0.
    pub fn separation_measures(
        weighted: &[Vec<f64>],
        solutions: &IdealSolutions,
    ) -> Vec<SeparationMeasure> {
        weighted
            .iter()
            .map(|row| SeparationMeasure {
                distance_to_ideal: Self::distance(row, &solutions.ideal),
                distance_to_negative_ideal: Self::distance(row, &solutions.negative_ideal),
            })
            .collect()
    }

    /// Relative closeness to the ideal solution: `D⁻ / (D⁺ + D⁻)`.
    ///
    /// # Edge Cases
    /// - Total separation zero or not finite: [`NEUTRAL_CLOSENESS`]
    /// - Any other non-finite quotient: 0
    pub fn closeness(measure: &SeparationMeasure) -> f64 {
        let total = measure.total();
        if total == 0.0 || !total.is_finite() {
            return NEUTRAL_CLOSENESS;
        }

        let closeness = measure.distance_to_negative_ideal / total;
        if closeness.is_finite() {
            closeness
        } else {
            0.0
        }
    }

    fn distance(row: &[f64], reference: &[f64]) -> f64 {
        let distance = row
            .iter()
            .zip(reference)
            .map(|(value, target)| (value - target).powi(2))
            .sum::<f64>()
            .sqrt();

        if distance.is_nan() {
            0.0
        } else {
            distance
        }
    }
}
