//! Analysis Module - Pure domain services for vendor ranking.
//!
//! This module contains stateless functions that operate on domain objects
//! to perform the TOPSIS multi-criteria ranking.
//!
//! # Components
//!
//! - `DecisionMatrix` - Validated m×n matrix of raw 0/1 scores
//! - `TopsisAnalyzer` - Normalization, weighting, ideal solutions, separation, closeness
//! - `Ranker` - Stable sort by closeness and 1-based rank assignment
//! - `export` - Delimited-text export and chart projection
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. Logging of intermediate
//! stages happens in the application layer, not here.

mod decision_matrix;
mod export;
mod ranker;
mod topsis_analyzer;

// Re-export all public types
pub use decision_matrix::{validate_responses, DecisionMatrix, Matrix};
pub use export::{chart_entries, export_as_delimited_text, export_header, ChartEntry, DELIMITER};
pub use ranker::{evaluate_ranking, run_ranking, Ranker, RankingReport, RankingResult};
pub use topsis_analyzer::{
    IdealSolutions, SeparationMeasure, TopsisAnalyzer, TopsisEvaluation, NEUTRAL_CLOSENESS,
};
