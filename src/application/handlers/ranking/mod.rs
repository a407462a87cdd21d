//! Ranking command and query handlers.

mod get_ranking_history;
mod run_ranking;

pub use get_ranking_history::{GetRankingHistoryHandler, GetRankingHistoryQuery};
pub use run_ranking::{RunRankingCommand, RunRankingHandler, RunRankingResult};
