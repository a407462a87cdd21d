//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod ranking;

pub use ranking::{
    GetRankingHistoryHandler, GetRankingHistoryQuery, RunRankingCommand, RunRankingHandler,
    RunRankingResult,
};
