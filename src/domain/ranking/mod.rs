//! Ranking module - the inputs of a vendor comparison.
//!
//! - `Criterion` / `CriteriaSet` - fixed weighted yes/no questions
//! - `Alternative` / `Response` - vendor candidates and their answers
//! - `RankingSession` - add/remove/rename/answer, completion and run state
//! - `RankingRecord` - persisted snapshot of a completed run
//! - `RankingError` - validation and session errors

mod alternative;
mod criterion;
mod errors;
mod record;
mod response;
mod session;

pub use alternative::{palette_color, Alternative, ALTERNATIVE_COLORS};
pub use criterion::{CriteriaSet, Criterion};
pub use errors::RankingError;
pub use record::RankingRecord;
pub use response::Response;
pub use session::{AnalysisStep, RankingSession};
