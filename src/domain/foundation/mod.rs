//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the vendor ranking domain.

mod ids;
mod timestamp;
mod percentage;
mod errors;

pub use ids::{AlternativeId, RankingRunId};
pub use timestamp::Timestamp;
pub use percentage::Percentage;
pub use errors::{DomainError, ErrorCode, ValidationError};
