//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `ranking` - Criteria, alternatives and the ranking session
//! - `analysis` - Pure TOPSIS ranking and export functions

pub mod analysis;
pub mod foundation;
pub mod ranking;
