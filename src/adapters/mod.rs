//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Ranking record stores (in-memory, JSON file)
//! - `document` - Session documents read from JSON or YAML files

pub mod document;
pub mod storage;

pub use document::{DocumentError, DocumentFormat, SessionDocument};
pub use storage::{FileRecordStore, InMemoryRecordStore, DEFAULT_RECORD_FILE};
