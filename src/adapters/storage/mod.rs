//! Storage Adapters
//!
//! Implementations of the RankingRecordStore port.
//!
//! ## Available Adapters
//!
//! - **FileRecordStore** - Stores records as a JSON array on disk
//! - **InMemoryRecordStore** - Stores records in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileRecordStore, InMemoryRecordStore};
//!
//! // Production: file-based storage
//! let store = FileRecordStore::new("./wedding-gate-analytics.json");
//!
//! // Testing: in-memory storage
//! let store = InMemoryRecordStore::new();
//! ```

mod file_record_store;
mod in_memory_record_store;

pub use file_record_store::{FileRecordStore, DEFAULT_RECORD_FILE};
pub use in_memory_record_store::InMemoryRecordStore;
