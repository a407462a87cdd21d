//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `RankingRecordStore` - Append-only store of completed ranking runs

mod ranking_record_store;

pub use ranking_record_store::{RankingRecordStore, RecordStoreError};
