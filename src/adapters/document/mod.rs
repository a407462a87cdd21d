//! Document adapters - Reading vendor sessions from disk.
//!
//! - `SessionDocument` - JSON/YAML description of vendors and their answers

mod session_document;

pub use session_document::{AlternativeInput, DocumentError, DocumentFormat, SessionDocument};
