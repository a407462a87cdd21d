//! Session documents - JSON or YAML files describing vendors to rank.
//!
//! ```yaml
//! alternatives:
//!   - name: Rosewood Catering
//!     responses: [1, 1, 0, 1, 1, 0, 1, 1]
//!   - name: Blue Fork
//!     responses: [1, 0, 1, 1, 0, 1, 1, 0]
//! # criteria: optional, defaults to the built-in vendor questions
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::ranking::{palette_color, Alternative, CriteriaSet, RankingSession};

/// Errors raised while reading a session document
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Unsupported document format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("Failed to parse {format} document: {message}")]
    Parse {
        format: DocumentFormat,
        message: String,
    },

    #[error("Invalid response for {alternative}: {source}")]
    InvalidResponse {
        alternative: String,
        #[source]
        source: ValidationError,
    },
}

impl From<DocumentError> for DomainError {
    fn from(err: DocumentError) -> Self {
        let code = match err {
            DocumentError::Io { .. } => ErrorCode::StorageError,
            DocumentError::InvalidResponse { .. } => ErrorCode::OutOfRange,
            _ => ErrorCode::InvalidFormat,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Serialization format of a session document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Infers the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(DocumentError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Yaml => write!(f, "YAML"),
        }
    }
}

/// One vendor entry in a session document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeInput {
    pub name: String,
    /// Sentinel-encoded answers: -1 unanswered, 0 no, 1 yes.
    pub responses: Vec<i8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Parsed contents of a session document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<CriteriaSet>,
    #[serde(default)]
    pub alternatives: Vec<AlternativeInput>,
}

impl SessionDocument {
    /// Parses a document from text in the given format.
    pub fn parse(text: &str, format: DocumentFormat) -> Result<Self, DocumentError> {
        let parsed = match format {
            DocumentFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            DocumentFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| DocumentError::Parse { format, message })
    }

    /// Reads and parses a document, choosing the format by extension.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;
        let text = fs::read_to_string(path)
            .await
            .map_err(|e| DocumentError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Self::parse(&text, format)
    }

    /// Criteria to rank against; the vendor questions when none are given.
    pub fn criteria(&self) -> CriteriaSet {
        self.criteria.clone().unwrap_or_else(CriteriaSet::vendor)
    }

    /// Builds domain alternatives, assigning palette colours where missing.
    ///
    /// Response lengths are not checked here; the ranking run reports
    /// mismatches with the vendor's name.
    pub fn alternatives(&self) -> Result<Vec<Alternative>, DocumentError> {
        self.alternatives
            .iter()
            .enumerate()
            .map(|(i, input)| {
                let color = input
                    .color
                    .clone()
                    .unwrap_or_else(|| palette_color(i).to_string());
                Alternative::from_raw(input.name.clone(), &input.responses, color).map_err(
                    |source| DocumentError::InvalidResponse {
                        alternative: input.name.clone(),
                        source,
                    },
                )
            })
            .collect()
    }

    /// Builds an editable session from the document.
    pub fn into_session(self) -> Result<RankingSession, DomainError> {
        let alternatives = self.alternatives()?;
        Ok(RankingSession::from_alternatives(self.criteria(), alternatives)?)
    }
}
