//! Export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Suggested file name for delimited-text exports
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.file_name.to_ascii_lowercase().ends_with(".csv") {
            return Err(ValidationError::InvalidExportFileName(
                self.file_name.clone(),
            ));
        }
        Ok(())
    }

    /// Path used when an export is requested without naming a file.
    ///
    /// The extension follows the output format, so JSON output of the
    /// default name becomes `topsis-vendor-analysis.json`.
    pub fn output_path(&self, extension: &str) -> PathBuf {
        PathBuf::from(&self.file_name).with_extension(extension)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

fn default_file_name() -> String {
    "topsis-vendor-analysis.csv".to_string()
}
