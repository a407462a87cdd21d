//! Ranking record storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where completed rankings are recorded
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// JSON file used by the file backend
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

/// Record store implementation
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    #[default]
    File,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File && self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.path"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from(crate::adapters::storage::DEFAULT_RECORD_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::File);
        assert_eq!(config.path, PathBuf::from("wedding-gate-analytics.json"));
    }

    #[test]
    fn test_file_backend_requires_path() {
        let config = StorageConfig {
            backend: StorageBackend::File,
            path: PathBuf::new(),
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("storage.path"))
        );
    }

    #[test]
    fn test_memory_backend_ignores_path() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            path: PathBuf::new(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_backend_deserialization() {
        let config: StorageConfig =
            serde_json::from_str(r#"{"backend": "memory", "path": "runs.json"}"#).unwrap();
        assert_eq!(config.backend, StorageBackend::Memory);
        assert_eq!(config.path, PathBuf::from("runs.json"));
    }
}
