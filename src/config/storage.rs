//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where goals, activities and the pillar catalog live on disk
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory holding `goals/` and `activities/`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// YAML pillar catalog; breakdowns are empty without one
    pub pillar_catalog: Option<PathBuf>,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        if matches!(&self.pillar_catalog, Some(path) if path.as_os_str().is_empty()) {
            return Err(ValidationError::MissingRequired("storage.pillar_catalog"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            pillar_catalog: None,
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}
