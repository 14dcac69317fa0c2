//! Configuration management for vigil.
//!
//! An optional `vigil.yaml` in the working directory tunes the report
//! defaults; every field has a default, so no file is required at all.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::DEFAULT_UNKNOWN_NAME;
use crate::error::{Error, Result};

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "vigil.yaml";

/// Default number of records per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration file structure for vigil
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VigilConfig {
    /// Records per report page
    #[serde(rename = "page-size")]
    pub page_size: usize,

    /// Path to a JSONL data file; absent means the built-in sample data
    #[serde(rename = "data-file")]
    pub data_file: Option<String>,

    /// Name sentinel marking an unresolved identity
    #[serde(rename = "unknown-name")]
    pub unknown_name: String,
}

impl VigilConfig {
    /// Load configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the file exists but cannot be parsed,
    /// or when it specifies a zero page size.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `vigil.yaml` from the given directory, falling back to defaults
    /// when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for a present-but-invalid file. A missing
    /// file is not an error.
    pub async fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path).await
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config("page-size must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl Default for VigilConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            data_file: None,
            unknown_name: DEFAULT_UNKNOWN_NAME.to_string(),
        }
    }
}
