//! Application context for CLI command execution.
//!
//! The `App` struct wires configuration and a record source into a loaded
//! session: records are fetched once, up front, and are read-only from
//! then on. Commands only ever see the loaded slice.

use std::path::Path;

use crate::config::VigilConfig;
use crate::domain::AttendanceRecord;
use crate::error::Result;
use crate::source::{JsonlSource, LoadWarning, RecordSource, SampleSource};

/// Application context for CLI operations.
pub struct App {
    config: VigilConfig,
    records: Vec<AttendanceRecord>,
    warnings: Vec<LoadWarning>,
    source_description: String,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("source", &self.source_description)
            .field("records", &self.records.len())
            .field("warnings", &self.warnings.len())
            .finish()
    }
}

impl App {
    /// Create an App from the working directory and an optional data-file
    /// override.
    ///
    /// Configuration comes from `vigil.yaml` in `working_dir` when present.
    /// The record source is, in order of precedence: the `--data` override,
    /// the config's `data-file`, the built-in sample data. Load warnings
    /// are logged here and kept for the `info` command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the data file
    /// cannot be read.
    pub async fn load(working_dir: &Path, data_override: Option<&Path>) -> Result<Self> {
        let config = VigilConfig::load_or_default(working_dir).await?;

        let source: Box<dyn RecordSource> = match data_override {
            Some(path) => Box::new(JsonlSource::new(path)),
            None => match &config.data_file {
                Some(path) => Box::new(JsonlSource::new(working_dir.join(path))),
                None => Box::new(SampleSource),
            },
        };

        let source_description = source.describe();
        let (records, warnings) = source.load().await?;

        for warning in &warnings {
            tracing::warn!(source = %source_description, "{warning}");
        }
        tracing::debug!(
            source = %source_description,
            records = records.len(),
            "session loaded"
        );

        Ok(Self {
            config,
            records,
            warnings,
            source_description,
        })
    }

    /// The loaded record set, in source order.
    #[must_use]
    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    /// Warnings produced while loading the record set.
    #[must_use]
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// Records per report page.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    /// The configured unresolved-identity sentinel.
    #[must_use]
    pub fn unknown_name(&self) -> &str {
        &self.config.unknown_name
    }

    /// Description of where the records came from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source_description
    }
}
