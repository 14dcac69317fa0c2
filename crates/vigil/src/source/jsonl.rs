//! JSONL record loading.
//!
//! One serialized [`AttendanceRecord`] per line. Loading is resilient: a
//! malformed or invalid line is skipped with a warning instead of failing
//! the whole file, so one corrupt export does not take the report down.
//!
//! [`AttendanceRecord`]: crate::domain::AttendanceRecord

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::RecordSource;
use crate::domain::{AttendanceRecord, PersonId};
use crate::error::{Error, Result};

/// Warnings that can occur during JSONL file loading.
///
/// These are non-fatal: the load continues and the problematic line is
/// skipped. Callers should surface them to the user, since they indicate
/// data-quality problems that may need manual attention.
#[derive(Debug, Clone)]
pub enum LoadWarning {
    /// A line that could not be parsed as an attendance record.
    ///
    /// **Effect**: the line is skipped entirely.
    MalformedLine {
        /// 1-based line number in the data file.
        line_number: usize,
        /// Parser error message.
        error: String,
    },

    /// A parsed record that failed invariant validation.
    ///
    /// **Effect**: the record is skipped and not loaded.
    InvalidRecord {
        /// ID of the offending record.
        person_id: PersonId,
        /// 1-based line number in the data file.
        line_number: usize,
        /// Description of the violated invariant.
        error: String,
    },
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedLine { line_number, error } => {
                write!(f, "skipped malformed line {line_number}: {error}")
            }
            Self::InvalidRecord {
                person_id,
                line_number,
                error,
            } => {
                write!(
                    f,
                    "skipped invalid record {person_id} at line {line_number}: {error}"
                )
            }
        }
    }
}

/// Record source backed by a JSONL file.
#[derive(Debug, Clone)]
pub struct JsonlSource {
    path: PathBuf,
}

impl JsonlSource {
    /// Create a source reading from the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for JsonlSource {
    async fn load(&self) -> Result<(Vec<AttendanceRecord>, Vec<LoadWarning>)> {
        load_from_jsonl(&self.path).await
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Load attendance records from a JSONL file.
///
/// Blank lines are ignored. Malformed lines and records failing
/// [`AttendanceRecord::validate`] are skipped and reported as warnings.
///
/// # Errors
///
/// Returns [`Error::Source`] when the file itself cannot be read.
pub async fn load_from_jsonl(path: &Path) -> Result<(Vec<AttendanceRecord>, Vec<LoadWarning>)> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::Source(format!("cannot read {}: {e}", path.display())))?;

    let mut records = Vec::new();
    let mut warnings = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let record: AttendanceRecord = match serde_json::from_str(line) {
            Ok(record) => record,
            Err(e) => {
                warnings.push(LoadWarning::MalformedLine {
                    line_number,
                    error: e.to_string(),
                });
                continue;
            }
        };

        if let Err(error) = record.validate() {
            warnings.push(LoadWarning::InvalidRecord {
                person_id: record.person_id.clone(),
                line_number,
                error,
            });
            continue;
        }

        records.push(record);
    }

    tracing::debug!(
        path = %path.display(),
        loaded = records.len(),
        skipped = warnings.len(),
        "loaded records from JSONL"
    );

    Ok((records, warnings))
}
