//! Error types for vigil operations.

use std::io;
use thiserror::Error;

/// The error type for vigil operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Record source error (the data file could not be used at all).
    #[error("Source error: {0}")]
    Source(String),

    /// A sort field name that is not part of the record schema.
    #[error("Unknown sort field: '{0}' (expected one of: id, name, type, location, date, time, count, score, last-seen)")]
    UnknownSortField(String),

    /// CSV formatting or writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] vigil_csv::Error),
}

/// A specialized Result type for vigil operations.
pub type Result<T> = std::result::Result<T, Error>;
