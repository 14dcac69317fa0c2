//! Error types for vigil-csv operations.

use std::io;
use thiserror::Error;

/// The error type for vigil-csv operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while writing.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized Result type for vigil-csv operations.
pub type Result<T> = std::result::Result<T, Error>;
