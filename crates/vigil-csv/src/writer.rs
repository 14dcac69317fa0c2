//! CSV writing operations.
//!
//! This module provides async functionality for writing CSV documents
//! with efficient buffering. The writer delivers bytes; all formatting
//! decisions live in [`crate::format`].

use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

use crate::format::format_row;
use crate::Result;

/// Async writer for CSV data.
///
/// `CsvWriter` wraps an async writer and provides buffered writing of CSV
/// rows and whole documents. Each row is formatted by
/// [`format_row`](crate::format::format_row) and therefore carries its own
/// trailing newline.
///
/// # Examples
///
/// ```no_run
/// use vigil_csv::CsvWriter;
/// use tokio::fs::File;
///
/// # async fn example() -> vigil_csv::Result<()> {
/// let file = File::create("report.csv").await?;
/// let mut writer = CsvWriter::new(file);
/// writer.write_row(&["id", "name"]).await?;
/// writer.write_row(&["FP001", "João Silva"]).await?;
/// writer.flush().await?;
/// # Ok(())
/// # }
/// ```
pub struct CsvWriter<W> {
    /// Buffered writer wrapping the underlying async writer.
    writer: BufWriter<W>,
}

impl<W: AsyncWrite + Unpin> CsvWriter<W> {
    /// Creates a new `CsvWriter` wrapping the given async writer.
    ///
    /// The writer is wrapped in a [`BufWriter`] so that many small rows do
    /// not translate into many small system calls.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Creates a new `CsvWriter` with a custom buffer capacity.
    #[must_use]
    pub fn with_capacity(writer: W, capacity: usize) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, writer),
        }
    }

    /// Write a single row of fields.
    ///
    /// Fields are quoted as needed; the row terminator is appended
    /// automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub async fn write_row<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<()> {
        let row = format_row(fields);
        self.writer.write_all(row.as_bytes()).await?;
        Ok(())
    }

    /// Write an already-formatted document verbatim.
    ///
    /// Used when the document content was produced (and possibly golden-file
    /// tested) elsewhere and must reach the output byte-for-byte.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub async fn write_document(&mut self, document: &str) -> Result<()> {
        self.writer.write_all(document.as_bytes()).await?;
        Ok(())
    }

    /// Flush buffered data to the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub async fn flush(&mut self) -> Result<()> {
        self.writer.flush().await?;
        Ok(())
    }

    /// Consumes the writer, returning the underlying buffered writer.
    ///
    /// Note: This does not flush the buffer. Call [`flush`](Self::flush)
    /// before calling this method to ensure all data is written.
    #[must_use]
    pub fn into_inner(self) -> BufWriter<W> {
        self.writer
    }
}
