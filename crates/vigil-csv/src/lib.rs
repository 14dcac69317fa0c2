//! A small CSV (delimited text) library for vigil reports.
//!
//! This library provides deterministic, byte-stable formatting of CSV
//! fields and rows, and a buffered async writer for delivering a finished
//! document to a file.
//!
//! Formatting (content) and writing (delivery) are deliberately separate:
//! the formatting functions are pure and suitable for golden-file testing,
//! while the writer only moves already-formatted bytes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod format;
pub mod writer;

pub use error::{Error, Result};
pub use format::{format_row, needs_quoting, quote_field};
pub use writer::CsvWriter;
