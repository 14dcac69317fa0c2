//! Record sources: where the session's attendance records come from.
//!
//! The engine's contract is independent of how the record sequence is
//! produced; this module provides the seam. Two providers exist:
//!
//! - [`SampleSource`]: the built-in demo dataset, so the CLI works out of
//!   the box with no data file
//! - [`JsonlSource`]: a JSONL file, one serialized [`AttendanceRecord`] per
//!   line, loaded resiliently (bad lines are skipped with warnings rather
//!   than failing the whole load)
//!
//! Records are loaded wholesale at session start and treated as read-only
//! from then on.
//!
//! [`AttendanceRecord`]: crate::domain::AttendanceRecord

mod jsonl;
mod sample;

use async_trait::async_trait;

use crate::domain::AttendanceRecord;
use crate::error::Result;

pub use jsonl::{load_from_jsonl, JsonlSource, LoadWarning};
pub use sample::{sample_records, SampleSource};

/// A provider of the session's record set.
///
/// Implementations must be `Send + Sync` so a boxed source can cross await
/// points in the CLI.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Load the full record set, plus any non-fatal warnings encountered.
    ///
    /// # Errors
    ///
    /// Returns an error only when the source is unusable as a whole (for a
    /// file source: unreadable file). Per-record problems become warnings.
    async fn load(&self) -> Result<(Vec<AttendanceRecord>, Vec<LoadWarning>)>;

    /// Human-readable description of the source, for the `info` command.
    fn describe(&self) -> String;
}
