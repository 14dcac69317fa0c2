//! The tabular query engine.
//!
//! A deterministic transformation from an immutable record set and the
//! caller's query state into the paginated slice to display, the aggregate
//! totals, and the export document. Every operation here is a pure function
//! over its inputs: the engine holds no state and never mutates the source
//! records.
//!
//! The intended pipeline is filter -> sort -> paginate, with totals
//! computed from the filtered set and export serializing the ordered set:
//!
//! ```
//! use vigil::domain::{QueryState, RecordCriteria, SortDirection, SortField};
//! use vigil::engine;
//! use vigil::source::sample_records;
//!
//! let records = sample_records();
//! let mut state = QueryState::new();
//! state.toggle_sort(SortField::MatchScore);
//!
//! let matched = engine::apply_filters(&records, state.criteria());
//! let totals = engine::compute_totals(&matched, "unknown");
//! let ordered = match state.sort() {
//!     Some((field, direction)) => engine::apply_sort(matched, field, direction),
//!     None => matched,
//! };
//! let page = engine::paginate(&ordered, state.page(), 10);
//! assert_eq!(totals.total, records.len());
//! assert_eq!(page.total_pages, 1);
//! ```

mod export;
mod filter;
mod page;
mod sort;
mod totals;

pub use export::{export_rows, EXPORT_HEADER};
pub use filter::apply_filters;
pub use page::{paginate, Page};
pub use sort::apply_sort;
pub use totals::{compute_totals, Totals};
