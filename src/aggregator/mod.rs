//! Aggregation layer.
//!
//! Folds the sink outcome of every check into a [`ScanReport`] for the
//! reporters.

pub mod collector;
pub mod summary;

pub use collector::ReportCollector;
pub use summary::{CheckSummary, ScanReport, ScanTotals};
