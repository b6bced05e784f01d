//! Search primitive boundary.

pub mod grep;
pub mod traits;

pub use grep::{DEFAULT_GREP_BIN, DEFAULT_LINES_AFTER, DEFAULT_LINES_BEFORE, GrepSearcher};
pub use traits::Searcher;
