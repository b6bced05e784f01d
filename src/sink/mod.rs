//! Result persistence.

pub mod file;
pub mod traits;

pub use file::FileSink;
pub use traits::{ResultSink, SinkOutcome};
