use serde::Serialize;
use std::path::PathBuf;

use crate::engine::CheckOutput;

/// What happened to one check's result buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SinkOutcome {
    /// Buffer written to the declared outfile.
    Written { path: PathBuf },
    /// No outfile declared; buffer dropped.
    Discarded,
    /// Write failed; buffer lost.
    Failed { path: PathBuf, reason: String },
}

impl SinkOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Destination for finished check results.
///
/// Persisting never fails the run: problems are reported through
/// [`SinkOutcome::Failed`].
pub trait ResultSink: Send + Sync {
    fn persist(&self, output: &CheckOutput) -> SinkOutcome;
}

impl<K: ResultSink + ?Sized> ResultSink for &K {
    fn persist(&self, output: &CheckOutput) -> SinkOutcome {
        (**self).persist(output)
    }
}
