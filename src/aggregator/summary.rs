//! Report types for a finished scan.

use serde::Serialize;
use std::path::PathBuf;

use crate::sink::SinkOutcome;

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    pub signature: PathBuf,
    pub signature_id: String,
    pub check_index: usize,
    pub outfile: Option<PathBuf>,
    pub searches: usize,
    pub bytes: usize,
    #[serde(flatten)]
    pub outcome: SinkOutcome,
}

/// Run-wide counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanTotals {
    pub signatures: usize,
    pub checks: usize,
    pub searches: usize,
    pub written: usize,
    pub discarded: usize,
    pub failed: usize,
}

impl ScanTotals {
    pub fn from_checks(signatures: usize, checks: &[CheckSummary]) -> Self {
        let mut totals = Self {
            signatures,
            checks: checks.len(),
            ..Default::default()
        };
        for check in checks {
            totals.searches += check.searches;
            match check.outcome {
                SinkOutcome::Written { .. } => totals.written += 1,
                SinkOutcome::Discarded => totals.discarded += 1,
                SinkOutcome::Failed { .. } => totals.failed += 1,
            }
        }
        totals
    }
}

/// Aggregated result of one scan.
///
/// `checks` is ordered by signature path, then check index, regardless of
/// the order in which workers finished.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub version: String,
    pub scanned_at: String,
    pub target: String,
    pub totals: ScanTotals,
    pub checks: Vec<CheckSummary>,
}
