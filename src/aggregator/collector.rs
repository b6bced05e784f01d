//! Collector folding sink outcomes into a [`ScanReport`].

use chrono::Utc;

use super::summary::{CheckSummary, ScanReport, ScanTotals};
use crate::engine::CheckOutput;
use crate::sink::SinkOutcome;

/// Accumulates per-check outcomes as workers report them.
#[derive(Debug)]
pub struct ReportCollector {
    target: String,
    scanned_at: String,
    checks: Vec<CheckSummary>,
}

impl ReportCollector {
    /// Start collecting for a scan of `target`. The start time is captured now.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            scanned_at: Utc::now().to_rfc3339(),
            checks: Vec::new(),
        }
    }

    /// Record what the sink did with one check's output.
    pub fn add(&mut self, output: &CheckOutput, outcome: SinkOutcome) {
        self.checks.push(CheckSummary {
            signature: output.signature.clone(),
            signature_id: output.signature_id.clone(),
            check_index: output.check_index,
            outfile: output.outfile.clone(),
            searches: output.searches,
            bytes: output.content.len(),
            outcome,
        });
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Sort collected checks and produce the report.
    pub fn finish(mut self, signatures: usize) -> ScanReport {
        self.checks.sort_by(|a, b| {
            a.signature
                .cmp(&b.signature)
                .then(a.check_index.cmp(&b.check_index))
        });
        let totals = ScanTotals::from_checks(signatures, &self.checks);
        ScanReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            scanned_at: self.scanned_at,
            target: self.target,
            totals,
            checks: self.checks,
        }
    }
}
