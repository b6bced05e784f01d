#[cfg(test)]
pub mod fixtures {
    use std::path::PathBuf;

    use crate::aggregator::{CheckSummary, ScanReport, ScanTotals};
    use crate::sink::SinkOutcome;

    pub fn create_report(checks: Vec<CheckSummary>) -> ScanReport {
        let signatures = {
            let mut sigs: Vec<_> = checks.iter().map(|c| c.signature.clone()).collect();
            sigs.dedup();
            sigs.len()
        };
        ScanReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            scanned_at: "2026-01-25T12:00:00Z".to_string(),
            target: "./src".to_string(),
            totals: ScanTotals::from_checks(signatures, &checks),
            checks,
        }
    }

    pub fn create_check(signature: &str, check_index: usize, outcome: SinkOutcome) -> CheckSummary {
        let outfile = match &outcome {
            SinkOutcome::Written { path } | SinkOutcome::Failed { path, .. } => Some(path.clone()),
            SinkOutcome::Discarded => None,
        };
        CheckSummary {
            signature: PathBuf::from(signature),
            signature_id: signature.trim_end_matches(".yaml").to_uppercase(),
            check_index,
            outfile,
            searches: 1,
            bytes: 42,
            outcome,
        }
    }

    pub fn written(signature: &str, check_index: usize, path: &str) -> CheckSummary {
        create_check(
            signature,
            check_index,
            SinkOutcome::Written {
                path: PathBuf::from(path),
            },
        )
    }

    pub fn discarded(signature: &str, check_index: usize) -> CheckSummary {
        create_check(signature, check_index, SinkOutcome::Discarded)
    }

    pub fn failed(signature: &str, check_index: usize, path: &str, reason: &str) -> CheckSummary {
        create_check(
            signature,
            check_index,
            SinkOutcome::Failed {
                path: PathBuf::from(path),
                reason: reason.to_string(),
            },
        )
    }
}
