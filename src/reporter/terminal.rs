use crate::aggregator::{CheckSummary, ScanReport};
use crate::reporter::Reporter;
use crate::sink::SinkOutcome;
use colored::Colorize;

pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn outcome_label(&self, outcome: &SinkOutcome) -> colored::ColoredString {
        match outcome {
            SinkOutcome::Written { .. } => "[WROTE]".green().bold(),
            SinkOutcome::Discarded => "[NO OUTFILE]".dimmed(),
            SinkOutcome::Failed { .. } => "[FAILED]".red().bold(),
        }
    }

    fn format_check(&self, check: &CheckSummary) -> String {
        let id = if check.signature_id.is_empty() {
            "-"
        } else {
            check.signature_id.as_str()
        };
        let origin = format!("{}#{}", check.signature.display(), check.check_index);
        let detail = match &check.outcome {
            SinkOutcome::Written { path } => format!("-> {}", path.display()),
            SinkOutcome::Discarded => String::new(),
            SinkOutcome::Failed { path, reason } => format!("-> {} ({})", path.display(), reason),
        };
        format!(
            "  {} {} {} {} {}\n",
            self.outcome_label(&check.outcome),
            id.bold(),
            origin.dimmed(),
            detail,
            format!("[{} search(es)]", check.searches).dimmed()
        )
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, report: &ScanReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Scanned".bold(),
            report.target.cyan()
        ));

        for check in &report.checks {
            // Discarded checks only show up in verbose mode
            if matches!(check.outcome, SinkOutcome::Discarded) && !self.verbose {
                continue;
            }
            output.push_str(&self.format_check(check));
        }

        let totals = &report.totals;
        output.push_str(&format!(
            "\nSummary: {} signature(s), {} check(s), {} search(es) | {} written, {} without outfile, {} failed\n",
            totals.signatures,
            totals.checks,
            totals.searches,
            totals.written.to_string().green(),
            totals.discarded,
            if totals.failed > 0 {
                totals.failed.to_string().red().bold()
            } else {
                totals.failed.to_string().normal()
            }
        ));

        output
    }
}
