//! Scan mode handler.

use std::process::ExitCode;

use tracing::{debug, info};

use crate::cli::{Cli, OutputFormat};
use crate::reporter::{Reporter, json::JsonReporter, terminal::TerminalReporter};
use crate::run::run_scan;

/// Exit status for fatal errors.
pub const EXIT_FATAL: u8 = 2;

/// Run normal scan mode.
///
/// Fatal errors print a short diagnostic and exit with [`EXIT_FATAL`]. Soft
/// per-item failures never change the exit status.
///
/// `--no-color` also turns off colour in the summary, even when
/// `CLICOLOR_FORCE` is set.
pub fn run_normal_mode(cli: &Cli) -> ExitCode {
    if cli.no_color {
        colored::control::set_override(false);
    }
    info!(signatures = ?cli.signatures, target = ?cli.target, "Starting scan");
    match run_scan(cli) {
        Ok(report) => {
            let output = match cli.format {
                OutputFormat::Terminal => TerminalReporter::new(cli.verbose).report(&report),
                OutputFormat::Json => JsonReporter::new().report(&report),
            };
            println!("{}", output);

            debug!(
                checks = report.totals.checks,
                written = report.totals.written,
                failed = report.totals.failed,
                "Scan completed"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[-] {}", e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}
