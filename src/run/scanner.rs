//! Core scanning pipeline: resolve, load, dispatch.

use std::fs;

use tracing::{debug, info, warn};

use super::config::EffectiveConfig;
use crate::aggregator::ScanReport;
use crate::cli::Cli;
use crate::config::Config;
use crate::discovery::CorpusResolver;
use crate::engine::{DispatchConfig, DispatchEngine};
use crate::error::{Result, ScanError};
use crate::search::Searcher;
use crate::signature::{SignatureLoader, find_signature_files};
use crate::sink::{FileSink, ResultSink};

/// Run a scan using CLI settings.
///
/// Configuration comes from `--config` when given, otherwise from a
/// `.sigscan.*` file in the working directory or the global config.
pub fn run_scan(cli: &Cli) -> Result<ScanReport> {
    let cwd = std::env::current_dir().ok();
    let config = Config::load_explicit_or_discover(cli.config.as_deref(), cwd.as_deref())?;
    let effective = EffectiveConfig::from_cli_and_config(cli, &config)?;
    run_scan_with_config(&effective)
}

/// Run a scan with the real grep searcher and file sink.
pub fn run_scan_with_config(effective: &EffectiveConfig) -> Result<ScanReport> {
    run_scan_with(effective, effective.searcher(), FileSink::new())
}

/// Run a scan with a caller-supplied searcher and sink.
pub fn run_scan_with<S, K>(effective: &EffectiveConfig, searcher: S, sink: K) -> Result<ScanReport>
where
    S: Searcher,
    K: ResultSink,
{
    if fs::metadata(&effective.target).is_err() {
        return Err(ScanError::TargetNotFound(effective.target.clone()));
    }

    let corpus = CorpusResolver::new().resolve(&effective.signatures)?;
    info!(files = corpus.len(), "Total number of files");

    let signature_files = find_signature_files(corpus.files());
    info!(signatures = signature_files.len(), "Number of signature files");

    let table = SignatureLoader::load_all(&signature_files)?;
    debug!(checks = table.check_count(), "Signature table ready");

    for (outfile, count) in table.outfile_conflicts() {
        warn!(
            outfile = %outfile.display(),
            checks = count,
            "Outfile declared by several checks; the last one to finish wins"
        );
    }

    let dispatch = DispatchConfig::new(effective.target.clone())
        .with_max_workers(effective.max_workers)
        .with_excludes(effective.excludes.clone());
    let engine = DispatchEngine::new(searcher, sink, dispatch);

    Ok(engine.run(&table))
}
