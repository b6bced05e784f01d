//! Bounded worker pool that fans signatures out to concurrent searches.

use std::path::{Path, PathBuf};
use std::thread;

use tracing::{debug, info};

use super::message::CheckOutput;
use super::worker::Worker;
use crate::aggregator::{ReportCollector, ScanReport};
use crate::search::Searcher;
use crate::signature::SignatureTable;
use crate::sink::ResultSink;

/// Immutable settings shared by every worker for the length of a run.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Number of worker threads. Values below one are treated as one.
    pub max_workers: usize,
    /// File or folder every pattern is searched against.
    pub target: PathBuf,
    /// Exclude globs forwarded to each search.
    pub excludes: Vec<String>,
}

impl DispatchConfig {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            max_workers: crate::config::DEFAULT_MAX_WORKERS,
            target: target.into(),
            excludes: Vec::new(),
        }
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    pub fn with_excludes(mut self, excludes: Vec<String>) -> Self {
        self.excludes = excludes;
        self
    }
}

/// Runs every check of every signature against one target.
///
/// Protocol:
/// 1. `max_workers` scoped threads block on a shared queue of signature paths.
/// 2. A producer pushes each path once, in table order, then closes the queue.
/// 3. Workers send one [`CheckOutput`] per check over a results channel.
/// 4. The calling thread drains that channel into the sink until every
///    worker has exited, then joins them all.
///
/// No ordering holds across signatures. A signature is always processed
/// whole by a single worker.
pub struct DispatchEngine<S, K> {
    searcher: S,
    sink: K,
    config: DispatchConfig,
}

impl<S: Searcher, K: ResultSink> DispatchEngine<S, K> {
    pub fn new(searcher: S, sink: K, config: DispatchConfig) -> Self {
        Self {
            searcher,
            sink,
            config,
        }
    }

    /// Dispatch every signature in `table` and wait for all results.
    pub fn run(&self, table: &SignatureTable) -> ScanReport {
        let workers = self.config.max_workers.max(1);
        let mut collector = ReportCollector::new(self.config.target.display().to_string());

        let (work_tx, work_rx) = crossbeam_channel::bounded::<&Path>(workers);
        let (result_tx, result_rx) = crossbeam_channel::unbounded::<CheckOutput>();

        thread::scope(|scope| {
            for id in 1..=workers {
                debug!(worker = id, target = %self.config.target.display(), "Launching worker");
                let worker = Worker::new(id, &self.searcher, table, &self.config);
                let queue = work_rx.clone();
                let results = result_tx.clone();
                scope.spawn(move || worker.run(queue, results));
            }
            // Workers hold the only remaining handles from here on.
            drop(work_rx);
            drop(result_tx);

            scope.spawn(move || {
                for signature in table.paths() {
                    if work_tx.send(signature.as_path()).is_err() {
                        break;
                    }
                }
            });

            for output in result_rx.iter() {
                let outcome = self.sink.persist(&output);
                collector.add(&output, outcome);
            }
        });

        let report = collector.finish(table.len());
        info!(
            signatures = report.totals.signatures,
            checks = report.totals.checks,
            written = report.totals.written,
            failed = report.totals.failed,
            "Dispatch complete"
        );
        report
    }
}
