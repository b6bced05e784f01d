//! Per-thread signature processing.

use std::path::Path;

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, error};

use super::dispatch::DispatchConfig;
use super::message::CheckOutput;
use crate::search::Searcher;
use crate::signature::{Check, SignatureDefinition, SignatureTable};

/// Prefix of the notes block appended after search output.
pub const NOTES_MARKER: &str = "[!] ";

/// One worker of the dispatch pool.
///
/// A worker claims whole signatures from the queue and runs their checks
/// and patterns strictly in declared order.
pub struct Worker<'a, S: ?Sized> {
    id: usize,
    searcher: &'a S,
    table: &'a SignatureTable,
    config: &'a DispatchConfig,
}

impl<'a, S: Searcher + ?Sized> Worker<'a, S> {
    pub fn new(
        id: usize,
        searcher: &'a S,
        table: &'a SignatureTable,
        config: &'a DispatchConfig,
    ) -> Self {
        Self {
            id,
            searcher,
            table,
            config,
        }
    }

    /// Pull signatures until the queue is closed and drained.
    pub fn run(&self, queue: Receiver<&'a Path>, results: Sender<CheckOutput>) {
        for signature in queue.iter() {
            let Some(definition) = self.table.get(signature) else {
                error!(
                    worker = self.id,
                    signature = %signature.display(),
                    "Signature missing from table"
                );
                continue;
            };

            debug!(
                worker = self.id,
                signature = %signature.display(),
                target = %self.config.target.display(),
                "Testing signature"
            );

            for (index, check) in definition.checks.iter().enumerate() {
                let output = self.run_check(signature, definition, index, check);
                if results.send(output).is_err() {
                    // Coordinator is gone; nothing left to report to.
                    return;
                }
            }
        }
        debug!(worker = self.id, "Worker finished");
    }

    /// Run every pattern of `check` and build its result buffer.
    pub fn run_check(
        &self,
        signature: &Path,
        definition: &SignatureDefinition,
        index: usize,
        check: &Check,
    ) -> CheckOutput {
        let mut content = String::new();
        for pattern in &check.regex {
            content.push_str(
                &self
                    .searcher
                    .search(pattern, &self.config.target, &self.config.excludes),
            );
            content.push('\n');
        }

        if let Some(notes) = check.notes() {
            content.push('\n');
            content.push_str(NOTES_MARKER);
            content.push_str(notes);
        }

        CheckOutput {
            signature: signature.to_path_buf(),
            signature_id: definition.id.clone(),
            check_index: index,
            outfile: check.output_path().map(Path::to_path_buf),
            searches: check.regex.len(),
            content,
        }
    }
}
