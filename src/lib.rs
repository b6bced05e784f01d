pub mod aggregator;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod reporter;
pub mod run;
pub mod search;
pub mod signature;
pub mod sink;

#[cfg(test)]
pub mod test_utils;

pub use aggregator::{CheckSummary, ReportCollector, ScanReport, ScanTotals};
pub use cli::{Cli, OutputFormat};
pub use config::{Config, ConfigError};
pub use discovery::{Corpus, CorpusResolver, DirectoryWalker};
pub use engine::{CheckOutput, DispatchConfig, DispatchEngine};
pub use error::{Result, ScanError};
pub use logging::init_logging;
pub use reporter::{Reporter, json::JsonReporter, terminal::TerminalReporter};
pub use run::{EffectiveConfig, run_scan, run_scan_with, run_scan_with_config};
pub use search::{GrepSearcher, Searcher};
pub use signature::{Check, SignatureDefinition, SignatureLoader, SignatureTable};
pub use sink::{FileSink, ResultSink, SinkOutcome};
