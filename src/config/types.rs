//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::search::{DEFAULT_GREP_BIN, DEFAULT_LINES_AFTER, DEFAULT_LINES_BEFORE};

/// Default number of concurrent workers.
pub const DEFAULT_MAX_WORKERS: usize = 20;

/// Main configuration structure for sigscan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search primitive settings.
    pub search: SearchConfig,
    /// Worker pool settings.
    pub workers: WorkerConfig,
    /// Glob patterns passed to the search primitive as `--exclude`.
    pub exclude: Vec<String>,
}

/// Settings for the external search binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search binary to invoke.
    pub grep_bin: String,
    /// Context lines printed before each match.
    pub lines_before: u32,
    /// Context lines printed after each match.
    pub lines_after: u32,
    /// Ask the search binary for highlighted output.
    pub color: bool,
    /// Kill a search that runs longer than this many seconds.
    pub timeout_secs: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            grep_bin: DEFAULT_GREP_BIN.to_string(),
            lines_before: DEFAULT_LINES_BEFORE,
            lines_after: DEFAULT_LINES_AFTER,
            color: true,
            timeout_secs: None,
        }
    }
}

/// Worker pool configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    pub max_workers: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }
}
