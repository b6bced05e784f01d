//! Effective configuration after merging CLI and config file.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::discovery::split_list;
use crate::error::{Result, ScanError};
use crate::search::GrepSearcher;

/// Effective scan configuration after merging CLI and config file.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveConfig {
    pub signatures: String,
    pub target: PathBuf,
    pub excludes: Vec<String>,
    pub max_workers: usize,
    pub grep_bin: String,
    pub lines_before: u32,
    pub lines_after: u32,
    pub color: bool,
    pub timeout: Option<Duration>,
    pub format: OutputFormat,
    pub verbose: bool,
}

impl EffectiveConfig {
    /// Merge CLI options with config file settings.
    ///
    /// - Scalar options: CLI takes precedence, fallback to config
    /// - Exclude list: CLI replaces the config list when given
    /// - Colour: `--no-color` can only turn it off
    ///
    /// Signatures and target come from the CLI only and are required.
    pub fn from_cli_and_config(cli: &Cli, config: &Config) -> Result<Self> {
        let target = cli
            .target
            .clone()
            .filter(|t| !t.as_os_str().is_empty())
            .ok_or(ScanError::MissingTarget)?;

        let signatures = cli
            .signatures
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ScanError::MissingSignatures)?
            .to_string();

        let excludes = match cli.exclude.as_deref() {
            Some(list) => split_list(list).map(str::to_string).collect(),
            None => config.exclude.clone(),
        };

        let max_workers = cli.max_workers.unwrap_or(config.workers.max_workers);
        if max_workers == 0 {
            return Err(ScanError::InvalidConfig(
                "max_workers must be at least 1".to_string(),
            ));
        }

        let grep_bin = cli
            .grep_bin
            .clone()
            .unwrap_or_else(|| config.search.grep_bin.clone());
        if grep_bin.trim().is_empty() {
            return Err(ScanError::InvalidConfig(
                "grep_bin must not be empty".to_string(),
            ));
        }

        let timeout = cli
            .timeout
            .or(config.search.timeout_secs)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Ok(Self {
            signatures,
            target,
            excludes,
            max_workers,
            grep_bin,
            lines_before: config.search.lines_before,
            lines_after: config.search.lines_after,
            color: config.search.color && !cli.no_color,
            timeout,
            format: cli.format,
            verbose: cli.verbose,
        })
    }

    /// Build the search primitive described by this configuration.
    pub fn searcher(&self) -> GrepSearcher {
        GrepSearcher::new(&self.grep_bin)
            .with_context(self.lines_before, self.lines_after)
            .with_color(self.color)
            .with_timeout(self.timeout)
    }
}
