//! Scan execution and orchestration.
//!
//! This module provides the scanning pipeline, including:
//! - Configuration merging (CLI + config file)
//! - Corpus resolution and signature loading
//! - Dispatch of every signature to the worker pool

pub mod config;
mod scanner;

pub use config::EffectiveConfig;
pub use scanner::{run_scan, run_scan_with, run_scan_with_config};
