use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug, Default)]
#[command(
    name = "sigscan",
    version,
    about = "Signature-driven code scanner backed by grep",
    long_about = "sigscan loads YAML signature files, each describing checks made of grep patterns, \
                  and runs every check against a target file or folder using a bounded pool of workers."
)]
pub struct Cli {
    /// Files/folders/file-glob patterns containing YAML signature files (comma-separated)
    #[arg(short = 's', long = "signatures", value_name = "LIST")]
    pub signatures: Option<String>,

    /// File or folder to scan
    #[arg(short = 'f', long = "target", value_name = "PATH")]
    pub target: Option<PathBuf>,

    /// Exclude globs passed to grep (comma-separated, e.g. "*.js,*.min.css")
    #[arg(short, long, value_name = "LIST")]
    pub exclude: Option<String>,

    /// Max number of concurrent workers [default: 20]
    #[arg(
        short = 't',
        long = "max-workers",
        visible_alias = "mt",
        value_name = "N",
        value_parser = parse_worker_count
    )]
    pub max_workers: Option<usize>,

    /// Search binary to invoke [default: grep]
    #[arg(short = 'g', long = "grep-bin", visible_alias = "gb", value_name = "PATH")]
    pub grep_bin: Option<String>,

    /// Kill any single search running longer than this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Disable highlighted grep output in outfiles
    #[arg(long)]
    pub no_color: bool,

    /// Summary format
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Configuration file (defaults to .sigscan.yaml in the working directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show commands as executed and soft errors
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_worker_count(value: &str) -> Result<usize, String> {
    let count: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if count == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(count)
}
