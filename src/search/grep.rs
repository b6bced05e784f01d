//! `grep` subprocess wrapper.

use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::traits::Searcher;

/// Search binary used when none is configured.
pub const DEFAULT_GREP_BIN: &str = "grep";
/// Context lines shown before each match.
pub const DEFAULT_LINES_BEFORE: u32 = 2;
/// Context lines shown after each match.
pub const DEFAULT_LINES_AFTER: u32 = 2;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Runs one `grep` process per pattern.
///
/// The command line is always a discrete argument vector; nothing passes
/// through a shell. Flags are fixed: extended regex, case-insensitive,
/// recursive, line numbers, context lines and optional `--exclude` globs.
#[derive(Debug, Clone)]
pub struct GrepSearcher {
    grep_bin: PathBuf,
    lines_before: u32,
    lines_after: u32,
    color: bool,
    timeout: Option<Duration>,
}

impl Default for GrepSearcher {
    fn default() -> Self {
        Self::new(DEFAULT_GREP_BIN)
    }
}

impl GrepSearcher {
    pub fn new(grep_bin: impl Into<PathBuf>) -> Self {
        Self {
            grep_bin: grep_bin.into(),
            lines_before: DEFAULT_LINES_BEFORE,
            lines_after: DEFAULT_LINES_AFTER,
            color: true,
            timeout: None,
        }
    }

    /// Set the number of context lines before and after each match.
    pub fn with_context(mut self, before: u32, after: u32) -> Self {
        self.lines_before = before;
        self.lines_after = after;
        self
    }

    /// Toggle `--color=always` / `--color=never`.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Kill searches that outlive `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn grep_bin(&self) -> &Path {
        &self.grep_bin
    }

    /// Build the argument vector for one search.
    pub fn build_args(&self, pattern: &str, target: &Path, excludes: &[String]) -> Vec<OsString> {
        let color = if self.color {
            "--color=always"
        } else {
            "--color=never"
        };
        let mut args: Vec<OsString> = vec![
            color.into(),
            "-E".into(),
            "-i".into(),
            "-r".into(),
            "-n".into(),
            "-A".into(),
            self.lines_after.to_string().into(),
            "-B".into(),
            self.lines_before.to_string().into(),
            "-e".into(),
            pattern.into(),
            target.as_os_str().to_os_string(),
        ];

        for exclude in excludes.iter().filter(|e| !e.is_empty()) {
            args.push("--exclude".into());
            args.push(exclude.into());
        }
        args
    }

    fn command(&self, pattern: &str, target: &Path, excludes: &[String]) -> Command {
        let mut cmd = Command::new(&self.grep_bin);
        cmd.args(self.build_args(pattern, target, excludes))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    fn run_to_completion(&self, mut cmd: Command) -> String {
        match cmd.output() {
            Ok(output) => combine_output(&output.stdout, &String::from_utf8_lossy(&output.stderr)),
            Err(e) => spawn_failure(&self.grep_bin, &e),
        }
    }

    fn run_with_timeout(&self, mut cmd: Command, timeout: Duration) -> String {
        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => return spawn_failure(&self.grep_bin, &e),
        };

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let timed_out = !wait_with_timeout(&mut child, timeout);

        let stdout = stdout.join().unwrap_or_default();
        let mut stderr = String::from_utf8_lossy(&stderr.join().unwrap_or_default()).into_owned();
        if timed_out {
            warn!(bin = %self.grep_bin.display(), timeout_secs = timeout.as_secs(), "Search timed out");
            if !stderr.is_empty() && !stderr.ends_with('\n') {
                stderr.push('\n');
            }
            stderr.push_str(&format!("search timed out after {}s", timeout.as_secs()));
        }
        combine_output(&stdout, &stderr)
    }
}

impl Searcher for GrepSearcher {
    fn search(&self, pattern: &str, target: &Path, excludes: &[String]) -> String {
        debug!(
            bin = %self.grep_bin.display(),
            pattern,
            target = %target.display(),
            "Executing search"
        );
        let cmd = self.command(pattern, target, excludes);
        match self.timeout {
            Some(timeout) => self.run_with_timeout(cmd, timeout),
            None => self.run_to_completion(cmd),
        }
    }
}

/// Join captured stdout and stderr the way results are stored: stdout, a
/// newline, then stderr.
pub fn combine_output(stdout: &[u8], stderr: &str) -> String {
    format!("{}\n{}", String::from_utf8_lossy(stdout), stderr)
}

fn spawn_failure(bin: &Path, error: &std::io::Error) -> String {
    warn!(bin = %bin.display(), error = %error, "Failed to launch search binary");
    combine_output(&[], &format!("failed to run {}: {}", bin.display(), error))
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

/// Wait for `child` to exit, killing it once `timeout` has passed.
/// Returns `false` when the child had to be killed.
pub fn wait_with_timeout(child: &mut Child, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(_)) => return true,
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                return false;
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                warn!(error = %e, "Failed to poll search process");
                let _ = child.kill();
                let _ = child.wait();
                return true;
            }
        }
    }
}
