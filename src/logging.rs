//! Tracing subscriber setup.

use tracing::Level;

/// Install the global fmt subscriber on stderr.
///
/// Verbose runs log at `DEBUG`; otherwise only errors are shown, which keeps
/// soft per-item failures out of normal output. Calling this twice is a no-op.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::ERROR };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
