//! Outfile persistence.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::{info, trace, warn};

use super::traits::{ResultSink, SinkOutcome};
use crate::engine::CheckOutput;

/// Permission bits for newly created outfiles.
#[cfg(unix)]
pub const OUTFILE_MODE: u32 = 0o644;

/// Writes each check's buffer to its declared outfile.
///
/// Files are truncated and rewritten, never appended to. The buffer is
/// followed by a single trailing newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

impl FileSink {
    pub fn new() -> Self {
        Self
    }

    fn write(path: &Path, content: &str) -> std::io::Result<()> {
        let mut opts = OpenOptions::new();
        opts.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            opts.mode(OUTFILE_MODE);
        }

        let mut file = opts.open(path)?;
        file.write_all(content.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()
    }
}

impl ResultSink for FileSink {
    fn persist(&self, output: &CheckOutput) -> SinkOutcome {
        let Some(path) = output.outfile.as_deref().filter(|p| !p.as_os_str().is_empty()) else {
            trace!(
                signature = %output.signature.display(),
                check = output.check_index,
                content = %output.content,
                "No outfile declared, discarding results"
            );
            return SinkOutcome::Discarded;
        };

        match Self::write(path, &output.content) {
            Ok(()) => {
                info!(outfile = %path.display(), "Wrote results to outfile");
                SinkOutcome::Written {
                    path: path.to_path_buf(),
                }
            }
            Err(e) => {
                warn!(outfile = %path.display(), error = %e, "Failed to write outfile");
                SinkOutcome::Failed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        }
    }
}
