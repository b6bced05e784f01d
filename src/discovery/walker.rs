//! Directory walking for corpus discovery.

use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Recursive directory walker yielding regular files only.
///
/// Symlinks are not followed and are never yielded, nor are sockets, fifos
/// or device nodes. Entries come back in file-name order within each
/// directory so a run over an unchanged tree is repeatable.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryWalker;

impl DirectoryWalker {
    pub fn new() -> Self {
        Self
    }

    /// Walk `dir` and yield every regular file beneath it.
    ///
    /// Yielded paths are `dir` joined with the relative entry path, so they
    /// keep the spelling the caller used for `dir`.
    pub fn walk(&self, dir: &Path) -> impl Iterator<Item = PathBuf> + use<> {
        WalkDir::new(dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable directory entry");
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
    }
}
