//! Resolution of comma-separated path specifiers into a file corpus.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use super::walker::DirectoryWalker;
use crate::error::{Result, ScanError};

const GLOB_WILDCARDS: &[char] = &['*', '?', '['];

/// Deduplicated, insertion-ordered list of regular files.
///
/// Membership is exact equality on the path as spelled: `./a.yaml` and
/// `a.yaml` are two different entries.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    files: Vec<PathBuf>,
    seen: FxHashSet<OsString>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` unless an identical spelling is already present.
    /// Returns whether the path was added.
    pub fn insert(&mut self, path: PathBuf) -> bool {
        if self.seen.insert(path.as_os_str().to_os_string()) {
            self.files.push(path);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.seen.contains(path.as_os_str())
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn into_files(self) -> Vec<PathBuf> {
        self.files
    }
}

/// Expands file, directory and glob specifiers into a [`Corpus`].
#[derive(Debug, Default)]
pub struct CorpusResolver {
    walker: DirectoryWalker,
}

impl CorpusResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a comma-separated specifier list.
    ///
    /// Blank entries are skipped. A literal path that does not exist, or a
    /// malformed glob, aborts the whole resolution.
    pub fn resolve(&self, specifiers: &str) -> Result<Corpus> {
        let mut corpus = Corpus::new();
        for spec in split_list(specifiers) {
            self.resolve_one(spec, &mut corpus)?;
        }
        debug!(files = corpus.len(), "Resolved corpus");
        Ok(corpus)
    }

    /// Resolve a single specifier, appending into `corpus`.
    pub fn resolve_one(&self, spec: &str, corpus: &mut Corpus) -> Result<()> {
        debug!(path = spec, "Reviewing path");

        if is_glob(spec) {
            return self.expand_glob(spec, corpus);
        }

        let path = Path::new(spec);
        let metadata =
            fs::metadata(path).map_err(|_| ScanError::PathNotFound(spec.to_string()))?;

        if metadata.is_dir() {
            self.add_directory(path, corpus);
        } else if metadata.is_file() {
            corpus.insert(path.to_path_buf());
        } else {
            debug!(path = spec, "Ignoring special file");
        }
        Ok(())
    }

    fn expand_glob(&self, pattern: &str, corpus: &mut Corpus) -> Result<()> {
        let matches = glob::glob(pattern).map_err(|source| ScanError::InvalidGlob {
            pattern: pattern.to_string(),
            source,
        })?;

        for entry in matches {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable glob match");
                    continue;
                }
            };
            match fs::metadata(&path) {
                Ok(meta) if meta.is_dir() => self.add_directory(&path, corpus),
                Ok(meta) if meta.is_file() => {
                    corpus.insert(path);
                }
                Ok(_) => debug!(path = %path.display(), "Ignoring non-regular glob match"),
                Err(e) => warn!(
                    path = %path.display(),
                    error = %e,
                    "Skipping glob match that cannot be stat'ed"
                ),
            }
        }
        Ok(())
    }

    fn add_directory(&self, dir: &Path, corpus: &mut Corpus) {
        for file in self.walker.walk(dir) {
            corpus.insert(file);
        }
    }
}

/// Split a comma-separated list, trimming entries and dropping blanks.
pub fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn is_glob(spec: &str) -> bool {
    spec.contains(GLOB_WILDCARDS)
}
