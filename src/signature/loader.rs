//! Reads signature files into an immutable lookup table.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::types::SignatureDefinition;
use crate::error::{Result, ScanError};

/// File suffixes recognised as signature definitions (case-sensitive).
pub const SIGNATURE_EXTENSIONS: &[&str] = &[".yml", ".yaml"];

/// Keep only the corpus entries that look like signature files.
pub fn find_signature_files(files: &[PathBuf]) -> Vec<PathBuf> {
    files
        .iter()
        .filter(|path| is_signature_file(path))
        .cloned()
        .collect()
}

fn is_signature_file(path: &Path) -> bool {
    let spelled = path.as_os_str().to_string_lossy();
    SIGNATURE_EXTENSIONS
        .iter()
        .any(|ext| spelled.ends_with(ext))
}

/// Signature path to definition, built once before dispatch and read-only after.
///
/// Keys compare the path exactly as spelled, like [`Corpus`] does, so
/// `sigs/a.yaml` and `sigs/./a.yaml` are separate signatures. Iteration
/// follows load order so work is queued deterministically.
///
/// [`Corpus`]: crate::discovery::Corpus
#[derive(Debug, Clone, Default)]
pub struct SignatureTable {
    order: Vec<PathBuf>,
    entries: FxHashMap<OsString, SignatureDefinition>,
}

impl SignatureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition. A path already present keeps its original slot
    /// and has its definition replaced.
    pub fn insert(&mut self, path: PathBuf, definition: SignatureDefinition) {
        if self
            .entries
            .insert(path.as_os_str().to_os_string(), definition)
            .is_none()
        {
            self.order.push(path);
        }
    }

    pub fn get(&self, path: &Path) -> Option<&SignatureDefinition> {
        self.entries.get(path.as_os_str())
    }

    /// Signature paths in load order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &SignatureDefinition)> {
        self.order
            .iter()
            .filter_map(|p| self.entries.get(p.as_os_str()).map(|d| (p.as_path(), d)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of checks across all signatures.
    pub fn check_count(&self) -> usize {
        self.entries.values().map(|d| d.checks.len()).sum()
    }

    /// Outfiles declared by more than one check, with the number of
    /// declaring checks. Two such checks race and the last writer wins.
    pub fn outfile_conflicts(&self) -> Vec<(PathBuf, usize)> {
        let mut counts: BTreeMap<PathBuf, usize> = BTreeMap::new();
        for (_, definition) in self.iter() {
            for check in &definition.checks {
                if let Some(path) = check.output_path() {
                    *counts.entry(path.to_path_buf()).or_default() += 1;
                }
            }
        }
        counts.into_iter().filter(|(_, n)| *n > 1).collect()
    }
}

/// Loads signature files.
pub struct SignatureLoader;

impl SignatureLoader {
    /// Load a single signature file.
    ///
    /// An unreadable file is logged and treated as empty, producing a
    /// zero-valued definition. Content that is not a well-formed signature
    /// document is an error.
    pub fn load_file(path: &Path) -> Result<SignatureDefinition> {
        debug!(path = %path.display(), "Parsing signature file");
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read signature file");
                String::new()
            }
        };
        Self::load_from_string(path, &content)
    }

    /// Parse signature content read from `path`.
    pub fn load_from_string(path: &Path, content: &str) -> Result<SignatureDefinition> {
        if content.trim().is_empty() {
            return Ok(SignatureDefinition::default());
        }
        serde_yaml::from_str(content).map_err(|source| ScanError::SignatureParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load every path into a table. The first malformed file aborts.
    pub fn load_all(paths: &[PathBuf]) -> Result<SignatureTable> {
        let mut table = SignatureTable::new();
        for path in paths {
            let definition = Self::load_file(path)?;
            table.insert(path.clone(), definition);
        }
        Ok(table)
    }
}
