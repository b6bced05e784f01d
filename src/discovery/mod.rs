//! Discovery layer: turns user-supplied path specifiers into a file corpus.
//!
//! This module handles:
//! - Comma-separated specifier lists mixing files, directories and globs
//! - Recursive directory traversal (regular files only)
//! - Order-stable deduplication

pub mod resolver;
pub mod walker;

pub use resolver::{Corpus, CorpusResolver, split_list};
pub use walker::DirectoryWalker;
