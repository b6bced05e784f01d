//! Signature definitions and their loader.

pub mod loader;
pub mod types;

pub use loader::{SIGNATURE_EXTENSIONS, SignatureLoader, SignatureTable, find_signature_files};
pub use types::{Check, SignatureDefinition};
