use serde::{Deserialize, Serialize};
use std::path::Path;

/// One parsed signature file.
///
/// Descriptive fields are opaque; nothing beyond their presence is checked.
/// Missing keys deserialize to zero values and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureDefinition {
    pub id: String,
    pub name: String,
    pub author: String,
    pub severity: String,
    pub checks: Vec<Check>,
}

/// One unit of work inside a signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Check {
    /// Where to persist the combined output. Absent or empty means nowhere.
    pub outfile: Option<String>,
    /// Patterns searched in order against the scan target.
    pub regex: Vec<String>,
    /// Free text appended after all search output.
    pub notes: Option<String>,
}

impl Check {
    /// Declared output path, treating an empty string as absent.
    pub fn output_path(&self) -> Option<&Path> {
        self.outfile
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(Path::new)
    }

    /// Notes text, treating an empty string as absent.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|s| !s.is_empty())
    }
}
