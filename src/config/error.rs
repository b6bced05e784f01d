//! Configuration error types.

use std::path::{Path, PathBuf};

/// Why a config file could not be turned into a [`Config`](super::Config).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in config file {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid JSON in config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid TOML in config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config file {path} has unknown extension '{extension}' (expected yaml, yml, json or toml)")]
    UnknownExtension { path: PathBuf, extension: String },
}

impl ConfigError {
    /// Config file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::Yaml { path, .. }
            | Self::Json { path, .. }
            | Self::Toml { path, .. }
            | Self::UnknownExtension { path, .. } => path,
        }
    }
}
