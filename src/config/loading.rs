//! Configuration loading functions.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::ConfigError;
use super::types::Config;

/// Project-level config file names, in lookup order.
pub const PROJECT_CONFIG_FILES: &[&str] = &[
    ".sigscan.yaml",
    ".sigscan.yml",
    ".sigscan.json",
    ".sigscan.toml",
];

impl Config {
    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        let path = path.to_path_buf();

        match extension.as_str() {
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml { path, source })
            }
            "json" => {
                serde_json::from_str(&content).map_err(|source| ConfigError::Json { path, source })
            }
            "toml" => toml::from_str(&content).map_err(|source| ConfigError::Toml { path, source }),
            _ => Err(ConfigError::UnknownExtension { path, extension }),
        }
    }

    /// Load configuration from the project directory or global config.
    ///
    /// Search order:
    /// 1. `.sigscan.yaml` / `.sigscan.yml` / `.sigscan.json` / `.sigscan.toml` in `project_root`
    /// 2. `<config_dir>/sigscan/config.yaml`
    /// 3. Default configuration
    ///
    /// A candidate that exists but fails to load is skipped with a warning.
    pub fn load(project_root: Option<&Path>) -> Self {
        let project_candidates = project_root
            .map(|root| {
                PROJECT_CONFIG_FILES
                    .iter()
                    .map(|name| root.join(name))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let global_candidate = dirs::config_dir().map(|dir| global_config_path(&dir));

        for path in project_candidates.iter().chain(global_candidate.iter()) {
            if !path.exists() {
                continue;
            }
            match Self::from_file(path) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded configuration");
                    return config;
                }
                Err(e) => warn!(
                    path = %e.path().display(),
                    error = %e,
                    "Skipping unreadable config file"
                ),
            }
        }

        Self::default()
    }

    /// Load an explicitly requested config file, or fall back to discovery.
    pub fn load_explicit_or_discover(
        explicit: Option<&Path>,
        project_root: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Ok(Self::load(project_root)),
        }
    }
}

fn global_config_path(config_dir: &Path) -> PathBuf {
    config_dir.join("sigscan").join("config.yaml")
}
