//! Configuration layer for sigscan.
//!
//! ## Layers
//! - `types`: Configuration type definitions
//! - `loading`: File loading and discovery
//! - `error`: Loading errors
//!
//! CLI + config merging lives in `run::config`.

mod error;
mod loading;
mod types;

pub use error::ConfigError;
pub use loading::PROJECT_CONFIG_FILES;
pub use types::{Config, DEFAULT_MAX_WORKERS, SearchConfig, WorkerConfig};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.search.grep_bin, "grep");
        assert_eq!(config.search.lines_before, 2);
        assert_eq!(config.search.lines_after, 2);
        assert!(config.search.color);
        assert!(config.search.timeout_secs.is_none());
        assert_eq!(config.workers.max_workers, 20);
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn test_load_yaml_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".sigscan.yaml");
        fs::write(
            &config_path,
            r#"
search:
  grep_bin: /usr/local/bin/ggrep
  lines_before: 4
workers:
  max_workers: 8
exclude:
  - "*.min.js"
"#,
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.search.grep_bin, "/usr/local/bin/ggrep");
        assert_eq!(config.search.lines_before, 4);
        assert_eq!(config.workers.max_workers, 8);
        assert_eq!(config.exclude, vec!["*.min.js".to_string()]);
    }

    #[test]
    fn test_load_json_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".sigscan.json");
        fs::write(
            &config_path,
            r#"{"workers": {"max_workers": 3}, "search": {"timeout_secs": 30}}"#,
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.workers.max_workers, 3);
        assert_eq!(config.search.timeout_secs, Some(30));
    }

    #[test]
    fn test_load_toml_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".sigscan.toml");
        fs::write(
            &config_path,
            r#"
exclude = ["*.lock"]

[search]
color = false
lines_after = 0
"#,
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert!(!config.search.color);
        assert_eq!(config.search.lines_after, 0);
        assert_eq!(config.exclude, vec!["*.lock".to_string()]);
    }

    #[test]
    fn test_partial_config_with_defaults() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".sigscan.yaml");
        fs::write(&config_path, "search:\n  lines_before: 9\n").unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.search.lines_before, 9);
        // Everything else keeps its default
        assert_eq!(config.search.lines_after, 2);
        assert_eq!(config.search.grep_bin, "grep");
        assert_eq!(config.workers.max_workers, 20);
    }

    #[test]
    fn test_load_with_project_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".sigscan.yml"),
            "workers:\n  max_workers: 5\n",
        )
        .unwrap();

        let config = Config::load(Some(dir.path()));
        assert_eq!(config.workers.max_workers, 5);
    }

    #[test]
    fn test_load_skips_broken_project_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".sigscan.yaml"), "workers: [unclosed").unwrap();
        fs::write(
            dir.path().join(".sigscan.json"),
            r#"{"workers": {"max_workers": 7}}"#,
        )
        .unwrap();

        let config = Config::load(Some(dir.path()));
        assert_eq!(config.workers.max_workers, 7);
    }

    #[test]
    fn test_unsupported_format_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".sigscan.xml");
        fs::write(&config_path, "<config></config>").unwrap();

        let result = Config::from_file(&config_path);
        assert!(matches!(result, Err(ConfigError::UnknownExtension { .. })));
    }

    #[test]
    fn test_config_error_read_file() {
        let result = Config::from_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_explicit_config_errors_are_returned() {
        let result =
            Config::load_explicit_or_discover(Some(Path::new("/nonexistent/sigscan.yaml")), None);
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_explicit_config_wins_over_project_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".sigscan.yaml"),
            "workers:\n  max_workers: 5\n",
        )
        .unwrap();
        let explicit = dir.path().join("custom.yaml");
        fs::write(&explicit, "workers:\n  max_workers: 11\n").unwrap();

        let config = Config::load_explicit_or_discover(Some(&explicit), Some(dir.path())).unwrap();
        assert_eq!(config.workers.max_workers, 11);
    }
}
