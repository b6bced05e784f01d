use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that abort the whole run.
///
/// Per-item failures (an unreadable signature file, a failing search, an
/// outfile that cannot be written) never surface here; they are logged and
/// the scan carries on.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Folder to scan must be provided")]
    MissingTarget,

    #[error("Signature files must be provided")]
    MissingSignatures,

    #[error("Cannot read file/folder: {0}. Does not exist")]
    TargetNotFound(PathBuf),

    #[error("Path: {0} not found")]
    PathNotFound(String),

    #[error("Invalid glob pattern '{pattern}'")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to parse signature file {path}: {source}")]
    SignatureParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_target() {
        let err = ScanError::MissingTarget;
        assert_eq!(err.to_string(), "Folder to scan must be provided");
    }

    #[test]
    fn test_error_display_target_not_found() {
        let err = ScanError::TargetNotFound(PathBuf::from("/no/such/dir"));
        assert_eq!(
            err.to_string(),
            "Cannot read file/folder: /no/such/dir. Does not exist"
        );
    }

    #[test]
    fn test_error_display_path_not_found() {
        let err = ScanError::PathNotFound("sigs/missing.yaml".to_string());
        assert_eq!(err.to_string(), "Path: sigs/missing.yaml not found");
    }

    #[test]
    fn test_error_display_invalid_glob() {
        let source = glob::Pattern::new("sigs/[").unwrap_err();
        let err = ScanError::InvalidGlob {
            pattern: "sigs/[".to_string(),
            source,
        };
        assert_eq!(err.to_string(), "Invalid glob pattern 'sigs/['");
    }

    #[test]
    fn test_error_signature_parse_keeps_source() {
        let source = serde_yaml::from_str::<Vec<String>>("{ not: [a list").unwrap_err();
        let err = ScanError::SignatureParse {
            path: PathBuf::from("bad.yaml"),
            source,
        };
        let reason = source_text(&err);
        assert_eq!(
            err.to_string(),
            format!("Failed to parse signature file bad.yaml: {reason}")
        );
        assert!(!reason.is_empty());
    }

    fn source_text(err: &ScanError) -> String {
        std::error::Error::source(err)
            .map(|s| s.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_error_display_invalid_config() {
        let err = ScanError::InvalidConfig("max_workers must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: max_workers must be at least 1"
        );
    }
}
