//! Error types shared by the analyzers and configuration loader

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a log source
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("File {0} not found")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalyzerError {
    /// Classify an I/O error raised for `path`
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => AnalyzerError::NotFound(path.into()),
            _ => AnalyzerError::Read {
                path: path.into(),
                source: err,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AnalyzerError::NotFound(_))
    }
}

/// Errors that can occur while loading or saving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_not_found_classification() {
        let err = AnalyzerError::from_io("missing.log", Error::from(ErrorKind::NotFound));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "File missing.log not found");
    }

    #[test]
    fn test_other_errors_are_read_errors() {
        let err = AnalyzerError::from_io("auth.log", Error::from(ErrorKind::PermissionDenied));
        assert!(!err.is_not_found());
        assert!(matches!(err, AnalyzerError::Read { .. }));
    }
}
