use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for bump-version operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("No version supplied: pass it as an argument or set the environment variable")]
    MissingArgument,

    #[error("Invalid version: {raw}")]
    InvalidVersion { raw: String },

    #[error("Did not find fallback version assignment to update in {}", path.display())]
    PatternNotFound { path: PathBuf },

    #[error("Failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in bump-version
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create an invalid version error echoing the raw input
    pub fn invalid_version(raw: impl Into<String>) -> Self {
        BumpError::InvalidVersion { raw: raw.into() }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BumpError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures that come straight from the filesystem
    pub fn is_io(&self) -> bool {
        matches!(self, BumpError::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_version_echoes_raw_input() {
        let err = BumpError::invalid_version("not-a-version");
        assert_eq!(err.to_string(), "Invalid version: not-a-version");
    }

    #[test]
    fn test_pattern_not_found_mentions_path() {
        let err = BumpError::PatternNotFound {
            path: PathBuf::from("build.gradle"),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Did not find fallback version assignment"));
        assert!(msg.contains("build.gradle"));
    }

    #[test]
    fn test_io_error_keeps_os_message() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = BumpError::io("missing/build.gradle", io_err);
        assert!(err.is_io());
        assert!(err.to_string().contains("missing/build.gradle"));

        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("file not found"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (BumpError::MissingArgument, "No version supplied"),
            (BumpError::invalid_version("x"), "Invalid version"),
            (BumpError::config("x"), "Configuration error"),
        ];

        for (err, expected_prefix) in error_pairs {
            assert!(!err.is_io());
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
