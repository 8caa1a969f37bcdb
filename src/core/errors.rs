//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Fatal error type for legacylens operations.
///
/// Anything recoverable (an unreadable file, a parse fallback, an
/// unlistable directory) is recorded as a [`crate::errors::Warning`]
/// instead and never surfaces here.
#[derive(Debug, Error)]
pub enum Error {
    /// The scan root does not exist or is not a directory
    #[error("The provided path is not a valid directory: {}", path.display())]
    InvalidRoot { path: PathBuf },

    /// A single file could not be read or decoded
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tree-sitter grammar could not produce an error-free tree
    #[error("Structural parse failed: {0}")]
    StructuralParse(String),

    /// A flat path list needs one name to be both a file and a directory
    #[error("Path conflict at '{path}': a file and a directory share this name")]
    PathConflict { path: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub fn invalid_root(path: impl Into<PathBuf>) -> Self {
        Self::InvalidRoot { path: path.into() }
    }

    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_root_message_names_path() {
        let err = Error::invalid_root("/no/such/dir");
        assert_eq!(
            err.to_string(),
            "The provided path is not a valid directory: /no/such/dir"
        );
    }

    #[test]
    fn test_file_read_names_path_and_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::file_read("a.py", io);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("a.py"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
