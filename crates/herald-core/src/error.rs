//! Error types for herald-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for herald operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, looking up or rendering updates.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// No update with the requested id exists in the catalog.
    #[error("Update not found: {id}")]
    NotFound {
        /// Identifier that was looked up
        id: String,
    },

    /// A date string is not an ISO `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The offending input
        value: String,
    },

    /// I/O failure, with the path involved when known.
    #[error("I/O error{}: {source}", .path.as_ref().map(|p| format!(" at {}", p.display())).unwrap_or_default())]
    Io {
        /// Path being read or written
        path: Option<PathBuf>,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Content could not be parsed (catalog files, frontmatter).
    #[error("Parse error: {message}")]
    Parse {
        /// What failed to parse and why
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Template or page rendering failed.
    #[error("Render error: {message}")]
    Render {
        /// Description of the failure
        message: String,
    },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { path: None, source }
    }
}

impl Error {
    /// Creates a not-found error for an update id.
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        Error::NotFound { id: id.into() }
    }

    /// Creates an invalid-date error.
    pub fn invalid_date<S: Into<String>>(value: S) -> Self {
        Error::InvalidDate {
            value: value.into(),
        }
    }

    /// Wraps an I/O error with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }

    /// Creates a parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a render error.
    pub fn render<S: Into<String>>(message: S) -> Self {
        Error::Render {
            message: message.into(),
        }
    }

    /// Returns `true` for the lookup miss that callers map to "page not found".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
