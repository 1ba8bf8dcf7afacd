//! Error types for herald-cli

use thiserror::Error;

/// Result type alias for herald-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in herald-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from herald-core
    #[error(transparent)]
    Core(#[from] herald_core::Error),

    /// Error from herald-api
    #[error(transparent)]
    Api(#[from] herald_api::Error),

    /// `herald check` found problems.
    #[error("Content check failed: {errors} error(s), {warnings} warning(s)")]
    CheckFailed {
        /// Error-level findings
        errors: usize,
        /// Warning-level findings
        warnings: usize,
    },
}
