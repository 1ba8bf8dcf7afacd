//! Error types for herald-api

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type alias for herald-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in herald-api
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from herald-core
    #[error("Core error: {0}")]
    Core(#[from] herald_core::Error),

    /// The listen address could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Requested address.
        addr: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl Error {
    /// Category string used in JSON error bodies.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Core(e) if e.is_not_found() => "not_found",
            Self::Core(herald_core::Error::Parse { .. }) => "parse",
            Self::Core(herald_core::Error::Io { .. }) => "io",
            _ => "internal",
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Core(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// An error rendered as a JSON body.
///
/// ```json
/// {"error": {"category": "not_found", "message": "Update not found: 42"}}
/// ```
#[derive(Debug)]
pub struct JsonError(pub Error);

impl From<Error> for JsonError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl From<herald_core::Error> for JsonError {
    fn from(err: herald_core::Error) -> Self {
        Self(Error::Core(err))
    }
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = serde_json::json!({
            "error": {
                "category": self.0.category(),
                "message": self.0.to_string(),
            }
        });
        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            serde_json::to_string(&body).unwrap_or_default(),
        )
            .into_response()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = Error::from(herald_core::Error::not_found("42"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.category(), "not_found");
    }

    #[test]
    fn test_parse_maps_to_500() {
        let err = Error::from(herald_core::Error::parse("bad toml"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.category(), "parse");
    }

    #[test]
    fn test_json_error_response_status() {
        let resp = JsonError::from(herald_core::Error::not_found("x")).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
