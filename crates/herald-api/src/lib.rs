//! # herald-api
//!
//! HTTP server for Herald.
//!
//! Serves the rendered timelines and detail pages, a JSON view of the
//! released catalog, a health endpoint and (optionally) a reload endpoint.
//! Catalogs come from a [`herald_core::CatalogStore`]; handlers take a
//! snapshot per request, so a reload never disturbs in-flight requests.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod health;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{Error, JsonError, Result};
pub use health::HealthResponse;
pub use server::{Server, router, shutdown_signal};
pub use state::AppState;
