//! Herald Core: update records, catalogs, errors, configuration, and the
//! shared catalog store.
//!
//! This crate has no internal Herald dependencies. Content loading lives in
//! `herald-content`, page rendering in `herald-render`.
//!
//! # Modules
//!
//! - [`model`]: `UpdateRecord`, `Catalog`, `Site` and lookup
//! - [`dates`]: ISO date parsing and long-form display
//! - [`store`]: `CatalogStore`, the swappable served snapshot
//! - [`config`]: `HeraldConfig`
//! - [`traits`]: `SiteSource`, `ConfigManager`
//! - [`error`]: Error types and Result alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod dates;
pub mod error;
pub mod model;
pub mod store;
pub mod traits;

mod proptests;

// Re-export key types at crate root for convenience
pub use config::HeraldConfig;
pub use error::{Error, Result};
pub use model::{Catalog, CatalogMetadata, Channel, Site, UpdateKind, UpdateRecord};
pub use store::{CatalogStore, StoreState};
pub use traits::{ConfigManager, SiteSource};
