//! Catalog loading, markdown processing, and content validation.
//!
//! # Modules
//!
//! - [`loader`]: catalogs from TOML / JSON / YAML files or markdown directories
//! - [`markdown`]: frontmatter extraction and markdown to HTML
//! - [`validate`]: duplicate ids, count drift, unsorted timelines and friends
//! - [`source`]: [`FileSource`], the on-disk [`herald_core::SiteSource`]
//!
//! # Example
//!
//! ```rust
//! use herald_content::loader::{parse_catalog, CatalogFormat};
//! use herald_content::validate::validate_catalog;
//! use herald_core::Channel;
//!
//! let catalog = parse_catalog(
//!     r#"{"updates": [{"id": "001", "date": "2025-02-17", "title": "New UI", "type": "major"}],
//!         "metadata": {"totalUpdates": 2}}"#,
//!     CatalogFormat::Json,
//! ).unwrap();
//!
//! let findings = validate_catalog(&catalog, Channel::Released);
//! assert_eq!(findings.len(), 1); // totalUpdates drift
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod loader;
pub mod markdown;
pub mod source;
pub mod validate;

pub use loader::{CatalogFormat, load_catalog};
pub use markdown::{extract_frontmatter, render_markdown};
pub use source::FileSource;
pub use validate::{Diagnostic, Severity, validate_catalog, validate_site};
