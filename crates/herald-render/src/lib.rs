//! Page rendering for Herald.
//!
//! Rendering happens in two steps. [`view`] turns records into a typed
//! document tree ([`document`]) with every presentation decision made:
//! date labels, badge kinds, which optional sections appear and which video
//! player to use. [`html`] then feeds that tree through the embedded
//! templates.
//!
//! ```no_run
//! use herald_core::config::SiteSettings;
//! use herald_core::{Channel, Site};
//! use herald_render::HtmlRenderer;
//!
//! # fn main() -> herald_core::Result<()> {
//! let renderer = HtmlRenderer::new(SiteSettings::default())?;
//! let html = renderer.list_page(&Site::default(), Channel::Released)?;
//! # let _ = html;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod document;
pub mod html;
pub mod view;

pub use document::{Badge, DetailPage, ListPage, Section, SectionKind, UpdateView, VideoPlayer};
pub use html::HtmlRenderer;
pub use view::{detail_title, render_detail, render_list, update_view};
