//! Shared handler state.

use std::sync::Arc;

use herald_core::{CatalogStore, SiteSource};
use herald_render::HtmlRenderer;

/// State shared by every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Current catalogs.
    pub store: CatalogStore,
    /// Page renderer.
    pub renderer: Arc<HtmlRenderer>,
    /// Where reloads read from.
    pub source: Arc<dyn SiteSource>,
    /// Whether `POST /admin/reload` is routed.
    pub allow_reload: bool,
}

impl AppState {
    /// Bundle the pieces a server needs.
    pub fn new(store: CatalogStore, renderer: HtmlRenderer, source: Arc<dyn SiteSource>) -> Self {
        Self {
            store,
            renderer: Arc::new(renderer),
            source,
            allow_reload: false,
        }
    }

    /// Enable or disable the reload endpoint.
    pub fn with_reload(mut self, allow: bool) -> Self {
        self.allow_reload = allow;
        self
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store)
            .field("source", &self.source.describe())
            .field("allow_reload", &self.allow_reload)
            .finish_non_exhaustive()
    }
}
