//! `herald serve`

use std::sync::Arc;

use herald_api::{AppState, Server};
use herald_core::{CatalogStore, SiteSource};
use herald_render::HtmlRenderer;

use crate::Result;
use crate::commands::load_config;

/// Load content and run the HTTP server until interrupted.
///
/// Content that fails to load aborts startup; later reload failures keep
/// the previous catalogs.
pub async fn run(config_path: Option<&str>, bind: Option<String>) -> Result<()> {
    let (config, source) = load_config(config_path)?;
    let source: Arc<dyn SiteSource> = Arc::new(source);

    let store = CatalogStore::new("herald");
    store.load_from(source.as_ref()).await?;

    let renderer = HtmlRenderer::new(config.site.clone())?;
    let state = AppState::new(store, renderer, source).with_reload(config.server.allow_reload);
    if config.server.allow_reload {
        tracing::info!("Reload endpoint enabled at POST /admin/reload");
    }

    let bind = bind.unwrap_or_else(|| config.server.bind.clone());
    Server::new(state, bind)
        .with_assets(config.assets_path())
        .run()
        .await?;
    Ok(())
}
