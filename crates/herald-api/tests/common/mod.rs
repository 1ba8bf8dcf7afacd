//! Shared fixtures for herald-api integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use herald_api::{AppState, router};
use herald_core::config::SiteSettings;
use herald_core::{
    Catalog, CatalogMetadata, CatalogStore, Error, Result, Site, SiteSource, UpdateKind,
    UpdateRecord,
};
use herald_render::HtmlRenderer;
use tokio::sync::Notify;
use tower::ServiceExt;

pub fn record(id: &str, title: &str) -> UpdateRecord {
    UpdateRecord {
        id: id.to_string(),
        date: "2025-02-17".to_string(),
        title: title.to_string(),
        description: "Now with more **bold**.".to_string(),
        tags: vec!["Dashboard".to_string()],
        kind: UpdateKind::Feature,
        video_url: None,
        image_url: None,
        additional_text: None,
        button_url: None,
        button_text: None,
    }
}

pub fn site() -> Site {
    Site {
        released: Catalog::new(
            vec![record("002", "Metrics dashboard"), record("001", "Dark mode")],
            CatalogMetadata {
                last_update: Some("2025-02-17".to_string()),
                total_updates: Some(2),
            },
        ),
        upcoming: Some(Catalog::new(
            vec![record("u1", "Offline sync")],
            CatalogMetadata::default(),
        )),
    }
}

/// A source that hands out queued results, repeating the last one.
pub struct QueuedSource {
    results: Mutex<Vec<std::result::Result<Site, String>>>,
}

impl QueuedSource {
    pub fn new(results: Vec<std::result::Result<Site, String>>) -> Self {
        Self {
            results: Mutex::new(results),
        }
    }
}

#[async_trait]
impl SiteSource for QueuedSource {
    async fn load(&self) -> Result<Site> {
        let mut results = self.results.lock().unwrap();
        let next = if results.len() > 1 {
            results.remove(0)
        } else {
            results[0].clone()
        };
        next.map_err(Error::parse)
    }

    fn describe(&self) -> String {
        "queued test source".to_string()
    }
}

/// A source that parks inside `load` until the test releases it.
pub struct GatedSource {
    pub entered: Notify,
    pub release: Notify,
    site: Site,
}

impl GatedSource {
    pub fn new(site: Site) -> Arc<Self> {
        Arc::new(Self {
            entered: Notify::new(),
            release: Notify::new(),
            site,
        })
    }
}

#[async_trait]
impl SiteSource for GatedSource {
    async fn load(&self) -> Result<Site> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(self.site.clone())
    }

    fn describe(&self) -> String {
        "gated test source".to_string()
    }
}

pub fn state_with(site: Site, source: QueuedSource) -> AppState {
    state_with_source(site, Arc::new(source))
}

pub fn state_with_source(site: Site, source: Arc<dyn SiteSource>) -> AppState {
    let store = CatalogStore::with_site("test", site);
    let renderer = HtmlRenderer::new(SiteSettings::default()).unwrap();
    AppState::new(store, renderer, source)
}

pub fn app() -> Router {
    router(state_with(site(), QueuedSource::new(vec![Ok(site())])), None)
}

pub async fn send(app: Router, method: &str, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(resp: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(resp).await).unwrap()
}
