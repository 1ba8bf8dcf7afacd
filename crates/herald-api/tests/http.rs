//! End-to-end router tests.

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;
use herald_api::router;
use herald_core::{CatalogStore, Site};

use common::*;

// ============================================================================
// Pages
// ============================================================================

#[tokio::test]
async fn test_released_listing() {
    let resp = send(app(), "GET", "/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains("Product Updates"));
    assert!(html.contains("Metrics dashboard"));
    assert!(html.contains("February 17, 2025"));
    assert!(html.find("Metrics dashboard").unwrap() < html.find("Dark mode").unwrap());
}

#[tokio::test]
async fn test_upcoming_listing() {
    let resp = send(app(), "GET", "/upcoming").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("Offline sync"));
}

#[tokio::test]
async fn test_upcoming_listing_absent() {
    let mut site = site();
    site.upcoming = None;
    let state = state_with(site, QueuedSource::new(vec![Err("unused".into())]));
    let resp = send(router(state, None), "GET", "/upcoming").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_known_id_detail() {
    let resp = send(app(), "GET", "/updates/001").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains("<title>Dark mode | Atlas Updates</title>"));
    assert!(html.contains("<strong>bold</strong>"));
}

#[tokio::test]
async fn test_detail_link_for_reserved_characters_resolves() {
    let mut site = site();
    site.released.updates[0].id = "v2?beta".to_string();
    let state = state_with(site, QueuedSource::new(vec![Ok(Site::default())]));
    let app = router(state, None);

    let html = body_string(send(app.clone(), "GET", "/").await).await;
    assert!(html.contains("v2%3Fbeta"));
    assert!(!html.contains("updates&#x2f;v2?beta"));
    assert!(!html.contains("updates/v2?beta"));

    let resp = send(app, "GET", "/updates/v2%3Fbeta").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_string(resp).await;
    assert!(html.contains("<title>Metrics dashboard | Atlas Updates</title>"));
}

#[tokio::test]
async fn test_unknown_id_detail_is_404_page() {
    let resp = send(app(), "GET", "/updates/999").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let html = body_string(resp).await;
    assert!(html.contains("Page not found"));
    assert!(html.contains("999"));
}

#[tokio::test]
async fn test_upcoming_ids_have_no_detail_page() {
    let resp = send(app(), "GET", "/updates/u1").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unmatched_route_without_assets() {
    let resp = send(app(), "GET", "/nope").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_string(resp).await.contains("Page not found"));
}

// ============================================================================
// Static assets
// ============================================================================

#[tokio::test]
async fn test_assets_fallback() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("logo.svg"), "<svg></svg>").unwrap();
    let state = state_with(site(), QueuedSource::new(vec![Ok(site())]));
    let app = router(state, Some(dir.path().to_path_buf()));

    let resp = send(app.clone(), "GET", "/logo.svg").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "<svg></svg>");

    let resp = send(app, "GET", "/missing.png").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_string(resp).await.contains("Page not found"));
}

// ============================================================================
// JSON
// ============================================================================

#[tokio::test]
async fn test_api_updates() {
    let resp = send(app(), "GET", "/api/updates").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["updates"].as_array().unwrap().len(), 2);
    assert_eq!(json["updates"][0]["id"], "002");
    assert_eq!(json["updates"][0]["type"], "feature");
    assert_eq!(json["metadata"]["totalUpdates"], 2);
}

#[tokio::test]
async fn test_api_update_by_id() {
    let resp = send(app(), "GET", "/api/updates/001").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["title"], "Dark mode");
}

#[tokio::test]
async fn test_api_update_unknown_id() {
    let resp = send(app(), "GET", "/api/updates/404").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json = body_json(resp).await;
    assert_eq!(json["error"]["category"], "not_found");
    assert!(json["error"]["message"].as_str().unwrap().contains("404"));
}

// ============================================================================
// Health and reload
// ============================================================================

#[tokio::test]
async fn test_health_ready() {
    let resp = send(app(), "GET", "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["released"], 2);
    assert_eq!(json["upcoming"], 1);
    assert!(json["snapshot_age_secs"].is_u64());
}

#[tokio::test]
async fn test_health_stays_up_during_reload() {
    let mut next = site();
    next.released.updates.push(record("000", "Launch"));
    let source = GatedSource::new(next);
    let state = state_with_source(site(), source.clone()).with_reload(true);
    let app = router(state, None);

    let reload = tokio::spawn(send(app.clone(), "POST", "/admin/reload"));
    source.entered.notified().await;

    let resp = send(app.clone(), "GET", "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["store_state"], "ready");
    assert_eq!(json["generation"], 1);

    let resp = send(app.clone(), "GET", "/").await;
    assert_eq!(resp.status(), StatusCode::OK);

    source.release.notify_one();
    assert_eq!(reload.await.unwrap().status(), StatusCode::OK);

    let json = body_json(send(app, "GET", "/health").await).await;
    assert_eq!(json["generation"], 2);
    assert_eq!(json["released"], 3);
}

#[tokio::test]
async fn test_health_empty_store_unavailable() {
    let renderer =
        herald_render::HtmlRenderer::new(herald_core::config::SiteSettings::default()).unwrap();
    let state = herald_api::AppState::new(
        CatalogStore::new("empty"),
        renderer,
        std::sync::Arc::new(QueuedSource::new(vec![Ok(Site::default())])),
    );
    let resp = send(router(state, None), "GET", "/health").await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_reload_not_routed_by_default() {
    let resp = send(app(), "POST", "/admin/reload").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reload_swaps_catalog() {
    let mut next = site();
    next.released.updates.push(record("000", "Launch"));
    let state = state_with(site(), QueuedSource::new(vec![Ok(next)])).with_reload(true);
    let app = router(state, None);

    let resp = send(app.clone(), "POST", "/admin/reload").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["generation"], 2);
    assert_eq!(json["released"], 3);

    let resp = send(app, "GET", "/updates/000").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_catalog() {
    let state = state_with(site(), QueuedSource::new(vec![Err("broken toml".into())]))
        .with_reload(true);
    let app = router(state, None);

    let resp = send(app.clone(), "POST", "/admin/reload").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(resp).await["error"]["category"], "parse");

    let resp = send(app.clone(), "GET", "/updates/001").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(send(app, "GET", "/health").await).await;
    assert_eq!(json["status"], "degraded");
}
