//! Page, JSON and admin handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::{Deserialize, Serialize};

use herald_core::{Catalog, Channel, Site, UpdateRecord};

use crate::error::JsonError;
use crate::state::AppState;

// ============================================================================
// Pages
// ============================================================================

/// `GET /`
pub async fn released_list(State(state): State<AppState>) -> Response {
    let site = state.store.snapshot();
    let rendered = state.renderer.list_page(&site, Channel::Released);
    page_response(&state, &site, rendered, None)
}

/// `GET /upcoming`
pub async fn upcoming_list(State(state): State<AppState>) -> Response {
    let site = state.store.snapshot();
    let rendered = state.renderer.list_page(&site, Channel::Upcoming);
    page_response(&state, &site, rendered, None)
}

/// `GET /updates/{id}`
pub async fn update_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let site = state.store.snapshot();
    let rendered = state.renderer.detail_page(&site, &id);
    page_response(&state, &site, rendered, Some(&id))
}

/// Fallback for unmatched routes.
pub async fn not_found(State(state): State<AppState>) -> Response {
    let site = state.store.snapshot();
    not_found_response(&state, &site, None)
}

fn page_response(
    state: &AppState,
    site: &Site,
    rendered: herald_core::Result<String>,
    missing_id: Option<&str>,
) -> Response {
    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(e) if e.is_not_found() => {
            tracing::debug!(id = ?missing_id, "page not found");
            not_found_response(state, site, missing_id)
        }
        Err(e) => {
            tracing::error!(error = %e, "page render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

fn not_found_response(state: &AppState, site: &Site, missing_id: Option<&str>) -> Response {
    match state.renderer.not_found_page(site, missing_id) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "not-found page render failed");
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        }
    }
}

// ============================================================================
// JSON
// ============================================================================

/// `GET /api/updates`: the released catalog.
pub async fn api_updates(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.store.snapshot().released.clone())
}

/// `GET /api/updates/{id}`
pub async fn api_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UpdateRecord>, JsonError> {
    let site = state.store.snapshot();
    let record = site.released.get(&id)?;
    Ok(Json(record.clone()))
}

// ============================================================================
// Admin
// ============================================================================

/// Result of a successful reload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    /// Store generation after the reload.
    pub generation: u64,
    /// Released records now served.
    pub released: usize,
    /// Upcoming records now served, if configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upcoming: Option<usize>,
}

/// `POST /admin/reload`
///
/// A failed reload leaves the previous catalogs in place.
pub async fn reload(State(state): State<AppState>) -> Result<Json<ReloadResponse>, JsonError> {
    tracing::info!(source = %state.source.describe(), "reload requested");
    let site = state.store.load_from(state.source.as_ref()).await?;
    Ok(Json(ReloadResponse {
        generation: state.store.generation(),
        released: site.released.len(),
        upcoming: site.upcoming.as_ref().map(|c| c.len()),
    }))
}
