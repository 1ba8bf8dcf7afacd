//! Health endpoint.
//!
//! Reports server status, catalog store state and record counts.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use herald_core::StoreState;

use crate::state::AppState;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy", "degraded" or "unavailable".
    pub status: String,
    /// Server name.
    pub server_name: String,
    /// Server version.
    pub version: String,
    /// Catalog store state.
    pub store_state: String,
    /// Number of successful loads so far.
    pub generation: u64,
    /// Seconds since the served snapshot was published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_age_secs: Option<u64>,
    /// Released records served.
    pub released: usize,
    /// Upcoming records served, if an upcoming listing is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upcoming: Option<usize>,
}

/// Map a store state to the reported status.
pub fn status_for(state: &StoreState) -> (&'static str, StatusCode) {
    match state {
        StoreState::Ready => ("healthy", StatusCode::OK),
        StoreState::Degraded(_) => ("degraded", StatusCode::OK),
        _ => ("unavailable", StatusCode::SERVICE_UNAVAILABLE),
    }
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let store_state = state.store.state();
    let (status, code) = status_for(&store_state);
    let site = state.store.snapshot();

    let response = HealthResponse {
        status: status.to_string(),
        server_name: state.store.name().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store_state: store_state.to_string(),
        generation: state.store.generation(),
        snapshot_age_secs: state.store.age().map(|age| age.as_secs()),
        released: site.released.len(),
        upcoming: site.upcoming.as_ref().map(|c| c.len()),
    };
    (code, Json(response))
}

// ============================================================================
// Tests
// ============================================================================
