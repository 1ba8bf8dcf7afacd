//! Router assembly and the HTTP server loop.

use std::future::Future;
use std::path::PathBuf;

use axum::Router;
use axum::handler::Handler;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::{Error, Result};
use crate::health::health;
use crate::routes;
use crate::state::AppState;

/// Build the application router.
///
/// Unmatched paths are served from `assets` when given, falling back to the
/// not-found page.
pub fn router(state: AppState, assets: Option<PathBuf>) -> Router {
    let mut app = Router::new()
        .route("/", get(routes::released_list))
        .route("/upcoming", get(routes::upcoming_list))
        .route("/updates/{id}", get(routes::update_detail))
        .route("/api/updates", get(routes::api_updates))
        .route("/api/updates/{id}", get(routes::api_update))
        .route("/health", get(health));

    if state.allow_reload {
        app = app.route("/admin/reload", post(routes::reload));
    }

    let app = match assets {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "serving static assets");
            let not_found = routes::not_found.with_state(state.clone());
            app.fallback_service(ServeDir::new(dir).not_found_service(not_found))
        }
        None => app.fallback(routes::not_found),
    };

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Herald HTTP server.
#[derive(Debug)]
pub struct Server {
    state: AppState,
    bind: String,
    assets: Option<PathBuf>,
}

impl Server {
    /// Create a server for `state`, listening on `bind` once run.
    pub fn new(state: AppState, bind: impl Into<String>) -> Self {
        Self {
            state,
            bind: bind.into(),
            assets: None,
        }
    }

    /// Serve unmatched paths from a static asset directory.
    pub fn with_assets(mut self, assets: Option<PathBuf>) -> Self {
        self.assets = assets;
        self
    }

    /// The router this server runs.
    pub fn router(&self) -> Router {
        router(self.state.clone(), self.assets.clone())
    }

    /// Bind and serve until SIGINT/SIGTERM.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(&self.bind)
            .await
            .map_err(|source| Error::Bind {
                addr: self.bind.clone(),
                source,
            })?;
        self.serve_on(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` completes.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        match listener.local_addr() {
            Ok(addr) => tracing::info!("Herald listening on http://{addr}"),
            Err(_) => tracing::info!("Herald listening on {}", self.bind),
        }
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(Error::Serve)?;
        tracing::info!("Herald stopped");
        Ok(())
    }
}

/// Resolves on SIGINT or SIGTERM (Ctrl-C elsewhere).
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                tracing::warn!("Could not install signal handlers; waiting for Ctrl-C");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    tracing::info!("Shutdown signal received");
}
