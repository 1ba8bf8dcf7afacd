//! Shared, swappable catalog snapshot.
//!
//! [`CatalogStore`] holds the [`Site`] currently being served. Readers take
//! an `Arc` snapshot and never observe a half-loaded catalog; a reload
//! builds a complete new `Site` and replaces the snapshot in one step.
//! Reloads run one at a time, and the state only passes through
//! `Loading` before the first snapshot exists.
//!
//! # Usage
//!
//! ```rust
//! use herald_core::model::Site;
//! use herald_core::store::{CatalogStore, StoreState};
//!
//! let store = CatalogStore::new("updates");
//! assert_eq!(store.state(), StoreState::Empty);
//!
//! store.publish(Site::default());
//! assert!(store.state().is_ready());
//! assert_eq!(store.generation(), 1);
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, watch};

use crate::Result;
use crate::model::Site;
use crate::traits::SiteSource;

// ============================================================================
// StoreState
// ============================================================================

/// Lifecycle of the store.
#[derive(Clone, Debug, PartialEq)]
pub enum StoreState {
    /// Nothing has been loaded yet.
    Empty,
    /// The first load is in progress.
    Loading,
    /// A snapshot is loaded and current.
    Ready,
    /// The last reload failed; the previous snapshot is still served.
    Degraded(String),
    /// Nothing could be loaded.
    Failed(String),
}

impl StoreState {
    /// Returns `true` if the latest load succeeded.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Returns `true` if a snapshot can be served (Ready or Degraded).
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Ready | Self::Degraded(_))
    }
}

impl fmt::Display for StoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Loading => write!(f, "loading"),
            Self::Ready => write!(f, "ready"),
            Self::Degraded(reason) => write!(f, "degraded: {reason}"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

// ============================================================================
// CatalogStore
// ============================================================================

#[derive(Clone, Debug)]
struct Snapshot {
    site: Arc<Site>,
    generation: u64,
    loaded_at: Option<Instant>,
}

/// Thread-safe handle to the served catalog snapshot.
///
/// Cheap to clone (Arc internals).
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    name: String,
    snapshot: watch::Sender<Snapshot>,
    state: watch::Sender<StoreState>,
    reload: Mutex<()>,
}

impl CatalogStore {
    /// Create an empty store. Serves an empty [`Site`] until published.
    pub fn new(name: impl Into<String>) -> Self {
        let (snapshot, _) = watch::channel(Snapshot {
            site: Arc::new(Site::default()),
            generation: 0,
            loaded_at: None,
        });
        let (state, _) = watch::channel(StoreState::Empty);
        Self {
            inner: Arc::new(StoreInner {
                name: name.into(),
                snapshot,
                state,
                reload: Mutex::new(()),
            }),
        }
    }

    /// Create a store already holding `site`.
    pub fn with_site(name: impl Into<String>, site: Site) -> Self {
        let store = Self::new(name);
        store.publish(site);
        store
    }

    /// Store name, used in logs.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The site currently served.
    pub fn snapshot(&self) -> Arc<Site> {
        self.inner.snapshot.borrow().site.clone()
    }

    /// Number of successful publishes so far.
    pub fn generation(&self) -> u64 {
        self.inner.snapshot.borrow().generation
    }

    /// Time since the current snapshot was published.
    pub fn age(&self) -> Option<Duration> {
        self.inner.snapshot.borrow().loaded_at.map(|t| t.elapsed())
    }

    /// Current lifecycle state.
    pub fn state(&self) -> StoreState {
        self.inner.state.borrow().clone()
    }

    fn set_state(&self, state: StoreState) {
        log::info!("Catalog store '{}' → {state}", self.inner.name);
        self.inner.state.send_replace(state);
    }

    /// Replace the served site.
    pub fn publish(&self, site: Site) {
        let released = site.released.len();
        let upcoming = site.upcoming.as_ref().map_or(0, |c| c.len());
        let site = Arc::new(site);
        let mut generation = 0;
        self.inner.snapshot.send_modify(|snapshot| {
            snapshot.generation += 1;
            snapshot.site = site;
            snapshot.loaded_at = Some(Instant::now());
            generation = snapshot.generation;
        });
        log::info!(
            "Catalog store '{}' published generation {generation}: {released} released, {upcoming} upcoming",
            self.inner.name,
        );
        self.set_state(StoreState::Ready);
    }

    /// Load a fresh site from `source` and publish it.
    ///
    /// Concurrent calls are serialized. While a reload runs the current
    /// state is kept. On failure the previous snapshot stays in place and
    /// the state becomes `Degraded` (or `Failed` if nothing was ever loaded).
    pub async fn load_from(&self, source: &dyn SiteSource) -> Result<Arc<Site>> {
        let _guard = self.inner.reload.lock().await;
        log::info!(
            "Catalog store '{}' loading from {}",
            self.inner.name,
            source.describe()
        );
        let had_snapshot = self.generation() > 0;
        if !had_snapshot {
            self.set_state(StoreState::Loading);
        }

        match source.load().await {
            Ok(site) => {
                self.publish(site);
                Ok(self.snapshot())
            }
            Err(e) => {
                log::error!("Catalog store '{}' load failed: {e}", self.inner.name);
                if had_snapshot {
                    self.set_state(StoreState::Degraded(e.to_string()));
                } else {
                    self.set_state(StoreState::Failed(e.to_string()));
                }
                Err(e)
            }
        }
    }
}

impl fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogStore")
            .field("name", &self.inner.name)
            .field("state", &self.state())
            .field("generation", &self.generation())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
