//! [`SiteSource`] backed by catalog files on disk.

use std::path::PathBuf;

use async_trait::async_trait;
use herald_core::{HeraldConfig, Result, Site, SiteSource};

use crate::loader::load_catalog;
use crate::validate::{Severity, validate_site};

/// Loads the released catalog and, optionally, the upcoming one from
/// paths on disk, then logs any validation findings.
#[derive(Clone, Debug)]
pub struct FileSource {
    released: PathBuf,
    upcoming: Option<PathBuf>,
}

impl FileSource {
    /// Create a source from explicit paths.
    pub fn new(released: impl Into<PathBuf>, upcoming: Option<PathBuf>) -> Self {
        Self {
            released: released.into(),
            upcoming,
        }
    }

    /// Create a source from resolved configuration paths.
    pub fn from_config(config: &HeraldConfig) -> Self {
        Self::new(config.released_path(), config.upcoming_path())
    }

    /// Read both catalogs without reporting validation findings.
    pub async fn load_unchecked(&self) -> Result<Site> {
        let released = load_catalog(&self.released).await?;
        let upcoming = match &self.upcoming {
            Some(path) => Some(load_catalog(path).await?),
            None => None,
        };
        Ok(Site { released, upcoming })
    }
}

#[async_trait]
impl SiteSource for FileSource {
    async fn load(&self) -> Result<Site> {
        let site = self.load_unchecked().await?;
        for diagnostic in validate_site(&site) {
            match diagnostic.severity {
                Severity::Error => log::error!("{diagnostic}"),
                Severity::Warning => log::warn!("{diagnostic}"),
            }
        }
        Ok(site)
    }

    fn describe(&self) -> String {
        match &self.upcoming {
            Some(upcoming) => format!(
                "files: {} + {}",
                self.released.display(),
                upcoming.display()
            ),
            None => format!("files: {}", self.released.display()),
        }
    }
}
