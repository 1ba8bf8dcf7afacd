//! Herald configuration.
//!
//! ```toml
//! [site]
//! name = "Atlas"
//! title = "Atlas Updates"
//!
//! [content]
//! released = "content/updates.toml"
//! upcoming = "content/upcoming"
//! assets = "public"
//!
//! [server]
//! bind = "127.0.0.1:3000"
//! ```
//!
//! Relative content paths are resolved against the directory of the file
//! the configuration was loaded from.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::traits::ConfigManager;

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeraldConfig {
    /// Branding and page chrome.
    pub site: SiteSettings,
    /// Where catalogs and assets live.
    pub content: ContentSettings,
    /// HTTP server.
    pub server: ServerSettings,
    /// Static export.
    pub build: BuildSettings,
    /// Directory of the loaded config file.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl ConfigManager for HeraldConfig {
    fn project_name() -> &'static str {
        "herald"
    }

    fn loaded_from(&mut self, path: &Path) {
        self.base_dir = path.parent().map(Path::to_path_buf);
    }
}

impl HeraldConfig {
    /// Resolve a configured path against the config file's directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Resolved released catalog path.
    pub fn released_path(&self) -> PathBuf {
        self.resolve_path(&self.content.released)
    }

    /// Resolved upcoming catalog path, if configured.
    pub fn upcoming_path(&self) -> Option<PathBuf> {
        self.content.upcoming.as_deref().map(|p| self.resolve_path(p))
    }

    /// Resolved static asset directory, if configured.
    pub fn assets_path(&self) -> Option<PathBuf> {
        self.content.assets.as_deref().map(|p| self.resolve_path(p))
    }
}

/// Branding and page chrome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Product name, used for logo alt text.
    pub name: String,
    /// Suffix of every page title.
    pub title: String,
    /// Where the logo links to in the footer.
    pub home_url: String,
    /// Logo image path.
    pub logo: String,
    /// Footer line.
    pub copyright: String,
    /// Heading of the released listing.
    pub released_heading: String,
    /// Heading of the upcoming listing.
    pub upcoming_heading: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: "Atlas".to_string(),
            title: "Atlas Updates".to_string(),
            home_url: "https://www.heyatlas.com".to_string(),
            logo: "/logo.svg".to_string(),
            copyright: "© 2025 Atlas. All rights reserved.".to_string(),
            released_heading: "Product Updates".to_string(),
            upcoming_heading: "Coming Soon".to_string(),
        }
    }
}

/// Catalog and asset locations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    /// Released catalog: a `.toml`/`.json`/`.yaml` file or a markdown directory.
    pub released: PathBuf,
    /// Upcoming catalog, same formats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcoming: Option<PathBuf>,
    /// Static files (images, videos) served under `/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<PathBuf>,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            released: PathBuf::from("content/updates.toml"),
            upcoming: None,
            assets: None,
        }
    }
}

/// HTTP server settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Listen address.
    pub bind: String,
    /// Expose `POST /admin/reload`.
    pub allow_reload: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            allow_reload: false,
        }
    }
}

/// Static export settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    /// Output directory.
    pub out_dir: PathBuf,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
        }
    }
}
