//! Extension points: where content comes from, and how config is located.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::Site;
use crate::{Error, Result};

// ============================================================================
// SiteSource
// ============================================================================

/// Something that can produce a fresh [`Site`].
///
/// Called once at startup and again on every explicit reload.
#[async_trait]
pub trait SiteSource: Send + Sync {
    /// Load both catalogs.
    async fn load(&self) -> Result<Site>;

    /// Human-readable description for logs ("files: content/updates.toml").
    fn describe(&self) -> String;
}

// ============================================================================
// ConfigManager
// ============================================================================

/// Locating, loading and writing a TOML configuration file.
///
/// Resolution order: explicit path, then the `<PROJECT>_CONFIG` environment
/// variable, then `./<project>.toml` if it exists, then
/// `<config dir>/<project>/config.toml`.
pub trait ConfigManager: Serialize + DeserializeOwned + Default {
    /// Project name, used for file names and the environment variable.
    fn project_name() -> &'static str;

    /// Hook run after a file was parsed, with the path it came from.
    fn loaded_from(&mut self, _path: &std::path::Path) {}

    /// Name of the environment variable holding a config path.
    fn env_var() -> String {
        format!(
            "{}_CONFIG",
            Self::project_name().to_uppercase().replace(['-', ' '], "_")
        )
    }

    /// Per-user default location.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(Self::project_name()).join("config.toml"))
    }

    /// Resolve which file would be used.
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(Self::env_var())
            && !path.is_empty()
        {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(format!("{}.toml", Self::project_name()));
        if local.exists() {
            return Some(local);
        }
        Self::default_config_path()
    }

    /// Load the resolved file, or defaults when it does not exist.
    ///
    /// An explicitly given path that does not exist is an error.
    fn load(explicit: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit) else {
            log::debug!("No config location available, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            if explicit.is_some() {
                return Err(Error::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
        let mut config: Self = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        config.loaded_from(&path);
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Serialize as pretty TOML.
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
