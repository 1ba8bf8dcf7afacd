//! Subcommand implementations.

pub mod build;
pub mod check;
pub mod serve;

use herald_content::FileSource;
use herald_core::{ConfigManager, HeraldConfig, Result};

/// Load configuration and build the file source it describes.
pub fn load_config(config_path: Option<&str>) -> Result<(HeraldConfig, FileSource)> {
    let config = HeraldConfig::load(config_path)?;
    let source = FileSource::from_config(&config);
    Ok((config, source))
}
