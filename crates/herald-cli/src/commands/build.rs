//! `herald build`: static export.
//!
//! Writes `index.html`, `upcoming/index.html` (when configured),
//! `updates/{id}/index.html` for every released id and `404.html`. Static
//! assets are copied first so pages win on a name clash.

use std::path::{Path, PathBuf};

use herald_core::{Channel, Error, Site, SiteSource};
use herald_render::HtmlRenderer;

use crate::Result;
use crate::commands::load_config;

/// What a build produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Pages written, relative to the output directory.
    pub pages: Vec<PathBuf>,
    /// Ids with no page because they cannot be used as a path segment.
    pub skipped: Vec<String>,
    /// Asset files copied.
    pub assets: usize,
}

/// Load content and export the site.
pub async fn run(config_path: Option<&str>, out: Option<PathBuf>) -> Result<BuildReport> {
    let (config, source) = load_config(config_path)?;
    let site = source.load().await?;
    let renderer = HtmlRenderer::new(config.site.clone())?;
    let out_dir = out.unwrap_or_else(|| config.resolve_path(&config.build.out_dir));

    let report = export_site(
        &site,
        &renderer,
        &out_dir,
        config.assets_path().as_deref(),
    )?;
    println!(
        "Wrote {} page(s) and {} asset(s) to {}",
        report.pages.len(),
        report.assets,
        out_dir.display()
    );
    Ok(report)
}

/// Render every page of `site` into `out_dir`.
pub fn export_site(
    site: &Site,
    renderer: &HtmlRenderer,
    out_dir: &Path,
    assets: Option<&Path>,
) -> herald_core::Result<BuildReport> {
    let mut report = BuildReport::default();

    if let Some(assets) = assets {
        if assets.is_dir() {
            report.assets = copy_dir(assets, out_dir)?;
        } else {
            log::warn!("Assets directory {} not found, skipping", assets.display());
        }
    }

    let mut write = |rel: PathBuf, html: String| -> herald_core::Result<()> {
        write_page(out_dir, &rel, &html)?;
        report.pages.push(rel);
        Ok(())
    };

    write(
        PathBuf::from("index.html"),
        renderer.list_page(site, Channel::Released)?,
    )?;
    if site.upcoming.is_some() {
        write(
            PathBuf::from("upcoming/index.html"),
            renderer.list_page(site, Channel::Upcoming)?,
        )?;
    }

    let mut skipped = Vec::new();
    for id in site.released.ids() {
        if !is_path_segment(id) {
            log::warn!("Skipping detail page for id '{id}': not usable as a path");
            skipped.push(id.to_string());
            continue;
        }
        write(
            PathBuf::from("updates").join(id).join("index.html"),
            renderer.detail_page(site, id)?,
        )?;
    }

    write(
        PathBuf::from("404.html"),
        renderer.not_found_page(site, None)?,
    )?;

    report.skipped = skipped;
    Ok(report)
}

fn is_path_segment(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\'])
}

fn write_page(out_dir: &Path, rel: &Path, html: &str) -> herald_core::Result<()> {
    let path = out_dir.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    std::fs::write(&path, html).map_err(|e| Error::io_with_path(e, &path))?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}

fn copy_dir(from: &Path, to: &Path) -> herald_core::Result<usize> {
    std::fs::create_dir_all(to).map_err(|e| Error::io_with_path(e, to))?;
    let mut copied = 0;
    for entry in std::fs::read_dir(from).map_err(|e| Error::io_with_path(e, from))? {
        let entry = entry.map_err(|e| Error::io_with_path(e, from))?;
        let source = entry.path();
        let target = to.join(entry.file_name());
        let file_type = entry
            .file_type()
            .map_err(|e| Error::io_with_path(e, &source))?;
        if file_type.is_dir() {
            copied += copy_dir(&source, &target)?;
        } else {
            std::fs::copy(&source, &target).map_err(|e| Error::io_with_path(e, &target))?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// Tests
// ============================================================================
