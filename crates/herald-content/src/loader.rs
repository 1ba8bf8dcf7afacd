//! Catalog loading.
//!
//! A catalog comes from one of:
//!
//! - a `.toml`, `.json`, `.yaml` or `.yml` file holding `{ updates, metadata }`
//! - a directory of `*.md` files, one update per file (frontmatter fields,
//!   body as description), ordered by file name
//!
//! Records are kept in the order they were authored. Nothing is sorted or
//! de-duplicated here; see [`crate::validate`] for data-quality checks.

use std::path::{Path, PathBuf};

use herald_core::dates::parse_iso_date;
use herald_core::{Catalog, CatalogMetadata, Error, Result, UpdateKind, UpdateRecord};
use serde::Deserialize;

use crate::markdown::extract_frontmatter;

/// On-disk catalog formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogFormat {
    /// TOML file.
    Toml,
    /// JSON file.
    Json,
    /// YAML file.
    Yaml,
    /// Directory of markdown files.
    MarkdownDir,
}

impl CatalogFormat {
    /// Detect the format of `path` from its kind and extension.
    pub async fn detect(path: &Path) -> Result<Self> {
        let meta = tokio::fs::metadata(path)
            .await
            .map_err(|e| Error::io_with_path(e, path))?;
        if meta.is_dir() {
            return Ok(Self::MarkdownDir);
        }
        Self::from_extension(path)
    }

    /// Format implied by a file extension.
    pub fn from_extension(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(Error::parse(format!(
                "Unsupported catalog source {}: expected .toml, .json, .yaml or a directory of .md files",
                path.display()
            ))),
        }
    }
}

/// Load a catalog from a file or markdown directory.
pub async fn load_catalog(path: &Path) -> Result<Catalog> {
    let format = CatalogFormat::detect(path).await?;
    let catalog = match format {
        CatalogFormat::MarkdownDir => load_markdown_dir(path).await?,
        _ => {
            let content = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| Error::io_with_path(e, path))?;
            parse_catalog(&content, format).map_err(|e| with_path(e, path))?
        }
    };
    log::debug!(
        "Loaded {} updates from {} ({format:?})",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Prefix a parse error's message with the file it came from.
fn with_path(err: Error, path: &Path) -> Error {
    match err {
        Error::Parse { message } => Error::parse(format!("{}: {message}", path.display())),
        other => other,
    }
}

/// Parse catalog text in the given file format.
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<Catalog> {
    match format {
        CatalogFormat::Toml => toml::from_str(content).map_err(|e| Error::parse(e.to_string())),
        CatalogFormat::Json => {
            serde_json::from_str(content).map_err(|e| Error::parse(e.to_string()))
        }
        CatalogFormat::Yaml => {
            yaml_serde::from_str(content).map_err(|e| Error::parse(e.to_string()))
        }
        CatalogFormat::MarkdownDir => Err(Error::parse(
            "A markdown directory cannot be parsed from a single string",
        )),
    }
}

// ============================================================================
// Markdown directories
// ============================================================================

/// Frontmatter of a markdown-authored update.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryFrontmatter {
    id: Option<String>,
    date: String,
    title: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(rename = "type")]
    kind: UpdateKind,
    video_url: Option<String>,
    image_url: Option<String>,
    additional_text: Option<String>,
    button_url: Option<String>,
    button_text: Option<String>,
}

/// Parse one markdown-authored update. `fallback_id` is used when the
/// frontmatter has no `id`.
pub fn parse_markdown_entry(content: &str, fallback_id: &str) -> Result<UpdateRecord> {
    let result = extract_frontmatter(content);
    if let Some(reason) = result.error() {
        return Err(Error::parse(format!("invalid frontmatter: {reason}")));
    }
    let fm: EntryFrontmatter = result
        .deserialize()?
        .ok_or_else(|| Error::parse("missing frontmatter"))?;

    Ok(UpdateRecord {
        id: fm.id.unwrap_or_else(|| fallback_id.to_string()),
        date: fm.date,
        title: fm.title,
        description: result.body().trim().to_string(),
        tags: fm.tags,
        kind: fm.kind,
        video_url: fm.video_url,
        image_url: fm.image_url,
        additional_text: fm.additional_text,
        button_url: fm.button_url,
        button_text: fm.button_text,
    })
}

async fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| Error::io_with_path(e, dir))?;
    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io_with_path(e, dir))?
    {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let mut file_type = entry
            .file_type()
            .await
            .map_err(|e| Error::io_with_path(e, &path))?;
        if file_type.is_symlink() {
            file_type = tokio::fs::metadata(&path)
                .await
                .map_err(|e| Error::io_with_path(e, &path))?
                .file_type();
        }
        if file_type.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load every `*.md` file in `dir` as one update, ordered by file name.
///
/// Metadata is derived: the count of records and the newest ISO date.
pub async fn load_markdown_dir(dir: &Path) -> Result<Catalog> {
    let mut updates = Vec::new();
    for path in markdown_files(dir).await? {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::io_with_path(e, &path))?;
        let stem = path.file_stem().and_then(|s| s.to_str()).ok_or_else(|| {
            Error::parse(format!("{}: file name is not valid UTF-8", path.display()))
        })?;
        let record = parse_markdown_entry(&content, stem).map_err(|e| with_path(e, &path))?;
        updates.push(record);
    }

    let metadata = derived_metadata(&updates);
    Ok(Catalog::new(updates, metadata))
}

/// Metadata computed from the records: count and newest ISO date.
pub fn derived_metadata(updates: &[UpdateRecord]) -> CatalogMetadata {
    let last_update = updates
        .iter()
        .filter_map(|u| parse_iso_date(&u.date))
        .max()
        .map(|d| d.format("%Y-%m-%d").to_string());
    CatalogMetadata {
        last_update,
        total_updates: Some(updates.len()),
    }
}

// ============================================================================
// Tests
// ============================================================================
