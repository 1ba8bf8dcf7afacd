//! The sample project shipped at the repository root loads cleanly.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use herald_content::{FileSource, validate_site};
use herald_core::{Channel, UpdateKind};

fn content_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../content")
}

#[tokio::test]
async fn test_sample_site_loads_without_findings() {
    let source = FileSource::new(
        content_dir().join("updates.toml"),
        Some(content_dir().join("upcoming.json")),
    );
    let site = source.load_unchecked().await.unwrap();

    assert_eq!(site.released.ids(), vec!["001", "002", "003"]);
    assert_eq!(site.released.updates[0].kind, UpdateKind::Major);
    assert_eq!(site.released.total_updates(), 3);

    let upcoming = site.catalog(Channel::Upcoming).unwrap();
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming.total_updates(), 2);
    assert_eq!(upcoming.updates[0].date, "March 2025");

    assert!(validate_site(&site).is_empty());
}
