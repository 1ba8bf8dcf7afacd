//! Fixtures for herald-cli integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Write a site with a markdown-directory released catalog and a YAML
/// upcoming catalog; returns the config file path.
pub fn write_project(root: &Path) -> PathBuf {
    let updates = root.join("content/updates");
    std::fs::create_dir_all(&updates).unwrap();
    std::fs::write(
        updates.join("001-metrics.md"),
        "---\nid: \"002\"\ndate: 2025-02-17\ntitle: Metrics dashboard\ntype: feature\ntags: [Analytics]\nvideoUrl: /media/tour.mov\nbuttonUrl: https://example.com/metrics\n---\nTrack usage\nacross teams.\n",
    )
    .unwrap();
    std::fs::write(
        updates.join("002-dark-mode.md"),
        "---\nid: \"001\"\ndate: 2025-01-15\ntitle: Dark mode\ntype: major\n---\nEasier on the eyes.\n",
    )
    .unwrap();

    std::fs::write(
        root.join("content/upcoming.yaml"),
        "updates:\n  - id: u1\n    date: March 2025\n    title: Offline sync\n    type: enhancement\n",
    )
    .unwrap();

    let assets = root.join("public/media");
    std::fs::create_dir_all(&assets).unwrap();
    std::fs::write(assets.join("tour.mov"), b"not really a movie").unwrap();

    let config = root.join("herald.toml");
    std::fs::write(
        &config,
        r#"[site]
title = "Orbit Updates"

[content]
released = "content/updates"
upcoming = "content/upcoming.yaml"
assets = "public"

[build]
out_dir = "site"
"#,
    )
    .unwrap();
    config
}
