//! `herald check`

use herald_content::validate::{Diagnostic, Severity, validate_site};

use crate::commands::load_config;
use crate::{Error, Result};

/// Counts from a validation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Released records loaded.
    pub released: usize,
    /// Upcoming records loaded, if configured.
    pub upcoming: Option<usize>,
    /// Error-level findings.
    pub errors: usize,
    /// Warning-level findings.
    pub warnings: usize,
}

impl CheckSummary {
    /// Whether the run should fail.
    pub fn failed(&self, strict: bool) -> bool {
        self.errors > 0 || (strict && self.warnings > 0)
    }
}

/// Load and validate content, printing every finding.
pub async fn run(config_path: Option<&str>, strict: bool) -> Result<CheckSummary> {
    let (_, source) = load_config(config_path)?;
    let site = source.load_unchecked().await?;
    let diagnostics = validate_site(&site);

    for diagnostic in &diagnostics {
        println!("{diagnostic}");
    }

    let summary = summarize(
        &diagnostics,
        site.released.len(),
        site.upcoming.as_ref().map(|c| c.len()),
    );
    match summary.upcoming {
        Some(upcoming) => println!(
            "{} released, {upcoming} upcoming: {} error(s), {} warning(s)",
            summary.released, summary.errors, summary.warnings
        ),
        None => println!(
            "{} released: {} error(s), {} warning(s)",
            summary.released, summary.errors, summary.warnings
        ),
    }

    if summary.failed(strict) {
        return Err(Error::CheckFailed {
            errors: summary.errors,
            warnings: summary.warnings,
        });
    }
    Ok(summary)
}

fn summarize(diagnostics: &[Diagnostic], released: usize, upcoming: Option<usize>) -> CheckSummary {
    let errors = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    CheckSummary {
        released,
        upcoming,
        errors,
        warnings: diagnostics.len() - errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_site(dir: &tempfile::TempDir, updates: &str) -> String {
        let catalog = dir.path().join("updates.toml");
        std::fs::write(&catalog, updates).unwrap();
        let config = dir.path().join("herald.toml");
        std::fs::write(&config, "[content]\nreleased = \"updates.toml\"\n").unwrap();
        config.to_string_lossy().into_owned()
    }

    const CLEAN: &str = r#"
[[updates]]
id = "002"
date = "2025-02-17"
title = "Metrics"
type = "feature"

[[updates]]
id = "001"
date = "2025-01-15"
title = "Dark mode"
type = "major"
"#;

    #[test]
    fn test_failed_thresholds() {
        let summary = CheckSummary {
            warnings: 1,
            ..CheckSummary::default()
        };
        assert!(!summary.failed(false));
        assert!(summary.failed(true));

        let summary = CheckSummary {
            errors: 1,
            ..CheckSummary::default()
        };
        assert!(summary.failed(false));
    }

    #[tokio::test]
    async fn test_clean_content_passes() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_site(&dir, CLEAN);
        let summary = run(Some(config.as_str()), true).await.unwrap();
        assert_eq!(summary.released, 2);
        assert_eq!(summary.errors, 0);
        assert_eq!(summary.warnings, 0);
        assert_eq!(summary.upcoming, None);
    }

    #[tokio::test]
    async fn test_duplicate_ids_fail() {
        let dir = tempfile::tempdir().unwrap();
        let duplicated = CLEAN.replace("id = \"001\"", "id = \"002\"");
        let config = write_site(&dir, &duplicated);
        let err = run(Some(config.as_str()), false).await.unwrap_err();
        assert!(matches!(err, Error::CheckFailed { errors: 1, .. }));
    }

    #[tokio::test]
    async fn test_warnings_fail_only_when_strict() {
        let dir = tempfile::tempdir().unwrap();
        // Oldest first: an ordering warning, no errors
        let unsorted = CLEAN.replace("2025-01-15", "2025-03-01");
        let config = write_site(&dir, &unsorted);

        let summary = run(Some(config.as_str()), false).await.unwrap();
        assert!(summary.warnings > 0);
        assert_eq!(summary.errors, 0);

        assert!(matches!(
            run(Some(config.as_str()), true).await,
            Err(Error::CheckFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_missing_catalog_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("herald.toml");
        std::fs::write(&config, "[content]\nreleased = \"missing.toml\"\n").unwrap();
        let err = run(config.to_str(), false).await.unwrap_err();
        assert!(matches!(err, Error::Core(_)));
    }
}
