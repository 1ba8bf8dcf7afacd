//! YAML frontmatter extraction from markdown update files.
//!
//! An update written as markdown keeps its fields in frontmatter delimited
//! by `---`; the body becomes the description:
//!
//! ```markdown
//! ---
//! id: "001"
//! date: 2025-02-17
//! title: New User Interface
//! type: major
//! tags: [UI, UX]
//! ---
//!
//! We've completely redesigned the interface.
//! ```
//!
//! # Usage
//!
//! ```rust
//! use herald_content::markdown::extract_frontmatter;
//!
//! let content = "---\ntitle: Test\n---\n\nBody";
//! let result = extract_frontmatter(content);
//!
//! assert!(result.has_frontmatter());
//! assert_eq!(result.get_str("title"), Some("Test"));
//! assert_eq!(result.body().trim(), "Body");
//! ```

use herald_core::{Error, Result};
use serde::de::DeserializeOwned;
use yaml_serde::Value;

/// Result of frontmatter extraction.
#[derive(Debug, Clone)]
pub struct FrontmatterResult<'a> {
    /// Parsed YAML frontmatter, if present and valid.
    value: Option<Value>,
    /// Body content after the frontmatter delimiter.
    body: &'a str,
    /// Whether frontmatter delimiters were found (even if parsing failed).
    had_delimiters: bool,
    /// YAML error, if the delimiters were found but parsing failed.
    error: Option<String>,
}

impl<'a> FrontmatterResult<'a> {
    fn with_frontmatter(value: Value, body: &'a str) -> Self {
        Self {
            value: Some(value),
            body,
            had_delimiters: true,
            error: None,
        }
    }

    fn without_frontmatter(body: &'a str) -> Self {
        Self {
            value: None,
            body,
            had_delimiters: false,
            error: None,
        }
    }

    fn with_invalid_frontmatter(body: &'a str, error: String) -> Self {
        Self {
            value: None,
            body,
            had_delimiters: true,
            error: Some(error),
        }
    }

    /// Check if valid frontmatter was found and parsed.
    pub fn has_frontmatter(&self) -> bool {
        self.value.is_some()
    }

    /// Check if frontmatter delimiters were present (even if parsing failed).
    pub fn had_delimiters(&self) -> bool {
        self.had_delimiters
    }

    /// The YAML parse error, when delimiters were found but parsing failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Get the raw YAML value, if present.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Get the body content (everything after frontmatter).
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Deserialize the frontmatter into a specific type.
    ///
    /// Returns `None` if no frontmatter was found, `Err` if it does not
    /// match `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match &self.value {
            Some(value) => {
                let parsed: T = yaml_serde::from_value(value.clone())
                    .map_err(|e| Error::parse(format!("Failed to deserialize frontmatter: {e}")))?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Get a string field from the frontmatter.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.value.as_ref()?.get(key)?.as_str()
    }
}

/// Extract YAML frontmatter from markdown content.
///
/// # Behavior
///
/// - No opening `---`, or no closing `---`: the whole input is the body
/// - Delimiters found but YAML invalid: logs a warning, body is what follows
///   the closing delimiter, [`FrontmatterResult::error`] holds the reason
/// - Valid frontmatter: parsed YAML and body
pub fn extract_frontmatter(content: &str) -> FrontmatterResult<'_> {
    if !content.starts_with("---") {
        return FrontmatterResult::without_frontmatter(content);
    }

    // Find the end of the opening delimiter line
    let after_first_delimiter = match content[3..].find('\n') {
        Some(pos) => &content[3 + pos + 1..],
        None => return FrontmatterResult::without_frontmatter(content),
    };

    // Empty frontmatter (---\n---) or content up to \n---
    let (yaml_content, body_after_closing) =
        if let Some(rest) = after_first_delimiter.strip_prefix("---") {
            ("", rest)
        } else if let Some(closing_pos) = after_first_delimiter.find("\n---") {
            (
                &after_first_delimiter[..closing_pos],
                &after_first_delimiter[closing_pos + 4..],
            )
        } else {
            log::warn!("Frontmatter opening delimiter found but no closing delimiter");
            return FrontmatterResult::without_frontmatter(content);
        };

    // Skip the rest of the closing delimiter line
    let body = match body_after_closing.find('\n') {
        Some(pos) => &body_after_closing[pos + 1..],
        None => "",
    };

    match yaml_serde::from_str::<Value>(yaml_content) {
        Ok(value) => FrontmatterResult::with_frontmatter(value, body),
        Err(e) => {
            log::warn!("Failed to parse frontmatter YAML: {e}");
            FrontmatterResult::with_invalid_frontmatter(body, e.to_string())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_extract_valid_frontmatter() {
        let content = "---\ntitle: New Export\ntype: feature\n---\n\nExport to CSV.";
        let result = extract_frontmatter(content);

        assert!(result.has_frontmatter());
        assert!(result.had_delimiters());
        assert_eq!(result.get_str("title"), Some("New Export"));
        assert_eq!(result.get_str("type"), Some("feature"));
        assert_eq!(result.body().trim(), "Export to CSV.");
    }

    #[test]
    fn test_extract_no_frontmatter() {
        let content = "Just a description.";
        let result = extract_frontmatter(content);

        assert!(!result.has_frontmatter());
        assert!(!result.had_delimiters());
        assert_eq!(result.body(), content);
    }

    #[test]
    fn test_extract_empty_frontmatter() {
        let content = "---\n---\n\nBody content";
        let result = extract_frontmatter(content);

        assert!(result.had_delimiters());
        assert_eq!(result.body().trim(), "Body content");
    }

    #[test]
    fn test_extract_frontmatter_no_closing() {
        let content = "---\ntitle: Incomplete\n\nNo closing delimiter";
        let result = extract_frontmatter(content);

        assert!(!result.has_frontmatter());
        assert!(!result.had_delimiters());
        assert_eq!(result.body(), content);
    }

    #[test]
    fn test_extract_frontmatter_invalid_yaml() {
        let content = "---\n{{invalid: yaml: here}}\n---\n\nBody";
        let result = extract_frontmatter(content);

        assert!(!result.has_frontmatter());
        assert!(result.had_delimiters());
        assert!(result.error().is_some());
        assert_eq!(result.body().trim(), "Body");
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Fields {
        title: String,
        #[serde(default)]
        tags: Vec<String>,
    }

    #[test]
    fn test_deserialize_frontmatter() {
        let content = "---\ntitle: Perf\ntags:\n  - Performance\n  - Technical\n---\n\nBody";
        let fm: Fields = extract_frontmatter(content).deserialize().unwrap().unwrap();
        assert_eq!(fm.title, "Perf");
        assert_eq!(fm.tags, vec!["Performance", "Technical"]);
    }

    #[test]
    fn test_deserialize_no_frontmatter() {
        let fm: Option<Fields> = extract_frontmatter("# None").deserialize().unwrap();
        assert!(fm.is_none());
    }

    #[test]
    fn test_deserialize_wrong_shape_is_error() {
        let content = "---\ntags: [a]\n---\nBody";
        let result: Result<Option<Fields>> = extract_frontmatter(content).deserialize();
        assert!(result.is_err());
    }

    #[test]
    fn test_body_keeps_dashes() {
        let content = "---\ntitle: Test\n---\n\nContent with --- dashes in it";
        let result = extract_frontmatter(content);
        assert!(result.body().contains("--- dashes"));
    }

    #[test]
    fn test_only_opening_delimiter() {
        let result = extract_frontmatter("---");
        assert!(!result.has_frontmatter());
        assert_eq!(result.body(), "---");
    }
}
