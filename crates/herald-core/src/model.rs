//! Update records, catalogs and the two-listing site model.
//!
//! Field names serialize in camelCase so catalog files keep the shape of
//! the `{ updates, metadata }` literals they replace:
//!
//! ```rust
//! use herald_core::model::{Catalog, UpdateKind};
//!
//! let json = r#"{
//!   "updates": [
//!     {"id": "001", "date": "2025-02-17", "title": "New UI",
//!      "description": "Redesigned.", "tags": ["UI"], "type": "major"}
//!   ],
//!   "metadata": {"lastUpdate": "2025-02-17", "totalUpdates": 1}
//! }"#;
//!
//! let catalog: Catalog = serde_json::from_str(json).unwrap();
//! let update = catalog.find_by_id("001").unwrap();
//! assert_eq!(update.kind, UpdateKind::Major);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ============================================================================
// UpdateKind
// ============================================================================

/// Classification of an update. Only affects badge styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateKind {
    /// A headline release.
    Major,
    /// A new feature.
    Feature,
    /// An improvement to something that already exists.
    Enhancement,
}

impl UpdateKind {
    /// Lowercase name, used as a CSS modifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Feature => "feature",
            Self::Enhancement => "enhancement",
        }
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// UpdateRecord
// ============================================================================

/// One published or planned announcement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecord {
    /// Identifier used for routing and lookup.
    pub id: String,
    /// ISO `YYYY-MM-DD`, or free text such as "March 2025".
    pub date: String,
    /// Display title.
    pub title: String,
    /// Markdown body.
    #[serde(default)]
    pub description: String,
    /// Badge labels, in display order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Classification.
    #[serde(rename = "type")]
    pub kind: UpdateKind,
    /// Video embed URL, or a local `.mov` file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Image path or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Secondary markdown block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_text: Option<String>,
    /// Call-to-action target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_url: Option<String>,
    /// Call-to-action label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
}

/// An optional field counts as present only if it has non-blank content.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

impl UpdateRecord {
    /// Video URL, if present and non-blank.
    pub fn video(&self) -> Option<&str> {
        present(&self.video_url)
    }

    /// Image URL, if present and non-blank.
    pub fn image(&self) -> Option<&str> {
        present(&self.image_url)
    }

    /// Additional markdown text, if present and non-blank.
    pub fn additional_text(&self) -> Option<&str> {
        present(&self.additional_text)
    }

    /// Call-to-action URL, if present and non-blank.
    pub fn button_url(&self) -> Option<&str> {
        present(&self.button_url)
    }

    /// Call-to-action label, if present and non-blank.
    pub fn button_text(&self) -> Option<&str> {
        present(&self.button_text)
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Summary metadata authored alongside a catalog.
///
/// Both fields are authored by hand and are not kept in sync with the
/// updates list; see [`Catalog::total_updates`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    /// Date of the most recent update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
    /// Authored count of updates. Upcoming catalogs may spell it
    /// `totalUpcoming`.
    #[serde(default, alias = "totalUpcoming", skip_serializing_if = "Option::is_none")]
    pub total_updates: Option<usize>,
}

/// Ordered collection of update records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Records in authored order. Rendering never re-sorts them.
    #[serde(default)]
    pub updates: Vec<UpdateRecord>,
    /// Summary metadata.
    #[serde(default)]
    pub metadata: CatalogMetadata,
}

impl Catalog {
    /// Create a catalog from records and metadata.
    pub fn new(updates: Vec<UpdateRecord>, metadata: CatalogMetadata) -> Self {
        Self { updates, metadata }
    }

    /// Find the first record whose id equals `id` exactly.
    pub fn find_by_id(&self, id: &str) -> Option<&UpdateRecord> {
        self.updates.iter().find(|u| u.id == id)
    }

    /// Like [`find_by_id`](Self::find_by_id), but a miss is [`Error::NotFound`].
    pub fn get(&self, id: &str) -> Result<&UpdateRecord> {
        self.find_by_id(id).ok_or_else(|| Error::not_found(id))
    }

    /// Ids that resolve to a page: every distinct id, first occurrence order.
    pub fn ids(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.updates
            .iter()
            .map(|u| u.id.as_str())
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Number of records actually present.
    pub fn len(&self) -> usize {
        self.updates.len()
    }

    /// Returns `true` if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// The authored total when given, otherwise the record count.
    pub fn total_updates(&self) -> usize {
        self.metadata.total_updates.unwrap_or(self.updates.len())
    }
}

// ============================================================================
// Site
// ============================================================================

/// Which listing a catalog feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Shipped updates, with per-update detail pages.
    Released,
    /// Planned updates, listing only.
    Upcoming,
}

impl Channel {
    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Released => "released",
            Self::Upcoming => "upcoming",
        }
    }

    /// Route of this channel's listing page.
    pub fn list_path(&self) -> &'static str {
        match self {
            Self::Released => "/",
            Self::Upcoming => "/upcoming",
        }
    }

    /// Route of a record's detail page, with the id percent-encoded as a
    /// single path segment. Upcoming records have none.
    pub fn detail_path(&self, id: &str) -> Option<String> {
        match self {
            Self::Released => Some(format!("/updates/{}", urlencoding::encode(id))),
            Self::Upcoming => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the site serves: the released catalog and, optionally, the
/// upcoming one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Released updates.
    pub released: Catalog,
    /// Planned updates, if an upcoming listing is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upcoming: Option<Catalog>,
}

impl Site {
    /// The catalog feeding `channel`, if any.
    pub fn catalog(&self, channel: Channel) -> Option<&Catalog> {
        match channel {
            Channel::Released => Some(&self.released),
            Channel::Upcoming => self.upcoming.as_ref(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
