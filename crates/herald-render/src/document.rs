//! Presentational document tree.
//!
//! Renderers turn records into these types; templates turn these types into
//! HTML. Everything here is plain data so it can be inspected in tests and
//! serialized straight into a template context.

use herald_core::{Channel, UpdateKind};
use serde::Serialize;

/// Label used when a record has a button URL but no button text.
pub const DEFAULT_BUTTON_TEXT: &str = "Learn more";

/// A tag badge. Colour follows the record kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Tag text.
    pub label: String,
    /// Kind of the record the badge belongs to.
    pub kind: UpdateKind,
}

/// How a video URL is played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoPlayer {
    /// Inline `<video>`: autoplaying, looping, muted.
    Native,
    /// Third-party `<iframe>` embed.
    Embed,
}

impl VideoPlayer {
    /// `.mov` files play natively; everything else is an embed URL.
    pub fn for_url(url: &str) -> Self {
        if url.ends_with(".mov") {
            Self::Native
        } else {
            Self::Embed
        }
    }
}

/// Discriminant of [`Section`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    /// Markdown description.
    Description,
    /// Image.
    Image,
    /// Secondary markdown block.
    AdditionalText,
    /// Video.
    Video,
    /// Call-to-action link.
    CallToAction,
}

/// One optional block of an update, in display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    /// Rendered description.
    Description {
        /// HTML fragment.
        html: String,
    },
    /// Image.
    Image {
        /// Image URL.
        src: String,
        /// Alt text (the record title).
        alt: String,
    },
    /// Rendered secondary text.
    AdditionalText {
        /// HTML fragment.
        html: String,
    },
    /// Video.
    Video {
        /// Native player or embed.
        player: VideoPlayer,
        /// Video URL.
        src: String,
    },
    /// Call-to-action link.
    CallToAction {
        /// Link target.
        href: String,
        /// Link label.
        text: String,
    },
}

impl Section {
    /// Which kind of section this is.
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Description { .. } => SectionKind::Description,
            Self::Image { .. } => SectionKind::Image,
            Self::AdditionalText { .. } => SectionKind::AdditionalText,
            Self::Video { .. } => SectionKind::Video,
            Self::CallToAction { .. } => SectionKind::CallToAction,
        }
    }
}

/// One update, ready to display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateView {
    /// Record id, also the entry anchor.
    pub id: String,
    /// Title.
    pub title: String,
    /// Date as authored.
    pub date: String,
    /// Date as displayed.
    pub date_label: String,
    /// Link to the detail page, if the channel has one.
    pub href: Option<String>,
    /// Record kind.
    pub kind: UpdateKind,
    /// Tag badges, in authored order.
    pub badges: Vec<Badge>,
    /// Present sections only, in display order.
    pub sections: Vec<Section>,
}

impl UpdateView {
    /// Returns `true` if a section of the given kind is present.
    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.sections.iter().any(|s| s.kind() == kind)
    }
}

/// A per-update page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DetailPage {
    /// Document title.
    pub page_title: String,
    /// Where "back" goes.
    pub back_href: String,
    /// The update.
    pub update: UpdateView,
}

/// A timeline page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListPage {
    /// Document title.
    pub page_title: String,
    /// Visible heading.
    pub heading: String,
    /// Which listing this is.
    pub channel: Channel,
    /// One entry per record, in catalog order.
    pub entries: Vec<UpdateView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_player_dispatch() {
        assert_eq!(VideoPlayer::for_url("/demo.mov"), VideoPlayer::Native);
        assert_eq!(
            VideoPlayer::for_url("https://www.youtube.com/embed/abc"),
            VideoPlayer::Embed
        );
        assert_eq!(VideoPlayer::for_url("/demo.mp4"), VideoPlayer::Embed);
        assert_eq!(VideoPlayer::for_url("/demo.mov?v=2"), VideoPlayer::Embed);
    }

    #[test]
    fn test_section_serializes_with_kind_tag() {
        let section = Section::Video {
            player: VideoPlayer::Native,
            src: "/a.mov".to_string(),
        };
        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["kind"], "video");
        assert_eq!(value["player"], "native");

        let cta = Section::CallToAction {
            href: "https://example.com".to_string(),
            text: "Go".to_string(),
        };
        assert_eq!(serde_json::to_value(&cta).unwrap()["kind"], "call_to_action");
    }

    #[test]
    fn test_section_kind() {
        let s = Section::AdditionalText {
            html: String::new(),
        };
        assert_eq!(s.kind(), SectionKind::AdditionalText);
    }
}
