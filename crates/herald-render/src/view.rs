//! Pure record → document functions.

use herald_content::render_markdown;
use herald_core::config::SiteSettings;
use herald_core::dates::date_label;
use herald_core::{Catalog, Channel, UpdateRecord};

use crate::document::{
    Badge, DEFAULT_BUTTON_TEXT, DetailPage, ListPage, Section, UpdateView, VideoPlayer,
};

/// Build the display form of one record.
///
/// Sections appear in a fixed order (description, image, additional text,
/// video, call to action) and only when the backing field is present.
pub fn update_view(record: &UpdateRecord, channel: Channel) -> UpdateView {
    let mut sections = Vec::new();

    if !record.description.trim().is_empty() {
        sections.push(Section::Description {
            html: render_markdown(&record.description),
        });
    }
    if let Some(src) = record.image() {
        sections.push(Section::Image {
            src: src.to_string(),
            alt: record.title.clone(),
        });
    }
    if let Some(text) = record.additional_text() {
        sections.push(Section::AdditionalText {
            html: render_markdown(text),
        });
    }
    if let Some(src) = record.video() {
        sections.push(Section::Video {
            player: VideoPlayer::for_url(src),
            src: src.to_string(),
        });
    }
    if let Some(href) = record.button_url() {
        sections.push(Section::CallToAction {
            href: href.to_string(),
            text: record
                .button_text()
                .unwrap_or(DEFAULT_BUTTON_TEXT)
                .to_string(),
        });
    }

    UpdateView {
        id: record.id.clone(),
        title: record.title.clone(),
        date: record.date.clone(),
        date_label: date_label(&record.date),
        href: channel.detail_path(&record.id),
        kind: record.kind,
        badges: record
            .tags
            .iter()
            .map(|tag| Badge {
                label: tag.clone(),
                kind: record.kind,
            })
            .collect(),
        sections,
    }
}

/// Document title for a detail page; the bare site title when the update
/// is unknown.
pub fn detail_title(record: Option<&UpdateRecord>, settings: &SiteSettings) -> String {
    match record {
        Some(r) => format!("{} | {}", r.title, settings.title),
        None => settings.title.clone(),
    }
}

/// Build a released update's detail page.
pub fn render_detail(record: &UpdateRecord, settings: &SiteSettings) -> DetailPage {
    DetailPage {
        page_title: detail_title(Some(record), settings),
        back_href: Channel::Released.list_path().to_string(),
        update: update_view(record, Channel::Released),
    }
}

/// Build a timeline page: one entry per record, in catalog order.
pub fn render_list(catalog: &Catalog, channel: Channel, settings: &SiteSettings) -> ListPage {
    let (heading, page_title) = match channel {
        Channel::Released => (settings.released_heading.clone(), settings.title.clone()),
        Channel::Upcoming => (
            settings.upcoming_heading.clone(),
            format!("{} | {}", settings.upcoming_heading, settings.title),
        ),
    };
    ListPage {
        page_title,
        heading,
        channel,
        entries: catalog
            .updates
            .iter()
            .map(|record| update_view(record, channel))
            .collect(),
    }
}

// ============================================================================
// Tests
// ============================================================================
