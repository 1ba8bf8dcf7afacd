//! HTML output via embedded minijinja templates.

use minijinja::{Environment, context};
use serde::Serialize;

use herald_core::config::SiteSettings;
use herald_core::{Channel, Error, Result, Site};

use crate::view::{detail_title, render_detail, render_list};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("update.html", include_str!("../templates/update.html")),
    ("list.html", include_str!("../templates/list.html")),
    ("detail.html", include_str!("../templates/detail.html")),
    ("not_found.html", include_str!("../templates/not_found.html")),
];

/// Header and footer context shared by every page.
#[derive(Debug, Serialize)]
struct Chrome<'a> {
    site: &'a SiteSettings,
    active: Option<Channel>,
    has_upcoming: bool,
}

/// Renders complete HTML documents for a [`Site`].
pub struct HtmlRenderer {
    env: Environment<'static>,
    settings: SiteSettings,
}

impl HtmlRenderer {
    /// Create a renderer with the built-in templates.
    pub fn new(settings: SiteSettings) -> Result<Self> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source).map_err(template_error)?;
        }
        Ok(Self { env, settings })
    }

    /// Branding in use.
    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Render the timeline for `channel`.
    ///
    /// Returns [`Error::NotFound`] when the site has no catalog for that
    /// channel.
    pub fn list_page(&self, site: &Site, channel: Channel) -> Result<String> {
        let catalog = site
            .catalog(channel)
            .ok_or_else(|| Error::not_found(channel.list_path()))?;
        let page = render_list(catalog, channel, &self.settings);
        log::debug!("Rendering {} listing ({} entries)", channel, page.entries.len());
        self.render(
            "list.html",
            context! {
                page_title => &page.page_title,
                chrome => self.chrome(site, Some(channel)),
                page => &page,
            },
        )
    }

    /// Render the detail page of a released update.
    pub fn detail_page(&self, site: &Site, id: &str) -> Result<String> {
        let record = site.released.get(id)?;
        let page = render_detail(record, &self.settings);
        self.render(
            "detail.html",
            context! {
                page_title => &page.page_title,
                chrome => self.chrome(site, None),
                page => &page,
            },
        )
    }

    /// Render the "not found" page, optionally naming the missing update.
    ///
    /// An unknown update id keeps the bare site title, as its detail page
    /// would have.
    pub fn not_found_page(&self, site: &Site, missing_id: Option<&str>) -> Result<String> {
        let page_title = match missing_id {
            Some(_) => detail_title(None, &self.settings),
            None => format!("Not Found | {}", self.settings.title),
        };
        self.render(
            "not_found.html",
            context! {
                page_title => page_title,
                chrome => self.chrome(site, None),
                missing_id => missing_id,
            },
        )
    }

    fn chrome<'a>(&'a self, site: &Site, active: Option<Channel>) -> Chrome<'a> {
        Chrome {
            site: &self.settings,
            active,
            has_upcoming: site.upcoming.is_some(),
        }
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String> {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(ctx))
            .map_err(template_error)
    }
}

impl std::fmt::Debug for HtmlRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlRenderer")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

fn template_error(err: minijinja::Error) -> Error {
    Error::render(err.to_string())
}

// ============================================================================
// Tests
// ============================================================================
