//! Data-quality checks for loaded catalogs.
//!
//! None of these block serving. Lookup still resolves duplicated ids to the
//! first record, drifted counts are still shown as authored, and so on; the
//! diagnostics exist so that authors notice.

use std::collections::HashMap;
use std::fmt;

use herald_core::dates::parse_iso_date;
use herald_core::{Catalog, Channel, Site};

/// How bad a finding is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Suspicious but harmless.
    Warning,
    /// Some page will be wrong or unreachable.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// One finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// How bad it is.
    pub severity: Severity,
    /// Catalog it was found in.
    pub channel: Channel,
    /// Record it concerns, if any.
    pub id: Option<String>,
    /// What is wrong.
    pub message: String,
}

impl Diagnostic {
    fn new(severity: Severity, channel: Channel, id: Option<&str>, message: String) -> Self {
        Self {
            severity,
            channel,
            id: id.map(String::from),
            message,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(
                f,
                "{} [{}:{id}] {}",
                self.severity, self.channel, self.message
            ),
            None => write!(f, "{} [{}] {}", self.severity, self.channel, self.message),
        }
    }
}

/// Check both catalogs of a site.
pub fn validate_site(site: &Site) -> Vec<Diagnostic> {
    let mut out = validate_catalog(&site.released, Channel::Released);
    if let Some(upcoming) = &site.upcoming {
        out.extend(validate_catalog(upcoming, Channel::Upcoming));
    }
    out
}

/// Check one catalog.
pub fn validate_catalog(catalog: &Catalog, channel: Channel) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    check_ids(catalog, channel, &mut out);
    check_records(catalog, channel, &mut out);
    if channel == Channel::Released {
        check_chronology(catalog, &mut out);
    }
    check_metadata(catalog, channel, &mut out);
    out
}

fn check_ids(catalog: &Catalog, channel: Channel, out: &mut Vec<Diagnostic>) {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for (pos, update) in catalog.updates.iter().enumerate() {
        if update.id.trim().is_empty() {
            out.push(Diagnostic::new(
                Severity::Error,
                channel,
                None,
                format!("record #{} has an empty id", pos + 1),
            ));
            continue;
        }
        if let Some(first) = first_seen.get(update.id.as_str()) {
            out.push(Diagnostic::new(
                Severity::Error,
                channel,
                Some(&update.id),
                format!(
                    "duplicate id: records #{} and #{} share it; only the first is reachable",
                    first + 1,
                    pos + 1
                ),
            ));
        } else {
            first_seen.insert(&update.id, pos);
        }
    }
}

fn check_records(catalog: &Catalog, channel: Channel, out: &mut Vec<Diagnostic>) {
    for update in &catalog.updates {
        let id = Some(update.id.as_str());
        if update.title.trim().is_empty() {
            out.push(Diagnostic::new(
                Severity::Warning,
                channel,
                id,
                "title is empty".to_string(),
            ));
        }
        if channel == Channel::Released && parse_iso_date(&update.date).is_none() {
            out.push(Diagnostic::new(
                Severity::Warning,
                channel,
                id,
                format!(
                    "date '{}' is not YYYY-MM-DD and will be shown verbatim",
                    update.date
                ),
            ));
        }
        if update.button_url().is_some() && update.button_text().is_none() {
            out.push(Diagnostic::new(
                Severity::Warning,
                channel,
                id,
                "buttonUrl without buttonText; a default label will be used".to_string(),
            ));
        }
        if update.button_text().is_some() && update.button_url().is_none() {
            out.push(Diagnostic::new(
                Severity::Warning,
                channel,
                id,
                "buttonText without buttonUrl; no button will be shown".to_string(),
            ));
        }
    }
}

/// The timeline is drawn in stored order, so it should read newest first.
fn check_chronology(catalog: &Catalog, out: &mut Vec<Diagnostic>) {
    let dated: Vec<_> = catalog
        .updates
        .iter()
        .filter_map(|u| parse_iso_date(&u.date).map(|d| (u, d)))
        .collect();
    for pair in dated.windows(2) {
        let (prev, prev_date) = pair[0];
        let (next, next_date) = pair[1];
        if next_date > prev_date {
            out.push(Diagnostic::new(
                Severity::Warning,
                Channel::Released,
                Some(&next.id),
                format!(
                    "dated {} but listed after '{}' ({}); the timeline is not re-sorted",
                    next.date, prev.id, prev.date
                ),
            ));
        }
    }
}

fn check_metadata(catalog: &Catalog, channel: Channel, out: &mut Vec<Diagnostic>) {
    if let Some(total) = catalog.metadata.total_updates
        && total != catalog.len()
    {
        out.push(Diagnostic::new(
            Severity::Warning,
            channel,
            None,
            format!(
                "metadata.totalUpdates is {total} but the catalog has {} records",
                catalog.len()
            ),
        ));
    }

    let Some(last) = catalog.metadata.last_update.as_deref() else {
        return;
    };
    let Some(last_date) = parse_iso_date(last) else {
        out.push(Diagnostic::new(
            Severity::Warning,
            channel,
            None,
            format!("metadata.lastUpdate '{last}' is not YYYY-MM-DD"),
        ));
        return;
    };
    let newest = catalog
        .updates
        .iter()
        .filter_map(|u| parse_iso_date(&u.date))
        .max();
    if let Some(newest) = newest
        && newest != last_date
    {
        out.push(Diagnostic::new(
            Severity::Warning,
            channel,
            None,
            format!("metadata.lastUpdate is {last} but the newest record is dated {newest}"),
        ));
    }
}

/// Returns `true` if any diagnostic is an error.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(|d| d.severity == Severity::Error)
}

// ============================================================================
// Tests
// ============================================================================
