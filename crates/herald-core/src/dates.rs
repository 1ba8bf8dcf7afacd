//! Date parsing and display.
//!
//! Released updates carry ISO `YYYY-MM-DD` dates which are shown in en-US
//! long form. Upcoming updates often carry free text ("March 2025"), which
//! is shown verbatim.

use chrono::NaiveDate;

use crate::{Error, Result};

const ISO_FORMAT: &str = "%Y-%m-%d";
const LONG_FORMAT: &str = "%B %-d, %Y";

/// Parse an ISO calendar date. Surrounding whitespace is ignored.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_FORMAT).ok()
}

/// Format an ISO date as en-US long form.
///
/// The date is treated as a calendar date, so no timezone can shift it.
///
/// ```rust
/// use herald_core::dates::format_date;
///
/// assert_eq!(format_date("2025-02-17").unwrap(), "February 17, 2025");
/// assert!(format_date("March 2025").is_err());
/// ```
pub fn format_date(iso: &str) -> Result<String> {
    parse_iso_date(iso)
        .map(|date| date.format(LONG_FORMAT).to_string())
        .ok_or_else(|| Error::invalid_date(iso))
}

/// Display label for a record date: long form for ISO input, the raw
/// string otherwise.
pub fn date_label(raw: &str) -> String {
    format_date(raw).unwrap_or_else(|_| raw.trim().to_string())
}
