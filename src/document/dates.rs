//! Dates carried by post filenames and front matter.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use regex::Regex;

static FILENAME_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<year>\d{4})-(?P<month>\d{2})-(?P<day>\d{2})-").expect("Invalid regex")
});

/// Formats with an explicit offset. `%z` accepts both `+0900` and `+09:00`.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M %z",
];

/// Formats without an offset, read as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];

const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// Parse the `YYYY-MM-DD-` prefix of a post file name.
///
/// Returns `None` when the prefix is missing or does not name a real calendar day.
#[must_use]
pub fn filename_date(file_name: &str) -> Option<NaiveDate> {
    let caps = FILENAME_DATE.captures(file_name)?;
    let year = caps["year"].parse().ok()?;
    let month = caps["month"].parse().ok()?;
    let day = caps["day"].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// A front matter `date` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatterDate {
    instant: DateTime<Utc>,
    offset: Option<FixedOffset>,
}

impl FrontMatterDate {
    /// Parse a front matter date.
    ///
    /// A trailing `Z` or ` UTC` counts as an explicit zero offset.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let normalized = normalize_utc_suffix(raw);

        if let Some(dt) = parse_with_offset(&normalized) {
            return Some(Self {
                instant: dt.with_timezone(&Utc),
                offset: Some(*dt.offset()),
            });
        }

        parse_naive(raw).map(|naive| Self {
            instant: Utc.from_utc_datetime(&naive),
            offset: None,
        })
    }

    /// Calendar day of the instant in UTC.
    #[must_use]
    pub fn utc_date(&self) -> NaiveDate {
        self.instant.date_naive()
    }

    /// The offset written in the value, if any.
    #[must_use]
    pub const fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    /// True for a zero offset or no offset at all.
    #[must_use]
    pub fn is_utc(&self) -> bool {
        self.offset().is_none_or(|o| o.local_minus_utc() == 0)
    }
}

fn normalize_utc_suffix(raw: &str) -> String {
    if let Some(stripped) = raw.strip_suffix(" UTC") {
        format!("{} +0000", stripped.trim_end())
    } else if let Some(stripped) = raw.strip_suffix('Z') {
        format!("{stripped}+00:00")
    } else {
        raw.to_string()
    }
}

fn parse_with_offset(raw: &str) -> Option<DateTime<FixedOffset>> {
    OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_ONLY_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

#[cfg(test)]
#[path = "dates_tests.rs"]
mod tests;
