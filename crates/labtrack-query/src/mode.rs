//! Match modes for filterable fields.
//!
//! A [`MatchMode`] fixes how a raw filter string is interpreted for one
//! field. String modes use the raw text as given; the parsed modes turn it
//! into a typed [`Criterion`] or report a [`ValueParseError`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::ValueParseError;
use crate::predicate::Criterion;

/// Datetime layouts accepted by date-equality filters, tried in order
/// after plain `YYYY-MM-DD` and RFC 3339.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Date-only layouts tried last.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Comparison semantics assigned to a filterable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Case-sensitive string equality.
    Exact,
    /// Case-sensitive substring test.
    Contains,
    /// Calendar date equality, ignoring time of day and timezone.
    DateEquality,
    /// `"true"` / `"false"`, case-insensitive.
    BoolEquality,
    /// Signed integer equality.
    IntEquality,
}

impl MatchMode {
    /// Interprets a raw, non-blank filter value for this mode.
    pub fn criterion(self, raw: &str) -> Result<Criterion, ValueParseError> {
        match self {
            MatchMode::Exact => Ok(Criterion::Equals(raw.to_string())),
            MatchMode::Contains => Ok(Criterion::Contains(raw.to_string())),
            MatchMode::DateEquality => parse_date(raw.trim())
                .map(Criterion::OnDate)
                .ok_or_else(|| ValueParseError::new(self, raw)),
            MatchMode::BoolEquality => parse_bool(raw.trim())
                .map(Criterion::Is)
                .ok_or_else(|| ValueParseError::new(self, raw)),
            MatchMode::IntEquality => raw
                .trim()
                .parse::<i64>()
                .map(Criterion::Int)
                .map_err(|_| ValueParseError::new(self, raw)),
        }
    }

    /// Returns the display name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Exact => "exact",
            MatchMode::Contains => "contains",
            MatchMode::DateEquality => "date",
            MatchMode::BoolEquality => "bool",
            MatchMode::IntEquality => "int",
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses a calendar date, discarding any time of day or offset.
///
/// RFC 3339 input keeps the date as written; `2024-01-15T23:00:00-05:00`
/// is the 15th, not the 16th in UTC.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMATS[0]) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local().date());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS[1..]
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        })
}

fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
