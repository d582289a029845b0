/// Shared data types: years, annual chart records and raw feeds.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::ParseError;

// ---------------------------------------------------------------------------
// Year
// ---------------------------------------------------------------------------

/// A 4-digit calendar year taken from an RDB observation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Year(u16);

impl Year {
    /// Parses exactly four ASCII digits ("1990", "0999").
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if text.len() != 4 || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidYear {
                date: text.to_string(),
            });
        }
        text.parse::<u16>()
            .map(Year)
            .map_err(|_| ParseError::InvalidYear {
                date: text.to_string(),
            })
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

// Chart labels are strings, not numbers.
impl Serialize for Year {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// Annual records
// ---------------------------------------------------------------------------

/// Which NWIS feed a record or line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Peak,
    DailyValue,
}

/// Measurement for one year. Peak values are integer cfs, daily values decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordValue {
    Integer(i64),
    Float(f64),
}

/// One chart point: `{"label": "1990", "value": 500}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualRecord {
    pub label: Year,
    pub value: RecordValue,
    #[serde(skip)]
    pub source: FeedKind,
}

impl AnnualRecord {
    pub fn peak(label: Year, value: i64) -> Self {
        Self {
            label,
            value: RecordValue::Integer(value),
            source: FeedKind::Peak,
        }
    }

    pub fn daily_value(label: Year, value: f64) -> Self {
        Self {
            label,
            value: RecordValue::Float(value),
            source: FeedKind::DailyValue,
        }
    }
}

// ---------------------------------------------------------------------------
// Feeds
// ---------------------------------------------------------------------------

/// Why a feed could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedUnavailable {
    /// Connection refused, DNS failure, bad URL, body read failure
    Transport(String),
    /// Any status other than 200
    Status(u16),
    /// No query or file was given for this feed
    NotRequested,
}

/// Raw response text of one NWIS query, or the reason there is none.
#[derive(Debug, Clone, PartialEq)]
pub enum Feed {
    Lines(Vec<String>),
    Unavailable(FeedUnavailable),
}

impl Feed {
    /// Splits a response body into lines (handles `\r\n`).
    pub fn from_text(text: &str) -> Self {
        Feed::Lines(text.lines().map(str::to_string).collect())
    }

    /// The feed's lines; empty when unavailable.
    pub fn lines(&self) -> &[String] {
        match self {
            Feed::Lines(lines) => lines.as_slice(),
            Feed::Unavailable(_) => &[],
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Feed::Lines(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_requires_four_digits() {
        assert_eq!(Year::parse("1990").unwrap().value(), 1990);
        assert!(Year::parse("199").is_err());
        assert!(Year::parse("19900").is_err());
        assert!(Year::parse("19a0").is_err());
        assert!(Year::parse("+990").is_err());
        assert!(Year::parse("").is_err());
    }

    #[test]
    fn test_year_displays_zero_padded() {
        assert_eq!(Year::parse("0999").unwrap().to_string(), "0999");
    }

    #[test]
    fn test_record_serializes_as_chart_point() {
        let year = Year::parse("1990").unwrap();
        let peak = serde_json::to_string(&AnnualRecord::peak(year, 500)).unwrap();
        assert_eq!(peak, r#"{"label":"1990","value":500}"#);

        let dv = serde_json::to_string(&AnnualRecord::daily_value(year, 250.0)).unwrap();
        assert_eq!(dv, r#"{"label":"1990","value":250.0}"#);
    }

    #[test]
    fn test_unavailable_feed_has_no_lines() {
        let feed = Feed::Unavailable(FeedUnavailable::Status(503));
        assert!(feed.lines().is_empty());
        assert!(!feed.is_available());
    }

    #[test]
    fn test_feed_from_text_splits_crlf() {
        let feed = Feed::from_text("# comment\r\nUSGS\t01\r\n");
        assert_eq!(feed.lines(), &["# comment".to_string(), "USGS\t01".to_string()]);
    }
}
