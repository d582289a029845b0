/// USGS Daily Values (DV) feed extractor, RDB flavour.
///
/// The daily-value service fills in years the peak record has not reached
/// yet (typically the current water year). Values are decimal mean discharge.

use serde::Deserialize;
use tracing::debug;

use crate::error::ParseError;
use crate::ingest::merge::AnnualSeries;
use crate::ingest::rdb::{self, DAILY_VALUE_FIELD, DATE_FIELD};
use crate::model::{AnnualRecord, Feed, FeedKind};

/// What to do on a daily-value row whose year is already claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyValueScan {
    /// Skip the row and keep scanning.
    #[default]
    SkipSeen,
    /// Stop reading the feed at the first year the peak feed claimed. Only
    /// correct when the feed is sorted so that no open year follows a
    /// peak-covered one. Repeats of a year this feed already recorded are
    /// skipped, not stopped on.
    StopAtFirstSeen,
}

impl DailyValueScan {
    /// The configured policy, or `StopAtFirstSeen` when forced by a flag.
    pub fn resolve(stop_at_first_seen: bool, configured: Self) -> Self {
        if stop_at_first_seen {
            DailyValueScan::StopAtFirstSeen
        } else {
            configured
        }
    }
}

/// Adds a float record for each daily-value year not yet in `series`.
///
/// A recorded daily value claims its year, so at most one record per year
/// comes out of this feed. Rows with an empty value column claim nothing.
/// `StopAtFirstSeen` only stops on years claimed by the peak feed.
///
/// # Errors
/// - `ParseError::MissingField` — row shorter than the value column.
/// - `ParseError::InvalidYear` — `datetime` does not start with a year.
/// - `ParseError::InvalidFloat` — value column is not a number.
pub fn extract_daily_values(
    feed: &Feed,
    mut series: AnnualSeries,
    scan: DailyValueScan,
) -> Result<AnnualSeries, ParseError> {
    for line in feed.lines() {
        let Some(fields) = rdb::classify_line(line) else {
            continue;
        };

        let year = rdb::year_key(rdb::field(&fields, DATE_FIELD, line)?)?;
        match (series.claimed_by(year), scan) {
            (None, _) => {}
            (Some(FeedKind::Peak), DailyValueScan::StopAtFirstSeen) => {
                debug!(%year, "year covered by peak feed, ending daily-value scan");
                break;
            }
            (Some(_), _) => continue,
        }

        let raw = rdb::field(&fields, DAILY_VALUE_FIELD, line)?;
        if let Some(value) = rdb::non_empty(raw) {
            let mean = value
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidFloat {
                    value: value.to_string(),
                })?;
            series.insert(AnnualRecord::daily_value(year, mean));
        }
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::fixtures::DV_RDB_CURRENT_YEAR;
    use crate::model::{RecordValue, Year};

    fn feed(lines: &[&str]) -> Feed {
        Feed::Lines(lines.iter().map(|l| l.to_string()).collect())
    }

    fn claimed(years: &[&str]) -> AnnualSeries {
        let mut series = AnnualSeries::new();
        for y in years {
            series.acknowledge(Year::parse(y).unwrap());
        }
        series
    }

    #[test]
    fn test_extract_current_year_fixture() {
        let series = extract_daily_values(
            &Feed::from_text(DV_RDB_CURRENT_YEAR),
            AnnualSeries::new(),
            DailyValueScan::SkipSeen,
        )
        .unwrap();
        let records = series.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label.to_string(), "2024");
        assert_eq!(records[0].value, RecordValue::Float(42300.5));
    }

    #[test]
    fn test_skip_seen_continues_past_claimed_year() {
        let lines = feed(&[
            "USGS\t01\t1990-06-01\t300\tA",
            "USGS\t01\t1992-06-01\t250\tA",
        ]);
        let series = extract_daily_values(&lines, claimed(&["1990"]), DailyValueScan::SkipSeen)
            .unwrap();
        assert_eq!(series.records().len(), 1);
        assert_eq!(series.records()[0].label.to_string(), "1992");
    }

    #[test]
    fn test_stop_at_first_seen_ignores_rest_of_feed() {
        // The bad value after the claimed year is never parsed.
        let lines = feed(&[
            "USGS\t01\t1989-06-01\t100\tA",
            "USGS\t01\t1990-06-01\t300\tA",
            "USGS\t01\t1992-06-01\tEqp\tA",
        ]);
        let series =
            extract_daily_values(&lines, claimed(&["1990"]), DailyValueScan::StopAtFirstSeen)
                .unwrap();
        assert_eq!(series.records().len(), 1);
        assert_eq!(series.records()[0].label.to_string(), "1989");
    }

    #[test]
    fn test_stop_at_first_seen_skips_own_repeated_year() {
        let lines = feed(&[
            "USGS\t01\t2023-01-01\t1.5\tA",
            "USGS\t01\t2023-01-02\t2.5\tA",
            "USGS\t01\t2024-01-01\t4.5\tA",
        ]);
        let series =
            extract_daily_values(&lines, AnnualSeries::new(), DailyValueScan::StopAtFirstSeen)
                .unwrap();
        let labels: Vec<String> = series.records().iter().map(|r| r.label.to_string()).collect();
        assert_eq!(labels, vec!["2023", "2024"]);
    }

    #[test]
    fn test_resolve_flag_overrides_configured_policy() {
        assert_eq!(
            DailyValueScan::resolve(true, DailyValueScan::SkipSeen),
            DailyValueScan::StopAtFirstSeen
        );
        assert_eq!(
            DailyValueScan::resolve(false, DailyValueScan::SkipSeen),
            DailyValueScan::SkipSeen
        );
        assert_eq!(
            DailyValueScan::resolve(false, DailyValueScan::StopAtFirstSeen),
            DailyValueScan::StopAtFirstSeen
        );
    }

    #[test]
    fn test_whitespace_value_is_an_error() {
        let result = extract_daily_values(
            &feed(&["USGS\t01\t1992-06-01\t \tA"]),
            AnnualSeries::new(),
            DailyValueScan::SkipSeen,
        );
        assert!(matches!(result, Err(ParseError::InvalidFloat { .. })));
    }

    #[test]
    fn test_second_value_in_same_year_is_dropped() {
        let lines = feed(&[
            "USGS\t01\t1992-06-01\t250\tA",
            "USGS\t01\t1992-06-02\t260\tA",
        ]);
        let series =
            extract_daily_values(&lines, AnnualSeries::new(), DailyValueScan::SkipSeen).unwrap();
        assert_eq!(series.records().len(), 1);
        assert_eq!(series.records()[0].value, RecordValue::Float(250.0));
    }

    #[test]
    fn test_empty_value_leaves_year_open() {
        let lines = feed(&[
            "USGS\t01\t1992-06-01\t\tA",
            "USGS\t01\t1992-06-02\t260\tA",
        ]);
        let series =
            extract_daily_values(&lines, AnnualSeries::new(), DailyValueScan::SkipSeen).unwrap();
        assert_eq!(series.records().len(), 1);
        assert_eq!(series.records()[0].value, RecordValue::Float(260.0));
    }

    #[test]
    fn test_non_numeric_value_is_an_error() {
        let result = extract_daily_values(
            &feed(&["USGS\t01\t1992-06-01\tIce\tA"]),
            AnnualSeries::new(),
            DailyValueScan::SkipSeen,
        );
        assert_eq!(
            result.unwrap_err(),
            ParseError::InvalidFloat { value: "Ice".to_string() }
        );
    }

    #[test]
    fn test_short_row_is_missing_field() {
        let result = extract_daily_values(
            &feed(&["USGS\t01\t1992-06-01"]),
            AnnualSeries::new(),
            DailyValueScan::SkipSeen,
        );
        assert!(matches!(result, Err(ParseError::MissingField { index: 3, .. })));
    }

    #[test]
    fn test_scan_policy_deserializes_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            scan: DailyValueScan,
        }
        let w: Wrapper = toml::from_str(r#"scan = "stop_at_first_seen""#).unwrap();
        assert_eq!(w.scan, DailyValueScan::StopAtFirstSeen);
        assert_eq!(DailyValueScan::default(), DailyValueScan::SkipSeen);
    }
}
