/// USGS Peak Streamflow feed extractor
///
/// Turns the annual peak streamflow record into one chart record per year.
/// Format: Tab-delimited RDB (see `rdb.rs`)
/// Source: https://nwis.waterdata.usgs.gov/nwis/peak?site_no={site}&agency_cd=USGS&format=rdb&end_date={date}
///
/// The peak record is authoritative: any year it lists is claimed before the
/// daily-value fallback runs. A site can report more than one peak event for a
/// year; only the first row for a year counts.

use tracing::debug;

use crate::error::ParseError;
use crate::ingest::merge::AnnualSeries;
use crate::ingest::rdb::{self, DATE_FIELD, PEAK_VALUE_FIELD};
use crate::model::{AnnualRecord, Feed};

/// Claims every year listed in the peak feed and records integer peak values.
///
/// Per data row:
/// - year already claimed → row skipped
/// - otherwise the year is claimed, even if `peak_va` is empty
/// - non-empty `peak_va` → `AnnualRecord::peak`
///
/// An unavailable feed returns `series` untouched.
///
/// # Errors
/// - `ParseError::MissingField` — row shorter than the `peak_va` column.
/// - `ParseError::InvalidYear` — `peak_dt` does not start with a year.
/// - `ParseError::InvalidInteger` — `peak_va` is not a whole number.
pub fn extract_peak_records(
    feed: &Feed,
    mut series: AnnualSeries,
) -> Result<AnnualSeries, ParseError> {
    for line in feed.lines() {
        let Some(fields) = rdb::classify_line(line) else {
            continue;
        };

        let year = rdb::year_key(rdb::field(&fields, DATE_FIELD, line)?)?;
        if !series.acknowledge(year) {
            debug!(%year, "skipping additional peak for year");
            continue;
        }

        let raw = rdb::field(&fields, PEAK_VALUE_FIELD, line)?;
        if let Some(value) = rdb::non_empty(raw) {
            let peak_va = value
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidInteger {
                    value: value.to_string(),
                })?;
            // Year was just acknowledged; push the record past the seen check.
            series.push_claimed(AnnualRecord::peak(year, peak_va));
        }
    }

    Ok(series)
}
