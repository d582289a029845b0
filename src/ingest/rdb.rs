/// USGS RDB line classification.
///
/// RDB (Research Data BYte-stream) is the tab-delimited text format returned by
/// the NWIS peak and daily-value services:
/// - `#` lines carry the metadata header
/// - one line of column names (`agency_cd	site_no	peak_dt	...`)
/// - one line of format descriptors (`5s	15s	10d	...`)
/// - data rows, each beginning with the agency code `USGS`
///
/// Only data rows matter here, and they are recognised purely by prefix. The
/// column layout is fixed per feed; see the index constants below.

use crate::error::ParseError;
use crate::model::Year;

/// Agency-code prefix that marks a data row.
pub const AGENCY_MARKER: &str = "USGS";

/// Observation date column, both feeds (`peak_dt` / `datetime`).
pub const DATE_FIELD: usize = 2;

/// Peak feed: `peak_va`, annual peak discharge in whole cfs.
pub const PEAK_VALUE_FIELD: usize = 4;

/// Daily-value feed: first value column (mean discharge, decimal).
pub const DAILY_VALUE_FIELD: usize = 3;

/// Returns the tab-delimited fields of a data row, or `None` for anything else
/// (comments, column header, format line, blank lines).
///
/// Field count is not checked; use [`field`] for indexed access.
pub fn classify_line(line: &str) -> Option<Vec<&str>> {
    if !line.starts_with(AGENCY_MARKER) {
        return None;
    }
    Some(line.split('\t').collect())
}

/// Indexed field access that reports short rows as `MissingField`.
pub fn field<'a>(fields: &[&'a str], index: usize, line: &str) -> Result<&'a str, ParseError> {
    fields
        .get(index)
        .copied()
        .ok_or_else(|| ParseError::MissingField {
            index,
            line: line.to_string(),
        })
}

/// The year of an observation date: everything before the first `-`.
///
/// `"1990-06-01"` and `"1990-06-01 12:00"` both give 1990. `"1990"` (no
/// separator) is accepted as-is.
pub fn year_key(date: &str) -> Result<Year, ParseError> {
    let head = date.split('-').next().unwrap_or(date);
    Year::parse(head).map_err(|_| ParseError::InvalidYear {
        date: date.to_string(),
    })
}

/// `None` for an empty value column, otherwise the value trimmed for parsing.
///
/// A whitespace-only column is not empty: it trims to `""` and fails to parse.
pub fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value.trim()) }
}
