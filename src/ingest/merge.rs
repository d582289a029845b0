/// Peak / daily-value merge.
///
/// Both extractors thread one `AnnualSeries` by value: the peak feed goes in
/// first and claims its years, then the daily-value feed fills in the years
/// that are still open. The series enforces one entry per year and keeps
/// insertion order, so the merged output is every peak record in feed order
/// followed by the daily-value fallbacks in feed order.

use std::collections::HashMap;

use tracing::debug;

use crate::error::ParseError;
use crate::ingest::daily_value::{self, DailyValueScan};
use crate::ingest::peak_flow;
use crate::model::{AnnualRecord, Feed, FeedKind, Year};

/// Ordered year → record map for a single merge.
///
/// A year can be claimed without a record (a peak row with an empty value);
/// such a year blocks any later fallback but contributes nothing to the output.
/// Each claimed year remembers which feed claimed it.
#[derive(Debug, Default, Clone)]
pub struct AnnualSeries {
    seen: HashMap<Year, FeedKind>,
    records: Vec<AnnualRecord>,
}

impl AnnualSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, year: Year) -> bool {
        self.seen.contains_key(&year)
    }

    /// The feed that claimed `year`, if any.
    pub fn claimed_by(&self, year: Year) -> Option<FeedKind> {
        self.seen.get(&year).copied()
    }

    /// Marks `year` claimed by the peak feed with no record. Returns false if
    /// it already was claimed.
    pub fn acknowledge(&mut self, year: Year) -> bool {
        if self.seen.contains_key(&year) {
            return false;
        }
        self.seen.insert(year, FeedKind::Peak);
        true
    }

    /// Appends `record` if its year is still open. Returns false (and drops the
    /// record) otherwise.
    pub fn insert(&mut self, record: AnnualRecord) -> bool {
        if self.seen.contains_key(&record.label) {
            return false;
        }
        self.seen.insert(record.label, record.source);
        self.records.push(record);
        true
    }

    /// Records a value for a year the caller has just acknowledged.
    pub(crate) fn push_claimed(&mut self, record: AnnualRecord) {
        debug_assert!(self.seen.contains_key(&record.label));
        debug_assert!(self.records.iter().all(|r| r.label != record.label));
        self.records.push(record);
    }

    /// Number of years claimed, with or without a record.
    pub fn years_seen(&self) -> usize {
        self.seen.len()
    }

    pub fn records(&self) -> &[AnnualRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<AnnualRecord> {
        self.records
    }
}

/// Merges the peak and daily-value feeds for one site into chart records.
///
/// # Errors
/// Any `ParseError` from either feed aborts the whole merge.
pub fn merge_annual_records(
    peak: &Feed,
    daily: &Feed,
    scan: DailyValueScan,
) -> Result<Vec<AnnualRecord>, ParseError> {
    let series = peak_flow::extract_peak_records(peak, AnnualSeries::new())?;
    let peak_count = series.records().len();
    let series = daily_value::extract_daily_values(daily, series, scan)?;

    debug!(
        peak_records = peak_count,
        daily_records = series.records().len() - peak_count,
        years_seen = series.years_seen(),
        "merged annual records"
    );

    Ok(series.into_records())
}
