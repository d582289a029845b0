/// Annual peak chart data for one site.
///
/// Runs the whole pipeline sequentially: peak feed, then daily-value feed,
/// then the merge. Nothing overlaps and nothing is retried.

use std::fs;
use std::path::Path;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::info;

use crate::config::NwisConfig;
use crate::error::{ParseError, Result};
use crate::ingest::daily_value::DailyValueScan;
use crate::ingest::merge::merge_annual_records;
use crate::ingest::nwis::{build_dv_url, build_peak_url, fetch_feed};
use crate::model::{AnnualRecord, Feed, FeedUnavailable};

/// NWIS date parameter format
const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct AnnualPeakService {
    client: reqwest::blocking::Client,
    config: NwisConfig,
}

impl AnnualPeakService {
    /// Builds the service and its HTTP client from config.
    pub fn new(config: NwisConfig) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// Peak feed for `site` up to `end_date`.
    pub fn fetch_peak_feed(&self, site: &str, end_date: NaiveDate) -> Feed {
        let url = build_peak_url(
            &self.config.peak_url,
            site,
            &end_date.format(DATE_FORMAT).to_string(),
        );
        fetch_feed(&self.client, &url)
    }

    /// Daily-value feed for `site` on the single day `date`.
    pub fn fetch_daily_value_feed(&self, site: &str, date: NaiveDate) -> Feed {
        let url = build_dv_url(
            &self.config.service_url,
            site,
            &date.format(DATE_FORMAT).to_string(),
        );
        fetch_feed(&self.client, &url)
    }

    /// One chart record per year for `site`.
    ///
    /// Unavailable feeds shrink the result (possibly to nothing); they never
    /// fail it.
    ///
    /// # Errors
    /// `ParseError` when either feed breaks the RDB column contract.
    pub fn annual_peaks(
        &self,
        site: &str,
        end_date: NaiveDate,
        date: NaiveDate,
    ) -> std::result::Result<Vec<AnnualRecord>, ParseError> {
        let peak = self.fetch_peak_feed(site, end_date);
        let daily = self.fetch_daily_value_feed(site, date);

        let records = merge_annual_records(&peak, &daily, self.config.daily_value_scan)?;
        info!(
            site,
            peak_available = peak.is_available(),
            daily_available = daily.is_available(),
            records = records.len(),
            "built annual peak series"
        );
        Ok(records)
    }
}

/// Reads a saved RDB response from disk.
pub fn read_feed(path: &Path) -> Result<Feed> {
    let text = fs::read_to_string(path)?;
    Ok(Feed::from_text(&text))
}

/// Offline merge of RDB files already on disk.
///
/// Without a daily-value file the daily feed is treated as unavailable, so
/// the result is the peak records alone.
pub fn merge_rdb_files(
    peak: &Path,
    daily: Option<&Path>,
    scan: DailyValueScan,
) -> Result<Vec<AnnualRecord>> {
    let peak_feed = read_feed(peak)?;
    let daily_feed = match daily {
        Some(path) => read_feed(path)?,
        None => Feed::Unavailable(FeedUnavailable::NotRequested),
    };
    let records = merge_annual_records(&peak_feed, &daily_feed, scan)?;
    info!(
        peak = %peak.display(),
        daily_available = daily_feed.is_available(),
        records = records.len(),
        "merged RDB files"
    );
    Ok(records)
}
