/// NWIS RDB feed client.
///
/// Handles URL construction and blocking retrieval for the two services the
/// annual chart draws from:
///   peak:        https://nwis.waterdata.usgs.gov/nwis/peak
///   daily value: https://waterservices.usgs.gov/nwis/dv/
///
/// Fetch failures never become errors. They come back as
/// `Feed::Unavailable` and the corresponding extractor contributes nothing.

use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::model::{Feed, FeedUnavailable};

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds a peak streamflow query for one site, up to `end_date` (YYYY-MM-DD).
///
/// # Example
/// ```
/// use floodviz_peaks::ingest::nwis::build_peak_url;
///
/// let url = build_peak_url(
///     "https://nwis.waterdata.usgs.gov/nwis/peak",
///     "05567500",
///     "2024-05-01",
/// );
/// assert!(url.ends_with("?site_no=05567500&agency_cd=USGS&format=rdb&end_date=2024-05-01"));
/// ```
pub fn build_peak_url(peak_url: &str, site: &str, end_date: &str) -> String {
    format!(
        "{}?site_no={}&agency_cd=USGS&format=rdb&end_date={}",
        peak_url,
        urlencoding::encode(site),
        end_date
    )
}

/// Builds a single-day daily-value query (`startDT` and `endDT` both `date`).
///
/// `service_url` is the NWIS web-services root, with or without a trailing
/// slash; `dv/` is appended.
///
/// # Example
/// ```
/// use floodviz_peaks::ingest::nwis::build_dv_url;
///
/// let url = build_dv_url("https://waterservices.usgs.gov/nwis/", "05567500", "2024-05-01");
/// assert_eq!(
///     url,
///     "https://waterservices.usgs.gov/nwis/dv/?format=rdb&sites=05567500\
///      &startDT=2024-05-01&endDT=2024-05-01&siteStatus=all"
/// );
/// ```
pub fn build_dv_url(service_url: &str, site: &str, date: &str) -> String {
    format!(
        "{}/dv/?format=rdb&sites={}&startDT={}&endDT={}&siteStatus=all",
        service_url.trim_end_matches('/'),
        urlencoding::encode(site),
        date,
        date
    )
}

// ---------------------------------------------------------------------------
// Retrieval
// ---------------------------------------------------------------------------

/// GETs `url` and returns its body as lines.
///
/// Only status 200 counts as data; redirects are followed by the client.
/// No retries.
pub fn fetch_feed(client: &reqwest::blocking::Client, url: &str) -> Feed {
    debug!(%url, "fetching RDB feed");

    let response = match client.get(url).send() {
        Ok(r) => r,
        Err(e) => {
            warn!(%url, error = %e, "NWIS request failed");
            return Feed::Unavailable(FeedUnavailable::Transport(e.to_string()));
        }
    };

    let status = response.status();
    if status != StatusCode::OK {
        warn!(%url, status = status.as_u16(), "NWIS returned non-200 status");
        return Feed::Unavailable(FeedUnavailable::Status(status.as_u16()));
    }

    match response.text() {
        Ok(body) => Feed::from_text(&body),
        Err(e) => {
            warn!(%url, error = %e, "failed to read NWIS response body");
            Feed::Unavailable(FeedUnavailable::Transport(e.to_string()))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
