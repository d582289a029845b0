/// floodviz_peaks: annual peak streamflow series for flood charts.
///
/// Fetches the USGS NWIS peak streamflow record and a daily-value fallback
/// for a site, and reduces them to one `{label, value}` point per year.
///
/// # Module structure
///
/// ```text
/// floodviz_peaks
/// ├── model       — shared data types (Year, AnnualRecord, Feed, …)
/// ├── error       — ParseError, ConfigError and the top-level Error
/// ├── config      — service configuration loader (floodviz.toml)
/// ├── service     — sequential fetch + merge for one site
/// ├── endpoint    — JSON HTTP API for the chart front end
/// └── ingest
///     ├── nwis        — NWIS peak / daily-value URL construction + retrieval
///     ├── rdb         — RDB data-line classification and field access
///     ├── peak_flow   — peak feed → integer annual records
///     ├── daily_value — daily-value feed → float fallback records
///     ├── merge       — AnnualSeries and the peak-first merge
///     └── fixtures (test only) — representative RDB payloads
/// ```

pub mod config;
pub mod endpoint;
pub mod error;
pub mod ingest;
pub mod model;
pub mod service;
