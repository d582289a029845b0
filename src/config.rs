/// Service configuration loader - parses floodviz.toml
///
/// Keeps service endpoints and parsing policy out of the code, so the NWIS
/// hosts can be pointed at a mirror (or a test server) without recompiling.
/// Every key has a default; a missing file means "all defaults".

use serde::Deserialize;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ConfigError;
use crate::ingest::daily_value::DailyValueScan;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "floodviz.toml";

/// Environment variable that overrides the configuration path.
pub const CONFIG_PATH_ENV: &str = "FLOODVIZ_CONFIG";

pub const DEFAULT_PEAK_URL: &str = "https://nwis.waterdata.usgs.gov/nwis/peak";
pub const DEFAULT_SERVICE_URL: &str = "https://waterservices.usgs.gov/nwis";

/// Root configuration structure for TOML parsing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub nwis: NwisConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// NWIS endpoints and feed handling
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NwisConfig {
    /// Peak streamflow service (queried with `?site_no=...`)
    pub peak_url: String,
    /// Web-services root; the daily-value service lives at `<service_url>/dv/`
    pub service_url: String,
    /// Request timeout. `None` leaves the HTTP client's default in place.
    pub timeout_secs: Option<u64>,
    pub daily_value_scan: DailyValueScan,
}

impl Default for NwisConfig {
    fn default() -> Self {
        Self {
            peak_url: DEFAULT_PEAK_URL.to_string(),
            service_url: DEFAULT_SERVICE_URL.to_string(),
            timeout_secs: None,
            daily_value_scan: DailyValueScan::default(),
        }
    }
}

/// HTTP endpoint settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Fallback filter when RUST_LOG is unset (e.g. "info", "floodviz_peaks=debug")
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Parses configuration from TOML text. `origin` is only used in errors.
pub fn parse_config(contents: &str, origin: &str) -> Result<Config, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: origin.to_string(),
        source,
    })
}

/// Loads configuration from `path`, falling back to defaults when the file
/// does not exist.
///
/// # Errors
/// - `ConfigError::Io` — the file exists but could not be read.
/// - `ConfigError::Parse` — the file is not valid TOML for [`Config`].
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let display = path.display().to_string();
    match fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents, &display),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
        Err(source) => Err(ConfigError::Io {
            path: display,
            source,
        }),
    }
}

/// Loads configuration from `explicit`, else `$FLOODVIZ_CONFIG`, else
/// `floodviz.toml`. A `.env` file is read first if present.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    dotenv::dotenv().ok();

    match explicit {
        Some(path) => load_config_from(path),
        None => {
            let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
            load_config_from(Path::new(&path))
        }
    }
}
