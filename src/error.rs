/// Error types for the annual peak pipeline.
///
/// Transport failures are deliberately absent here: a feed that cannot be
/// fetched is reported as `Feed::Unavailable` and never surfaces as an error.
/// Everything below aborts the invocation it occurs in.

use thiserror::Error;

/// Result type alias using the crate's top-level error.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error for the service, endpoint and CLI.
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("RDB parse error: {0}")]
    Parse(#[from] ParseError),

    /// Building the HTTP client failed (bad TLS setup, invalid timeout, ...)
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP server error: {0}")]
    Server(String),
}

/// A data line violated the RDB column contract.
///
/// The upstream service owns the data contract, so none of these are retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("line has no field at index {index}: {line:?}")]
    MissingField { index: usize, line: String },

    #[error("date {date:?} does not start with a 4-digit year")]
    InvalidYear { date: String },

    #[error("peak value {value:?} is not an integer")]
    InvalidInteger { value: String },

    #[error("daily value {value:?} is not a number")]
    InvalidFloat { value: String },
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
