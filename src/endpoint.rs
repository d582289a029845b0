/// HTTP endpoint serving annual peak chart data
///
/// Endpoints:
/// - GET /peaks/{site_code}?end_date=YYYY-MM-DD&date=YYYY-MM-DD
///   - `end_date`: last day of the peak record query (default: today)
///   - `date`: the single day requested from the daily-value service (default: today)
/// - GET /health - Service health check
///
/// Requests are handled one at a time on the accept loop.

use chrono::{Local, NaiveDate};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::service::AnnualPeakService;

const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");
const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

/// Maps a request URL (path plus query) to a status code and JSON body.
pub fn route(service: &AnnualPeakService, url: &str) -> (u16, Value) {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));

    if path == "/health" {
        return handle_health();
    }

    if let Some(site_code) = path.strip_prefix("/peaks/") {
        let site_code = decode(site_code);
        if site_code.is_empty() || site_code.contains('/') {
            return not_found();
        }
        return handle_peaks(service, &site_code, query);
    }

    not_found()
}

fn handle_health() -> (u16, Value) {
    (
        200,
        json!({
            "status": "ok",
            "service": SERVICE_NAME,
            "version": SERVICE_VERSION
        }),
    )
}

fn handle_peaks(service: &AnnualPeakService, site_code: &str, query: &str) -> (u16, Value) {
    let today = Local::now().date_naive();

    let end_date = match date_param(query, "end_date", today) {
        Ok(d) => d,
        Err(body) => return (400, body),
    };
    let date = match date_param(query, "date", today) {
        Ok(d) => d,
        Err(body) => return (400, body),
    };

    match service.annual_peaks(site_code, end_date, date) {
        Ok(records) => match serde_json::to_value(&records) {
            Ok(body) => (200, body),
            Err(e) => (500, json!({ "error": e.to_string(), "site_code": site_code })),
        },
        Err(e) => {
            warn!(site_code, error = %e, "upstream RDB data rejected");
            (502, json!({ "error": e.to_string(), "site_code": site_code }))
        }
    }
}

fn not_found() -> (u16, Value) {
    (
        404,
        json!({
            "error": "Not found",
            "available_endpoints": ["/health", "/peaks/{site_code}"]
        }),
    )
}

/// Reads a `YYYY-MM-DD` query parameter, `default` when absent or empty.
fn date_param(query: &str, name: &str, default: NaiveDate) -> std::result::Result<NaiveDate, Value> {
    let raw = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| decode(value));

    match raw {
        None => Ok(default),
        Some(v) if v.is_empty() => Ok(default),
        Some(v) => NaiveDate::parse_from_str(&v, "%Y-%m-%d").map_err(|_| {
            json!({
                "error": format!("invalid {} '{}', expected YYYY-MM-DD", name, v),
            })
        }),
    }
}

fn decode(text: &str) -> String {
    urlencoding::decode(text)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| text.to_string())
}

// ---------------------------------------------------------------------------
// HTTP Server
// ---------------------------------------------------------------------------

/// Start HTTP endpoint server on the specified port
pub fn start_endpoint_server(port: u16, service: &AnnualPeakService) -> Result<()> {
    let server = tiny_http::Server::http(format!("0.0.0.0:{}", port))
        .map_err(|e| Error::Server(format!("failed to start HTTP server: {}", e)))?;

    info!(port, "HTTP endpoint listening");
    info!("   GET /peaks/{{site_code}} - Annual peak series");
    info!("   GET /health - Service health check");

    for request in server.incoming_requests() {
        let (status, body) = route(service, request.url());
        info!(method = %request.method(), url = request.url(), status, "request");

        if let Err(e) = request.respond(create_response(status, &body)) {
            warn!(error = %e, "failed to send response");
        }
    }

    Ok(())
}

/// Create HTTP response with JSON body
fn create_response(status_code: u16, json: &Value) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let body = serde_json::to_string_pretty(json).unwrap_or_default();

    let response = tiny_http::Response::from_data(body.into_bytes())
        .with_status_code(tiny_http::StatusCode::from(status_code));

    match tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
