//! Annual peak streamflow series for flood charts
//!
//! Builds one `{label, value}` point per year for a USGS site, preferring the
//! NWIS peak streamflow record and falling back to a daily value for years the
//! peak record does not cover.
//!
//! Usage:
//!   floodviz_peaks fetch --site 05567500                  # print JSON series
//!   floodviz_peaks parse --peak peak.rdb --daily dv.rdb   # offline, from files
//!   floodviz_peaks serve --port 8080                      # HTTP endpoint
//!
//! Environment:
//!   FLOODVIZ_CONFIG - configuration file (default: floodviz.toml)
//!   RUST_LOG        - log filter (default: logging.level from config)

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use floodviz_peaks::config::{self, Config};
use floodviz_peaks::endpoint;
use floodviz_peaks::error::Result;
use floodviz_peaks::ingest::daily_value::DailyValueScan;
use floodviz_peaks::model::AnnualRecord;
use floodviz_peaks::service::{self, AnnualPeakService};

#[derive(Parser)]
#[command(name = "floodviz_peaks", version, about = "Annual peak streamflow series for flood charts")]
struct Cli {
    /// Configuration file (overrides FLOODVIZ_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch both NWIS feeds for a site and print the merged series
    Fetch {
        #[arg(long)]
        site: String,
        /// Last day of the peak record query (default: today)
        #[arg(long, value_parser = parse_date)]
        end_date: Option<NaiveDate>,
        /// Day requested from the daily-value service (default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Merge RDB files already on disk
    Parse {
        #[arg(long)]
        peak: PathBuf,
        #[arg(long)]
        daily: Option<PathBuf>,
        /// Stop the daily-value scan at the first year the peak feed covers
        #[arg(long)]
        stop_at_first_seen: bool,
    },
    /// Serve chart data over HTTP
    Serve {
        /// Listen port (default: server.port from config)
        #[arg(long)]
        port: Option<u16>,
    },
}

fn parse_date(text: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config::load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config);

    match run(cli.command, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command, config: Config) -> Result<()> {
    match command {
        Command::Fetch { site, end_date, date } => {
            let today = Local::now().date_naive();
            let service = AnnualPeakService::new(config.nwis)?;
            let records = service.annual_peaks(
                &site,
                end_date.unwrap_or(today),
                date.unwrap_or(today),
            )?;
            print_records(&records)
        }
        Command::Parse { peak, daily, stop_at_first_seen } => {
            let scan = DailyValueScan::resolve(stop_at_first_seen, config.nwis.daily_value_scan);
            let records = service::merge_rdb_files(&peak, daily.as_deref(), scan)?;
            print_records(&records)
        }
        Command::Serve { port } => {
            let port = port.unwrap_or(config.server.port);
            let service = AnnualPeakService::new(config.nwis)?;
            info!(port, "starting floodviz_peaks endpoint");
            endpoint::start_endpoint_server(port, &service)
        }
    }
}

fn print_records(records: &[AnnualRecord]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}
