//! CLI entry point for the traffic report tool.
//!
//! Loads the sensor log once at startup, then renders the selected report:
//! one-shot subcommands for each report, a CSV export of per-day totals,
//! and the interactive menu loop.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::ffi::OsStr;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use traffic_report::{
    fetch::{BasicClient, fetch_bytes},
    output,
    parser::{parse_str, read_log_file},
    record::Record,
    reports::{congestion::congestion, peak::peak, summary::summarize},
};

#[derive(Parser)]
#[command(name = "traffic_report")]
#[command(about = "Aggregate reports over a semicolon-delimited traffic-sensor log", long_about = None)]
struct Cli {
    /// Path or URL of the sensor log
    #[arg(value_name = "FILE_OR_URL")]
    source: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Vehicle counts by type and by day
    Summary {
        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Busiest one-hour windows, overall and per day
    Peak {
        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Congestion tiers from vehicle-count thresholds
    Congestion {
        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Append per-day vehicle totals to a CSV file
    Export {
        /// CSV file to append day totals to
        #[arg(short, long, default_value = "day_totals.csv")]
        output: String,
    },
    /// Interactive report menu (1=Summary, 2=Peak, 3=Congestion, 4=Exit)
    Menu,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/traffic_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("traffic_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let records = load_records(&cli.source).await;
    info!(
        record_count = records.len(),
        source = %cli.source,
        "Sensor log loaded"
    );

    match cli.command {
        Commands::Summary { json } => {
            print_report(&summarize(&records), json, output::render_summary)?;
        }
        Commands::Peak { json } => {
            print_report(&peak(&records), json, output::render_peak)?;
        }
        Commands::Congestion { json } => {
            print_report(&congestion(&records), json, output::render_congestion)?;
        }
        Commands::Export { output: path } => {
            let report = summarize(&records);
            output::append_day_totals(&path, &report)?;
            info!(path = %path, days = report.vehicles_per_day.len(), "Day totals exported");
        }
        Commands::Menu => {
            run_menu(&records)?;
        }
    }

    Ok(())
}

/// Loads the sensor log from a local file path or fetches it over HTTP.
///
/// Any failure degrades to an empty record set with a diagnostic; every
/// report is well-defined over zero records.
#[tracing::instrument(fields(source = %source))]
async fn load_records(source: &str) -> Vec<Record> {
    if source.starts_with("http") {
        let client = BasicClient::new();
        match fetch_bytes(&client, source).await {
            Ok(bytes) => parse_str(&String::from_utf8_lossy(&bytes)),
            Err(e) => {
                warn!(error = %e, "Sensor log fetch failed, continuing with empty dataset");
                Vec::new()
            }
        }
    } else {
        read_log_file(source)
    }
}

/// Prints a report on stdout, as text or pretty JSON.
fn print_report<T: Serialize>(report: &T, json: bool, render: impl Fn(&T) -> String) -> Result<()> {
    if json {
        output::print_json(report)
    } else {
        print!("{}", render(report));
        Ok(())
    }
}

/// The interactive selector loop: reads a choice per line until Exit or EOF.
fn run_menu(records: &[Record]) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("Traffic Report Menu:");
        println!("1. Traffic Summary Report");
        println!("2. Peak Traffic Times Report");
        println!("3. Congestion Level Report");
        println!("4. Exit");
        print!("Enter your choice: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break; // EOF behaves like Exit
        };

        match line?.trim() {
            "1" => print!("{}", output::render_summary(&summarize(records))),
            "2" => print!("{}", output::render_peak(&peak(records))),
            "3" => print!("{}", output::render_congestion(&congestion(records))),
            "4" => {
                println!("Exiting...");
                break;
            }
            other => println!("Invalid choice {other:?}. Please select a valid option."),
        }
    }

    Ok(())
}
