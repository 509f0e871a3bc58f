//! Rendering and persistence for report values.
//!
//! The aggregation passes return structured values; everything textual
//! lives here: console report bodies, pretty JSON, and CSV export of
//! per-day totals.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::path::Path;

use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;
use tracing::debug;

use crate::reports::types::{CongestionReport, PeakReport, SummaryReport};

/// Renders the summary report as the console body.
pub fn render_summary(report: &SummaryReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Traffic Summary Report:");
    let _ = writeln!(out, "-----------------------");
    let _ = writeln!(out, "Total vehicles: {}", report.total_vehicles);

    for (date, count) in &report.vehicles_per_day {
        let _ = writeln!(out, "{date}: {count} vehicles");
    }

    let _ = writeln!(out, "Vehicle distribution:");
    for (vehicle_type, breakdown) in &report.vehicles_per_type {
        let _ = writeln!(
            out,
            "- {vehicle_type}: {} ({:.1}%)",
            breakdown.count, breakdown.percentage
        );
    }

    out
}

/// Renders the peak traffic report as the console body.
pub fn render_peak(report: &PeakReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Peak Traffic Times Report:");
    let _ = writeln!(out, "--------------------------");

    match &report.overall {
        Some(window) => {
            let _ = writeln!(
                out,
                "Peak traffic time (overall): {} {}:00 - {}:00 with {} vehicles",
                window.date, window.hour_start, window.hour_end, window.count
            );
        }
        None => {
            let _ = writeln!(out, "Peak traffic time (overall): none (no records)");
        }
    }

    for (date, peak) in &report.per_day {
        let _ = writeln!(
            out,
            "  - {date}: {}:00 - {}:00, {} vehicles",
            peak.hour_start, peak.hour_end, peak.count
        );
    }

    out
}

/// Renders the congestion report as the console body.
pub fn render_congestion(report: &CongestionReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Congestion Level Report:");
    let _ = writeln!(out, "------------------------");
    let _ = writeln!(
        out,
        "Average vehicles per day: {:.1}",
        report.average_vehicles_per_day
    );
    let _ = writeln!(out, "Average congestion level: {}", report.overall_tier);

    match &report.most_congested_day {
        Some(day) => {
            let _ = writeln!(
                out,
                "Most congested day: {} with {} vehicles",
                day.date, day.count
            );
        }
        None => {
            let _ = writeln!(out, "Most congested day: none (no records)");
        }
    }

    match &report.most_congested_hour {
        Some(window) => {
            let _ = writeln!(
                out,
                "Most congested period: {} {}:00 - {}:00, with {} vehicles",
                window.date, window.hour_start, window.hour_end, window.count
            );
        }
        None => {
            let _ = writeln!(out, "Most congested period: none (no records)");
        }
    }

    let _ = writeln!(out, "Congestion breakdown by day:");
    for (date, day) in &report.per_day {
        let _ = writeln!(out, "  - {date}: {} ({} vehicles)", day.tier, day.count);
    }

    out
}

/// Prints any report as pretty JSON on stdout.
pub fn print_json<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// One exported row of per-day totals.
#[derive(Serialize)]
struct DayRow<'a> {
    date: &'a str,
    vehicles: u64,
}

/// Appends per-day totals from a summary report to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_day_totals(path: &str, report: &SummaryReport) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending day totals");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    for (date, &vehicles) in &report.vehicles_per_day {
        writer.serialize(DayRow { date, vehicles })?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;
    use crate::reports::{congestion::congestion, peak::peak, summary::summarize};
    use std::env;
    use std::fs;

    const SAMPLE: &str = "TIME;VEHICLE_TYPE;SPEED\n\
                          2024-01-01 08:15:00;Car;60\n\
                          2024-01-01 08:30:00;Car;55\n\
                          2024-01-01 09:00:00;Truck;40";

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[test]
    fn test_render_summary_body() {
        let report = summarize(&parse_str(SAMPLE));
        let body = render_summary(&report);

        assert!(body.contains("Total vehicles: 3"));
        assert!(body.contains("2024-01-01: 3 vehicles"));
        assert!(body.contains("- Car: 2 (66.7%)"));
        assert!(body.contains("- Truck: 1 (33.3%)"));
    }

    #[test]
    fn test_render_peak_body() {
        let report = peak(&parse_str(SAMPLE));
        let body = render_peak(&report);

        assert!(body.contains("2024-01-01 8:00 - 9:00 with 2 vehicles"));
        assert!(body.contains("  - 2024-01-01: 8:00 - 9:00, 2 vehicles"));
    }

    #[test]
    fn test_render_reports_for_empty_dataset() {
        let peak_body = render_peak(&peak(&[]));
        assert!(peak_body.contains("none (no records)"));

        let congestion_body = render_congestion(&congestion(&[]));
        assert!(congestion_body.contains("Average vehicles per day: 0.0"));
        assert!(congestion_body.contains("Average congestion level: Low"));
    }

    #[test]
    fn test_print_json_does_not_panic() {
        let report = summarize(&parse_str(SAMPLE));
        print_json(&report).unwrap();
    }

    #[test]
    fn test_append_day_totals_creates_file() {
        let path = temp_path("traffic_report_test_create.csv");
        let _ = fs::remove_file(&path); // clean up any prior run

        let report = summarize(&parse_str(SAMPLE));
        append_day_totals(&path, &report).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("2024-01-01,3"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_append_day_totals_writes_header_once() {
        let path = temp_path("traffic_report_test_header.csv");
        let _ = fs::remove_file(&path);

        let report = summarize(&parse_str(SAMPLE));
        append_day_totals(&path, &report).unwrap();
        append_day_totals(&path, &report).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header_count = content.lines().filter(|l| l.starts_with("date")).count();
        assert_eq!(header_count, 1);
        assert_eq!(content.lines().count(), 3);

        fs::remove_file(&path).unwrap();
    }
}
