//! Summary pass: vehicle counts by type and by day.

use std::collections::BTreeMap;

use super::types::{SummaryReport, TypeBreakdown};
use crate::record::{Record, date_key};

/// Share of `count` in `total` as a percentage. Returns 0.0 for a zero
/// total instead of dividing.
fn pct(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// Counts vehicles per type and per day.
///
/// The total is the full record count; percentages are taken against it,
/// so per-type shares always sum to 100 for a non-empty dataset. Map keys
/// iterate ascending.
pub fn summarize(records: &[Record]) -> SummaryReport {
    let total_vehicles = records.len() as u64;

    let mut per_type: BTreeMap<String, u64> = BTreeMap::new();
    let mut vehicles_per_day: BTreeMap<String, u64> = BTreeMap::new();

    for record in records {
        *per_type.entry(record.vehicle_type.clone()).or_default() += 1;

        if let Ok(date) = date_key(&record.timestamp) {
            *vehicles_per_day.entry(date.to_string()).or_default() += 1;
        }
    }

    let vehicles_per_type = per_type
        .into_iter()
        .map(|(vehicle_type, count)| {
            let breakdown = TypeBreakdown {
                count,
                percentage: pct(count, total_vehicles),
            };
            (vehicle_type, breakdown)
        })
        .collect();

    SummaryReport {
        total_vehicles,
        vehicles_per_day,
        vehicles_per_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: &str, vehicle_type: &str) -> Record {
        Record {
            timestamp: timestamp.to_string(),
            vehicle_type: vehicle_type.to_string(),
            speed: 50,
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record("2024-01-01 08:15:00", "Car"),
            record("2024-01-01 08:30:00", "Car"),
            record("2024-01-01 09:00:00", "Truck"),
        ]
    }

    #[test]
    fn test_summary_counts_and_percentages() {
        let report = summarize(&sample());

        assert_eq!(report.total_vehicles, 3);
        assert_eq!(report.vehicles_per_day["2024-01-01"], 3);
        assert_eq!(report.vehicles_per_type["Car"].count, 2);
        assert_eq!(report.vehicles_per_type["Truck"].count, 1);
        assert!((report.vehicles_per_type["Car"].percentage - 200.0 / 3.0).abs() < 1e-9);
        assert!((report.vehicles_per_type["Truck"].percentage - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_per_type_and_per_day_counts_sum_to_total() {
        let records = vec![
            record("2024-01-01 08:15:00", "Car"),
            record("2024-01-02 10:00:00", "Bus"),
            record("2024-01-02 11:00:00", "Bus"),
            record("2024-01-03 07:00:00", "Motorcycle"),
        ];
        let report = summarize(&records);

        let type_sum: u64 = report.vehicles_per_type.values().map(|t| t.count).sum();
        let day_sum: u64 = report.vehicles_per_day.values().sum();

        assert_eq!(type_sum, report.total_vehicles);
        assert_eq!(day_sum, report.total_vehicles);
        assert_eq!(report.total_vehicles, records.len() as u64);
    }

    #[test]
    fn test_empty_input_has_zero_total_and_no_percentages() {
        let report = summarize(&[]);

        assert_eq!(report.total_vehicles, 0);
        assert!(report.vehicles_per_day.is_empty());
        assert!(report.vehicles_per_type.is_empty());
    }

    #[test]
    fn test_keys_iterate_ascending() {
        let records = vec![
            record("2024-01-02 08:00:00", "Truck"),
            record("2024-01-01 08:00:00", "Bus"),
            record("2024-01-03 08:00:00", "Car"),
        ];
        let report = summarize(&records);

        let days: Vec<_> = report.vehicles_per_day.keys().cloned().collect();
        let types: Vec<_> = report.vehicles_per_type.keys().cloned().collect();

        assert_eq!(days, ["2024-01-01", "2024-01-02", "2024-01-03"]);
        assert_eq!(types, ["Bus", "Car", "Truck"]);
    }

    #[test]
    fn test_summary_is_idempotent() {
        let records = sample();
        assert_eq!(summarize(&records), summarize(&records));
    }
}
