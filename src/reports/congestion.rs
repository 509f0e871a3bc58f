//! Congestion pass: tier classification from vehicle-count thresholds.

use std::collections::BTreeMap;

use super::grouping::count_by_day_and_hour;
use super::tier::Tier;
use super::types::{CongestionReport, DayCongestion, DayTotal, HourWindow};
use crate::record::Record;

/// Classifies congestion for the dataset as a whole and per day.
///
/// The per-day average guards against a zero day count: an empty dataset
/// reports an average of 0.0 and tier Low. Maxima use the same
/// earliest-(date, hour) tie-break as the peak pass.
pub fn congestion(records: &[Record]) -> CongestionReport {
    let counts = count_by_day_and_hour(records);

    let total_vehicles: u64 = counts.per_day.values().sum();
    let day_count = counts.per_day.len();
    let average_vehicles_per_day = if day_count == 0 {
        0.0
    } else {
        total_vehicles as f64 / day_count as f64
    };

    let mut most_congested_day: Option<DayTotal> = None;
    for (date, &count) in &counts.per_day {
        if most_congested_day.as_ref().is_none_or(|d| count > d.count) {
            most_congested_day = Some(DayTotal {
                date: date.clone(),
                count,
            });
        }
    }

    let mut most_congested_hour: Option<HourWindow> = None;
    for (date, hours) in &counts.per_hour {
        for (&hour, &count) in hours {
            if most_congested_hour.as_ref().is_none_or(|w| count > w.count) {
                most_congested_hour = Some(HourWindow {
                    date: date.clone(),
                    hour_start: hour,
                    hour_end: hour + 1,
                    count,
                });
            }
        }
    }

    let per_day: BTreeMap<String, DayCongestion> = counts
        .per_day
        .iter()
        .map(|(date, &count)| {
            let day = DayCongestion {
                count,
                tier: Tier::for_count(count as f64),
            };
            (date.clone(), day)
        })
        .collect();

    CongestionReport {
        average_vehicles_per_day,
        overall_tier: Tier::for_count(average_vehicles_per_day),
        most_congested_day,
        most_congested_hour,
        per_day,
    }
}
