//! Report values produced by the aggregation passes.
//!
//! All maps are `BTreeMap` so iteration (and serialization) order is
//! ascending by key, which keeps reports reproducible across runs.

use serde::Serialize;
use std::collections::BTreeMap;

use super::tier::Tier;

/// Per-vehicle-type slice of the summary report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeBreakdown {
    pub count: u64,
    /// Share of the total in percent; 0.0 when the dataset is empty.
    pub percentage: f64,
}

/// Vehicle counts by type and by day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub total_vehicles: u64,
    pub vehicles_per_day: BTreeMap<String, u64>,
    pub vehicles_per_type: BTreeMap<String, TypeBreakdown>,
}

/// A one-hour interval `[hour_start, hour_end)` on a given date.
///
/// Hours use the record's local 0-23 numbering; hour 23 renders as
/// 23:00 - 24:00, there is no wraparound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourWindow {
    pub date: String,
    pub hour_start: u32,
    pub hour_end: u32,
    pub count: u64,
}

/// Busiest hour within a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPeak {
    pub hour_start: u32,
    pub hour_end: u32,
    pub count: u64,
}

/// Peak traffic windows, overall and per day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeakReport {
    /// `None` when the dataset is empty.
    pub overall: Option<HourWindow>,
    pub per_day: BTreeMap<String, DayPeak>,
}

/// Total vehicles observed on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayTotal {
    pub date: String,
    pub count: u64,
}

/// A day's total together with its congestion tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCongestion {
    pub count: u64,
    pub tier: Tier,
}

/// Congestion classification of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CongestionReport {
    /// 0.0 when no distinct days exist.
    pub average_vehicles_per_day: f64,
    pub overall_tier: Tier,
    pub most_congested_day: Option<DayTotal>,
    pub most_congested_hour: Option<HourWindow>,
    pub per_day: BTreeMap<String, DayCongestion>,
}
