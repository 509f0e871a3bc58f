//! Peak pass: busiest one-hour windows, overall and per day.

use std::collections::BTreeMap;

use super::grouping::count_by_day_and_hour;
use super::types::{DayPeak, HourWindow, PeakReport};
use crate::record::Record;

/// Finds the busiest hour window across the dataset and within each day.
///
/// Buckets are visited in ascending (date, hour) order and a window is
/// replaced only by a strictly greater count, so ties resolve to the
/// earliest date, then the earliest hour. An empty dataset reports no
/// overall window.
pub fn peak(records: &[Record]) -> PeakReport {
    let counts = count_by_day_and_hour(records);

    let mut overall: Option<HourWindow> = None;
    let mut per_day: BTreeMap<String, DayPeak> = BTreeMap::new();

    for (date, hours) in &counts.per_hour {
        let mut day_best: Option<DayPeak> = None;

        for (&hour, &count) in hours {
            if overall.as_ref().is_none_or(|w| count > w.count) {
                overall = Some(HourWindow {
                    date: date.clone(),
                    hour_start: hour,
                    hour_end: hour + 1,
                    count,
                });
            }

            if day_best.as_ref().is_none_or(|p| count > p.count) {
                day_best = Some(DayPeak {
                    hour_start: hour,
                    hour_end: hour + 1,
                    count,
                });
            }
        }

        if let Some(best) = day_best {
            per_day.insert(date.clone(), best);
        }
    }

    PeakReport { overall, per_day }
}
