//! Shared day/hour grouping for the peak and congestion passes.

use std::collections::BTreeMap;

use crate::record::{Record, date_key, hour_key};

/// Per-day and per-(day, hour) vehicle counts, keyed ascending.
#[derive(Debug, Default)]
pub(crate) struct DayHourCounts {
    pub(crate) per_day: BTreeMap<String, u64>,
    pub(crate) per_hour: BTreeMap<String, BTreeMap<u32, u64>>,
}

/// Folds records into per-day and per-(day, hour) counters.
///
/// Records whose timestamp yields no keys are ignored. Parser output is
/// pre-validated, so this only affects hand-built records; either way the
/// aggregation passes never fail.
pub(crate) fn count_by_day_and_hour(records: &[Record]) -> DayHourCounts {
    let mut counts = DayHourCounts::default();

    for record in records {
        let (Ok(date), Ok(hour)) = (date_key(&record.timestamp), hour_key(&record.timestamp))
        else {
            continue;
        };

        *counts.per_day.entry(date.to_string()).or_default() += 1;
        *counts
            .per_hour
            .entry(date.to_string())
            .or_default()
            .entry(hour)
            .or_default() += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: &str) -> Record {
        Record {
            timestamp: timestamp.to_string(),
            vehicle_type: "Car".to_string(),
            speed: 50,
        }
    }

    #[test]
    fn test_counts_by_day_and_hour() {
        let records = vec![
            record("2024-01-01 08:15:00"),
            record("2024-01-01 08:45:00"),
            record("2024-01-01 09:05:00"),
            record("2024-01-02 08:00:00"),
        ];

        let counts = count_by_day_and_hour(&records);

        assert_eq!(counts.per_day["2024-01-01"], 3);
        assert_eq!(counts.per_day["2024-01-02"], 1);
        assert_eq!(counts.per_hour["2024-01-01"][&8], 2);
        assert_eq!(counts.per_hour["2024-01-01"][&9], 1);
        assert_eq!(counts.per_hour["2024-01-02"][&8], 1);
    }

    #[test]
    fn test_unkeyable_records_are_ignored() {
        let records = vec![record("2024-01-01 08:15:00"), record("garbage")];
        let counts = count_by_day_and_hour(&records);

        assert_eq!(counts.per_day.len(), 1);
        assert_eq!(counts.per_day["2024-01-01"], 1);
    }

    #[test]
    fn test_empty_input() {
        let counts = count_by_day_and_hour(&[]);
        assert!(counts.per_day.is_empty());
        assert!(counts.per_hour.is_empty());
    }
}
