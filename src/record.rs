//! The validated traffic observation and its derived grouping keys.

use chrono::NaiveDate;
use thiserror::Error;

/// Number of leading timestamp characters that form the date key (`YYYY-MM-DD`).
const DATE_KEY_LEN: usize = 10;

/// Byte range of the hour digits in a `YYYY-MM-DD HH:MM:SS` timestamp.
const HOUR_DIGITS: std::ops::Range<usize> = 11..13;

/// A timestamp that cannot yield a date or hour key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("timestamp {0:?} is too short for date and hour keys")]
    TooShort(String),
    #[error("timestamp holds no valid calendar date: {0:?}")]
    InvalidDate(String),
    #[error("timestamp holds no valid hour (00-23): {0:?}")]
    InvalidHour(String),
}

/// A raw log line that cannot become a [`Record`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("speed {0:?} is not a base-10 integer")]
    InvalidSpeed(String),
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

/// One validated traffic observation.
///
/// Immutable once created; the collection returned by the parser owns all
/// records for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Raw observation time, `YYYY-MM-DD HH:MM:SS` or a compatible form.
    pub timestamp: String,
    pub vehicle_type: String,
    pub speed: i32,
}

impl Record {
    /// Builds a record from the three raw log fields.
    ///
    /// The speed must parse as a base-10 integer and the timestamp must
    /// yield both grouping keys; otherwise the offending field is named in
    /// the returned error and no record is produced.
    pub fn from_fields(
        timestamp: &str,
        vehicle_type: &str,
        speed: &str,
    ) -> Result<Self, RecordError> {
        let speed = speed
            .parse::<i32>()
            .map_err(|_| RecordError::InvalidSpeed(speed.to_string()))?;
        date_key(timestamp)?;
        hour_key(timestamp)?;

        Ok(Record {
            timestamp: timestamp.to_string(),
            vehicle_type: vehicle_type.to_string(),
            speed,
        })
    }
}

/// Extracts the `YYYY-MM-DD` grouping key from a timestamp.
///
/// The first ten characters must form a real calendar date; anything after
/// them is not inspected here.
pub fn date_key(timestamp: &str) -> Result<&str, TimestampError> {
    let date = timestamp
        .get(..DATE_KEY_LEN)
        .ok_or_else(|| TimestampError::TooShort(timestamp.to_string()))?;

    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| TimestampError::InvalidDate(date.to_string()))?;

    Ok(date)
}

/// Extracts the hour-of-day grouping key (0-23) from a timestamp.
pub fn hour_key(timestamp: &str) -> Result<u32, TimestampError> {
    let digits = timestamp
        .get(HOUR_DIGITS)
        .ok_or_else(|| TimestampError::TooShort(timestamp.to_string()))?;

    let hour = digits
        .parse::<u32>()
        .map_err(|_| TimestampError::InvalidHour(digits.to_string()))?;

    if hour > 23 {
        return Err(TimestampError::InvalidHour(digits.to_string()));
    }

    Ok(hour)
}
