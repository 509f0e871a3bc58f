//! Parser for semicolon-delimited traffic-sensor logs.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::warn;

use crate::record::Record;

/// Parses a sensor log from a reader into validated records.
///
/// The first line is a header and is discarded without validation. Rows
/// with fewer than three fields are padded with empty-string defaults
/// before validation. Rows whose speed is not a base-10 integer, or whose
/// timestamp yields no date/hour key, are skipped with a diagnostic on the
/// logging channel; ingestion always continues. Input order is preserved.
pub fn parse_reader<R: Read>(reader: R) -> Vec<Record> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();

    for row in rdr.records() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!(error = %e, "Unreadable row skipped");
                continue;
            }
        };

        let time = row.get(0).unwrap_or("");
        let vehicle_type = row.get(1).unwrap_or("");
        let speed = row.get(2).unwrap_or("");

        match Record::from_fields(time, vehicle_type, speed) {
            Ok(record) => records.push(record),
            Err(reason) => {
                let line = row.iter().collect::<Vec<_>>().join(";");
                warn!(%line, %reason, "Malformed record skipped");
            }
        }
    }

    records
}

/// Parses a sensor log held in memory. See [`parse_reader`].
pub fn parse_str(input: &str) -> Vec<Record> {
    parse_reader(input.as_bytes())
}

/// Reads and parses a sensor log from disk.
///
/// An unreadable source is not fatal: a diagnostic is emitted and an empty
/// record set is returned, leaving downstream reports to their empty-input
/// behavior. The file handle is dropped on every exit path.
pub fn read_log_file<P: AsRef<Path>>(path: P) -> Vec<Record> {
    match File::open(path.as_ref()) {
        Ok(file) => parse_reader(file),
        Err(e) => {
            warn!(
                path = %path.as_ref().display(),
                error = %e,
                "Sensor log unavailable, continuing with empty dataset"
            );
            Vec::new()
        }
    }
}
