//! CSV output writer.

use std::fs::File;
use std::io::Write;

use serde::Serialize;

use crate::error::{ChatlensError, Result};
use crate::record::Record;

const HEADER: [&str; 5] = ["Timestamp", "Sender", "Content", "IsMedia", "HasLink"];

/// Writes a record view to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Sender`, `Content`, `IsMedia`, `HasLink`
/// - Timestamp: `YYYY-MM-DD HH:MM:SS`
/// - Encoding: UTF-8
pub fn write_csv(records: &[&Record], output_path: &str) -> Result<()> {
    let csv = to_csv(records)?;
    let mut file = File::create(output_path)?;
    file.write_all(csv.as_bytes())?;
    Ok(())
}

/// Converts a record view to a CSV string.
///
/// Same format as [`write_csv`]. Multi-line contents are quoted, not split.
pub fn to_csv(records: &[&Record]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record(build_row(record))?;
    }

    finish(writer)
}

/// Converts one summary table (monthly counts, top senders, ...) to CSV.
///
/// Headers come from the row type's field names.
pub fn summary_to_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    for row in rows {
        writer.serialize(row)?;
    }

    finish(writer)
}

fn build_row(record: &Record) -> [String; 5] {
    [
        record.timestamp().format("%Y-%m-%d %H:%M:%S").to_string(),
        record.sender().to_string(),
        record.content().to_string(),
        record.is_media().to_string(),
        record.has_link().to_string(),
    ]
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ChatlensError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
