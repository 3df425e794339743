//! Delimited screening tables, one per screening direction
use std::io::Write;
use targetscreen_bio::ScreeningRecord;
use targetscreen_core::{ScreenerError, ScreenerResult, TableFormat};

/// Fixed column order of a persisted screening table
pub const SCREENING_COLUMNS: [&str; 8] = [
    "Position",
    "Sequence",
    "Length",
    "Matched",
    "Conservation",
    "Score",
    "Score Max",
    "Score-wise Conservation",
];

/// Write the header and one row per record; the header is written even when `records` is empty
pub fn write_screening_table<W: Write>(
    writer: W,
    records: &[ScreeningRecord],
    format: TableFormat,
) -> ScreenerResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(format.delimiter())
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(SCREENING_COLUMNS).map_err(csv_error)?;
    for record in records {
        wtr.serialize(record).map_err(csv_error)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render a screening table to a string
pub fn render_screening_table(
    records: &[ScreeningRecord],
    format: TableFormat,
) -> ScreenerResult<String> {
    let mut buffer = Vec::new();
    write_screening_table(&mut buffer, records, format)?;
    String::from_utf8(buffer).map_err(|e| ScreenerError::Serialization(e.to_string()))
}

fn csv_error(err: csv::Error) -> ScreenerError {
    ScreenerError::Csv(err.to_string())
}
