/// Comparison metadata CSV: one row per sequence, two rows per comparison
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use targetscreen_core::{ScreenerError, ScreenerResult};

pub const COMPARISON_COLUMN: &str = "Comparison #";
pub const REGION_COLUMN: &str = "Region";
pub const SEQUENCE_COLUMN: &str = "Sequence";

const REQUIRED_COLUMNS: [&str; 3] = [COMPARISON_COLUMN, REGION_COLUMN, SEQUENCE_COLUMN];

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetadataRow {
    #[serde(rename = "Comparison #")]
    pub comparison: u32,
    #[serde(rename = "Region")]
    pub region: String,
    /// Uppercase, whitespace removed
    #[serde(rename = "Sequence")]
    pub sequence: String,
}

pub fn read_metadata<P: AsRef<Path>>(path: P) -> ScreenerResult<Vec<MetadataRow>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let rows = read_metadata_from(file)?;
    tracing::debug!("Read {} metadata row(s) from {}", rows.len(), path.display());
    Ok(rows)
}

/// Parse metadata from any reader; extra columns are ignored
pub fn read_metadata_from<R: Read>(reader: R) -> ScreenerResult<Vec<MetadataRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| ScreenerError::Csv(e.to_string()))?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ScreenerError::MissingColumn(column.to_string()));
        }
    }

    let mut rows = Vec::new();
    for (index, result) in rdr.deserialize::<MetadataRow>().enumerate() {
        // Header is line 1
        let mut row = result
            .map_err(|e| ScreenerError::Parse(format!("metadata line {}: {}", index + 2, e)))?;
        row.sequence = row
            .sequence
            .split_whitespace()
            .collect::<String>()
            .to_ascii_uppercase();
        rows.push(row);
    }

    Ok(rows)
}
