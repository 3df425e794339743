use crate::sequence::Sequence;
use std::path::Path;
use targetscreen_core::{ScreenerError, ScreenerResult};

/// Read every record of a FASTA file, normalizing sequences to uppercase
pub fn read_fasta<P: AsRef<Path>>(path: P) -> ScreenerResult<Vec<Sequence>> {
    let path = path.as_ref();
    let reader = bio::io::fasta::Reader::from_file(path).map_err(|e| {
        ScreenerError::Parse(format!("Cannot open FASTA {}: {}", path.display(), e))
    })?;

    let mut sequences = Vec::new();
    for record in reader.records() {
        let record = record
            .map_err(|e| ScreenerError::Parse(format!("{}: {}", path.display(), e)))?;
        let mut sequence = Sequence::new(record.id().to_string(), record.seq().to_vec());
        if let Some(desc) = record.desc() {
            sequence = sequence.with_description(desc.to_string());
        }
        sequences.push(sequence);
    }

    tracing::debug!("Read {} record(s) from {}", sequences.len(), path.display());
    Ok(sequences)
}
