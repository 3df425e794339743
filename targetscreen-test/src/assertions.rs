//! Custom assertions for screening output

use targetscreen_bio::ScreeningRecord;

pub const SCREENING_HEADER: &str =
    "Position,Sequence,Length,Matched,Conservation,Score,Score Max,Score-wise Conservation";

/// Every retained record must clear both retention rules and be internally consistent
pub fn assert_record_invariants(records: &[ScreeningRecord], threshold: f64, match_score: f64) {
    for record in records {
        assert!(
            record.conservation >= threshold,
            "Record at {} has conservation {} below threshold {}",
            record.position,
            record.conservation,
            threshold
        );
        assert!(
            record.score >= record.length as f64,
            "Record at {} has score {} below its length {}",
            record.position,
            record.score,
            record.length
        );
        assert_eq!(
            record.matched,
            (record.conservation * record.length as f64).round() as usize,
            "Matched count disagrees with conservation at {}",
            record.position
        );
        let expected = record.score / (record.length as f64 * match_score);
        assert!(
            (record.scorewise_conservation - expected).abs() < 1e-9,
            "Score-wise conservation {} != {} at {}",
            record.scorewise_conservation,
            expected,
            record.position
        );
        assert_eq!(record.sequence.len(), record.length);
        assert!(
            !record.sequence.contains("CTGCTGCTG"),
            "Record at {} contains the excluded repeat",
            record.position
        );
    }
}

/// Check the header and return the data lines of a persisted screening table
pub fn assert_screening_table(content: &str) -> Vec<&str> {
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some(SCREENING_HEADER), "Unexpected table header");
    let rows: Vec<&str> = lines.filter(|l| !l.is_empty()).collect();
    for row in &rows {
        assert_eq!(
            row.split(',').count(),
            8,
            "Row does not have eight columns: {}",
            row
        );
    }
    rows
}
