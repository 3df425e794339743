//! Terminal summary of the best screening hits
use crate::output::{create_standard_table, format_number, format_ratio, header_cell};
use comfy_table::{Cell, CellAlignment, Table};
use targetscreen_bio::{ScreeningReport, Sequence};

/// Top `limit` records of a report, best first, with the antisense oligo for each target
pub fn ranked_hits_table(report: &ScreeningReport, limit: usize) -> Table {
    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("Rank"),
        header_cell("Position"),
        header_cell("Length"),
        header_cell("Target"),
        header_cell("Antisense"),
        header_cell("Conservation"),
        header_cell("Score-wise"),
    ]);

    for (rank, record) in report.ranked().into_iter().take(limit).enumerate() {
        let antisense = Sequence::from_text("", &record.sequence).reverse_complement();
        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(format_number(record.position)).set_alignment(CellAlignment::Right),
            Cell::new(record.length).set_alignment(CellAlignment::Right),
            Cell::new(&record.sequence),
            Cell::new(String::from_utf8_lossy(&antisense)),
            Cell::new(format_ratio(record.conservation)).set_alignment(CellAlignment::Right),
            Cell::new(format_ratio(record.scorewise_conservation))
                .set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use targetscreen_bio::ScreeningRecord;

    fn record(position: usize, sequence: &str, scorewise: f64) -> ScreeningRecord {
        let length = sequence.len();
        ScreeningRecord {
            position,
            sequence: sequence.to_string(),
            length,
            matched: length,
            conservation: 1.0,
            score: scorewise * length as f64 * 2.0,
            score_max: length as f64 * 2.0,
            scorewise_conservation: scorewise,
        }
    }

    fn report() -> ScreeningReport {
        ScreeningReport {
            input_id: "in".to_string(),
            reference_id: "ref".to_string(),
            records: vec![
                record(1, "AACCG", 0.5),
                record(7, "GGTTA", 1.0),
                record(12, "ATATC", 0.75),
            ],
            candidates_considered: 10,
            records_retained: 3,
            windows_rejected: 0,
        }
    }

    #[test]
    fn test_ranked_order_and_antisense() {
        let rendered = ranked_hits_table(&report(), 10).to_string();

        let best = rendered.find("GGTTA").unwrap();
        let middle = rendered.find("ATATC").unwrap();
        let worst = rendered.find("AACCG").unwrap();
        assert!(best < middle && middle < worst);

        // Antisense of GGTTA
        assert!(rendered.contains("TAACC"));
        assert!(rendered.contains("100.0%"));
    }

    #[test]
    fn test_limit_truncates_rows() {
        let table = ranked_hits_table(&report(), 2);
        assert_eq!(table.row_iter().count(), 2);
        assert!(!table.to_string().contains("AACCG"));
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let table = ranked_hits_table(&ScreeningReport::default(), 5);
        assert_eq!(table.row_iter().count(), 0);
        assert!(table.to_string().contains("Antisense"));
    }
}
