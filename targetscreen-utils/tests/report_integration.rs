/// Integration tests for persisted and ranked screening tables
use pretty_assertions::assert_eq;
use std::fs::File;
use targetscreen_bio::alignment::ScoringModel;
use targetscreen_bio::screening::ScreeningPipeline;
use targetscreen_bio::Sequence;
use targetscreen_core::{TableFormat, WindowConfig};
use targetscreen_test::{assert_screening_table, init_test_logging, TestEnvironment, PERFECT_REPEAT};
use targetscreen_utils::{ranked_hits_table, render_screening_table, write_screening_table};

#[test]
fn test_pipeline_output_round_trips_through_file() {
    init_test_logging();
    let env = TestEnvironment::new().unwrap();
    let input = Sequence::from_text("input", PERFECT_REPEAT);

    let report = ScreeningPipeline::new(
        &input,
        &input,
        &WindowConfig::new(18, 21),
        ScoringModel::default(),
        0.8,
    )
    .unwrap()
    .run()
    .unwrap();

    let path = env.output_path("input_input_refseq_input.csv");
    write_screening_table(File::create(&path).unwrap(), &report.records, TableFormat::Csv)
        .unwrap();

    let content = env.read_to_string(&path).unwrap();
    let rows = assert_screening_table(&content);
    assert_eq!(rows.len(), report.records.len());

    let first: Vec<&str> = rows[0].split(',').collect();
    assert_eq!(first[0], "1");
    assert_eq!(first[2], "18");
    assert_eq!(first[3], "18");
    assert_eq!(&first[4..], &["1.0", "36.0", "36", "1.0"]);
}

#[test]
fn test_empty_report_still_writes_header() {
    let env = TestEnvironment::new().unwrap();
    let path = env.output_path("empty.csv");
    write_screening_table(File::create(&path).unwrap(), &[], TableFormat::Csv).unwrap();

    let content = env.read_to_string(&path).unwrap();
    assert!(assert_screening_table(&content).is_empty());
}

#[test]
fn test_tsv_matches_csv_cell_for_cell() {
    let input = Sequence::from_text("input", PERFECT_REPEAT);
    let report = ScreeningPipeline::new(
        &input,
        &input,
        &WindowConfig::new(19, 21),
        ScoringModel::default(),
        0.8,
    )
    .unwrap()
    .run()
    .unwrap();

    let csv = render_screening_table(&report.records, TableFormat::Csv).unwrap();
    let tsv = render_screening_table(&report.records, TableFormat::Tsv).unwrap();
    assert_eq!(csv.replace(',', "\t"), tsv);
}

#[test]
fn test_ranked_table_lists_every_hit_within_limit() {
    let input = Sequence::from_text("input", PERFECT_REPEAT);
    let report = ScreeningPipeline::new(
        &input,
        &input,
        &WindowConfig::new(18, 21),
        ScoringModel::default(),
        0.8,
    )
    .unwrap()
    .run()
    .unwrap();

    let table = ranked_hits_table(&report, 100);
    assert_eq!(table.row_iter().count(), report.len());
    assert_eq!(ranked_hits_table(&report, 1).row_iter().count(), 1);
}
