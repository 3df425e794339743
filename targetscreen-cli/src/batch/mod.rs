//! Batch screening of metadata comparisons
//!
//! Every comparison with exactly two metadata rows is screened in both
//! directions and each direction's table is handed to a [`ResultSink`].
//! Comparisons with any other row count are skipped and listed in the
//! [`BatchSummary`].

pub mod metadata;
pub mod pairing;
pub mod sink;

pub use metadata::{read_metadata, MetadataRow};
pub use pairing::{group_comparisons, Comparison};
pub use sink::{CsvDirectorySink, MemorySink, ResultSink};

use comfy_table::Table;
use indicatif::MultiProgress;
use targetscreen_bio::{ScreeningPipeline, ScreeningReport, Sequence};
use targetscreen_core::{Config, ScreenerError, ScreenerResult};
use targetscreen_utils::{
    create_progress_bar, create_standard_table, format_number, format_ratio, header_cell,
};

/// Counters for one screening direction
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionSummary {
    pub comparison: u32,
    pub input: String,
    pub reference: String,
    pub candidates: usize,
    pub retained: usize,
    pub rejected: usize,
}

impl DirectionSummary {
    fn from_report(comparison: u32, report: &ScreeningReport) -> Self {
        Self {
            comparison,
            input: report.input_id.clone(),
            reference: report.reference_id.clone(),
            candidates: report.candidates_considered,
            retained: report.records_retained,
            rejected: report.windows_rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedComparison {
    pub comparison: u32,
    pub rows: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub directions: Vec<DirectionSummary>,
    pub skipped: Vec<SkippedComparison>,
}

impl BatchSummary {
    pub fn comparisons_screened(&self) -> usize {
        self.directions.len() / 2
    }

    pub fn total_retained(&self) -> usize {
        self.directions.iter().map(|d| d.retained).sum()
    }

    pub fn to_table(&self) -> Table {
        let mut table = create_standard_table();
        table.set_header(vec![
            header_cell("Comparison"),
            header_cell("Input"),
            header_cell("Reference"),
            header_cell("Candidates"),
            header_cell("Motif rejected"),
            header_cell("Retained"),
            header_cell("Retention"),
        ]);

        for d in &self.directions {
            let rate = if d.candidates == 0 {
                0.0
            } else {
                d.retained as f64 / d.candidates as f64
            };
            table.add_row(vec![
                format!("#{}", d.comparison),
                d.input.clone(),
                d.reference.clone(),
                format_number(d.candidates),
                format_number(d.rejected),
                format_number(d.retained),
                format_ratio(rate),
            ]);
        }
        for s in &self.skipped {
            table.add_row(vec![
                format!("#{}", s.comparison),
                "-".to_string(),
                "-".to_string(),
                "-".to_string(),
                "-".to_string(),
                "-".to_string(),
                format!("skipped ({} rows)", s.rows),
            ]);
        }
        table
    }
}

/// Runs every comparison of a metadata table through the screening pipeline
pub struct BatchOrchestrator {
    config: Config,
    parallel_directions: bool,
    progress: Option<MultiProgress>,
}

impl BatchOrchestrator {
    pub fn new(config: Config) -> ScreenerResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            parallel_directions: false,
            progress: None,
        })
    }

    /// Screen the two directions of a comparison concurrently
    pub fn with_parallel_directions(mut self, parallel: bool) -> Self {
        self.parallel_directions = parallel;
        self
    }

    pub fn with_progress(mut self, progress: MultiProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run<S: ResultSink>(
        &self,
        rows: Vec<MetadataRow>,
        sink: &mut S,
    ) -> ScreenerResult<BatchSummary> {
        let groups = group_comparisons(rows);
        tracing::info!("Found {} comparison pair(s)", groups.len());

        let mut summary = BatchSummary::default();
        for (id, rows) in groups {
            let comparison = match Comparison::from_rows(id, rows) {
                Ok(comparison) => comparison,
                Err(ScreenerError::MalformedPairing { rows, .. }) => {
                    tracing::warn!(
                        "Comparison #{} has {} row(s), expected 2; skipping",
                        id,
                        rows
                    );
                    summary.skipped.push(SkippedComparison {
                        comparison: id,
                        rows,
                    });
                    continue;
                }
                Err(e) => return Err(e),
            };

            let (forward, backward) = self.run_comparison(&comparison)?;
            let pair = comparison.pair_name();

            sink.accept(
                &pair,
                &Comparison::table_name(&comparison.input, &comparison.reference),
                &forward,
            )?;
            sink.accept(
                &pair,
                &Comparison::table_name(&comparison.reference, &comparison.input),
                &backward,
            )?;

            summary
                .directions
                .push(DirectionSummary::from_report(id, &forward));
            summary
                .directions
                .push(DirectionSummary::from_report(id, &backward));
        }

        tracing::info!(
            "Screened {} comparison(s), skipped {}, retained {} record(s)",
            summary.comparisons_screened(),
            summary.skipped.len(),
            summary.total_retained()
        );
        Ok(summary)
    }

    /// Input against reference, then reference against input
    pub fn run_comparison(
        &self,
        comparison: &Comparison,
    ) -> ScreenerResult<(ScreeningReport, ScreeningReport)> {
        tracing::debug!(
            "Comparison #{}: {} (input) -> {} (ref)",
            comparison.id,
            comparison.input.id,
            comparison.reference.id
        );

        let forward = || self.screen(&comparison.input, &comparison.reference);
        let backward = || self.screen(&comparison.reference, &comparison.input);

        if self.parallel_directions {
            let (forward, backward) = rayon::join(forward, backward);
            Ok((forward?, backward?))
        } else {
            Ok((forward()?, backward()?))
        }
    }

    fn screen(&self, input: &Sequence, reference: &Sequence) -> ScreenerResult<ScreeningReport> {
        let mut pipeline = ScreeningPipeline::from_config(input, reference, &self.config)?;
        if let Some(multi) = &self.progress {
            let label = format!("{} vs {}", input.id, reference.id);
            pipeline = pipeline.with_progress(multi.add(create_progress_bar(0, &label)));
        }
        pipeline.run()
    }
}
