/// One screening direction: windows of the input aligned against the reference
use crate::alignment::{AlignmentResult, PairwiseAligner, ScoringModel};
use crate::screening::{
    expected_window_count, Candidate, ConservationFilter, ScreeningRecord, ScreeningReport,
    SequenceWindower,
};
use crate::sequence::Sequence;
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::fmt;
use targetscreen_core::{Config, ScreenerError, ScreenerResult, WindowConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Created,
    Windowing,
    Aligning,
    Filtering,
    Done,
    Failed,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineState::Created => "created",
            PipelineState::Windowing => "windowing",
            PipelineState::Aligning => "aligning",
            PipelineState::Filtering => "filtering",
            PipelineState::Done => "done",
            PipelineState::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// Drives windower, aligner and filter for a single (input, reference) pair.
///
/// A pipeline runs once; screening the same pair with another configuration
/// needs a new pipeline.
pub struct ScreeningPipeline<'a> {
    input: &'a Sequence,
    reference: &'a Sequence,
    windower: SequenceWindower,
    aligner: PairwiseAligner,
    filter: ConservationFilter,
    parallel: bool,
    progress: Option<ProgressBar>,
    state: PipelineState,
}

impl<'a> ScreeningPipeline<'a> {
    pub fn new(
        input: &'a Sequence,
        reference: &'a Sequence,
        window: &WindowConfig,
        model: ScoringModel,
        threshold: f64,
    ) -> ScreenerResult<Self> {
        if !threshold.is_finite() {
            return Err(ScreenerError::Configuration(format!(
                "threshold must be finite, got {}",
                threshold
            )));
        }

        Ok(Self {
            input,
            reference,
            windower: SequenceWindower::from_config(window)?,
            filter: ConservationFilter::for_model(threshold, &model),
            aligner: PairwiseAligner::with_model(model),
            parallel: false,
            progress: None,
            state: PipelineState::Created,
        })
    }

    /// Window bounds, scoring, threshold and parallelism all taken from `config`
    pub fn from_config(
        input: &'a Sequence,
        reference: &'a Sequence,
        config: &Config,
    ) -> ScreenerResult<Self> {
        let model = ScoringModel::from_config(&config.scoring)?;
        Ok(Self::new(
            input,
            reference,
            &config.window,
            model,
            config.screening.threshold,
        )?
        .with_parallelism(config.performance.parallel_candidates))
    }

    /// Align candidates on the rayon pool; record order is unchanged
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn run(&mut self) -> ScreenerResult<ScreeningReport> {
        if self.state != PipelineState::Created {
            return Err(ScreenerError::PipelineState(format!(
                "pipeline for {} vs {} is already {}",
                self.input.id, self.reference.id, self.state
            )));
        }

        let outcome = if self.parallel {
            self.run_parallel()
        } else {
            self.run_sequential()
        };

        if let Some(pb) = &self.progress {
            pb.finish_and_clear();
        }

        match outcome {
            Ok(report) => {
                self.state = PipelineState::Done;
                tracing::info!(
                    "{} vs {}: retained {} record(s) from {} candidate(s)",
                    report.input_id,
                    report.reference_id,
                    report.records_retained,
                    report.candidates_considered
                );
                Ok(report)
            }
            Err(e) => {
                self.state = PipelineState::Failed;
                tracing::debug!("Screening {} vs {} failed: {}", self.input.id, self.reference.id, e);
                Err(e)
            }
        }
    }

    fn run_sequential(&mut self) -> ScreenerResult<ScreeningReport> {
        self.state = PipelineState::Windowing;
        self.check_inputs()?;
        self.start_progress();

        let mut records = Vec::new();
        let mut windows = self.windower.windows(self.input.as_bytes());
        for candidate in windows.by_ref() {
            self.state = PipelineState::Aligning;
            let set = self.aligner.align(self.reference.as_bytes(), candidate.sequence)?;

            self.state = PipelineState::Filtering;
            records.extend(set.iter().filter_map(|a| self.filter.evaluate(&candidate, &a)));

            if let Some(pb) = &self.progress {
                pb.inc(1);
            }
            self.state = PipelineState::Windowing;
        }

        Ok(self.report(records, windows.emitted(), windows.rejected()))
    }

    fn run_parallel(&mut self) -> ScreenerResult<ScreeningReport> {
        self.state = PipelineState::Windowing;
        self.check_inputs()?;
        self.start_progress();

        let mut windows = self.windower.windows(self.input.as_bytes());
        let candidates: Vec<Candidate<'_>> = windows.by_ref().collect();
        let (emitted, rejected) = (windows.emitted(), windows.rejected());
        tracing::debug!(
            "Aligning {} candidate(s) on {} thread(s)",
            candidates.len(),
            rayon::current_num_threads()
        );

        self.state = PipelineState::Aligning;
        let reference = self.reference.as_bytes();
        let aligner = &self.aligner;
        let progress = self.progress.as_ref();
        let alignments = candidates
            .par_iter()
            .map(|candidate| -> ScreenerResult<Vec<AlignmentResult>> {
                let set = aligner.align(reference, candidate.sequence)?;
                let results: Vec<AlignmentResult> = set.iter().collect();
                if let Some(pb) = progress {
                    pb.inc(1);
                }
                Ok(results)
            })
            .collect::<ScreenerResult<Vec<Vec<AlignmentResult>>>>()?;

        self.state = PipelineState::Filtering;
        let filter = self.filter;
        let records = candidates
            .iter()
            .zip(alignments.iter())
            .flat_map(|(candidate, results)| {
                results
                    .iter()
                    .filter_map(move |a| filter.evaluate(candidate, a))
            })
            .collect();

        Ok(self.report(records, emitted, rejected))
    }

    /// Both sequences must be scoreable before any window is cut
    fn check_inputs(&self) -> ScreenerResult<()> {
        self.aligner.check_alphabet(self.input.as_bytes())?;
        self.aligner.check_alphabet(self.reference.as_bytes())?;
        Ok(())
    }

    fn start_progress(&self) {
        if let Some(pb) = &self.progress {
            pb.set_length(expected_window_count(
                self.input.len(),
                self.windower.low(),
                self.windower.high(),
            ) as u64);
            pb.set_message(format!("{} vs {}", self.input.id, self.reference.id));
        }
    }

    fn report(
        &self,
        records: Vec<ScreeningRecord>,
        candidates_considered: usize,
        windows_rejected: usize,
    ) -> ScreeningReport {
        tracing::info!(
            "Extracted {} sub-sequences from {} ({} rejected by motif filter)",
            candidates_considered,
            self.input.id,
            windows_rejected
        );
        ScreeningReport {
            input_id: self.input.id.clone(),
            reference_id: self.reference.id.clone(),
            records_retained: records.len(),
            records,
            candidates_considered,
            windows_rejected,
        }
    }
}
