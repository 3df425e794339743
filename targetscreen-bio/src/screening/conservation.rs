use crate::alignment::{AlignmentResult, ScoringModel};
use crate::screening::{Candidate, ScreeningRecord};

/// Decides which candidate alignments are conserved enough to keep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConservationFilter {
    threshold: f64,
    match_score: f64,
}

impl ConservationFilter {
    /// `match_score` is the best same-symbol score, the per-position ceiling
    pub fn new(threshold: f64, match_score: f64) -> Self {
        Self {
            threshold,
            match_score,
        }
    }

    pub fn for_model(threshold: f64, model: &ScoringModel) -> Self {
        Self::new(threshold, model.match_score())
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn match_score(&self) -> f64 {
        self.match_score
    }

    /// A record when `conservation >= threshold` and `score >= length`, else `None`
    pub fn evaluate(
        &self,
        candidate: &Candidate<'_>,
        alignment: &AlignmentResult,
    ) -> Option<ScreeningRecord> {
        let length = candidate.length;
        if length == 0 {
            return None;
        }

        let matched = alignment.matched();
        let conservation = matched as f64 / length as f64;
        if conservation < self.threshold || alignment.score < length as f64 {
            return None;
        }

        let score_max = length as f64 * self.match_score;
        Some(ScreeningRecord {
            position: candidate.start,
            sequence: candidate.sequence_str().into_owned(),
            length,
            matched,
            conservation,
            score: alignment.score,
            score_max,
            scorewise_conservation: alignment.score / score_max,
        })
    }
}
