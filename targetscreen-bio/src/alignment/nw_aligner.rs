/// Needleman-Wunsch style glocal alignment with affine gaps (Gotoh, three states)
use crate::alignment::scoring::{GapRegime, ScoringModel};
use crate::alignment::traceback::{AlignmentSet, DIAGONAL, LEFT, UP};
use targetscreen_core::{ScreenerError, ScreenerResult};

/// Scores closer than this are treated as ties
pub const TIE_EPSILON: f64 = 1e-6;

const NEG_INF: f64 = f64::NEG_INFINITY;

/// Aligns candidates against a reference and reports every co-optimal path.
///
/// Rows of the matrix walk the reference and columns walk the candidate.
/// Gaps touching either end of a sequence use the leading/trailing penalties
/// of the scoring model; all others use the interior penalties.
#[derive(Debug, Clone, Default)]
pub struct PairwiseAligner {
    model: Option<ScoringModel>,
}

impl PairwiseAligner {
    /// An aligner with no scoring model; `align` fails until `configure` is called
    pub fn new() -> Self {
        Self { model: None }
    }

    pub fn with_model(model: ScoringModel) -> Self {
        Self { model: Some(model) }
    }

    pub fn configure(&mut self, model: ScoringModel) {
        self.model = Some(model);
    }

    pub fn model(&self) -> Option<&ScoringModel> {
        self.model.as_ref()
    }

    pub fn is_configured(&self) -> bool {
        self.model.is_some()
    }

    /// Reject any symbol the scoring model cannot score
    pub fn check_alphabet(&self, sequence: &[u8]) -> ScreenerResult<()> {
        let model = self.model.as_ref().ok_or(ScreenerError::NotConfigured)?;
        match sequence
            .iter()
            .position(|&s| model.matrix().index_of(s).is_none())
        {
            Some(position) => Err(ScreenerError::InvalidAlphabet {
                symbol: sequence[position] as char,
                position,
            }),
            None => Ok(()),
        }
    }

    pub fn align<'a>(
        &self,
        reference: &'a [u8],
        candidate: &'a [u8],
    ) -> ScreenerResult<AlignmentSet<'a>> {
        let model = self.model.as_ref().ok_or(ScreenerError::NotConfigured)?;
        let matrix = model.matrix();
        let gaps = model.gaps();
        let ref_idx = matrix.encode(reference)?;
        let cand_idx = matrix.encode(candidate)?;

        let n = reference.len();
        let m = candidate.len();
        let width = m + 1;

        let mut traceback = vec![[0u8; 3]; (n + 1) * width];
        let mut prev = vec![[NEG_INF; 3]; width];
        let mut curr = vec![[NEG_INF; 3]; width];

        for i in 0..=n {
            for j in 0..=m {
                let mut cell = [NEG_INF; 3];
                let mut bits = [0u8; 3];

                if i == 0 && j == 0 {
                    cell[DIAGONAL] = 0.0;
                } else {
                    if i > 0 && j > 0 {
                        let sub = matrix.score_indexed(ref_idx[i - 1], cand_idx[j - 1]);
                        let from = prev[j - 1];
                        (cell[DIAGONAL], bits[DIAGONAL]) =
                            best_of([from[DIAGONAL] + sub, from[UP] + sub, from[LEFT] + sub]);
                    }
                    if i > 0 {
                        // Reference symbol against a gap in the candidate
                        let cost = gaps.cost(GapRegime::at(j, m));
                        let from = prev[j];
                        (cell[UP], bits[UP]) = best_of([
                            from[DIAGONAL] - cost.open,
                            from[UP] - cost.extend,
                            from[LEFT] - cost.open,
                        ]);
                    }
                    if j > 0 {
                        // Candidate symbol against a gap in the reference
                        let cost = gaps.cost(GapRegime::at(i, n));
                        let from = curr[j - 1];
                        (cell[LEFT], bits[LEFT]) = best_of([
                            from[DIAGONAL] - cost.open,
                            from[UP] - cost.open,
                            from[LEFT] - cost.extend,
                        ]);
                    }
                }

                curr[j] = cell;
                traceback[i * width + j] = bits;
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        // After the final swap `prev` holds row n
        let (score, end_states) = best_of(prev[m]);

        tracing::trace!(
            "Aligned {} x {} symbols, score {:.1}",
            n,
            m,
            score
        );

        Ok(AlignmentSet {
            reference,
            candidate,
            score,
            traceback,
            end_states,
        })
    }
}

/// Best finite score among three state transitions and the mask of those tying it
#[inline]
fn best_of(scores: [f64; 3]) -> (f64, u8) {
    let best = scores
        .iter()
        .copied()
        .filter(|s| s.is_finite())
        .fold(NEG_INF, f64::max);
    if !best.is_finite() {
        return (NEG_INF, 0);
    }

    let mask = scores
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_finite() && **s >= best - TIE_EPSILON)
        .fold(0u8, |mask, (state, _)| mask | (1 << state));
    (best, mask)
}
