/// Scoring model for glocal nucleotide alignment
use crate::sequence::IUPAC_NUCLEOTIDES;
use targetscreen_core::{ScoringConfig, ScreenerError, ScreenerResult};

const ABSENT: u8 = u8::MAX;

const BLASTN_MATCH: f64 = 2.0;
const BLASTN_MISMATCH: f64 = -3.0;
const BLASTN_SYMBOLS: &[u8; 15] = b"ATGCSWRYKMBVHDN";

/// NCBI BLASTN nucleotide matrix. Ambiguity codes score the rounded expected
/// value of their expansions against a base, -1 against an overlapping code.
#[rustfmt::skip]
const BLASTN_SCORES: [[f64; 15]; 15] = [
    //   A     T     G     C     S     W     R     Y     K     M     B     V     H     D     N
    [ 2.0, -3.0, -3.0, -3.0, -3.0, -1.0, -1.0, -3.0, -3.0, -1.0, -3.0, -1.0, -1.0, -1.0, -2.0], // A
    [-3.0,  2.0, -3.0, -3.0, -3.0, -1.0, -3.0, -1.0, -1.0, -3.0, -1.0, -3.0, -1.0, -1.0, -2.0], // T
    [-3.0, -3.0,  2.0, -3.0, -1.0, -3.0, -1.0, -3.0, -1.0, -3.0, -1.0, -1.0, -3.0, -1.0, -2.0], // G
    [-3.0, -3.0, -3.0,  2.0, -1.0, -3.0, -3.0, -1.0, -3.0, -1.0, -1.0, -1.0, -1.0, -3.0, -2.0], // C
    [-3.0, -3.0, -1.0, -1.0, -1.0, -3.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0], // S
    [-1.0, -1.0, -3.0, -3.0, -3.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0], // W
    [-1.0, -3.0, -1.0, -3.0, -1.0, -1.0, -1.0, -3.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0], // R
    [-3.0, -1.0, -3.0, -1.0, -1.0, -1.0, -3.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0], // Y
    [-3.0, -1.0, -1.0, -3.0, -1.0, -1.0, -1.0, -1.0, -1.0, -3.0, -1.0, -1.0, -1.0, -1.0, -1.0], // K
    [-1.0, -3.0, -3.0, -1.0, -1.0, -1.0, -1.0, -1.0, -3.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0], // M
    [-3.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0], // B
    [-1.0, -3.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0], // V
    [-1.0, -1.0, -3.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0], // H
    [-1.0, -1.0, -1.0, -3.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0], // D
    [-2.0, -2.0, -2.0, -2.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0], // N
];

/// Symmetric substitution matrix over a small symbol alphabet
#[derive(Debug, Clone, PartialEq)]
pub struct SubstitutionMatrix {
    alphabet: Vec<u8>,
    index_map: [u8; 256],
    scores: Vec<f64>,
}

impl SubstitutionMatrix {
    /// Every identical pair scores `match_score`, every other pair `mismatch_score`
    pub fn uniform(alphabet: &[u8], match_score: f64, mismatch_score: f64) -> Self {
        let (symbols, index_map) = index_alphabet(alphabet);
        let size = symbols.len();
        let mut scores = vec![mismatch_score; size * size];
        for i in 0..size {
            scores[i * size + i] = match_score;
        }

        Self {
            alphabet: symbols,
            index_map,
            scores,
        }
    }

    /// BLASTN matrix over the full IUPAC alphabet: base match +2, mismatch -3
    pub fn blastn() -> Self {
        let (symbols, index_map) = index_alphabet(BLASTN_SYMBOLS);
        let scores = BLASTN_SCORES.iter().flatten().copied().collect();
        Self {
            alphabet: symbols,
            index_map,
            scores,
        }
    }

    /// Override the score of one symbol pair (both orientations)
    pub fn with_score(mut self, a: u8, b: u8, score: f64) -> ScreenerResult<Self> {
        let i = self.require(a)?;
        let j = self.require(b)?;
        let size = self.alphabet.len();
        self.scores[i * size + j] = score;
        self.scores[j * size + i] = score;
        Ok(self)
    }

    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    pub fn index_of(&self, symbol: u8) -> Option<usize> {
        match self.index_map[symbol as usize] {
            ABSENT => None,
            idx => Some(idx as usize),
        }
    }

    pub fn score(&self, a: u8, b: u8) -> Option<f64> {
        Some(self.score_indexed(self.index_of(a)?, self.index_of(b)?))
    }

    #[inline]
    pub(crate) fn score_indexed(&self, i: usize, j: usize) -> f64 {
        self.scores[i * self.alphabet.len() + j]
    }

    /// Highest same-symbol score, the per-position ceiling of a perfect match
    pub fn best_match_score(&self) -> f64 {
        (0..self.alphabet.len())
            .map(|i| self.score_indexed(i, i))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Map a sequence onto matrix indices
    pub fn encode(&self, sequence: &[u8]) -> ScreenerResult<Vec<usize>> {
        sequence
            .iter()
            .enumerate()
            .map(|(position, &symbol)| {
                self.index_of(symbol).ok_or(ScreenerError::InvalidAlphabet {
                    symbol: symbol as char,
                    position,
                })
            })
            .collect()
    }

    fn require(&self, symbol: u8) -> ScreenerResult<usize> {
        self.index_of(symbol).ok_or(ScreenerError::InvalidAlphabet {
            symbol: symbol as char,
            position: 0,
        })
    }
}

/// Deduplicated uppercase symbols and a case-insensitive byte lookup
fn index_alphabet(alphabet: &[u8]) -> (Vec<u8>, [u8; 256]) {
    let mut index_map = [ABSENT; 256];
    let mut symbols = Vec::with_capacity(alphabet.len());
    for &symbol in alphabet {
        let upper = symbol.to_ascii_uppercase();
        if index_map[upper as usize] != ABSENT {
            continue;
        }
        let idx = symbols.len() as u8;
        index_map[upper as usize] = idx;
        index_map[upper.to_ascii_lowercase() as usize] = idx;
        symbols.push(upper);
    }
    (symbols, index_map)
}

impl Default for SubstitutionMatrix {
    fn default() -> Self {
        Self::blastn()
    }
}

/// Affine cost of one gap run: `open + (len - 1) * extend`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapCost {
    pub open: f64,
    pub extend: f64,
}

impl GapCost {
    pub const fn new(open: f64, extend: f64) -> Self {
        Self { open, extend }
    }

    pub const fn free() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn penalty(&self, run_length: usize) -> f64 {
        if run_length == 0 {
            0.0
        } else {
            self.open + (run_length - 1) as f64 * self.extend
        }
    }
}

/// Which penalty set applies to a gap run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapRegime {
    /// Before the first symbol of the other sequence
    Leading,
    Interior,
    /// After the last symbol of the other sequence
    Trailing,
}

impl GapRegime {
    /// Regime of a gap placed at `offset` within a sequence of `len` symbols
    #[inline]
    pub fn at(offset: usize, len: usize) -> Self {
        if offset == 0 {
            GapRegime::Leading
        } else if offset == len {
            GapRegime::Trailing
        } else {
            GapRegime::Interior
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapPenalties {
    pub interior: GapCost,
    pub leading: GapCost,
    pub trailing: GapCost,
}

impl GapPenalties {
    pub fn cost(&self, regime: GapRegime) -> GapCost {
        match regime {
            GapRegime::Leading => self.leading,
            GapRegime::Interior => self.interior,
            GapRegime::Trailing => self.trailing,
        }
    }
}

impl Default for GapPenalties {
    /// Interior open 10 / extend 1, free terminal gaps
    fn default() -> Self {
        Self {
            interior: GapCost::new(10.0, 1.0),
            leading: GapCost::free(),
            trailing: GapCost::free(),
        }
    }
}

/// Immutable substitution matrix plus gap penalties, handed to each aligner
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoringModel {
    matrix: SubstitutionMatrix,
    gaps: GapPenalties,
}

impl ScoringModel {
    pub fn new(matrix: SubstitutionMatrix, gaps: GapPenalties) -> Self {
        Self { matrix, gaps }
    }

    pub fn from_config(config: &ScoringConfig) -> ScreenerResult<Self> {
        let penalties = [
            config.gap_open,
            config.gap_extend,
            config.left_gap_open,
            config.left_gap_extend,
            config.right_gap_open,
            config.right_gap_extend,
        ];
        if penalties.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return Err(ScreenerError::Configuration(
                "gap penalties must be finite and non-negative".to_string(),
            ));
        }
        if !config.match_score.is_finite() || !config.mismatch_score.is_finite() {
            return Err(ScreenerError::Configuration(
                "substitution scores must be finite".to_string(),
            ));
        }

        let matrix = if config.match_score == BLASTN_MATCH && config.mismatch_score == BLASTN_MISMATCH {
            SubstitutionMatrix::blastn()
        } else {
            SubstitutionMatrix::uniform(IUPAC_NUCLEOTIDES, config.match_score, config.mismatch_score)
        };
        let gaps = GapPenalties {
            interior: GapCost::new(config.gap_open, config.gap_extend),
            leading: GapCost::new(config.left_gap_open, config.left_gap_extend),
            trailing: GapCost::new(config.right_gap_open, config.right_gap_extend),
        };
        Ok(Self::new(matrix, gaps))
    }

    pub fn with_gaps(mut self, gaps: GapPenalties) -> Self {
        self.gaps = gaps;
        self
    }

    pub fn matrix(&self) -> &SubstitutionMatrix {
        &self.matrix
    }

    pub fn gaps(&self) -> &GapPenalties {
        &self.gaps
    }

    pub fn match_score(&self) -> f64 {
        self.matrix.best_match_score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blastn_scores() {
        let matrix = SubstitutionMatrix::blastn();
        assert_eq!(matrix.score(b'A', b'A'), Some(2.0));
        assert_eq!(matrix.score(b'A', b'G'), Some(-3.0));
        assert_eq!(matrix.score(b'c', b'C'), Some(2.0));
        assert_eq!(matrix.score(b'X', b'A'), None);
        assert_eq!(matrix.alphabet().len(), 15);
        assert_eq!(matrix.best_match_score(), 2.0);
    }

    #[test]
    fn test_blastn_ambiguity_scores() {
        let matrix = SubstitutionMatrix::blastn();
        assert_eq!(matrix.score(b'N', b'N'), Some(-1.0));
        assert_eq!(matrix.score(b'S', b'S'), Some(-1.0));
        assert_eq!(matrix.score(b'N', b'A'), Some(-2.0));
        assert_eq!(matrix.score(b'A', b'W'), Some(-1.0));
        assert_eq!(matrix.score(b'r', b'A'), Some(-1.0));
        assert_eq!(matrix.score(b'A', b'S'), Some(-3.0));
        assert_eq!(matrix.score(b'B', b'A'), Some(-3.0));
        assert_eq!(matrix.score(b'S', b'W'), Some(-3.0));
        assert_eq!(matrix.score(b'K', b'M'), Some(-3.0));
        assert_eq!(matrix.score(b'V', b'G'), Some(-1.0));

        for &a in matrix.alphabet() {
            for &b in matrix.alphabet() {
                assert_eq!(matrix.score(a, b), matrix.score(b, a), "{}/{}", a as char, b as char);
            }
        }
    }

    #[test]
    fn test_with_score_is_symmetric() {
        let matrix = SubstitutionMatrix::blastn()
            .with_score(b'A', b'R', 1.0)
            .unwrap();
        assert_eq!(matrix.score(b'A', b'R'), Some(1.0));
        assert_eq!(matrix.score(b'R', b'A'), Some(1.0));
        assert!(SubstitutionMatrix::blastn().with_score(b'A', b'!', 1.0).is_err());
    }

    #[test]
    fn test_best_match_score_uses_diagonal_max() {
        let matrix = SubstitutionMatrix::blastn().with_score(b'G', b'G', 5.0).unwrap();
        assert_eq!(matrix.best_match_score(), 5.0);
    }

    #[test]
    fn test_encode_reports_position() {
        let matrix = SubstitutionMatrix::blastn();
        assert_eq!(matrix.encode(b"ATGC").unwrap(), vec![0, 1, 2, 3]);
        match matrix.encode(b"ACUG") {
            Err(ScreenerError::InvalidAlphabet { symbol, position }) => {
                assert_eq!(symbol, 'U');
                assert_eq!(position, 2);
            }
            other => panic!("Expected InvalidAlphabet, got {:?}", other),
        }
    }

    #[test]
    fn test_gap_cost_penalty() {
        let cost = GapCost::new(10.0, 1.0);
        assert_eq!(cost.penalty(0), 0.0);
        assert_eq!(cost.penalty(1), 10.0);
        assert_eq!(cost.penalty(4), 13.0);
        assert_eq!(GapCost::free().penalty(12), 0.0);
    }

    #[test]
    fn test_gap_regime() {
        assert_eq!(GapRegime::at(0, 5), GapRegime::Leading);
        assert_eq!(GapRegime::at(3, 5), GapRegime::Interior);
        assert_eq!(GapRegime::at(5, 5), GapRegime::Trailing);
        assert_eq!(GapRegime::at(0, 0), GapRegime::Leading);
    }

    #[test]
    fn test_model_from_config() {
        let mut config = ScoringConfig::default();
        config.left_gap_open = 4.0;
        config.right_gap_extend = 0.5;

        let model = ScoringModel::from_config(&config).unwrap();
        assert_eq!(model.match_score(), 2.0);
        assert_eq!(model.gaps().interior, GapCost::new(10.0, 1.0));
        assert_eq!(model.gaps().leading, GapCost::new(4.0, 0.0));
        assert_eq!(model.gaps().trailing, GapCost::new(0.0, 0.5));
        assert_eq!(model.gaps().cost(GapRegime::Trailing), GapCost::new(0.0, 0.5));
    }

    #[test]
    fn test_model_from_config_picks_matrix() {
        let model = ScoringModel::from_config(&ScoringConfig::default()).unwrap();
        assert_eq!(model.matrix(), &SubstitutionMatrix::blastn());

        let mut config = ScoringConfig::default();
        config.match_score = 1.0;
        config.mismatch_score = -1.0;
        let model = ScoringModel::from_config(&config).unwrap();
        assert_eq!(model.matrix().score(b'N', b'N'), Some(1.0));
        assert_eq!(model.matrix().score(b'A', b'W'), Some(-1.0));
        assert_eq!(model.match_score(), 1.0);
    }

    #[test]
    fn test_model_from_config_rejects_negative_penalty() {
        let mut config = ScoringConfig::default();
        config.gap_extend = -1.0;
        assert!(ScoringModel::from_config(&config).is_err());
    }

    #[test]
    fn test_default_model_matches_blastn_glocal() {
        let model = ScoringModel::default();
        assert_eq!(model.matrix(), &SubstitutionMatrix::blastn());
        assert_eq!(model.gaps().leading, GapCost::free());
        assert_eq!(model.gaps().trailing, GapCost::free());
    }
}
