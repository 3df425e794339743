use std::collections::BTreeMap;

pub const GAP: u8 = b'-';

/// Counts of aligned (reference, candidate) symbol pairs plus gap columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTally {
    pairs: BTreeMap<(u8, u8), usize>,
    reference_gaps: usize,
    candidate_gaps: usize,
}

impl SubstitutionTally {
    pub fn record_pair(&mut self, reference: u8, candidate: u8) {
        *self.pairs.entry((reference, candidate)).or_insert(0) += 1;
    }

    /// Candidate symbol aligned against a gap in the reference
    pub fn record_reference_gap(&mut self) {
        self.reference_gaps += 1;
    }

    /// Reference symbol aligned against a gap in the candidate
    pub fn record_candidate_gap(&mut self) {
        self.candidate_gaps += 1;
    }

    pub fn count(&self, reference: u8, candidate: u8) -> usize {
        self.pairs.get(&(reference, candidate)).copied().unwrap_or(0)
    }

    /// Sum of the diagonal: aligned pairs with identical symbols
    pub fn matched(&self) -> usize {
        self.pairs
            .iter()
            .filter(|((r, c), _)| r == c)
            .map(|(_, n)| n)
            .sum()
    }

    pub fn mismatched(&self) -> usize {
        self.pairs
            .iter()
            .filter(|((r, c), _)| r != c)
            .map(|(_, n)| n)
            .sum()
    }

    pub fn reference_gaps(&self) -> usize {
        self.reference_gaps
    }

    pub fn candidate_gaps(&self) -> usize {
        self.candidate_gaps
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&(u8, u8), &usize)> {
        self.pairs.iter()
    }
}

/// One optimal alignment of a candidate against the reference
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentResult {
    pub score: f64,
    pub reference_aligned: Vec<u8>,
    pub candidate_aligned: Vec<u8>,
    pub tally: SubstitutionTally,
    /// Length of the candidate, not of the gapped rows
    pub aligned_length: usize,
}

impl AlignmentResult {
    pub fn matched(&self) -> usize {
        self.tally.matched()
    }

    /// Matched fraction of the candidate's symbols
    pub fn identity(&self) -> f64 {
        if self.aligned_length == 0 {
            0.0
        } else {
            self.matched() as f64 / self.aligned_length as f64
        }
    }

    /// '|' for match, 'X' for mismatch, ' ' for gap
    pub fn alignment_string(&self) -> Vec<u8> {
        self.reference_aligned
            .iter()
            .zip(self.candidate_aligned.iter())
            .map(|(&r, &q)| {
                if r == GAP || q == GAP {
                    b' '
                } else if r == q {
                    b'|'
                } else {
                    b'X'
                }
            })
            .collect()
    }

    /// Whether the candidate aligns without any gap between its first and last symbol
    pub fn is_gap_free_over_candidate(&self) -> bool {
        let columns: Vec<(u8, u8)> = self
            .reference_aligned
            .iter()
            .copied()
            .zip(self.candidate_aligned.iter().copied())
            .collect();
        let first = columns.iter().position(|&(_, c)| c != GAP);
        let last = columns.iter().rposition(|&(_, c)| c != GAP);
        match (first, last) {
            (Some(first), Some(last)) => columns[first..=last]
                .iter()
                .all(|&(r, c)| r != GAP && c != GAP),
            _ => true,
        }
    }
}
