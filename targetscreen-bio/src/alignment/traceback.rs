/// Co-optimal traceback over the three-state glocal matrix
use crate::alignment::result::{AlignmentResult, SubstitutionTally, GAP};

/// Traceback state indices; bit `1 << state` marks a predecessor
pub(crate) const DIAGONAL: usize = 0;
pub(crate) const UP: usize = 1;
pub(crate) const LEFT: usize = 2;

/// Every optimal alignment of one (reference, candidate) pair.
///
/// Holds the traceback graph; `iter()` walks it lazily and can be called
/// again to restart the enumeration.
#[derive(Debug, Clone)]
pub struct AlignmentSet<'a> {
    pub(crate) reference: &'a [u8],
    pub(crate) candidate: &'a [u8],
    pub(crate) score: f64,
    /// Per cell, per state: bitmask of predecessor states on optimal paths
    pub(crate) traceback: Vec<[u8; 3]>,
    pub(crate) end_states: u8,
}

impl<'a> AlignmentSet<'a> {
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn reference(&self) -> &'a [u8] {
        self.reference
    }

    pub fn candidate(&self) -> &'a [u8] {
        self.candidate
    }

    pub fn iter(&self) -> Alignments<'_> {
        Alignments::new(self)
    }

    /// Number of co-optimal alignments, saturating at `u64::MAX`
    pub fn optimal_count(&self) -> u64 {
        let width = self.width();
        let mut paths = vec![[0u64; 3]; self.traceback.len()];
        paths[0][DIAGONAL] = 1;

        for row in 0..=self.reference.len() {
            for col in 0..=self.candidate.len() {
                let idx = row * width + col;
                for state in [DIAGONAL, UP, LEFT] {
                    let mut bits = self.traceback[idx][state];
                    if bits == 0 {
                        continue;
                    }
                    let Some((prow, pcol)) = predecessor(row, col, state) else {
                        continue;
                    };
                    let pidx = prow * width + pcol;
                    let mut total = 0u64;
                    while let Some(prev) = take_lowest(&mut bits) {
                        total = total.saturating_add(paths[pidx][prev]);
                    }
                    paths[idx][state] = total;
                }
            }
        }

        let last = paths.len() - 1;
        let mut ends = self.end_states;
        let mut total = 0u64;
        while let Some(state) = take_lowest(&mut ends) {
            total = total.saturating_add(paths[last][state]);
        }
        total
    }

    #[inline]
    fn width(&self) -> usize {
        self.candidate.len() + 1
    }

    fn frame(&self, row: usize, col: usize, state: usize) -> Frame {
        Frame {
            row,
            col,
            state,
            pending: self.traceback[row * self.width() + col][state],
        }
    }
}

impl<'s, 'a: 's> IntoIterator for &'s AlignmentSet<'a> {
    type Item = AlignmentResult;
    type IntoIter = Alignments<'s>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    row: usize,
    col: usize,
    state: usize,
    pending: u8,
}

impl Frame {
    fn is_origin(&self) -> bool {
        self.row == 0 && self.col == 0 && self.state == DIAGONAL
    }
}

/// Depth-first enumeration of optimal paths, one `AlignmentResult` per path
#[derive(Debug, Clone)]
pub struct Alignments<'s> {
    set: &'s AlignmentSet<'s>,
    roots: u8,
    stack: Vec<Frame>,
}

impl<'s> Alignments<'s> {
    fn new(set: &'s AlignmentSet<'s>) -> Self {
        Self {
            set,
            roots: set.end_states,
            stack: Vec::with_capacity(set.reference.len() + set.candidate.len() + 1),
        }
    }

    /// Build the alignment spelled by the current stack (end cell at the bottom)
    fn emit(&self) -> AlignmentResult {
        let columns = self.stack.len().saturating_sub(1);
        let mut reference_aligned = Vec::with_capacity(columns);
        let mut candidate_aligned = Vec::with_capacity(columns);
        let mut tally = SubstitutionTally::default();

        for frame in self.stack[..columns].iter().rev() {
            match frame.state {
                DIAGONAL => {
                    let r = self.set.reference[frame.row - 1].to_ascii_uppercase();
                    let c = self.set.candidate[frame.col - 1].to_ascii_uppercase();
                    reference_aligned.push(r);
                    candidate_aligned.push(c);
                    tally.record_pair(r, c);
                }
                UP => {
                    reference_aligned.push(self.set.reference[frame.row - 1].to_ascii_uppercase());
                    candidate_aligned.push(GAP);
                    tally.record_candidate_gap();
                }
                _ => {
                    reference_aligned.push(GAP);
                    candidate_aligned.push(self.set.candidate[frame.col - 1].to_ascii_uppercase());
                    tally.record_reference_gap();
                }
            }
        }

        AlignmentResult {
            score: self.set.score,
            reference_aligned,
            candidate_aligned,
            tally,
            aligned_length: self.set.candidate.len(),
        }
    }
}

impl<'s> Iterator for Alignments<'s> {
    type Item = AlignmentResult;

    fn next(&mut self) -> Option<AlignmentResult> {
        loop {
            let Some(top) = self.stack.last_mut() else {
                let state = take_lowest(&mut self.roots)?;
                let frame = self
                    .set
                    .frame(self.set.reference.len(), self.set.candidate.len(), state);
                self.stack.push(frame);
                continue;
            };

            if top.is_origin() {
                let result = self.emit();
                self.stack.pop();
                return Some(result);
            }

            match take_lowest(&mut top.pending) {
                Some(prev) => {
                    // Cells with pending bits always have a predecessor cell
                    let (row, col) = predecessor(top.row, top.col, top.state)?;
                    let frame = self.set.frame(row, col, prev);
                    self.stack.push(frame);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Cell a state at (row, col) was entered from
#[inline]
fn predecessor(row: usize, col: usize, state: usize) -> Option<(usize, usize)> {
    match state {
        DIAGONAL if row > 0 && col > 0 => Some((row - 1, col - 1)),
        UP if row > 0 => Some((row - 1, col)),
        LEFT if col > 0 => Some((row, col - 1)),
        _ => None,
    }
}

/// Pop the lowest set bit, returning its index
#[inline]
pub(crate) fn take_lowest(bits: &mut u8) -> Option<usize> {
    if *bits == 0 {
        return None;
    }
    let idx = bits.trailing_zeros() as usize;
    *bits &= *bits - 1;
    Some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_lowest() {
        let mut bits = 0b101u8;
        assert_eq!(take_lowest(&mut bits), Some(0));
        assert_eq!(take_lowest(&mut bits), Some(2));
        assert_eq!(take_lowest(&mut bits), None);
    }

    #[test]
    fn test_predecessor() {
        assert_eq!(predecessor(3, 2, DIAGONAL), Some((2, 1)));
        assert_eq!(predecessor(3, 2, UP), Some((2, 2)));
        assert_eq!(predecessor(3, 2, LEFT), Some((3, 1)));
        assert_eq!(predecessor(0, 2, UP), None);
        assert_eq!(predecessor(2, 0, DIAGONAL), None);
    }
}
