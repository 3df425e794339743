/// Sliding-window candidate generation
use crate::sequence::MotifFilter;
use std::borrow::Cow;
use targetscreen_core::{ScreenerResult, WindowConfig};

/// A contiguous window of the input sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub sequence: &'a [u8],
    /// 1-based offset of the first symbol within the input
    pub start: usize,
    pub length: usize,
    /// Length of the input the window was cut from
    pub total_length: usize,
}

impl<'a> Candidate<'a> {
    pub fn sequence_str(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.sequence)
    }

    /// 1-based offset of the last symbol
    pub fn end(&self) -> usize {
        self.start + self.length - 1
    }
}

/// Emits every window with length in `[low, high)`, shortest first
#[derive(Debug, Clone)]
pub struct SequenceWindower {
    low: usize,
    high: usize,
    motifs: MotifFilter,
}

impl SequenceWindower {
    /// Window lengths `low..high`; excludes the default repeat motif
    pub fn new(low: usize, high: usize) -> Self {
        Self {
            low,
            high,
            motifs: MotifFilter::default(),
        }
    }

    pub fn from_config(config: &WindowConfig) -> ScreenerResult<Self> {
        let motifs = MotifFilter::new(&config.exclude_motifs)?;
        Ok(Self::new(config.min_length, config.max_length).with_motif_filter(motifs))
    }

    pub fn with_motif_filter(mut self, motifs: MotifFilter) -> Self {
        self.motifs = motifs;
        self
    }

    /// Shortest window length actually produced
    pub fn low(&self) -> usize {
        self.low.max(1)
    }

    pub fn high(&self) -> usize {
        self.high
    }

    pub fn motif_filter(&self) -> &MotifFilter {
        &self.motifs
    }

    pub fn windows<'a>(&'a self, input: &'a [u8]) -> Windows<'a> {
        Windows {
            windower: self,
            input,
            length: self.low(),
            start: 0,
            emitted: 0,
            rejected: 0,
            exhausted: false,
        }
    }
}

/// Number of windows `[low, high)` yields over `n` symbols before motif filtering
pub fn expected_window_count(n: usize, low: usize, high: usize) -> usize {
    (low.max(1)..high)
        .take_while(|&length| length <= n)
        .map(|length| n - length + 1)
        .sum()
}

/// Lazy iterator over the candidates of one input
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    windower: &'a SequenceWindower,
    input: &'a [u8],
    length: usize,
    start: usize,
    emitted: usize,
    rejected: usize,
    exhausted: bool,
}

impl<'a> Windows<'a> {
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Windows skipped because they contained an exclusion motif
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    fn finish(&mut self) {
        if !self.exhausted {
            self.exhausted = true;
            tracing::debug!(
                "Extracted {} sub-sequences ({} rejected by motif filter)",
                self.emitted,
                self.rejected
            );
        }
    }
}

impl<'a> Iterator for Windows<'a> {
    type Item = Candidate<'a>;

    fn next(&mut self) -> Option<Candidate<'a>> {
        let total_length = self.input.len();
        loop {
            if self.length >= self.windower.high || self.length > total_length {
                self.finish();
                return None;
            }
            if self.start + self.length > total_length {
                self.length += 1;
                self.start = 0;
                continue;
            }

            let start = self.start;
            let sequence = &self.input[start..start + self.length];
            self.start += 1;

            if self.windower.motifs.is_excluded(sequence) {
                self.rejected += 1;
                continue;
            }

            self.emitted += 1;
            return Some(Candidate {
                sequence,
                start: start + 1,
                length: self.length,
                total_length,
            });
        }
    }
}
