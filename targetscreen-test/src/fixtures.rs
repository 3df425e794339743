//! Test fixtures and data generators

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Write;
use targetscreen_bio::Sequence;

/// Twenty symbols of period-four repeat, free of the default exclusion motif
pub const PERFECT_REPEAT: &str = "ACGTACGTACGTACGTACGT";

/// Named sequence text that can be rendered as FASTA or a metadata row
#[derive(Debug, Clone)]
pub struct TestSequence {
    pub id: String,
    pub description: String,
    pub sequence: String,
}

impl TestSequence {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            sequence: sequence.into(),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn to_fasta(&self) -> String {
        let mut header = format!(">{}", self.id);
        if !self.description.is_empty() {
            let _ = write!(&mut header, " {}", self.description);
        }
        format!("{}\n{}\n", header, self.sequence)
    }

    pub fn to_sequence(&self) -> Sequence {
        Sequence::from_text(self.id.clone(), &self.sequence)
    }
}

pub fn create_test_fasta(sequences: &[TestSequence]) -> String {
    sequences.iter().map(TestSequence::to_fasta).collect()
}

/// Deterministic random ACGT text
pub fn random_dna(length: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let bases = ['A', 'C', 'G', 'T'];
    (0..length).map(|_| bases[rng.gen_range(0..4)]).collect()
}

/// Copy of `sequence` with the symbol at each 0-based position replaced by a different base
pub fn with_substitutions(sequence: &str, positions: &[usize]) -> String {
    sequence
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if positions.contains(&i) {
                match c.to_ascii_uppercase() {
                    'A' => 'C',
                    'C' => 'G',
                    'G' => 'T',
                    _ => 'A',
                }
            } else {
                c
            }
        })
        .collect()
}

/// Metadata CSV text with the standard header and one line per `(comparison, region, sequence)`
pub fn metadata_csv(rows: &[(u32, &str, &str)]) -> String {
    let mut csv = String::from("Comparison #,Region,Sequence\n");
    for (comparison, region, sequence) in rows {
        let _ = writeln!(&mut csv, "{},{},{}", comparison, region, sequence);
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_dna_is_deterministic() {
        let a = random_dna(50, 7);
        assert_eq!(a.len(), 50);
        assert_eq!(a, random_dna(50, 7));
        assert!(a.chars().all(|c| "ACGT".contains(c)));
    }

    #[test]
    fn test_with_substitutions() {
        assert_eq!(with_substitutions("AAAA", &[1, 3]), "ACAC");
        assert_eq!(with_substitutions("TG", &[0, 1]), "AT");
    }

    #[test]
    fn test_metadata_csv() {
        let csv = metadata_csv(&[(1, "human", "ACGT"), (1, "mouse", "ACGA")]);
        assert_eq!(
            csv,
            "Comparison #,Region,Sequence\n1,human,ACGT\n1,mouse,ACGA\n"
        );
    }

    #[test]
    fn test_fasta_rendering() {
        let seq = TestSequence::new("exon1", "ACGT").with_description("human");
        assert_eq!(seq.to_fasta(), ">exon1 human\nACGT\n");
        assert_eq!(seq.to_sequence().as_bytes(), b"ACGT");
        assert_eq!(
            create_test_fasta(&[TestSequence::new("a", "AC"), TestSequence::new("b", "GT")]),
            ">a\nAC\n>b\nGT\n"
        );
    }
}
