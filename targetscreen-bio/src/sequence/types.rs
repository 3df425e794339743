use serde::{Deserialize, Serialize};
use std::fmt;
use targetscreen_core::{ScreenerError, ScreenerResult};

/// IUPAC nucleotide symbols accepted by the screening pipeline
pub const IUPAC_NUCLEOTIDES: &[u8] = b"ACGTRYSWKMBDHVN";

/// A named nucleotide sequence, always stored in uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence {
    pub id: String,
    pub description: Option<String>,
    pub sequence: Vec<u8>,
}

impl Sequence {
    pub fn new(id: String, mut sequence: Vec<u8>) -> Self {
        sequence.make_ascii_uppercase();
        Self {
            id,
            description: None,
            sequence,
        }
    }

    /// Build from free text such as a CSV cell, dropping embedded whitespace
    pub fn from_text(id: impl Into<String>, text: &str) -> Self {
        let bytes = text
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect::<Vec<u8>>();
        Self::new(id.into(), bytes)
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.sequence
    }

    /// Position (0-based) and symbol of the first residue outside the IUPAC alphabet
    pub fn first_invalid_symbol(&self) -> Option<(usize, u8)> {
        self.sequence
            .iter()
            .position(|b| !IUPAC_NUCLEOTIDES.contains(b))
            .map(|pos| (pos, self.sequence[pos]))
    }

    pub fn validate(&self) -> ScreenerResult<()> {
        match self.first_invalid_symbol() {
            Some((position, symbol)) => Err(ScreenerError::InvalidAlphabet {
                symbol: symbol as char,
                position,
            }),
            None => Ok(()),
        }
    }

    /// Reverse complement; for a screened target this is the antisense oligo
    pub fn reverse_complement(&self) -> Vec<u8> {
        bio::alphabets::dna::revcomp(&self.sequence)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.sequence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_case() {
        let seq = Sequence::new("r1".to_string(), b"acgTn".to_vec());
        assert_eq!(seq.sequence, b"ACGTN");
        assert_eq!(seq.len(), 5);
        assert!(!seq.is_empty());
    }

    #[test]
    fn test_from_text_strips_whitespace() {
        let seq = Sequence::from_text("exon2", " acg t\nca \r\n");
        assert_eq!(seq.as_bytes(), b"ACGTCA");
        assert_eq!(seq.id, "exon2");
    }

    #[test]
    fn test_validate_reports_first_bad_symbol() {
        let seq = Sequence::from_text("bad", "ACGXTZ");
        match seq.validate() {
            Err(ScreenerError::InvalidAlphabet { symbol, position }) => {
                assert_eq!(symbol, 'X');
                assert_eq!(position, 3);
            }
            other => panic!("Expected InvalidAlphabet, got {:?}", other),
        }
    }

    #[test]
    fn test_ambiguity_codes_are_valid() {
        let seq = Sequence::from_text("amb", "ACGTRYSWKMBDHVN");
        assert!(seq.validate().is_ok());
    }

    #[test]
    fn test_reverse_complement() {
        let seq = Sequence::from_text("t", "AACGTTG");
        assert_eq!(seq.reverse_complement(), b"CAACGTT".to_vec());
    }

    #[test]
    fn test_display() {
        let seq = Sequence::from_text("t", "acgt");
        assert_eq!(seq.to_string(), "ACGT");
    }
}
