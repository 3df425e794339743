//! Sequence handling, glocal alignment and conservation screening for targetscreen

pub mod alignment;
pub mod screening;
pub mod sequence;

// Re-export commonly used types
pub use alignment::{
    AlignmentResult, AlignmentSet, Alignments, GapCost, GapPenalties, PairwiseAligner,
    ScoringModel, SubstitutionMatrix, SubstitutionTally,
};
pub use screening::{
    expected_window_count, Candidate, ConservationFilter, PipelineState, ScreeningPipeline,
    ScreeningRecord, ScreeningReport, SequenceWindower, Windows,
};
pub use sequence::{read_fasta, MotifFilter, Sequence, IUPAC_NUCLEOTIDES};
