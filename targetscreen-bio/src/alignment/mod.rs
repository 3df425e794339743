pub mod nw_aligner;
pub mod result;
pub mod scoring;
pub mod traceback;

pub use nw_aligner::{PairwiseAligner, TIE_EPSILON};
pub use result::{AlignmentResult, SubstitutionTally, GAP};
pub use scoring::{GapCost, GapPenalties, GapRegime, ScoringModel, SubstitutionMatrix};
pub use traceback::{AlignmentSet, Alignments};
