pub mod fasta;
pub mod motif;
pub mod types;

// Re-export commonly used types
pub use fasta::read_fasta;
pub use motif::MotifFilter;
pub use types::{Sequence, IUPAC_NUCLEOTIDES};
