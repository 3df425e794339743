//! Core error types for targetscreen

use thiserror::Error;

/// Main error type for screening operations
#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Aligner not configured: supply a scoring model before aligning")]
    NotConfigured,

    #[error("Invalid symbol '{symbol}' at position {position} (not in the nucleotide alphabet)")]
    InvalidAlphabet { symbol: char, position: usize },

    #[error("Comparison #{comparison} has {rows} row(s), expected 2")]
    MalformedPairing { comparison: u32, rows: usize },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Pipeline state error: {0}")]
    PipelineState(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for screening operations
pub type ScreenerResult<T> = Result<T, ScreenerError>;

impl ScreenerError {
    /// Whether the batch layer may skip the offending unit and carry on
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ScreenerError::MalformedPairing { .. })
    }
}
