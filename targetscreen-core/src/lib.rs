//! Core utilities and types shared across all targetscreen crates

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{
    load_config, save_config, Config, PerformanceConfig, ScoringConfig, ScreeningConfig,
    WindowConfig,
};
pub use error::{ScreenerError, ScreenerResult};
pub use types::TableFormat;

/// Version information for the targetscreen project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Repeat motif excluded from every candidate window unless configured otherwise
pub const DEFAULT_EXCLUDED_MOTIF: &str = "CTGCTGCTG";
