pub mod batch;
pub mod config;
pub mod screen;

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use targetscreen_core::{load_config, Config, TableFormat};
use targetscreen_utils::configure_thread_pool;

/// Screening parameters shared by `batch` and `screen`
#[derive(Args, Debug, Clone)]
pub struct ScreeningOptions {
    /// Minimum sub-sequence length, inclusive [default: 18]
    #[arg(long, value_name = "N")]
    pub seq_low: Option<usize>,

    /// Maximum sub-sequence length, exclusive [default: 36]
    #[arg(long, value_name = "N")]
    pub seq_high: Option<usize>,

    /// Conservation threshold in [0, 1] [default: 0.8]
    #[arg(short, long, value_name = "FRACTION")]
    pub threshold: Option<f64>,

    /// Configuration file (TOML); command-line flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Align the candidates of each direction in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Table format for written results
    #[arg(long, value_enum, default_value = "csv")]
    pub format: TableFormat,

    /// Hide progress bars and summaries
    #[arg(short, long)]
    pub quiet: bool,
}

impl ScreeningOptions {
    /// Defaults, then the config file, then flags
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(low) = self.seq_low {
            config.window.min_length = low;
        }
        if let Some(high) = self.seq_high {
            config.window.max_length = high;
        }
        if let Some(threshold) = self.threshold {
            config.screening.threshold = threshold;
        }
        if self.parallel {
            config.performance.parallel_candidates = true;
        }

        config.validate()?;
        Ok(config)
    }
}

/// `-j` wins over `performance.threads`; both 0 means all cores
pub fn configure_threads(cli_threads: usize, config: &Config) -> Result<usize> {
    let requested = if cli_threads != 0 {
        cli_threads
    } else {
        config.performance.threads
    };
    configure_thread_pool(requested)
}
