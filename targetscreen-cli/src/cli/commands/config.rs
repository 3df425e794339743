use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use targetscreen_core::{load_config, save_config, Config, ScreenerError};
use targetscreen_utils::success;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Load and validate this file instead of starting from the defaults
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the configuration to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    match &args.output {
        Some(path) => {
            save_config(path, &config)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            success(&format!("Configuration written to {}", path.display()));
        }
        None => {
            let text = toml::to_string_pretty(&config)
                .map_err(|e| ScreenerError::Serialization(e.to_string()))?;
            print!("{}", text);
        }
    }

    Ok(())
}
