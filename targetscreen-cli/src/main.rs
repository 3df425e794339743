use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};
use targetscreen_core::ScreenerError;
use targetscreen_utils::output;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins, then TARGETSCREEN_LOG, then -v
    let log_level = std::env::var("TARGETSCREEN_LOG").unwrap_or_else(|_| {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string()
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        output::error(&format!("Error: {:#}", e));

        let exit_code = match e.downcast_ref::<ScreenerError>() {
            Some(ScreenerError::Configuration(_)) => 2,
            Some(ScreenerError::Io(_)) => 3,
            Some(
                ScreenerError::Parse(_)
                | ScreenerError::Csv(_)
                | ScreenerError::InvalidInput(_)
                | ScreenerError::InvalidAlphabet { .. }
                | ScreenerError::MissingColumn(_),
            ) => 4,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Batch(mut args) => {
            args.threads = cli.threads;
            crate::cli::commands::batch::run(args)
        }
        Commands::Screen(mut args) => {
            args.threads = cli.threads;
            crate::cli::commands::screen::run(args)
        }
        Commands::Config(args) => crate::cli::commands::config::run(args),
    }
}
