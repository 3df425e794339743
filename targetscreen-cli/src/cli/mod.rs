pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "targetscreen",
    version,
    about = "Screen sequences for conserved antisense oligonucleotide targets",
    long_about = "targetscreen cuts every sub-sequence of a configurable length range out of an \
                  input sequence, aligns each one against a reference with free terminal gaps, \
                  and keeps the candidates whose conservation clears a threshold."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Number of threads to use (0 = all available)
    #[arg(short = 'j', long, default_value = "0", global = true)]
    pub threads: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Screen every comparison of a metadata CSV in both directions
    Batch(commands::batch::BatchArgs),

    /// Screen one input sequence against one reference
    Screen(commands::screen::ScreenArgs),

    /// Print or write the effective configuration as TOML
    Config(commands::config::ConfigArgs),
}
