use super::{configure_threads, ScreeningOptions};
use anyhow::{Context, Result};
use clap::Args;
use indicatif::MultiProgress;
use std::path::PathBuf;
use targetscreen_cli::batch::{read_metadata, BatchOrchestrator, CsvDirectorySink};
use targetscreen_utils::{create_spinner, format_number, success, warning};

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Metadata CSV with "Comparison #", "Region" and "Sequence" columns
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output directory root
    #[arg(short, long, value_name = "DIR", default_value = "screen2")]
    pub out_dir: PathBuf,

    /// Screen the two directions of each comparison concurrently
    #[arg(long)]
    pub parallel_directions: bool,

    #[command(flatten)]
    pub screening: ScreeningOptions,

    /// Number of threads (passed from global)
    #[arg(skip)]
    pub threads: usize,
}

pub fn run(args: BatchArgs) -> Result<()> {
    let config = args.screening.resolve_config()?;
    let threads = configure_threads(args.threads, &config)?;
    tracing::debug!(
        "Batch screening with windows [{}, {}), threshold {}, {} thread(s)",
        config.window.min_length,
        config.window.max_length,
        config.screening.threshold,
        threads
    );

    let quiet = args.screening.quiet;
    let spinner = (!quiet).then(|| create_spinner("Reading metadata..."));
    let rows = read_metadata(&args.input)
        .with_context(|| format!("Failed to read metadata from {}", args.input.display()))?;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let mut orchestrator =
        BatchOrchestrator::new(config)?.with_parallel_directions(args.parallel_directions);
    if !quiet {
        orchestrator = orchestrator.with_progress(MultiProgress::new());
    }

    let mut sink = CsvDirectorySink::new(&args.out_dir, args.screening.format)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;
    let summary = orchestrator.run(rows, &mut sink)?;

    if !quiet {
        println!("{}", summary.to_table());
    }
    for skipped in &summary.skipped {
        warning(&format!(
            "Comparison #{} has {} row(s), expected 2; skipped",
            skipped.comparison, skipped.rows
        ));
    }
    success(&format!(
        "Wrote {} table(s) with {} record(s) to {}",
        sink.written().len(),
        format_number(summary.total_retained()),
        sink.root().display()
    ));

    Ok(())
}
