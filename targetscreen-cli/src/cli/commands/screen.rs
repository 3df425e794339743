use super::{configure_threads, ScreeningOptions};
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use targetscreen_bio::{read_fasta, ScreeningPipeline, Sequence};
use targetscreen_core::ScreenerError;
use targetscreen_utils::{
    create_progress_bar, format_number, info, ranked_hits_table, success, write_screening_table,
};

#[derive(Args, Debug)]
pub struct ScreenArgs {
    /// Input sequence to cut into candidates (a FASTA path with --fasta)
    #[arg(short, long, value_name = "SEQUENCE")]
    pub input: String,

    /// Reference sequence to align candidates against (a FASTA path with --fasta)
    #[arg(short, long, value_name = "SEQUENCE")]
    pub reference: String,

    /// Read --input and --reference as FASTA files, using the first record of each
    #[arg(long)]
    pub fasta: bool,

    /// Write the table to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Show the N best hits with their antisense oligos
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    #[command(flatten)]
    pub screening: ScreeningOptions,

    /// Number of threads (passed from global)
    #[arg(skip)]
    pub threads: usize,
}

pub fn run(args: ScreenArgs) -> Result<()> {
    let config = args.screening.resolve_config()?;
    configure_threads(args.threads, &config)?;

    let input = load_sequence(&args.input, args.fasta, "input")?;
    let reference = load_sequence(&args.reference, args.fasta, "reference")?;

    let mut pipeline = ScreeningPipeline::from_config(&input, &reference, &config)?;
    if !args.screening.quiet {
        let label = format!("{} vs {}", input.id, reference.id);
        pipeline = pipeline.with_progress(create_progress_bar(0, &label));
    }
    let report = pipeline
        .run()
        .with_context(|| format!("Screening {} against {} failed", input.id, reference.id))?;

    let format = args.screening.format;
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_screening_table(BufWriter::new(file), &report.records, format)?;
            if !args.screening.quiet {
                success(&format!(
                    "Wrote {} record(s) to {}",
                    format_number(report.len()),
                    path.display()
                ));
            }
        }
        None => {
            let stdout = std::io::stdout();
            write_screening_table(stdout.lock(), &report.records, format)?;
        }
    }

    if !args.screening.quiet {
        info(&format!(
            "Retained {} of {} candidate(s), {} rejected by motif filter",
            format_number(report.records_retained),
            format_number(report.candidates_considered),
            format_number(report.windows_rejected)
        ));
    }
    if let Some(n) = args.top {
        eprintln!("{}", ranked_hits_table(&report, n));
    }

    Ok(())
}

/// Literal sequence text, or the first record of a FASTA file
fn load_sequence(source: &str, fasta: bool, default_id: &str) -> Result<Sequence> {
    if !fasta {
        return Ok(Sequence::from_text(default_id, source));
    }

    let records =
        read_fasta(source).with_context(|| format!("Failed to read FASTA from {}", source))?;
    match records.into_iter().next() {
        Some(sequence) => Ok(sequence),
        None => Err(ScreenerError::InvalidInput(format!("{} holds no FASTA records", source)).into()),
    }
}
