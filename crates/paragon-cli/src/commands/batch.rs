//! Batch processing command for multiple receipt text files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use paragon_core::ReceiptParser;

use super::parse::{format_receipt, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (e.g. "scans/*.txt")
    #[arg(required = true)]
    input: String,

    /// Output directory (default: next to each input file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?.filter_map(|entry| entry.ok()).collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let parser = ReceiptParser::new();
    let mut processed = 0usize;
    let mut failed = 0usize;

    for path in &files {
        pb.set_message(path.display().to_string());

        match process_file(&parser, path, &args) {
            Ok(()) => processed += 1,
            Err(err) => {
                failed += 1;
                error!("failed to process {}: {err}", path.display());
                if !args.continue_on_error {
                    pb.abandon();
                    return Err(err);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    println!(
        "{} Processed {} files ({} failed) in {:.1}s",
        style("✓").green(),
        processed,
        failed,
        start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn process_file(parser: &ReceiptParser, path: &PathBuf, args: &BatchArgs) -> anyhow::Result<()> {
    let text = fs::read_to_string(path)?;
    let result = parser.parse(&text);

    debug!(
        "{}: {} items in {}ms",
        path.display(),
        result.receipt.items.len(),
        result.processing_time_ms
    );

    let rendered = format_receipt(&result, args.format)?;
    let output_path = output_path_for(path, args);
    fs::write(&output_path, rendered)?;

    Ok(())
}

fn output_path_for(input: &PathBuf, args: &BatchArgs) -> PathBuf {
    let extension = match args.format {
        OutputFormat::Json => "json",
        OutputFormat::Csv => "csv",
        OutputFormat::Text => "txt",
    };

    let file_name = input
        .file_stem()
        .map(|stem| format!("{}.receipt.{extension}", stem.to_string_lossy()))
        .unwrap_or_else(|| format!("receipt.{extension}"));

    match &args.output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}
