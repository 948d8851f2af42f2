//! Parse command - extract data from a single receipt text file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use paragon_core::{ExtractionResult, ParsedReceipt, ReceiptParser};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file (OCR output)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print extraction warnings to stderr
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (one row per item)
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = fs::read_to_string(&args.input)?;
    let result = ReceiptParser::new().parse(&text);

    if args.show_warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Extraction warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let output = format_receipt(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Wrote {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Render an extraction result in the requested format.
pub fn format_receipt(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result.receipt)?),
        OutputFormat::Csv => format_csv(&result.receipt),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(receipt: &ParsedReceipt) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["name", "quantity", "price", "category"])?;

    for item in &receipt.items {
        let price = item.price.map(|p| format!("{p:.2}")).unwrap_or_default();
        writer.write_record([
            item.name.as_str(),
            item.quantity.as_deref().unwrap_or(""),
            price.as_str(),
            item.category.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("failed to flush csv writer: {err}"))?;
    Ok(String::from_utf8(bytes)?)
}

fn format_text(result: &ExtractionResult) -> String {
    let receipt = &result.receipt;
    let mut out = String::new();

    out.push_str(&format!(
        "Store: {}\n",
        receipt.store.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!(
        "Date:  {}\n",
        receipt
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string())
    ));
    out.push_str(&format!(
        "Total: {}\n",
        receipt
            .total
            .map(|t| format!("{t:.2}"))
            .unwrap_or_else(|| "-".to_string())
    ));

    out.push_str(&format!("Items ({}):\n", receipt.items.len()));
    for item in &receipt.items {
        out.push_str(&format!(
            "  {:<32} {:>8}  {}\n",
            item.name,
            item.price.map(|p| format!("{p:.2}")).unwrap_or_default(),
            item.category
        ));
    }

    out
}
