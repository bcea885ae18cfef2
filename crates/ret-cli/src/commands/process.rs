//! Process command - extract data from a single charge document.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use ret_core::{BuildOutcome, PdfExtractor, Record, RecordBuilder};

use crate::output::{format_records_csv, format_records_text, OutputFormat};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show the individual amounts found in the text
    #[arg(long)]
    show_amounts: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;

    if !args.input.is_file() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let builder = RecordBuilder::from_config(&config.extraction);
    let outcome = builder.build_from_source(&args.input, &PdfExtractor::new());

    if let BuildOutcome::Unreadable { reason, .. } = &outcome {
        eprintln!("{} Could not read document: {}", style("⚠").yellow(), reason);
    }

    let record = outcome.into_record();
    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_amounts {
        println!();
        println!(
            "{} {} amounts found: {:?}",
            style("ℹ").blue(),
            record.matched_amounts.len(),
            record
                .matched_amounts
                .iter()
                .map(|a| format!("{:.2}", a))
                .collect::<Vec<_>>()
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_record(record: &Record, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_records_csv(std::slice::from_ref(record)),
        OutputFormat::Text => Ok(format_records_text(std::slice::from_ref(record))),
    }
}
