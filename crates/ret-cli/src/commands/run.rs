//! Run command - process every charge document under a root directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use ret_core::document::rules::format_br_amount;
use ret_core::scan::validate_root;
use ret_core::{
    scan_documents, AggregateSummary, DocumentType, PdfExtractor, Record, RecordBuilder,
    RetConfig, RetError, Session,
};

use crate::output::{
    format_records_csv, format_records_text, format_summary_text, write_exports, ExportTargets,
    OutputFormat, RunOutput,
};

/// Records kept next to the outputs when an export fails.
const FALLBACK_RECORDS_FILE: &str = "RET_registros.json";

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Root directory containing the EAT / Penalidades / TOP folders
    #[arg(required = true)]
    root: PathBuf,

    /// Document types to process, comma separated (eat, penalidades, top)
    #[arg(short, long, value_delimiter = ',')]
    types: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Append the records to the SQLite database
    #[arg(long)]
    db: bool,

    /// Write the XLSX report
    #[arg(long)]
    report: bool,

    /// Directory for the database and report (default: the root directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Save the extracted records as JSON for a later `ret export`
    #[arg(long)]
    save_records: Option<PathBuf>,
}

pub async fn run(args: RunArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = super::load_config(config_path)?;
    if !args.types.is_empty() {
        config.scan.enabled_types = parse_types(&args.types)?;
    }

    validate_root(&args.root)?;
    let files = scan_documents(&args.root, &config.scan)?;

    if files.is_empty() {
        warn!("No documents found under {}", args.root.display());
        eprintln!(
            "{} No PDF documents found in {}",
            style("⚠").yellow(),
            args.root.display()
        );
        return Ok(());
    }

    eprintln!(
        "{} Found {} documents to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let builder = RecordBuilder::from_config(&config.extraction);
    let mut session = Session::new();
    session.process(&files, &builder, &PdfExtractor::new(), |path, _| {
        pb.set_message(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        pb.inc(1);
    });
    pb.finish_with_message("Complete");

    let summary = session.summary();
    print_results(&session, &summary, &config, args.format)?;

    if let Some(path) = &args.save_records {
        save_records(path, session.records())?;
        eprintln!("{} Records saved to {}", style("✓").green(), path.display());
    }

    let output_dir = args.output_dir.clone().unwrap_or_else(|| args.root.clone());
    let targets = ExportTargets {
        database: args.db.then(|| output_dir.join(&config.output.database_file)),
        report: args.report.then(|| output_dir.join(&config.output.report_file)),
    };

    if !targets.is_empty() {
        fs::create_dir_all(&output_dir)?;
        let failures = write_exports(
            session.records(),
            &summary,
            &targets,
            &config.extraction.currency,
        );

        for (path, e) in &failures {
            eprintln!(
                "{} Could not write {}: {}",
                style("✗").red(),
                path.display(),
                e
            );
        }

        if !failures.is_empty() {
            let kept = match &args.save_records {
                Some(path) => Some(path.clone()),
                None => keep_records(&output_dir, session.records()),
            };
            if let Some(path) = kept {
                eprintln!(
                    "{} Retry without reprocessing: ret export {}",
                    style("ℹ").blue(),
                    path.display()
                );
            }
            anyhow::bail!("{} of the requested outputs failed", failures.len());
        }

        for path in [&targets.database, &targets.report].into_iter().flatten() {
            eprintln!("{} Saved {}", style("✓").green(), path.display());
        }
    }

    debug!("Run finished in {:?}", start.elapsed());

    Ok(())
}

fn parse_types(names: &[String]) -> Result<Vec<DocumentType>, RetError> {
    names
        .iter()
        .map(|name| {
            DocumentType::from_name(name)
                .ok_or_else(|| RetError::Config(format!("unknown document type: {}", name)))
        })
        .collect()
}

fn print_results(
    session: &Session,
    summary: &AggregateSummary,
    config: &RetConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let output = RunOutput::new(session.records(), summary, session.failures());
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => print!("{}", format_records_csv(session.records())?),
        OutputFormat::Text => {
            println!();
            println!(
                "{} Processed {} documents, {} with values",
                style("✓").green(),
                summary.document_count,
                style(summary.with_values).green()
            );
            println!(
                "   Total: {}",
                style(format!(
                    "{} {}",
                    config.extraction.currency,
                    format_br_amount(summary.grand_total)
                ))
                .bold()
            );
            println!();
            print!("{}", format_summary_text(summary, &config.extraction.currency));
            println!();
            print!("{}", format_records_text(session.records()));

            if !session.failures().is_empty() {
                println!();
                println!("{}", style("Unreadable documents:").red());
                for failure in session.failures() {
                    println!("  - {}: {}", failure.path.display(), failure.reason);
                }
            }
        }
    }

    Ok(())
}

pub(crate) fn save_records(path: &Path, records: &[Record]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(records)?)?;
    Ok(())
}

/// Write the records next to the failed outputs so they can be exported again.
fn keep_records(output_dir: &Path, records: &[Record]) -> Option<PathBuf> {
    let path = output_dir.join(FALLBACK_RECORDS_FILE);
    match save_records(&path, records) {
        Ok(()) => Some(path),
        Err(e) => {
            error!("Failed to keep records in {}: {}", path.display(), e);
            None
        }
    }
}
