//! Export command - write the database and report from saved records.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use serde::Deserialize;
use tracing::{info, warn};

use ret_core::{Record, Session};

use crate::output::{write_exports, ExportTargets};

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Records JSON written by `ret run --save-records` or `ret run --format json`
    #[arg(required = true)]
    records: PathBuf,

    /// SQLite database to append to
    #[arg(long)]
    db: Option<PathBuf>,

    /// XLSX report to write
    #[arg(long)]
    report: Option<PathBuf>,
}

/// Either a bare record list or a full `run` JSON document.
#[derive(Deserialize)]
#[serde(untagged)]
enum SavedRecords {
    Bare(Vec<Record>),
    Run { records: Vec<Record> },
}

pub async fn run(args: ExportArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let targets = ExportTargets {
        database: args.db,
        report: args.report,
    };
    if targets.is_empty() {
        anyhow::bail!("Nothing to export: pass --db and/or --report");
    }

    let session = Session::from_records(load_records(&args.records)?);
    info!("Loaded {} records from {}", session.records().len(), args.records.display());

    let summary = session.summary();
    if summary.is_empty() {
        warn!("{} holds no records; writing empty outputs", args.records.display());
    }

    let failures = write_exports(
        session.records(),
        &summary,
        &targets,
        &config.extraction.currency,
    );

    for (path, e) in &failures {
        eprintln!("{} Could not write {}: {}", style("✗").red(), path.display(), e);
    }
    if !failures.is_empty() {
        anyhow::bail!("{} of the requested outputs failed", failures.len());
    }

    for path in [&targets.database, &targets.report].into_iter().flatten() {
        println!("{} Saved {}", style("✓").green(), path.display());
    }

    Ok(())
}

fn load_records(path: &Path) -> anyhow::Result<Vec<Record>> {
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
    let saved: SavedRecords = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Invalid records file {}: {}", path.display(), e))?;

    Ok(match saved {
        SavedRecords::Bare(records) | SavedRecords::Run { records } => records,
    })
}
