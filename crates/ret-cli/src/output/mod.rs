//! Rendering and writing of records and summaries.

pub mod report;
pub mod store;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info};

use ret_core::document::rules::format_br_amount;
use ret_core::{AggregateSummary, DocumentFailure, Record};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

/// JSON document printed by `run` and read back by `export`.
#[derive(Serialize)]
pub struct RunOutput<'a> {
    pub records: &'a [Record],
    pub summary: &'a AggregateSummary,
    pub failures: Vec<FailureOutput<'a>>,
}

#[derive(Serialize)]
pub struct FailureOutput<'a> {
    pub path: &'a Path,
    pub reason: &'a str,
}

impl<'a> RunOutput<'a> {
    pub fn new(
        records: &'a [Record],
        summary: &'a AggregateSummary,
        failures: &'a [DocumentFailure],
    ) -> Self {
        Self {
            records,
            summary,
            failures: failures
                .iter()
                .map(|f| FailureOutput {
                    path: &f.path,
                    reason: &f.reason,
                })
                .collect(),
        }
    }
}

/// Timestamp stored with persisted rows and shown in the report.
pub fn processing_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn format_records_csv(records: &[Record]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    // Write header
    wtr.write_record([
        "tipo_encargo",
        "empresa",
        "nota_tipo",
        "numero_nd",
        "data_vencimento",
        "valor_total",
        "quantidade",
        "valor_unitario",
        "arquivo",
        "caminho",
    ])?;

    for record in records {
        wtr.write_record([
            record.document_type.label(),
            &record.company,
            record.note_kind.label(),
            &record.note_number,
            &record.due_date,
            &format!("{:.2}", record.total_value),
            &format!("{:.2}", record.quantity),
            &format!("{:.2}", record.unit_value),
            &record.file_name(),
            &record.source_path.display().to_string(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

/// Detailed listing, one line per record.
pub fn format_records_text(records: &[Record]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<12} {:<15} {:<8} {:<12} {:<12} {:>14} {:>10} {:>14}\n",
        "Tipo", "Empresa", "Nota", "Nº", "Vencimento", "Valor Total", "QT", "Valor Unit."
    ));

    for record in records {
        output.push_str(&format!(
            "{:<12} {:<15} {:<8} {:<12} {:<12} {:>14} {:>10} {:>14}\n",
            record.document_type.label(),
            record.company,
            record.note_kind.label(),
            record.note_number,
            record.due_date,
            format!("{:.2}", record.total_value),
            format!("{:.2}", record.quantity),
            format!("{:.2}", record.unit_value),
        ));
    }

    output
}

/// Run statistics and per-type totals.
pub fn format_summary_text(summary: &AggregateSummary, currency: &str) -> String {
    let mut output = String::new();

    output.push_str("Processing statistics\n");
    output.push_str(&format!("  Documents:        {}\n", summary.document_count));
    output.push_str(&format!("  With values:      {}\n", summary.with_values));
    output.push_str(&format!(
        "  Total:            {} {}\n",
        currency,
        format_br_amount(summary.grand_total)
    ));
    output.push_str("\nBy type\n");

    for group in &summary.per_type {
        output.push_str(&format!("  {}:\n", group.document_type.label()));
        output.push_str(&format!("    Documents: {}\n", group.count));
        output.push_str(&format!(
            "    Total:     {} {}\n",
            currency,
            format_br_amount(group.sum)
        ));
    }

    output
}

/// Where `run` and `export` write their files.
#[derive(Debug, Clone, Default)]
pub struct ExportTargets {
    pub database: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

impl ExportTargets {
    pub fn is_empty(&self) -> bool {
        self.database.is_none() && self.report.is_none()
    }
}

/// Write every requested output. A failing target does not stop the others.
///
/// Returns the failures as `(target, error)` pairs.
pub fn write_exports(
    records: &[Record],
    summary: &AggregateSummary,
    targets: &ExportTargets,
    currency: &str,
) -> Vec<(PathBuf, anyhow::Error)> {
    let processed_at = processing_timestamp();
    let mut failures = Vec::new();

    if let Some(path) = &targets.database {
        let result = store::RecordStore::open(path)
            .and_then(|mut store| store.append(records, &processed_at));
        match result {
            Ok(rows) => info!("Saved {} rows to {}", rows, path.display()),
            Err(e) => {
                error!("Failed to save database {}: {}", path.display(), e);
                failures.push((path.clone(), e.into()));
            }
        }
    }

    if let Some(path) = &targets.report {
        match report::write_report(path, records, summary, currency, &processed_at) {
            Ok(()) => info!("Report written to {}", path.display()),
            Err(e) => {
                error!("Failed to write report {}: {}", path.display(), e);
                failures.push((path.clone(), e.into()));
            }
        }
    }

    failures
}
