//! Record builder combining the classifiers and the field rules.

use std::path::Path;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::PdfError;
use crate::models::config::{ExtractionConfig, DEFAULT_COMPANIES};
use crate::models::record::{file_name_of, DocumentType, NoteKind, Record};
use crate::pdf::TextSource;

use super::classify::resolve_company;
use super::rules::extract_fields;

/// Outcome of building one record.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    /// Text was available and the fields were extracted from it.
    Extracted(Record),
    /// Text could not be read. The record carries only path-derived fields.
    Unreadable { record: Record, reason: String },
}

impl BuildOutcome {
    pub fn record(&self) -> &Record {
        match self {
            BuildOutcome::Extracted(record) => record,
            BuildOutcome::Unreadable { record, .. } => record,
        }
    }

    pub fn into_record(self) -> Record {
        match self {
            BuildOutcome::Extracted(record) => record,
            BuildOutcome::Unreadable { record, .. } => record,
        }
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self, BuildOutcome::Unreadable { .. })
    }

    /// Failure reason for unreadable documents.
    pub fn failure(&self) -> Option<&str> {
        match self {
            BuildOutcome::Extracted(_) => None,
            BuildOutcome::Unreadable { reason, .. } => Some(reason),
        }
    }
}

/// Builds one [`Record`] per document.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    /// Company registry, in match priority order.
    companies: Vec<String>,
}

impl RecordBuilder {
    /// Create a builder with the default company registry.
    pub fn new() -> Self {
        Self {
            companies: DEFAULT_COMPANIES.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Create a builder from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_companies(config.companies.clone())
    }

    /// Replace the company registry.
    pub fn with_companies(mut self, companies: Vec<String>) -> Self {
        self.companies = companies;
        self
    }

    /// Build a record from a path and the result of reading its text.
    pub fn build(&self, path: &Path, text: std::result::Result<String, PdfError>) -> BuildOutcome {
        let mut record = self.classify(path);

        let text = match text {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to process {}: {}", path.display(), e);
                return BuildOutcome::Unreadable {
                    record,
                    reason: e.to_string(),
                };
            }
        };

        let fields = extract_fields(&text);
        record.total_value = fields.total_value();
        record.unit_value = fields.unit_value();
        record.note_number = fields.note_number;
        record.due_date = fields.due_date;
        record.quantity = fields.quantity;
        record.matched_amounts = fields.matched_amounts;

        debug!(
            "Extracted {} amounts from {} (total {})",
            record.matched_amounts.len(),
            path.display(),
            record.total_value
        );

        BuildOutcome::Extracted(record)
    }

    /// Read a document through `source` and build its record.
    pub fn build_from_source<S: TextSource + ?Sized>(&self, path: &Path, source: &S) -> BuildOutcome {
        self.build(path, source.extract_text(path))
    }

    /// Path-derived fields with every text-derived field at its default.
    fn classify(&self, path: &Path) -> Record {
        let file_name = file_name_of(path);

        Record {
            source_path: path.to_path_buf(),
            document_type: DocumentType::classify(path),
            company: resolve_company(&file_name, self.companies.as_slice()),
            note_kind: NoteKind::classify(&file_name),
            note_number: String::new(),
            due_date: String::new(),
            total_value: Decimal::ZERO,
            quantity: Decimal::ZERO,
            unit_value: Decimal::ZERO,
            matched_amounts: Vec::new(),
        }
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
