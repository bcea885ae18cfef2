//! Processing session owning the records of one run.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::aggregate::summarize;
use crate::document::{BuildOutcome, RecordBuilder};
use crate::error::Result;
use crate::models::config::ScanConfig;
use crate::models::record::Record;
use crate::models::summary::AggregateSummary;
use crate::pdf::TextSource;
use crate::scan::{scan_documents, validate_root};

/// A document that could not be read during the last run.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Records collected by the caller across one processing run.
///
/// Records are only ever appended; [`Session::begin_run`] empties the
/// collection so nothing carries over between runs.
#[derive(Debug, Clone, Default)]
pub struct Session {
    records: Vec<Record>,
    failures: Vec<DocumentFailure>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a session from previously saved records.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records,
            failures: Vec::new(),
        }
    }

    /// Discard everything from the previous run.
    pub fn begin_run(&mut self) {
        self.records.clear();
        self.failures.clear();
    }

    /// Append a built record, remembering why it failed if it did.
    pub fn push(&mut self, outcome: BuildOutcome) {
        if let BuildOutcome::Unreadable { record, reason } = &outcome {
            self.failures.push(DocumentFailure {
                path: record.source_path.clone(),
                reason: reason.clone(),
            });
        }
        self.records.push(outcome.into_record());
    }

    /// Build and append a record for each path, in order.
    ///
    /// `on_document` is called after each document with its outcome.
    pub fn process<S, F>(
        &mut self,
        paths: &[PathBuf],
        builder: &RecordBuilder,
        source: &S,
        mut on_document: F,
    ) where
        S: TextSource + ?Sized,
        F: FnMut(&Path, &BuildOutcome),
    {
        for path in paths {
            info!("Processing: {}", path.display());
            let outcome = builder.build_from_source(path, source);

            let record = outcome.record();
            if record.has_values() {
                info!("{} values found in {}", record.matched_amounts.len(), path.display());
            } else if !outcome.is_unreadable() {
                warn!("No values found in {}", path.display());
            }

            on_document(path.as_path(), &outcome);
            self.push(outcome);
        }
    }

    /// Scan `root` and process every matching document.
    ///
    /// A bad root is reported before the previous run's records are touched.
    pub fn run<S: TextSource + ?Sized>(
        &mut self,
        root: &Path,
        scan: &ScanConfig,
        builder: &RecordBuilder,
        source: &S,
    ) -> Result<usize> {
        validate_root(root)?;
        let paths = scan_documents(root, scan)?;

        self.begin_run();
        self.process(&paths, builder, source, |_, _| {});

        info!("Processed {} documents from {}", paths.len(), root.display());
        Ok(paths.len())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn failures(&self) -> &[DocumentFailure] {
        &self.failures
    }

    /// Totals over the current records.
    pub fn summary(&self) -> AggregateSummary {
        summarize(&self.records)
    }
}
