//! Core library for RET charge document processing.
//!
//! This crate provides:
//! - PDF text extraction
//! - Document classification by path (EAT, penalties, TOP) and by file name
//!   (company, debit/credit note)
//! - Rule-based field extraction (note number, due date, quantity, BR amounts)
//! - Per-type and grand total aggregation over a processing session

pub mod aggregate;
pub mod document;
pub mod error;
pub mod models;
pub mod pdf;
pub mod scan;
pub mod session;

pub use aggregate::summarize;
pub use document::{extract_fields, BuildOutcome, ExtractedFields, RecordBuilder};
pub use error::{ExtractionError, PdfError, Result, RetError};
pub use models::{AggregateSummary, DocumentType, NoteKind, Record, RetConfig, TypeSummary};
pub use pdf::{PdfExtractor, TextSource};
pub use scan::scan_documents;
pub use session::{DocumentFailure, Session};
