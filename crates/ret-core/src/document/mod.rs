//! Document classification and field extraction.

pub mod classify;
mod parser;
pub mod rules;

pub use classify::resolve_company;
pub use parser::{BuildOutcome, RecordBuilder};
pub use rules::{extract_fields, ExtractedFields};
