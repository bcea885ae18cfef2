//! Data models for records, summaries and configuration.

pub mod config;
pub mod record;
pub mod summary;

pub use config::RetConfig;
pub use record::{DocumentType, NoteKind, Record, UNKNOWN_COMPANY};
pub use summary::{AggregateSummary, TypeSummary};
