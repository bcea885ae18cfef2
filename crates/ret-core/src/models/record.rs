//! Charge document records.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sentinel used when no known company appears in a file name.
pub const UNKNOWN_COMPANY: &str = "N/A";

/// One structured result per processed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Path of the originating document.
    pub source_path: PathBuf,

    /// Charge category, decided from the path only.
    pub document_type: DocumentType,

    /// Known counterparty, or [`UNKNOWN_COMPANY`].
    pub company: String,

    /// Debit or credit note, from the file name.
    pub note_kind: NoteKind,

    /// Digits following the `ND` marker, or empty.
    #[serde(default)]
    pub note_number: String,

    /// `DD/MM/YYYY` or `DD-MM-YYYY`, or empty.
    #[serde(default)]
    pub due_date: String,

    /// Largest amount found in the text.
    #[serde(default)]
    pub total_value: Decimal,

    /// Quantity found after a `QT` / `Quantidade` label.
    #[serde(default)]
    pub quantity: Decimal,

    /// `total_value / quantity` when a quantity was found.
    #[serde(default)]
    pub unit_value: Decimal,

    /// Every positive amount matched, in pattern-then-occurrence order.
    #[serde(default)]
    pub matched_amounts: Vec<Decimal>,
}

impl Record {
    /// Last component of the source path.
    pub fn file_name(&self) -> String {
        file_name_of(&self.source_path)
    }

    /// Whether any amount was matched in the document text.
    pub fn has_values(&self) -> bool {
        !self.matched_amounts.is_empty()
    }
}

pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Category of a billed charge document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Access and transport charges (EAT).
    Eat,
    /// Penalties (penalidades).
    Penalty,
    /// Takeoff point charges (TOP).
    TakeoffPoint,
    /// Anything else.
    Other,
}

impl DocumentType {
    /// Categories that can be toggled for a run. `Other` is always processed.
    pub const SELECTABLE: [DocumentType; 3] =
        [DocumentType::Eat, DocumentType::Penalty, DocumentType::TakeoffPoint];

    /// Report label.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Eat => "EAT",
            DocumentType::Penalty => "Penalidades",
            DocumentType::TakeoffPoint => "TOP",
            DocumentType::Other => "Outros",
        }
    }

    /// Parse a category from a user-supplied name or label.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "eat" => Some(DocumentType::Eat),
            "penalty" | "penalidade" | "penalidades" => Some(DocumentType::Penalty),
            "top" | "takeoff_point" | "takeoff-point" => Some(DocumentType::TakeoffPoint),
            "other" | "outros" => Some(DocumentType::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Debit/credit marker taken from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    Debit,
    Credit,
    Unknown,
}

impl NoteKind {
    /// Report label.
    pub fn label(&self) -> &'static str {
        match self {
            NoteKind::Debit => "Débito",
            NoteKind::Credit => "Crédito",
            NoteKind::Unknown => "N/A",
        }
    }
}

impl std::fmt::Display for NoteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_type_from_name() {
        assert_eq!(DocumentType::from_name("EAT"), Some(DocumentType::Eat));
        assert_eq!(DocumentType::from_name("Penalidades"), Some(DocumentType::Penalty));
        assert_eq!(DocumentType::from_name(" top "), Some(DocumentType::TakeoffPoint));
        assert_eq!(DocumentType::from_name("outros"), Some(DocumentType::Other));
        assert_eq!(DocumentType::from_name("invoice"), None);
    }

    #[test]
    fn test_record_file_name() {
        let record = Record {
            source_path: PathBuf::from("RET/EAT/AMBEV_ND.pdf"),
            document_type: DocumentType::Eat,
            company: "AMBEV".to_string(),
            note_kind: NoteKind::Debit,
            note_number: String::new(),
            due_date: String::new(),
            total_value: Decimal::ZERO,
            quantity: Decimal::ZERO,
            unit_value: Decimal::ZERO,
            matched_amounts: Vec::new(),
        };

        assert_eq!(record.file_name(), "AMBEV_ND.pdf");
        assert!(!record.has_values());
    }
}
