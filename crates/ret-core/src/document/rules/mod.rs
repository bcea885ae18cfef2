//! Rule-based field extractors for RET charge documents.

pub mod amounts;
pub mod dates;
pub mod note;
pub mod patterns;
pub mod quantity;

pub use amounts::{extract_amounts, format_br_amount, normalize, AmountExtractor};
pub use dates::{extract_due_date, DueDateExtractor};
pub use note::{extract_note_number, NoteNumberExtractor};
pub use quantity::{extract_quantity, QuantityExtractor};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A matched value together with where it was found.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Position of the value in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Text-derived fields of a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub note_number: String,
    pub due_date: String,
    pub quantity: Decimal,
    pub matched_amounts: Vec<Decimal>,
}

impl ExtractedFields {
    /// Largest matched amount, or zero.
    pub fn total_value(&self) -> Decimal {
        self.matched_amounts
            .iter()
            .copied()
            .max()
            .unwrap_or(Decimal::ZERO)
    }

    /// Total divided by quantity, or zero when no quantity was found.
    ///
    /// A quotient outside the `Decimal` range is also reported as zero.
    pub fn unit_value(&self) -> Decimal {
        if self.quantity <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        self.total_value()
            .checked_div(self.quantity)
            .unwrap_or_else(|| {
                tracing::warn!(
                    "Unit value out of range for total {} and quantity {}",
                    self.total_value(),
                    self.quantity
                );
                Decimal::ZERO
            })
    }
}

/// Run every sub-extraction over the full document text.
///
/// Each field is independent; a missing match leaves that field at its default.
pub fn extract_fields(text: &str) -> ExtractedFields {
    if text.is_empty() {
        return ExtractedFields::default();
    }

    ExtractedFields {
        note_number: extract_note_number(text).unwrap_or_default(),
        due_date: extract_due_date(text).unwrap_or_default(),
        quantity: extract_quantity(text).unwrap_or_default(),
        matched_amounts: extract_amounts(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_extract_fields() {
        let text = "NOTA DE DEBITO\nND: 0917167397\nVencimento 10/04/2024\nR$ 1.234,56\nQT: 2\n";
        let fields = extract_fields(text);

        assert_eq!(fields.note_number, "0917167397");
        assert_eq!(fields.due_date, "10/04/2024");
        assert_eq!(fields.quantity, dec("2"));
        assert_eq!(fields.total_value(), dec("1234.56"));
        assert_eq!(fields.unit_value(), dec("617.28"));
    }

    #[test]
    fn test_empty_text() {
        let fields = extract_fields("");
        assert_eq!(fields, ExtractedFields::default());
        assert_eq!(fields.total_value(), Decimal::ZERO);
        assert_eq!(fields.unit_value(), Decimal::ZERO);
    }

    #[test]
    fn test_quantity_without_amounts() {
        let fields = extract_fields("Quantidade: 40");
        assert_eq!(fields.quantity, dec("40"));
        assert_eq!(fields.total_value(), Decimal::ZERO);
        assert_eq!(fields.unit_value(), Decimal::ZERO);
    }

    #[test]
    fn test_unit_value_overflow_is_zero() {
        let fields = extract_fields("R$ 100.000,00\nQT: 0,0000000000000000000000001");

        assert_eq!(fields.total_value(), dec("100000.00"));
        assert!(fields.quantity > Decimal::ZERO);
        assert_eq!(fields.unit_value(), Decimal::ZERO);
    }

    #[test]
    fn test_total_is_max_not_sum() {
        let text = "Parcela R$ 1.234,56\nResumo: 1.234,56\nTaxa 10,00";
        let fields = extract_fields(text);

        let occurrences = fields
            .matched_amounts
            .iter()
            .filter(|a| **a == dec("1234.56"))
            .count();
        assert!(occurrences >= 2);
        assert_eq!(fields.total_value(), dec("1234.56"));
    }
}
