//! Common regex patterns for RET document extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Debit note number: "ND 123", "nd: 123", "ND-123"
    pub static ref NOTE_NUMBER: Regex = Regex::new(
        r"(?i)ND\s*[:\-]?\s*(\d+)"
    ).unwrap();

    // Due date: DD/MM/YYYY or DD-MM-YYYY (separators may be mixed)
    pub static ref DUE_DATE: Regex = Regex::new(
        r"(\d{2}[/-]\d{2}[/-]\d{4})"
    ).unwrap();

    // Quantity label followed by a number using comma or period as decimal point
    pub static ref QUANTITY: Regex = Regex::new(
        r"(?i)(?:QT|Quantidade)[:\s]*(\d+(?:[.,]\d+)?)"
    ).unwrap();

    // Amount patterns (BR format: 1.234,56). Applied in this order, all matches kept.
    pub static ref AMOUNT_BRL: Regex = Regex::new(
        r"R\$\s*(\d{1,3}(?:\.\d{3})*(?:,\d{2})?)"
    ).unwrap();

    pub static ref AMOUNT_EUR: Regex = Regex::new(
        r"€\s*(\d{1,3}(?:\.\d{3})*(?:,\d{2})?)"
    ).unwrap();

    pub static ref AMOUNT_BARE: Regex = Regex::new(
        r"(\d{1,3}(?:\.\d{3})*,\d{2})"
    ).unwrap();
}

/// Amount patterns in evaluation order.
pub fn amount_patterns() -> [&'static Regex; 3] {
    [&*AMOUNT_BRL, &*AMOUNT_EUR, &*AMOUNT_BARE]
}
