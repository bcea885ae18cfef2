//! Debit note number extraction.

use super::patterns::NOTE_NUMBER;
use super::{ExtractionMatch, FieldExtractor};

/// Extracts the digit run following an `ND` marker.
pub struct NoteNumberExtractor;

impl NoteNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoteNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NoteNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        NOTE_NUMBER.captures(text).and_then(|caps| {
            let digits = caps.get(1)?;
            Some(
                ExtractionMatch::new(digits.as_str().to_string(), &caps[0])
                    .with_position(digits.start(), digits.end()),
            )
        })
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        NOTE_NUMBER
            .captures_iter(text)
            .filter_map(|caps| {
                let digits = caps.get(1)?;
                Some(
                    ExtractionMatch::new(digits.as_str().to_string(), &caps[0])
                        .with_position(digits.start(), digits.end()),
                )
            })
            .collect()
    }
}

/// Extract the first debit note number from text.
pub fn extract_note_number(text: &str) -> Option<String> {
    NoteNumberExtractor::new().extract(text).map(|m| m.value)
}
