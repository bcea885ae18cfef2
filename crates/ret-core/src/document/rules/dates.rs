//! Due date extraction.

use super::patterns::DUE_DATE;
use super::{ExtractionMatch, FieldExtractor};

/// Extracts `DD/MM/YYYY`-shaped dates verbatim.
///
/// The text is returned as found; no calendar validation takes place.
pub struct DueDateExtractor;

impl DueDateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DueDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DueDateExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        DUE_DATE
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Extract the first due date from text.
pub fn extract_due_date(text: &str) -> Option<String> {
    DueDateExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_due_date() {
        assert_eq!(
            extract_due_date("Vencimento: 15/03/2024"),
            Some("15/03/2024".to_string())
        );
        assert_eq!(
            extract_due_date("Emissao 01-02-2024, vence 28/02/2024"),
            Some("01-02-2024".to_string())
        );
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(extract_due_date("10/05-2023"), Some("10/05-2023".to_string()));
    }

    #[test]
    fn test_short_year_is_ignored() {
        assert_eq!(extract_due_date("15/03/24"), None);
        assert_eq!(extract_due_date("2024-03-15"), None);
    }
}
