//! PDF text extraction.

mod extractor;

pub use extractor::PdfExtractor;

use std::path::Path;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Something that can turn a document path into its page text.
///
/// Failure is a value: implementations must not panic on unreadable input.
pub trait TextSource {
    /// Return the text of every page, joined by line breaks.
    fn extract_text(&self, path: &Path) -> Result<String>;
}

/// Join page texts, skipping pages that produced nothing.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut full_text = String::new();

    for page in pages {
        let page = page.as_ref();
        if page.is_empty() {
            continue;
        }
        full_text.push_str(page);
        full_text.push('\n');
    }

    full_text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_pages_skips_empty() {
        let text = join_pages(["ND 1", "", "R$ 10,00"]);
        assert_eq!(text, "ND 1\nR$ 10,00\n");
    }

    #[test]
    fn test_join_pages_keeps_whitespace_pages() {
        let text = join_pages(["ND 1", "  ", "R$ 10,00"]);
        assert_eq!(text, "ND 1\n  \nR$ 10,00\n");
    }

    #[test]
    fn test_join_no_pages() {
        assert_eq!(join_pages(Vec::<String>::new()), "");
    }
}
