//! PDF text extraction using lopdf and pdf-extract.

use std::panic::{catch_unwind, UnwindSafe};
use std::path::Path;

use lopdf::Document;
use tracing::{debug, warn};

use super::{join_pages, Result, TextSource};
use crate::error::PdfError;

/// Reads a PDF from disk and returns its page text.
///
/// The file is loaded fully into memory; nothing stays open after
/// [`TextSource::extract_text`] returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract page texts from an in-memory PDF.
    ///
    /// pdf-extract panics on some malformed fonts and encodings; such a
    /// panic is reported as [`PdfError::TextExtraction`].
    pub fn extract_pages_from_mem(&self, data: &[u8]) -> Result<Vec<String>> {
        catch_panics(|| {
            let raw = Self::prepare(data)?;

            pdf_extract::extract_text_from_mem_by_pages(&raw)
                .map_err(|e| PdfError::TextExtraction(e.to_string()))
        })
    }

    /// Validate the document and return bytes that pdf-extract can read.
    fn prepare(data: &[u8]) -> Result<Vec<u8>> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            return Ok(decrypted);
        }

        debug!("Loaded PDF with {} pages", page_count);
        Ok(data.to_vec())
    }
}

/// Run a parsing step, turning a panic inside it into an error.
fn catch_panics<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + UnwindSafe,
{
    catch_unwind(f).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        warn!("PDF text extractor panicked: {}", message);

        Err(PdfError::TextExtraction(format!("extractor panicked: {}", message)))
    })
}

impl TextSource for PdfExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        let data = std::fs::read(path).map_err(|source| PdfError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let pages = self.extract_pages_from_mem(&data)?;
        Ok(join_pages(pages))
    }
}
