use crate::error::PagetextError;
use crate::extraction::{PageList, PdfExtractor};
use ::lopdf::Document;
use std::path::Path;

/// PDF extraction backend using `lopdf`'s content-stream text extraction.
///
/// Pages whose text cannot be decoded come back empty rather than failing
/// the whole document. Encrypted documents are opened with the empty user
/// password; anything else is rejected.
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        LopdfExtractor
    }
}

impl Default for LopdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for LopdfExtractor {
    fn extract_pages(&self, pdf_path: &Path) -> Result<PageList, PagetextError> {
        let mut doc = Document::load(pdf_path)
            .map_err(|e| PagetextError::Extraction(format!("failed to load PDF: {}", e)))?;

        // Owner-password-only documents open with an empty user password.
        if doc.is_encrypted() {
            doc.decrypt("")
                .map_err(|e| PagetextError::Extraction(format!("document is encrypted: {}", e)))?;
        }

        // get_pages() is keyed by page number, so iteration is in document order.
        let pages = doc
            .get_pages()
            .into_keys()
            .map(|page_number| match doc.extract_text(&[page_number]) {
                Ok(text) => text,
                Err(e) => {
                    tracing::debug!(
                        page = page_number,
                        error = %e,
                        "lopdf could not decode page"
                    );
                    String::new()
                }
            })
            .collect();

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "lopdf"
    }
}
