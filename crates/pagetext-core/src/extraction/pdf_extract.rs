use crate::error::PagetextError;
use crate::extraction::{PageList, PdfExtractor};
use std::path::Path;

/// PDF extraction backend using the `pdf-extract` crate.
pub struct PdfExtractExtractor;

impl PdfExtractExtractor {
    pub fn new() -> Self {
        PdfExtractExtractor
    }
}

impl Default for PdfExtractExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdfExtractExtractor {
    fn extract_pages(&self, pdf_path: &Path) -> Result<PageList, PagetextError> {
        let bytes = std::fs::read(pdf_path)?;
        ::pdf_extract::extract_text_from_mem_by_pages(&bytes)
            .map_err(|e| PagetextError::Extraction(e.to_string()))
    }

    fn backend_name(&self) -> &str {
        "pdf-extract"
    }
}
