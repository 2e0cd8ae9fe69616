pub mod lopdf;
pub mod pdf_extract;
pub mod pdftotext;

use crate::error::PagetextError;
use std::ffi::OsString;
use std::path::Path;

/// Text of each page, in document order.
pub type PageList = Vec<String>;

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract the text of every page of the PDF at `pdf_path`.
    ///
    /// Pages may come back untrimmed; the dispatcher normalizes them.
    fn extract_pages(&self, pdf_path: &Path) -> Result<PageList, PagetextError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// The built-in backends in priority order: pdf-extract, lopdf, pdftotext.
///
/// `pdftotext_binary` is the executable run by the last backend.
pub fn default_chain(pdftotext_binary: impl Into<OsString>) -> Vec<Box<dyn PdfExtractor>> {
    vec![
        Box::new(self::pdf_extract::PdfExtractExtractor::new()),
        Box::new(self::lopdf::LopdfExtractor::new()),
        Box::new(self::pdftotext::PdftotextExtractor::new().with_binary(pdftotext_binary)),
    ]
}
