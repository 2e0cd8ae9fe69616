use crate::error::PagetextError;
use crate::extraction::{PageList, PdfExtractor};
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` to preserve whitespace alignment of columns.
pub struct PdftotextExtractor {
    binary: OsString,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor {
            binary: OsString::from("pdftotext"),
        }
    }

    /// Use a specific pdftotext executable instead of the one on `PATH`.
    pub fn with_binary(mut self, binary: impl Into<OsString>) -> Self {
        self.binary = binary.into();
        self
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_path: &Path) -> Result<PageList, PagetextError> {
        let output = Command::new(&self.binary)
            .arg("-layout")
            .arg(pdf_path)
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PagetextError::PdftotextNotFound
                } else {
                    PagetextError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(PagetextError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(split_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Split pdftotext output into pages.
///
/// pdftotext ends every page with a form feed (`\x0c`), so the final one is
/// a terminator rather than a separator.
fn split_pages(text: &str) -> PageList {
    let body = text.strip_suffix('\x0c').unwrap_or(text);
    if body.is_empty() {
        return Vec::new();
    }
    body.split('\x0c').map(|page| page.to_string()).collect()
}
