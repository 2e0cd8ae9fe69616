pub mod error;
pub mod extraction;
pub mod output;
pub mod paths;

use error::PagetextError;
use extraction::{PageList, PdfExtractor};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// Pages produced by the first backend that returned any, and that backend's name.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    pub method: String,
    pub pages: PageList,
}

/// Main API entry point: extract per-page text from a PDF.
///
/// Tries each extractor in order. A backend that errors, panics or returns no
/// pages is recorded as a diagnostic and the next one is tried; the first
/// non-empty page list wins and later backends are never invoked. Returned
/// pages are whitespace-trimmed.
///
/// While a backend runs, the process panic hook is swapped for one that logs
/// at debug level, so a caught panic does not print to stderr. The previous
/// hook is restored afterwards.
pub fn extract_pages(
    pdf_path: &Path,
    extractors: &[Box<dyn PdfExtractor>],
) -> Result<ExtractionResult, PagetextError> {
    let mut diagnostics = Vec::new();

    for extractor in extractors {
        let name = extractor.backend_name();
        let attempt = run_quietly(|| extractor.extract_pages(pdf_path));

        let diagnostic = match attempt {
            Ok(Ok(pages)) if !pages.is_empty() => {
                tracing::debug!(backend = name, pages = pages.len(), "extraction succeeded");
                return Ok(ExtractionResult {
                    method: name.to_string(),
                    pages: pages.iter().map(|p| p.trim().to_string()).collect(),
                });
            }
            Ok(Ok(_)) => format!("{name}: empty output"),
            Ok(Err(e)) => format!("{name}: {e}"),
            Err(payload) => format!("{name}: panicked ({})", panic_message(payload.as_ref())),
        };

        tracing::info!(
            backend = name,
            reason = %diagnostic,
            "extraction backend failed, falling back"
        );
        diagnostics.push(diagnostic);
    }

    Err(PagetextError::AllStrategiesFailed { diagnostics })
}

fn run_quietly<T>(f: impl FnOnce() -> T) -> std::thread::Result<T> {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|info| {
        tracing::debug!(%info, "extraction backend panicked");
    }));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    panic::set_hook(previous);
    result
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "malformed document"
    }
}
