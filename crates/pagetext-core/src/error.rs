use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PagetextError {
    #[error("PDF not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error(
        "All extraction methods failed.\n{}\nInstall pdftotext (poppler-utils) or provide a text export.",
        .diagnostics.join("\n")
    )]
    AllStrategiesFailed { diagnostics: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
