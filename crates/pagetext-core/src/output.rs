use crate::error::PagetextError;
use crate::ExtractionResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// JSON document written by [`write_json`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonReport {
    pub source: String,
    pub method: String,
    pub page_count: usize,
    pub pages: Vec<String>,
}

impl JsonReport {
    pub fn new(source: &Path, result: &ExtractionResult) -> Self {
        JsonReport {
            // JSON strings are UTF-8; invalid path bytes become U+FFFD.
            source: source.to_string_lossy().into_owned(),
            method: result.method.clone(),
            page_count: result.pages.len(),
            pages: result.pages.clone(),
        }
    }
}

/// Join pages into a single text blob, one blank line between pages.
///
/// With `page_separators`, each page is preceded by its own `[Page N]` chunk.
pub fn render_text(pages: &[String], page_separators: bool) -> String {
    let mut chunks: Vec<String> = Vec::with_capacity(pages.len() * 2);
    for (i, page) in pages.iter().enumerate() {
        if page_separators {
            chunks.push(format!("[Page {}]", i + 1));
        }
        chunks.push(page.clone());
    }

    let mut text = chunks.join("\n\n").trim_end().to_string();
    text.push('\n');
    text
}

/// Render `pages` and write them to `path`, creating parent directories.
pub fn write_text(
    path: &Path,
    pages: &[String],
    page_separators: bool,
) -> Result<(), PagetextError> {
    create_parent_dirs(path)?;
    std::fs::write(path, render_text(pages, page_separators))?;
    Ok(())
}

/// Write the report as indented JSON, creating parent directories.
pub fn write_json(path: &Path, report: &JsonReport) -> Result<(), PagetextError> {
    create_parent_dirs(path)?;
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn create_parent_dirs(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
