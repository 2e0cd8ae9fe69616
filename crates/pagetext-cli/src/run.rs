use pagetext_core::error::PagetextError;
use pagetext_core::extraction;
use pagetext_core::output::{self, JsonReport};
use pagetext_core::paths;
use std::path::PathBuf;

pub struct Options {
    pub pdf: PathBuf,
    pub output: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub page_separators: bool,
    pub pdftotext: PathBuf,
}

pub fn run(options: Options) -> Result<(), PagetextError> {
    let pdf_path = paths::resolve(&options.pdf)?;
    if !pdf_path.is_file() {
        return Err(PagetextError::InputNotFound(pdf_path));
    }

    let output_path = match &options.output {
        Some(path) => paths::resolve(path)?,
        None => paths::default_text_output(&pdf_path),
    };
    let json_path = options.json.as_deref().map(paths::resolve).transpose()?;

    let extractors = extraction::default_chain(options.pdftotext);
    let result = pagetext_core::extract_pages(&pdf_path, &extractors)?;
    tracing::info!(
        method = %result.method,
        pages = result.pages.len(),
        "extracted {}",
        pdf_path.display()
    );

    output::write_text(&output_path, &result.pages, options.page_separators)?;

    if let Some(json_path) = &json_path {
        let report = JsonReport::new(&pdf_path, &result);
        output::write_json(json_path, &report)?;
    }

    println!("[OK] Extracted with {}", result.method);
    println!("[OK] Text output: {}", output_path.display());
    if let Some(json_path) = &json_path {
        println!("[OK] JSON output: {}", json_path.display());
    }

    Ok(())
}
