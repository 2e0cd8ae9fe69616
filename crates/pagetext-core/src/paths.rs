use std::path::{Component, Path, PathBuf};

/// Replace a leading `~` component with the user's home directory.
///
/// Paths without a leading `~` (and `~user` forms) are returned unchanged, as
/// is everything when no home directory can be determined.
pub fn expand_home(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// Expand `~` and turn `path` into an absolute path.
///
/// Existing paths are canonicalized (symlinks resolved); paths that do not
/// exist yet are made absolute against the current directory.
pub fn resolve(path: &Path) -> std::io::Result<PathBuf> {
    let expanded = expand_home(path);
    match expanded.canonicalize() {
        Ok(canonical) => Ok(canonical),
        Err(_) => std::path::absolute(&expanded),
    }
}

/// Default text output path: the PDF path with its extension replaced by `txt`.
pub fn default_text_output(pdf_path: &Path) -> PathBuf {
    pdf_path.with_extension("txt")
}
