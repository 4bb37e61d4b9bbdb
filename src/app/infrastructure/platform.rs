use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::{AppError, Result};

/// Directory holding rendered preview documents.
pub fn preview_dir() -> PathBuf {
    std::env::temp_dir().join("themeforge-preview")
}

/// File name used for a page slug: `/` becomes `index`, other slugs are
/// flattened (`/blog/post` -> `blog-post`).
pub fn preview_file_name(slug: &str) -> String {
    let trimmed = slug.trim_matches('/');
    if trimmed.is_empty() {
        return "index.html".to_string();
    }
    let flat: String = trimmed
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect();
    format!("{}.html", flat)
}

/// Write a rendered preview into `dir` (created if missing).
/// Returns the path of the written file.
pub fn write_preview_file(dir: &Path, slug: &str, html: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(preview_file_name(slug));
    fs::write(&path, html)?;
    tracing::debug!(path = %path.display(), bytes = html.len(), "preview written");
    Ok(path)
}

/// Remove the whole preview directory.
pub fn cleanup_preview_files() -> Result<()> {
    remove_preview_dir(&preview_dir())
}

/// Remove `dir` and everything in it. A directory that is already gone is
/// not an error.
pub fn remove_preview_dir(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {
            tracing::debug!(path = %dir.display(), "preview files removed");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Open a written preview with the system browser.
pub fn open_in_browser(path: &Path) -> Result<()> {
    open::that(path).map_err(|e| {
        AppError::Preview(format!("cannot open {}: {}", path.display(), e))
    })
}
