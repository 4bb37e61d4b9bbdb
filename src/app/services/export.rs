use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::app::domain::theme::ThemeConfiguration;
use crate::app::infrastructure::error::{AppError, Result};

/// Value of the `format` field in exported files.
pub const EXPORT_FORMAT: &str = "themeforge/theme";

/// Version stamped into exports.
pub const EDITOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// On-disk wrapper around an exported theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeExport {
    pub format: String,
    pub editor_version: String,
    pub exported_at: DateTime<Utc>,
    pub theme: ThemeConfiguration,
}

impl ThemeExport {
    pub fn new(theme: ThemeConfiguration) -> Self {
        Self {
            format: EXPORT_FORMAT.to_string(),
            editor_version: EDITOR_VERSION.to_string(),
            exported_at: Utc::now(),
            theme,
        }
    }
}

/// Compare two semantic versions
/// Returns true if remote is newer than current
pub fn is_newer_version(current: &str, remote: &str) -> bool {
    match (semver::Version::parse(current), semver::Version::parse(remote)) {
        (Ok(curr), Ok(rem)) => rem > curr,
        _ => false,
    }
}

/// Serialize a theme to the pretty-printed export format.
pub fn export_json(theme: &ThemeConfiguration) -> Result<String> {
    let export = ThemeExport::new(theme.clone());
    Ok(serde_json::to_string_pretty(&export)?)
}

/// Parse an export. Accepts the wrapped format and bare theme objects
/// written before the wrapper existed.
pub fn import_json(json: &str) -> Result<ThemeConfiguration> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let object = value
        .as_object()
        .ok_or_else(|| AppError::Export("expected a JSON object".to_string()))?;

    if !object.contains_key("format") {
        tracing::debug!("importing bare theme object");
        return Ok(serde_json::from_value(value)?);
    }

    let export: ThemeExport = serde_json::from_value(value)?;
    if export.format != EXPORT_FORMAT {
        return Err(AppError::Export(format!(
            "unsupported format '{}', expected '{}'",
            export.format, EXPORT_FORMAT
        )));
    }
    if is_newer_version(EDITOR_VERSION, &export.editor_version) {
        tracing::warn!(
            file_version = %export.editor_version,
            editor_version = EDITOR_VERSION,
            "theme was exported by a newer editor; unknown fields are ignored"
        );
    }
    Ok(export.theme)
}

pub fn write_export(path: &Path, theme: &ThemeConfiguration) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, export_json(theme)?)?;
    tracing::info!(path = %path.display(), "theme exported");
    Ok(())
}

pub fn read_export(path: &Path) -> Result<ThemeConfiguration> {
    let contents = fs::read_to_string(path)?;
    import_json(&contents)
}
