use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::{AppError, Result};

/// Editing environment shown in the editor header.
/// Only a label: it does not restrict which edits are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    #[default]
    Staging,
    Production,
}

impl EditorMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Staging => "Staging",
            Self::Production => "Production",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Maximum number of snapshots kept for undo. 0 keeps everything.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    #[serde(default)]
    pub default_mode: EditorMode,

    #[serde(default)]
    pub open_preview_in_browser: bool,

    /// Fallback tracing filter when no log env var is set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub author: Option<String>,
}

fn default_history_limit() -> usize {
    100
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            default_mode: EditorMode::Staging,
            open_preview_in_browser: false,
            log_level: default_log_level(),
            author: None,
        }
    }
}

impl EditorSettings {
    /// Load settings from the config dir, or defaults if missing or unreadable
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "failed to parse settings: {}; using defaults", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save settings to the config dir
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            return Err(AppError::Settings("log level cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("themeforge");
        path.push("settings.json");
        path
    }
}
