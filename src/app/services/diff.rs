use similar::TextDiff;

use crate::app::domain::theme::ThemeConfiguration;
use crate::app::infrastructure::error::Result;

/// Unified diff of two themes' pretty JSON. Empty when they are equal.
pub fn theme_diff(old: &ThemeConfiguration, new: &ThemeConfiguration) -> Result<String> {
    if old == new {
        return Ok(String::new());
    }
    let old_json = serde_json::to_string_pretty(old)?;
    let new_json = serde_json::to_string_pretty(new)?;
    Ok(text_diff(&old_json, &new_json, "committed", "working"))
}

/// Unified diff with three lines of context.
pub fn text_diff(old: &str, new: &str, old_label: &str, new_label: &str) -> String {
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(old_label, new_label)
        .to_string()
}
