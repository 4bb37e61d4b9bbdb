use std::path::{Path, PathBuf};

use crate::app::controllers::history::HistoryStack;
use crate::app::controllers::preview::{PreviewBridge, PreviewController};
use crate::app::controllers::staging::StagingLog;
use crate::app::domain::change::{ChangeKind, CommitRecord};
use crate::app::domain::git::{GitReference, GitRepository};
use crate::app::domain::messages::PreviewMessage;
use crate::app::domain::page::{PageDefinition, PageId, PageKind, PagePatch};
use crate::app::domain::settings::{EditorMode, EditorSettings};
use crate::app::domain::theme::{FontFamilyKind, RoleColor, ScaleName, Shade, ThemeConfiguration};
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::platform;
use crate::app::services::text_ops::{normalize_slug, slugify};
use crate::app::services::{diff, export, renderer};

/// One editing session: owns the theme (through its history), the staging
/// log, the selected page and the preview channel.
///
/// Every edit clones the current snapshot, applies the change, pushes the
/// result onto the history and records a described staging change.
pub struct EditorShell {
    history: HistoryStack,
    staging: StagingLog,
    preview: PreviewController,
    selected_slug: String,
    mode: EditorMode,
    /// Snapshot at the last commit, used for `pending_diff`.
    committed_baseline: ThemeConfiguration,
    repository: Option<GitRepository>,
    references: Vec<GitReference>,
    selected_reference: Option<String>,
    settings: EditorSettings,
}

impl EditorShell {
    pub fn new(theme: ThemeConfiguration, settings: EditorSettings) -> Self {
        let preview = PreviewController::new(settings.open_preview_in_browser);
        Self::with_preview(theme, settings, preview)
    }

    pub fn with_preview(
        theme: ThemeConfiguration,
        settings: EditorSettings,
        preview: PreviewController,
    ) -> Self {
        let selected_slug = initial_slug(&theme);
        Self {
            history: HistoryStack::with_capacity(theme.clone(), settings.history_limit),
            staging: StagingLog::new(),
            preview,
            selected_slug,
            mode: settings.default_mode,
            committed_baseline: theme,
            repository: None,
            references: Vec::new(),
            selected_reference: None,
            settings,
        }
    }

    pub fn theme(&self) -> &ThemeConfiguration {
        self.history.current()
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn staging(&self) -> &StagingLog {
        &self.staging
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: EditorMode) {
        tracing::debug!(mode = mode.display_name(), "editor mode changed");
        self.mode = mode;
    }

    pub fn selected_slug(&self) -> &str {
        &self.selected_slug
    }

    /// Page currently shown in the preview (falls back to the first page).
    pub fn selected_page(&self) -> Option<&PageDefinition> {
        renderer::resolve_page(self.theme(), &self.selected_slug)
    }

    pub fn select_page(&mut self, slug: &str) {
        self.selected_slug = slug.to_string();
    }

    // --- Edits ---

    /// Clone the current snapshot, let `edit` change it, push it and stage
    /// the description. If `edit` returns false nothing is recorded.
    fn apply<F>(&mut self, kind: ChangeKind, page: Option<&str>, description: &str, edit: F) -> bool
    where
        F: FnOnce(&mut ThemeConfiguration) -> bool,
    {
        let mut next = self.history.current().clone();
        if !edit(&mut next) {
            return false;
        }
        self.history.push(next);
        self.staging.record(kind, description, page);
        true
    }

    /// Replace the whole configuration. A described update is staged as a
    /// config change; an undescribed one only enters the history.
    pub fn update_theme(&mut self, config: ThemeConfiguration, description: Option<&str>) {
        self.history.push(config);
        if let Some(description) = description {
            self.staging.record(ChangeKind::Config, description, None);
        }
    }

    pub fn set_color(&mut self, scale: ScaleName, shade: Shade, value: &str) {
        let description = format!("Changed {} {} color to {}", scale.as_str(), shade.value(), value);
        self.apply(ChangeKind::Config, None, &description, |theme| {
            theme.colors.scale_mut(scale).set(shade, value);
            true
        });
    }

    pub fn set_role_color(&mut self, role: RoleColor, value: &str) {
        let description = format!("Changed {} color to {}", role.label(), value);
        self.apply(ChangeKind::Config, None, &description, |theme| {
            theme.colors.set_role(role, value);
            true
        });
    }

    pub fn set_font_family(&mut self, family: FontFamilyKind, value: &str) {
        let description = format!("Changed {} font to {}", family.as_str(), value);
        self.apply(ChangeKind::Config, None, &description, |theme| {
            theme.typography.set_family(family, value);
            true
        });
    }

    pub fn set_custom_css(&mut self, css: &str) {
        self.apply(ChangeKind::Css, None, "Updated global custom CSS", |theme| {
            theme.custom_css = css.to_string();
            true
        });
    }

    pub fn set_custom_js(&mut self, js: &str) {
        self.apply(ChangeKind::Js, None, "Updated global custom JS", |theme| {
            theme.custom_js = js.to_string();
            true
        });
    }

    /// Add a page. Blank names are ignored. An empty slug is derived from
    /// the name; duplicate slugs are allowed but logged.
    pub fn add_page(&mut self, name: &str, slug: &str, kind: PageKind) -> Option<PageId> {
        let name = name.trim();
        if name.is_empty() {
            tracing::debug!("add_page ignored: blank name");
            return None;
        }
        let slug = if slug.trim().is_empty() {
            slugify(name)
        } else {
            normalize_slug(slug)
        };
        if self.theme().pages.find_by_slug(&slug).is_some() {
            tracing::warn!(slug = %slug, "another page already uses this slug");
        }

        let id = PageId::generate();
        let page = PageDefinition::new(id.clone(), name, slug, kind);
        let description = format!("Added page: {}", name);
        self.apply(ChangeKind::Html, Some(name), &description, |theme| {
            theme.pages.add_page(page);
            true
        });
        Some(id)
    }

    /// Merge `patch` into a page. Unknown ids and empty patches are no-ops.
    pub fn update_page(&mut self, id: &PageId, patch: PagePatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        let Some(existing) = self.theme().pages.find_by_id(id) else {
            return false;
        };
        let patch = PagePatch {
            name: patch.name.filter(|name| !name.trim().is_empty()),
            slug: patch.slug.map(|slug| normalize_slug(&slug)),
            ..patch
        };
        if patch.is_empty() {
            return false;
        }

        let (kind, what) = describe_patch(&patch);
        let page_name = patch.name.clone().unwrap_or_else(|| existing.name.clone());
        let old_slug = existing.slug.clone();
        let description = format!("Updated {} for page: {}", what, page_name);

        let changed = self.apply(kind, Some(&page_name), &description, |theme| {
            theme.pages.update_page(id, &patch)
        });

        // Keep the preview on a page whose slug was renamed.
        if changed && self.selected_slug == old_slug {
            if let Some(ref new_slug) = patch.slug {
                self.selected_slug = new_slug.clone();
            }
        }
        changed
    }

    /// Remove a page. Unknown ids are a no-op.
    pub fn delete_page(&mut self, id: &PageId) -> bool {
        let Some(name) = self.theme().pages.find_by_id(id).map(|p| p.name.clone()) else {
            return false;
        };
        let description = format!("Deleted page: {}", name);
        self.apply(ChangeKind::Html, Some(&name), &description, |theme| {
            theme.pages.delete_page(id).is_some()
        })
    }

    // --- History ---

    pub fn undo(&mut self) -> bool {
        self.history.undo().is_some()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo().is_some()
    }

    // --- Staging ---

    /// Commit everything staged. Blank messages and empty staging are no-ops.
    pub fn commit(&mut self, message: &str) -> Option<CommitRecord> {
        let message = message.trim();
        if message.is_empty() {
            tracing::debug!("commit ignored: blank message");
            return None;
        }
        let record = self.staging.commit(message)?;
        // Committed pages are no longer "modified".
        self.history.current_mut().pages.mark_all_clean();
        self.committed_baseline = self.theme().clone();
        tracing::info!(id = record.short_id(), changes = record.change_ids.len(), "changes committed");
        Some(record)
    }

    /// Drop a staged change from the log. The theme itself is not reverted;
    /// use `undo` for that.
    pub fn discard(&mut self, change_id: &str) -> bool {
        self.staging.discard(change_id)
    }

    /// Drop every pending change from the log. Returns how many were removed.
    pub fn discard_all(&mut self) -> usize {
        self.staging.discard_all()
    }

    /// Unified diff between the last committed snapshot and the working theme.
    pub fn pending_diff(&self) -> Result<String> {
        diff::theme_diff(&self.committed_baseline, self.theme())
    }

    // --- Preview ---

    /// Render the current theme and selected page.
    pub fn preview(&self) -> String {
        renderer::render(self.theme(), &self.selected_slug)
    }

    /// Handle for the rendering surface to post messages back.
    pub fn preview_bridge(&self) -> PreviewBridge {
        self.preview.bridge()
    }

    /// Drain queued preview messages one at a time. With several navigate
    /// requests in the queue the last one wins. Returns how many were handled.
    pub fn process_preview_messages(&mut self) -> usize {
        let mut handled = 0;
        while let Some(message) = self.preview.poll() {
            match message {
                PreviewMessage::Navigate { url } => {
                    tracing::debug!(url = %url, "preview navigate");
                    self.selected_slug = url;
                }
            }
            handled += 1;
        }
        handled
    }

    /// Write the current preview to disk and, if enabled, open it.
    pub fn write_preview(&self) -> Result<PathBuf> {
        let path = self.preview.write(self.history.current(), &self.selected_slug)?;
        if self.preview.enabled {
            platform::open_in_browser(&path)?;
        }
        Ok(path)
    }

    // --- Import / export ---

    pub fn export_json(&self) -> Result<String> {
        export::export_json(self.theme())
    }

    /// Replace the session with an imported theme. History and staging start over.
    pub fn import_json(&mut self, json: &str) -> Result<()> {
        let theme = export::import_json(json)?;
        self.load_theme(theme);
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        export::write_export(path, self.theme())
    }

    pub fn load_from(&mut self, path: &Path) -> Result<()> {
        let theme = export::read_export(path)?;
        self.load_theme(theme);
        Ok(())
    }

    fn load_theme(&mut self, theme: ThemeConfiguration) {
        tracing::info!(name = %theme.name, pages = theme.pages.len(), "theme loaded");
        self.selected_slug = initial_slug(&theme);
        self.committed_baseline = theme.clone();
        self.history.reset(theme);
        self.staging.clear();
    }

    // --- Git display data ---

    pub fn connect_repository(&mut self, repository: GitRepository, references: Vec<GitReference>) {
        tracing::info!(url = %repository.url, refs = references.len(), "repository connected");
        self.selected_reference = Some(repository.default_branch.clone())
            .filter(|name| references.iter().any(|r| &r.name == name));
        self.repository = Some(repository);
        self.references = references;
    }

    pub fn repository(&self) -> Option<&GitRepository> {
        self.repository.as_ref()
    }

    pub fn references(&self) -> &[GitReference] {
        &self.references
    }

    /// Select a known reference by name. Unknown names are ignored.
    pub fn select_reference(&mut self, name: &str) -> bool {
        if self.references.iter().any(|r| r.name == name) {
            self.selected_reference = Some(name.to_string());
            true
        } else {
            false
        }
    }

    pub fn selected_reference(&self) -> Option<&GitReference> {
        let name = self.selected_reference.as_deref()?;
        self.references.iter().find(|r| r.name == name)
    }
}

impl Default for EditorShell {
    fn default() -> Self {
        Self::new(ThemeConfiguration::default(), EditorSettings::default())
    }
}

fn initial_slug(theme: &ThemeConfiguration) -> String {
    theme
        .pages
        .homepage()
        .map(|p| p.slug.clone())
        .unwrap_or_else(|| "/".to_string())
}

/// Staging kind and a short field list for a page patch.
/// Content fields decide the kind: html, then css, then js; metadata-only
/// edits count as html.
fn describe_patch(patch: &PagePatch) -> (ChangeKind, String) {
    let mut fields = Vec::new();
    if patch.name.is_some() {
        fields.push("name");
    }
    if patch.slug.is_some() {
        fields.push("slug");
    }
    if patch.kind.is_some() {
        fields.push("type");
    }
    if patch.template.is_some() {
        fields.push("template");
    }
    if patch.html.is_some() {
        fields.push("HTML");
    }
    if patch.css.is_some() {
        fields.push("CSS");
    }
    if patch.js.is_some() {
        fields.push("JS");
    }

    let kind = if patch.html.is_some() {
        ChangeKind::Html
    } else if patch.css.is_some() {
        ChangeKind::Css
    } else if patch.js.is_some() {
        ChangeKind::Js
    } else {
        ChangeKind::Html
    };
    (kind, fields.join(", "))
}
