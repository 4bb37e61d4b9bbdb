//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (theme, pages, changes, settings, messages)
//! - `controllers/` - Orchestration (HistoryStack, PageRegistry, StagingLog, PreviewController)
//! - `services/` - Business operations (renderer, export, diff, text_ops)
//! - `infrastructure/` - External integrations (logging, platform, error)
//! - `state.rs` - Editor shell tying it all together

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::history::HistoryStack;
pub use controllers::pages::PageRegistry;
pub use controllers::preview::{PreviewBridge, PreviewController};
pub use controllers::staging::StagingLog;
pub use domain::{
    ChangeKind, CommitRecord, EditorMode, EditorSettings, PageDefinition, PageId, PageKind,
    PagePatch, PreviewMessage, StagingChange, ThemeConfiguration,
};
pub use infrastructure::error::{AppError, Result};
pub use state::EditorShell;
