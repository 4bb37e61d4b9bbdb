//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Theme configuration and design tokens
//! - Page definitions
//! - Staging changes and commit records
//! - Git display data
//! - Preview channel messages
//! - Editor settings

pub mod change;
pub mod git;
pub mod messages;
pub mod page;
pub mod settings;
pub mod theme;

pub use change::{ChangeKind, CommitRecord, StagingChange};
pub use git::{GitReference, GitRepository, RefKind};
pub use messages::PreviewMessage;
pub use page::{PageDefinition, PageId, PageKind, PagePatch};
pub use settings::{EditorMode, EditorSettings};
pub use theme::{
    ColorScale, Colors, FontFamilyKind, RoleColor, ScaleName, Shade, ThemeConfiguration,
};
