//! Theme editor core: theme model, undo/redo history, staged changes,
//! page registry and preview rendering.

pub mod app;

pub use app::{AppError, EditorShell, Result, ThemeConfiguration};
