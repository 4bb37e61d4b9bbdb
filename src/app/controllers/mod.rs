//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the editor shell:
//! - Undo/redo history of theme snapshots
//! - Page registry
//! - Staging change log and commits
//! - Preview channel and output

pub mod history;
pub mod pages;
pub mod preview;
pub mod staging;
