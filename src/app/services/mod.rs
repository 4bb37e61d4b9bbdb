//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Preview document rendering
//! - Theme export and import
//! - Theme diffs
//! - Slug and escaping helpers

pub mod diff;
pub mod export;
pub mod renderer;
pub mod text_ops;
