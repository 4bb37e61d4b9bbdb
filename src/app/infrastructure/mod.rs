//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Error types
//! - Tracing subscriber setup
//! - Preview files and the system browser

pub mod error;
pub mod logging;
pub mod platform;
