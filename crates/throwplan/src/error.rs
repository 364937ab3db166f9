//! Error types for Throwplan operations.
//!
//! This module provides the main error type [`ThrowplanError`] which wraps
//! the error conditions that can occur while generating diagrams.

use std::io;

use thiserror::Error;

use throwplan_core::InvalidInput;

/// The main error type for Throwplan operations.
///
/// Input validation failures keep their structured
/// [`InvalidInput`] detail; rendering failures carry the backend's message
/// together with the output path they were writing.
#[derive(Debug, Error)]
pub enum ThrowplanError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Render error for {path}: {message}")]
    Render { path: String, message: String },
}

impl ThrowplanError {
    /// Create a new `Render` error for the given output path.
    pub fn new_render_error(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Render {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
