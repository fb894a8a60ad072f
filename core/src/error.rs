#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Problems in the *shape* of a document (missing fields, unresolvable or
//! circular references) are never errors; renderers absorb them. Only I/O,
//! parsing and registry wiring failures surface here.

use crate::registry::NodeKind;
use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The document text could not be deserialized.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// A registry was built from a renderer set lacking this node kind.
    #[from(ignore)]
    #[display("Missing renderer for node kind '{_0}'")]
    MissingRenderer(NodeKind),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
