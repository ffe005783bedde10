//! Error types for catalog loading

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a course catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Failed to read catalog from {path:?}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid list of courses
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two courses share the same id
    #[error("Duplicate course id {0}")]
    DuplicateId(u32),
}

impl CatalogError {
    /// Whether the problem is in the document itself rather than in reading it
    pub fn is_content_error(&self) -> bool {
        matches!(self, CatalogError::Parse(_) | CatalogError::DuplicateId(_))
    }
}

/// A difficulty name that is not one of the known categories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown difficulty '{0}'. Expected one of: all, beginner, intermediate, advanced, expert")]
pub struct ParseCategoryError(pub String);
