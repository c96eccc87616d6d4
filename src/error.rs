use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while decoding, encoding or loading hierarchy records.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Well-formed JSON that does not fit the record shape: a required field is
    /// missing or holds the wrong type.
    #[error("Validation failed: {0}")]
    Validation(#[source] serde_json::Error),

    /// Input that is not JSON at all, or is truncated.
    #[error("Malformed input: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("Failed to serialize record: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("I/O error on {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ModelError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match e.classify() {
            Category::Data => Self::Validation(e),
            Category::Syntax | Category::Eof | Category::Io => Self::Syntax(e),
        }
    }
}
