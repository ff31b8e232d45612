//! Error types shared across Boxtally crates.

use std::path::PathBuf;

/// Top-level error type for Boxtally operations.
#[derive(Debug, thiserror::Error)]
pub enum BoxtallyError {
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    #[error("Catalog bundle not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using BoxtallyError.
pub type BoxtallyResult<T> = Result<T, BoxtallyError>;

impl BoxtallyError {
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog {
            message: msg.into(),
        }
    }
}
