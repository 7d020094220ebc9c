//! Error types for interchange operations.

use thiserror::Error;

/// Errors that can occur while exporting a model.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// IO error during write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InterchangeError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }
}
