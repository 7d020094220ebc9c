//! Error types for running a model against input text.

use text_size::TextSize;
use thiserror::Error;

use crate::base::Name;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A `ConsumePattern` or the ignore pattern is not a valid regex.
    #[error("Invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    /// The model has no root entity to start from.
    #[error("Model has no root entity")]
    NoRoot,

    /// The input does not match. `offset` is the farthest point any
    /// alternative reached; `expected` lists what would have matched there.
    #[error("No match for `{entity}` at offset {offset:?}: expected {}", .expected.join(" or "))]
    NoMatch {
        entity: Name,
        offset: TextSize,
        expected: Vec<String>,
    },

    /// The root matched but did not consume all of the input.
    #[error("Unconsumed input at offset {offset:?}")]
    TrailingInput { offset: TextSize },

    /// The parse failed and some branch nested entities past the configured
    /// limit, usually through a left-recursive rule.
    #[error("Depth limit of {limit} exceeded while parsing `{entity}`")]
    DepthLimit { entity: Name, limit: usize },
}

impl RuntimeError {
    pub fn invalid_pattern(pattern: impl Into<String>, err: &regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: err.to_string(),
        }
    }
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
