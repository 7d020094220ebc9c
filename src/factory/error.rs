//! Error types for model construction.

use thiserror::Error;

use crate::base::Name;

/// Errors that abort model construction. There is no partial model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A rule references a rule that is not part of the grammar.
    #[error("Unknown reference: rule `{rule}` refers to undefined rule `{target}`")]
    UnknownReference { rule: Name, target: Name },

    /// The grammar has no rules, so there is nothing to generate.
    #[error("Empty grammar: no rules to build a model from")]
    EmptyGrammar,

    /// The grammar front end failed to produce a grammar.
    #[error("Grammar source error: {0}")]
    Source(String),
}

impl ModelError {
    /// Create an unknown reference error.
    pub fn unknown_reference(rule: impl Into<Name>, target: impl Into<Name>) -> Self {
        Self::UnknownReference {
            rule: rule.into(),
            target: target.into(),
        }
    }

    /// Create a grammar source error.
    pub fn source(message: impl std::fmt::Display) -> Self {
        Self::Source(message.to_string())
    }
}

pub type ModelResult<T> = Result<T, ModelError>;
