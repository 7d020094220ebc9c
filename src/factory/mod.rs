//! # Model Factory
//!
//! Compiles a [`Grammar`] into a [`Model`] in four phases. Each phase takes
//! the model by value and hands it to the next, so any prefix of the pipeline
//! can be run and inspected on its own.
//!
//! ```text
//! Grammar
//!     ↓ import_entities        (phase 0: one entity per rule, first = root)
//!     ↓ synthesize             (phase 1: parse actions + properties)
//!     ↓ collapse_alternatives  (phase 2: entity choices -> `alternative` proxy)
//!     ↓ detect_inheritance     (phase 3: super/sub edges from the root)
//! Model
//! ```
//!
//! Construction is all-or-nothing: the first [`ModelError`] aborts it.

mod collapse;
mod entities;
mod error;
mod inheritance;
mod synthesis;

pub use collapse::{ALTERNATIVE_PROPERTY, collapse_alternatives};
pub use entities::import_entities;
pub use error::{ModelError, ModelResult};
pub use inheritance::detect_inheritance;
pub use synthesis::synthesize;

use tracing::debug;

use crate::grammar::{Grammar, GrammarSource};
use crate::model::Model;

/// Build the parser model for a grammar.
pub fn build_model(grammar: &Grammar) -> ModelResult<Model> {
    if grammar.is_empty() {
        return Err(ModelError::EmptyGrammar);
    }

    let model = import_entities(grammar);
    debug!("[FACTORY] phase 0: {} entities", model.len());

    let model = synthesize(model)?;
    debug!(
        "[FACTORY] phase 1: {} properties, {} actions",
        model.property_count(),
        model.action_count()
    );

    let model = collapse_alternatives(model);
    let model = detect_inheritance(model);
    debug!(
        "[FACTORY] done: root={:?}, {} virtual entities",
        model.root(),
        model
            .entities()
            .filter(|entity| model.is_virtual(entity.name()))
            .count()
    );

    Ok(model)
}

/// Load a grammar from a front end and build its model.
pub fn build_model_from<S: GrammarSource>(source: &S) -> ModelResult<Model> {
    let grammar = source.load().map_err(ModelError::source)?;
    build_model(&grammar)
}

#[cfg(test)]
mod tests;
