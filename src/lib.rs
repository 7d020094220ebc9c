//! # parsegen-base
//!
//! Core library of a parser generator: turns a grammar into the object model
//! (entities, properties, parse actions, inheritance) that parser emitters and
//! the runtime interpreter consume.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! runtime      → Interpreter executing a model against input text
//! interchange  → Serializable model views, JSON export (feature "interchange")
//!   ↓
//! factory      → Grammar → Model pipeline (entities, synthesis, collapse, inheritance)
//!   ↓
//! model        → Entities, properties, parse actions, derived attributes
//!   ↓
//! grammar      → Grammar AST: rules and expressions, GrammarSource
//!   ↓
//! base         → Primitives (Name, arena ids, label sanitization)
//! ```

// ============================================================================
// MODULES (dependency order: base → grammar → model → factory → runtime)
// ============================================================================

/// Foundation types: Name, PropertyId/ActionId, label sanitization
pub mod base;

/// Grammar AST consumed by the factory
pub mod grammar;

/// The parser object model
pub mod model;

/// Model construction pipeline
pub mod factory;

/// Runtime interpreter over a model
pub mod runtime;

/// Model interchange formats: JSON
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export the pipeline entry points
pub use factory::{ModelError, ModelResult, build_model, build_model_from};

// Re-export foundation types
pub use base::{ActionId, Name, PropertyId};
pub use grammar::{Expression, Grammar, GrammarSource, Rule};
pub use model::{Entity, Model, ValueType};
pub use runtime::{Instance, Interpreter, RuntimeConfig, RuntimeError, Value};
