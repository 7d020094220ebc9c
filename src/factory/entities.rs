//! Phase 0: one entity per rule.

use tracing::warn;

use crate::grammar::Grammar;
use crate::model::{Entity, Model};

/// Create an entity for every rule, in rule order. The first rule's entity is
/// the root.
///
/// A rule name defined twice keeps its first definition.
pub fn import_entities(grammar: &Grammar) -> Model {
    let mut model = Model::new();
    for rule in grammar.rules() {
        if !model.add_entity(Entity::from_rule(rule)) {
            warn!(
                "[FACTORY] Duplicate rule '{}' ignored; keeping the first definition",
                rule.name
            );
        }
    }
    model
}
