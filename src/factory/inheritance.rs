//! Phase 3: infer super/sub relationships from single-property rules.
//!
//! A rule that is "one of" other rules (`expr ::= identifier | number`) or
//! that wraps exactly one other rule makes the referenced entities its subs.
//! The walk starts at the root and visits each entity once, so recursive
//! grammars terminate.

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::base::{Name, PropertyId};
use crate::model::Model;

/// Register inheritance edges for every entity reachable from the root.
pub fn detect_inheritance(mut model: Model) -> Model {
    let Some(root) = model.root().cloned() else {
        return model;
    };
    let mut visited: FxHashSet<Name> = FxHashSet::default();
    visit(&mut model, &root, &mut visited);
    model
}

fn visit(model: &mut Model, name: &Name, visited: &mut FxHashSet<Name>) {
    if !visited.insert(name.clone()) {
        return;
    }
    let Some(entity) = model.entity(name) else {
        return;
    };
    let properties: Vec<PropertyId> = entity.properties().values().copied().collect();
    let has_supers = !entity.supers().is_empty();

    match properties.as_slice() {
        [only] if !model.is_plural(*only) => {
            let property = model.property(*only);
            if property.is_proxy() {
                let targets = model.referenced_entities(*only);
                for target in &targets {
                    register(model, name, target);
                }
                for target in &targets {
                    visit(model, target, visited);
                }
            } else if let Some(target) = model.action(property.source()).target().cloned() {
                if !wraps_terminal(model, &target) || !has_supers {
                    register(model, name, &target);
                    visit(model, &target, visited);
                }
            }
        }
        _ => {
            for &id in &properties {
                for target in model.referenced_entities(id) {
                    visit(model, &target, visited);
                }
            }
        }
    }
}

/// True when the entity's whole rule is a single value terminal.
fn wraps_terminal(model: &Model, name: &str) -> bool {
    model
        .entity(name)
        .and_then(|entity| entity.action())
        .is_some_and(|action| model.action(action).is_value_terminal())
}

fn register(model: &mut Model, parent: &Name, child: &Name) {
    if model.register_inheritance(parent, child) {
        trace!("[INHERIT] {} :> {}", parent, child);
    } else {
        trace!("[INHERIT] {} :> {} skipped", parent, child);
    }
}
