//! Phase 2: collapse "this-or-that" entities into one discriminated property.

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::base::{ActionId, Name, PropertyId};
use crate::model::{Entity, Model, Property};

/// Name of the proxy property replacing collapsed alternatives.
pub const ALTERNATIVE_PROPERTY: &str = "alternative";

/// Collapse every entity whose rule is purely a choice between entities.
///
/// An entity qualifies when all of its properties hang off the same
/// `ConsumeAny` and every one of them consumes an entity. Anything else is
/// left as it is; there is no partial collapsing.
pub fn collapse_alternatives(mut model: Model) -> Model {
    let names: Vec<Name> = model.entity_names().cloned().collect();
    for name in names {
        if let Some(entity) = collapse_entity(&mut model, &name) {
            model.replace_entity(entity);
        }
    }
    model
}

/// The single choice all properties of an entity branch from, if any.
fn shared_choice(model: &Model, properties: &[PropertyId]) -> Option<ActionId> {
    let parents: FxHashSet<Option<ActionId>> = properties
        .iter()
        .map(|&id| model.action(model.property(id).source()).parent())
        .collect();
    if parents.len() != 1 {
        return None;
    }
    let parent = parents.into_iter().next().flatten()?;
    model.action(parent).is_any().then_some(parent)
}

fn collapse_entity(model: &mut Model, name: &str) -> Option<Entity> {
    let entity = model.entity(name)?;
    let originals: Vec<PropertyId> = entity.properties().values().copied().collect();

    let choice = shared_choice(model, &originals)?;
    let all_entities = originals
        .iter()
        .all(|&id| model.action(model.property(id).source()).target().is_some());
    if !all_entities {
        return None;
    }

    let mut collapsed = entity.clone();
    trace!(
        "[COLLAPSE] {} : {} alternatives -> {}",
        name,
        originals.len(),
        ALTERNATIVE_PROPERTY
    );
    let proxy = model.add_property(Property::proxy(
        Name::from(ALTERNATIVE_PROPERTY),
        collapsed.name.clone(),
        choice,
        originals,
    ));
    collapsed.properties.clear();
    collapsed
        .properties
        .insert(Name::from(ALTERNATIVE_PROPERTY), proxy);
    Some(collapsed)
}
