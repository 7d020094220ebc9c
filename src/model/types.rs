//! Derived attributes: virtual entities, siblings and effective types.
//!
//! None of these are stored; they are computed from the model on demand so
//! they always reflect the final inheritance edges.

use std::fmt;

use rustc_hash::FxHashSet;

use super::{ActionKind, Model};
use crate::base::{ActionId, Name, PropertyId};

/// The type of a value a property holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Matched text of a literal or pattern.
    Text,
    /// Success witness of an optional literal.
    Boolean,
    /// An instance of the named entity.
    Entity(Name),
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Text => write!(f, "string"),
            ValueType::Boolean => write!(f, "bool"),
            ValueType::Entity(name) => write!(f, "{name}"),
        }
    }
}

impl Model {
    /// True when the entity has a super that has other subs as well.
    pub fn has_siblings(&self, entity: &str) -> bool {
        let Some(entity) = self.entity(entity) else {
            return false;
        };
        entity
            .supers
            .iter()
            .filter_map(|sup| self.entity(sup))
            .any(|parent| parent.subs.len() > 1)
    }

    /// Virtual entities are transparent single-value wrappers; consumers use
    /// the value of their only property instead of a type of their own.
    pub fn is_virtual(&self, name: &str) -> bool {
        if self.root.as_deref() == Some(name) {
            return false;
        }
        let Some(entity) = self.entity(name) else {
            return false;
        };
        let mut properties = entity.properties.values();
        let (Some(&only), None) = (properties.next(), properties.next()) else {
            return false;
        };
        if self.is_plural(only) {
            return false;
        }
        let source = self.action(self.property(only).source);
        (source.is_value_terminal() && !self.has_siblings(name)) || !entity.subs.is_empty()
    }

    /// The type an entity contributes where it is referenced: its own name,
    /// or for a virtual entity the type of its only property.
    pub fn effective_type(&self, entity: &str) -> ValueType {
        self.entity_type(entity, &mut FxHashSet::default())
    }

    /// The type of a property's value, `None` when it cannot be decided.
    pub fn property_type(&self, id: PropertyId) -> Option<ValueType> {
        self.action_type(self.property(id).source)
    }

    /// The type of the value an action produces, `None` when untyped.
    pub fn action_type(&self, id: ActionId) -> Option<ValueType> {
        self.resolve_action_type(id, &mut FxHashSet::default())
    }

    fn entity_type(&self, name: &str, seen: &mut FxHashSet<Name>) -> ValueType {
        let own = ValueType::Entity(Name::from(name));
        if !self.is_virtual(name) || !seen.insert(Name::from(name)) {
            return own;
        }
        let resolved = self
            .entity(name)
            .and_then(|entity| entity.properties.values().next().copied())
            .and_then(|only| self.resolve_action_type(self.property(only).source, seen));
        // Only the current chain guards against cycles.
        seen.remove(name);
        resolved.unwrap_or(own)
    }

    fn resolve_action_type(&self, id: ActionId, seen: &mut FxHashSet<Name>) -> Option<ValueType> {
        let action = self.action(id);
        match &action.kind {
            ActionKind::ConsumeLiteral(_) if action.report_success => Some(ValueType::Boolean),
            ActionKind::ConsumeLiteral(_) | ActionKind::ConsumePattern(_) => Some(ValueType::Text),
            ActionKind::ConsumeEntity(target) => Some(self.entity_type(target, seen)),
            ActionKind::ConsumeAll(children) => {
                let mut typed = children
                    .iter()
                    .filter_map(|&child| self.contributed_type(child, seen));
                match (typed.next(), typed.next()) {
                    (Some(only), None) => Some(only),
                    _ => None,
                }
            }
            ActionKind::ConsumeAny(children) => {
                let types: Vec<Option<ValueType>> = children
                    .iter()
                    .map(|&child| self.contributed_type(child, seen))
                    .collect();
                let common = match types.split_first() {
                    Some((Some(first), rest)) if rest.iter().all(|t| t.as_ref() == Some(first)) => {
                        Some(first.clone())
                    }
                    _ => None,
                };
                common.or_else(|| {
                    let property = self.property(action.property?);
                    Some(ValueType::Entity(property.entity.clone()))
                })
            }
        }
    }

    /// Type a child contributes to its composite: leaves without a property
    /// produce no value and contribute nothing.
    fn contributed_type(&self, id: ActionId, seen: &mut FxHashSet<Name>) -> Option<ValueType> {
        let action = self.action(id);
        if action.is_leaf() && action.property.is_none() {
            return None;
        }
        self.resolve_action_type(id, seen)
    }
}
