use indexmap::{IndexMap, IndexSet};

use crate::base::{ActionId, Name, PropertyId};
use crate::grammar::Rule;

/// The model-level counterpart of a grammar rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub(crate) name: Name,
    pub(crate) rule: Option<Rule>,
    /// Insertion order is constructor order for generated code.
    pub(crate) properties: IndexMap<Name, PropertyId>,
    pub(crate) action: Option<ActionId>,
    pub(crate) supers: IndexSet<Name>,
    pub(crate) subs: IndexSet<Name>,
}

impl Entity {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            rule: None,
            properties: IndexMap::new(),
            action: None,
            supers: IndexSet::new(),
            subs: IndexSet::new(),
        }
    }

    pub(crate) fn from_rule(rule: &Rule) -> Self {
        Self {
            rule: Some(rule.clone()),
            ..Self::new(rule.name.clone())
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The rule this entity was created from.
    pub fn rule(&self) -> Option<&Rule> {
        self.rule.as_ref()
    }

    /// Top-level parse action, set once properties have been synthesized.
    pub fn action(&self) -> Option<ActionId> {
        self.action
    }

    pub fn properties(&self) -> &IndexMap<Name, PropertyId> {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<PropertyId> {
        self.properties.get(name).copied()
    }

    pub fn supers(&self) -> &IndexSet<Name> {
        &self.supers
    }

    pub fn subs(&self) -> &IndexSet<Name> {
        &self.subs
    }
}
