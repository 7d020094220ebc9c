//! # Parser Model
//!
//! The output of the model factory and the input of emitters and the runtime.
//!
//! ## Design
//!
//! The `Model` owns everything by value in indexed containers. Entities are
//! keyed by name and refer to each other only by name, which is how grammars
//! express forward references and recursion. Properties and parse actions live
//! in arenas and point at each other by id.
//!
//! ```text
//! Model
//! ├── entities: IndexMap<Name, Entity>   (rule order)
//! │     └── properties: IndexMap<Name, PropertyId>
//! ├── properties: Vec<Property>          (arena, PropertyId)
//! ├── actions: Vec<ParseAction>          (arena, ActionId)
//! └── root: Option<Name>
//! ```

mod action;
mod entity;
mod property;
mod render;
mod types;
mod verify;

pub use action::{ActionKind, ParseAction};
pub use entity::Entity;
pub use property::{Property, PropertyKind};
pub use render::ActionDisplay;
pub use types::ValueType;
pub use verify::ModelIssue;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::base::{ActionId, Name, PropertyId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    entities: IndexMap<Name, Entity>,
    properties: Vec<Property>,
    actions: Vec<ParseAction>,
    root: Option<Name>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // ENTITIES
    // ========================================================================

    /// Entities in rule order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn entity_names(&self) -> impl Iterator<Item = &Name> {
        self.entities.keys()
    }

    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Name of the root entity (the first rule).
    pub fn root(&self) -> Option<&Name> {
        self.root.as_ref()
    }

    pub fn root_entity(&self) -> Option<&Entity> {
        self.root.as_ref().and_then(|name| self.entities.get(name))
    }

    /// Add an entity; the first one added becomes the root.
    ///
    /// Returns false and leaves the model unchanged if the name is taken.
    pub(crate) fn add_entity(&mut self, entity: Entity) -> bool {
        if self.entities.contains_key(&entity.name) {
            return false;
        }
        if self.root.is_none() {
            self.root = Some(entity.name.clone());
        }
        self.entities.insert(entity.name.clone(), entity);
        true
    }

    /// Replace an existing entity in place, keeping its position.
    pub(crate) fn replace_entity(&mut self, entity: Entity) {
        if let Some(slot) = self.entities.get_mut(&entity.name) {
            *slot = entity;
        }
    }

    pub(crate) fn entity_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.entities.get_mut(name)
    }

    // ========================================================================
    // ARENAS
    // ========================================================================

    pub fn property(&self, id: PropertyId) -> &Property {
        &self.properties[id.index()]
    }

    pub fn action(&self, id: ActionId) -> &ParseAction {
        &self.actions[id.index()]
    }

    /// Number of properties in the arena, including subsumed ones.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Every parse action in the arena, with its id.
    pub fn actions(&self) -> impl Iterator<Item = (ActionId, &ParseAction)> {
        self.actions
            .iter()
            .enumerate()
            .map(|(index, action)| (ActionId::new(index), action))
    }

    pub(crate) fn add_action(&mut self, action: ParseAction) -> ActionId {
        let id = ActionId::new(self.actions.len());
        for child in action.children() {
            self.actions[child.index()].parent = Some(id);
        }
        self.actions.push(action);
        id
    }

    pub(crate) fn action_mut(&mut self, id: ActionId) -> &mut ParseAction {
        &mut self.actions[id.index()]
    }

    /// Add a property and link its source action back to it.
    pub(crate) fn add_property(&mut self, property: Property) -> PropertyId {
        let id = PropertyId::new(self.properties.len());
        self.actions[property.source.index()].property = Some(id);
        self.properties.push(property);
        id
    }

    pub(crate) fn rename_property(&mut self, id: PropertyId, name: Name) {
        self.properties[id.index()].name = name;
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Properties of an entity, in order.
    pub fn properties_of<'a>(
        &'a self,
        entity: &str,
    ) -> impl Iterator<Item = (PropertyId, &'a Property)> + 'a {
        self.entities
            .get(entity)
            .into_iter()
            .flat_map(|e| e.properties.values())
            .map(move |&id| (id, self.property(id)))
    }

    /// Look up a property of an entity by name.
    pub fn find_property(&self, entity: &str, name: &str) -> Option<&Property> {
        self.entity(entity)?
            .property(name)
            .map(|id| self.property(id))
    }

    /// Iterate an action and its ancestors, innermost first.
    pub fn ancestors(&self, id: ActionId) -> impl Iterator<Item = ActionId> + '_ {
        std::iter::successors(Some(id), move |&current| self.action(current).parent)
    }

    /// A property is plural when its source or any enclosing action repeats.
    pub fn is_plural(&self, id: PropertyId) -> bool {
        self.ancestors(self.property(id).source)
            .any(|action| self.action(action).is_plural)
    }

    /// A property is optional when its source or any enclosing action is
    /// optional, or when it sits in one branch of a choice.
    pub fn is_optional(&self, id: PropertyId) -> bool {
        let source = self.property(id).source;
        self.action(source).is_optional
            || self.ancestors(source).skip(1).any(|ancestor| {
                let ancestor = self.action(ancestor);
                ancestor.is_optional || ancestor.is_any()
            })
    }

    /// Entity targets a property refers to; for a proxy, the targets of the
    /// properties it subsumed.
    pub fn referenced_entities(&self, id: PropertyId) -> Vec<Name> {
        let property = self.property(id);
        match &property.kind {
            PropertyKind::Proxy { subsumed } => subsumed
                .iter()
                .filter_map(|&sub| self.action(self.property(sub).source).target().cloned())
                .collect(),
            PropertyKind::Plain => self
                .action(property.source)
                .target()
                .cloned()
                .into_iter()
                .collect(),
        }
    }

    /// The property a value produced by `action` is stored in.
    ///
    /// Walks up from the action to the first property that is still part of
    /// its entity, so values of subsumed properties land in their proxy.
    pub fn assignment_target(&self, action: ActionId) -> Option<PropertyId> {
        self.ancestors(action).find_map(|current| {
            let id = self.action(current).property?;
            let property = self.property(id);
            let owner = self.entity(&property.entity)?;
            (owner.property(&property.name) == Some(id)).then_some(id)
        })
    }

    /// Strict, transitive `child is-a parent` over registered super edges.
    pub fn is_a(&self, child: &str, parent: &str) -> bool {
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut stack: Vec<&str> = vec![child];
        while let Some(current) = stack.pop() {
            let Some(entity) = self.entity(current) else {
                continue;
            };
            for sup in &entity.supers {
                if sup == parent {
                    return true;
                }
                if visited.insert(sup.as_str()) {
                    stack.push(sup.as_str());
                }
            }
        }
        false
    }

    /// Register `child` as a sub of `parent`.
    ///
    /// No-op for self edges, for edges already implied transitively and for
    /// edges that would close a cycle. Returns whether an edge was added.
    pub(crate) fn register_inheritance(&mut self, parent: &str, child: &str) -> bool {
        if parent == child
            || self.is_a(child, parent)
            || self.is_a(parent, child)
            || !self.contains(parent)
            || !self.contains(child)
        {
            return false;
        }
        if let Some(entity) = self.entities.get_mut(parent) {
            entity.subs.insert(Name::from(child));
        }
        if let Some(entity) = self.entities.get_mut(child) {
            entity.supers.insert(Name::from(parent));
        }
        true
    }

    /// Display helper for an action subtree.
    pub fn display_action(&self, id: ActionId) -> ActionDisplay<'_> {
        ActionDisplay::new(self, id)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entity in self.entities() {
            match entity.action {
                Some(action) => {
                    writeln!(f, "{} ::= {} ;", entity.name, self.display_action(action))?
                }
                None => writeln!(f, "{} ::= ;", entity.name)?,
            }
        }
        Ok(())
    }
}
