//! Structural checks over a finished model.

use std::fmt;

use super::{Model, PropertyKind};
use crate::base::Name;

/// A violated model invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelIssue {
    /// Entities exist but none is marked as root.
    MissingRoot,
    /// The root names an entity that does not exist.
    UnknownRoot { root: Name },
    /// An entity has no top-level parse action.
    MissingAction { entity: Name },
    /// A `ConsumeEntity` names an entity that does not exist.
    UnknownTarget { entity: Name, target: Name },
    /// A property is stored under a key different from its name.
    MisnamedProperty { entity: Name, key: Name, name: Name },
    /// A property's source action does not point back at it.
    DetachedProperty { entity: Name, property: Name },
    /// A super/sub edge is only recorded on one side.
    AsymmetricEdge { parent: Name, child: Name },
    /// An entity is its own (transitive) super.
    InheritanceCycle { entity: Name },
}

impl fmt::Display for ModelIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelIssue::MissingRoot => write!(f, "model has entities but no root"),
            ModelIssue::UnknownRoot { root } => write!(f, "root `{root}` is not an entity"),
            ModelIssue::MissingAction { entity } => {
                write!(f, "entity `{entity}` has no parse action")
            }
            ModelIssue::UnknownTarget { entity, target } => {
                write!(f, "entity `{entity}` consumes unknown entity `{target}`")
            }
            ModelIssue::MisnamedProperty { entity, key, name } => write!(
                f,
                "entity `{entity}` stores property `{name}` under `{key}`"
            ),
            ModelIssue::DetachedProperty { entity, property } => write!(
                f,
                "property `{entity}.{property}` is not linked from its source action"
            ),
            ModelIssue::AsymmetricEdge { parent, child } => write!(
                f,
                "inheritance edge `{parent}` -> `{child}` is recorded on one side only"
            ),
            ModelIssue::InheritanceCycle { entity } => {
                write!(f, "entity `{entity}` inherits from itself")
            }
        }
    }
}

impl Model {
    /// Check the model invariants and report every violation found.
    pub fn verify(&self) -> Vec<ModelIssue> {
        let mut issues = Vec::new();

        match &self.root {
            None if !self.is_empty() => issues.push(ModelIssue::MissingRoot),
            Some(root) if !self.contains(root) => {
                issues.push(ModelIssue::UnknownRoot { root: root.clone() })
            }
            _ => {}
        }

        for action in &self.actions {
            if let Some(target) = action.target() {
                if !self.contains(target) {
                    let entity = action
                        .property()
                        .map(|id| self.property(id).entity.clone())
                        .unwrap_or_default();
                    issues.push(ModelIssue::UnknownTarget {
                        entity,
                        target: target.clone(),
                    });
                }
            }
        }

        for entity in self.entities() {
            if entity.action.is_none() {
                issues.push(ModelIssue::MissingAction {
                    entity: entity.name.clone(),
                });
            }

            for (key, &id) in &entity.properties {
                let property = self.property(id);
                if &property.name != key {
                    issues.push(ModelIssue::MisnamedProperty {
                        entity: entity.name.clone(),
                        key: key.clone(),
                        name: property.name.clone(),
                    });
                }
                if self.action(property.source).property != Some(id) {
                    issues.push(ModelIssue::DetachedProperty {
                        entity: entity.name.clone(),
                        property: property.name.clone(),
                    });
                }
                if let PropertyKind::Proxy { subsumed } = &property.kind {
                    for &sub in subsumed {
                        let sub_property = self.property(sub);
                        if self.action(sub_property.source).property != Some(sub) {
                            issues.push(ModelIssue::DetachedProperty {
                                entity: entity.name.clone(),
                                property: sub_property.name.clone(),
                            });
                        }
                    }
                }
            }

            for sub in &entity.subs {
                let linked = self
                    .entity(sub)
                    .is_some_and(|child| child.supers.contains(&entity.name));
                if !linked {
                    issues.push(ModelIssue::AsymmetricEdge {
                        parent: entity.name.clone(),
                        child: sub.clone(),
                    });
                }
            }
            for sup in &entity.supers {
                let linked = self
                    .entity(sup)
                    .is_some_and(|parent| parent.subs.contains(&entity.name));
                if !linked {
                    issues.push(ModelIssue::AsymmetricEdge {
                        parent: sup.clone(),
                        child: entity.name.clone(),
                    });
                }
            }

            if self.is_a(&entity.name, &entity.name) {
                issues.push(ModelIssue::InheritanceCycle {
                    entity: entity.name.clone(),
                });
            }
        }

        issues
    }
}
