use crate::base::{ActionId, Name, PropertyId};

/// Plain property or a proxy created by alternatives collapsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    Plain,
    /// Stands in for the listed properties, which were replaced by this one.
    Proxy { subsumed: Vec<PropertyId> },
}

/// A named, typed slot of an entity, filled by exactly one parse action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub(crate) name: Name,
    pub(crate) entity: Name,
    pub(crate) source: ActionId,
    pub(crate) kind: PropertyKind,
}

impl Property {
    pub(crate) fn new(name: Name, entity: Name, source: ActionId) -> Self {
        Self {
            name,
            entity,
            source,
            kind: PropertyKind::Plain,
        }
    }

    pub(crate) fn proxy(
        name: Name,
        entity: Name,
        source: ActionId,
        subsumed: Vec<PropertyId>,
    ) -> Self {
        Self {
            name,
            entity,
            source,
            kind: PropertyKind::Proxy { subsumed },
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Name of the owning entity.
    pub fn entity(&self) -> &Name {
        &self.entity
    }

    /// The parse action that fills this property.
    pub fn source(&self) -> ActionId {
        self.source
    }

    pub fn kind(&self) -> &PropertyKind {
        &self.kind
    }

    pub fn is_proxy(&self) -> bool {
        matches!(self.kind, PropertyKind::Proxy { .. })
    }

    /// Properties replaced by this proxy, in their original order.
    pub fn subsumed(&self) -> &[PropertyId] {
        match &self.kind {
            PropertyKind::Proxy { subsumed } => subsumed,
            PropertyKind::Plain => &[],
        }
    }
}
