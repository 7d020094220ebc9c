//! Parse actions: the instruction set a generated or interpreted parser executes.

use crate::base::{ActionId, Name, PropertyId};

/// What a parse action consumes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Match the exact text.
    ConsumeLiteral(String),
    /// Match a regular pattern; the matched text is the value.
    ConsumePattern(String),
    /// Parse another entity by name.
    ConsumeEntity(Name),
    /// Sequence: every child must succeed, in order.
    ConsumeAll(Vec<ActionId>),
    /// Choice: the first child that succeeds wins.
    ConsumeAny(Vec<ActionId>),
}

/// A node in an entity's parse action tree.
///
/// The tree is stored in the model arena; `parent` and `property` are
/// non-owning links back into that arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAction {
    pub kind: ActionKind,
    pub is_optional: bool,
    pub is_plural: bool,
    /// Turn a value-producing leaf into a boolean witness.
    pub report_success: bool,
    pub(crate) property: Option<PropertyId>,
    pub(crate) parent: Option<ActionId>,
}

impl ParseAction {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            is_optional: false,
            is_plural: false,
            report_success: false,
            property: None,
            parent: None,
        }
    }

    /// The property this action feeds, if any.
    pub fn property(&self) -> Option<PropertyId> {
        self.property
    }

    /// The enclosing composite action, `None` for an entity's top-level action.
    pub fn parent(&self) -> Option<ActionId> {
        self.parent
    }

    /// Ordered children of a composite action; empty for leaves.
    pub fn children(&self) -> &[ActionId] {
        match &self.kind {
            ActionKind::ConsumeAll(children) | ActionKind::ConsumeAny(children) => children,
            _ => &[],
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(
            self.kind,
            ActionKind::ConsumeAll(_) | ActionKind::ConsumeAny(_)
        )
    }

    pub fn is_any(&self) -> bool {
        matches!(self.kind, ActionKind::ConsumeAny(_))
    }

    /// Target entity of a `ConsumeEntity`.
    pub fn target(&self) -> Option<&Name> {
        match &self.kind {
            ActionKind::ConsumeEntity(target) => Some(target),
            _ => None,
        }
    }

    /// A leaf whose matched text is the value: a pattern, or a literal that
    /// is not reduced to a boolean witness.
    pub fn is_value_terminal(&self) -> bool {
        match self.kind {
            ActionKind::ConsumePattern(_) => true,
            ActionKind::ConsumeLiteral(_) => !self.report_success,
            _ => false,
        }
    }
}
