//! EBNF-like rendering of parse action trees.
//!
//! ```text
//! rule ::= name@identifier "::=" expression ";" ;
//! expr ::= alternative@( identifier | string | number ) ;
//! rules ::= { rule } ;
//! ```

use std::fmt;

use super::{ActionKind, Model};
use crate::base::ActionId;

/// Displays an action subtree of a [`Model`].
pub struct ActionDisplay<'a> {
    model: &'a Model,
    id: ActionId,
}

impl<'a> ActionDisplay<'a> {
    pub fn new(model: &'a Model, id: ActionId) -> Self {
        Self { model, id }
    }

    fn write(&self, f: &mut fmt::Formatter<'_>, id: ActionId, nested: bool) -> fmt::Result {
        let action = self.model.action(id);
        // A reference named after its target reads better without the label.
        let label = action
            .property()
            .map(|property| self.model.property(property).name())
            .filter(|name| action.target() != Some(*name));
        let wrapped = action.is_optional || action.is_plural;

        if action.is_optional {
            write!(f, "[ ")?;
        }
        if action.is_plural {
            write!(f, "{{ ")?;
        }
        if let Some(label) = label {
            write!(f, "{label}@")?;
        }

        let parens = label.is_some() || (nested && !wrapped);
        match &action.kind {
            ActionKind::ConsumeLiteral(text) => write!(f, "{text:?}")?,
            ActionKind::ConsumePattern(pattern) => write!(f, "/{pattern}/")?,
            ActionKind::ConsumeEntity(target) => write!(f, "{target}")?,
            ActionKind::ConsumeAll(children) => self.write_children(f, children, " ", parens)?,
            ActionKind::ConsumeAny(children) => self.write_children(f, children, " | ", parens)?,
        }

        if action.is_plural {
            write!(f, " }}")?;
        }
        if action.is_optional {
            write!(f, " ]")?;
        }
        Ok(())
    }

    fn write_children(
        &self,
        f: &mut fmt::Formatter<'_>,
        children: &[ActionId],
        separator: &str,
        parens: bool,
    ) -> fmt::Result {
        if parens {
            write!(f, "( ")?;
        }
        for (i, &child) in children.iter().enumerate() {
            if i > 0 {
                write!(f, "{separator}")?;
            }
            self.write(f, child, true)?;
        }
        if parens {
            write!(f, " )")?;
        }
        Ok(())
    }
}

impl fmt::Display for ActionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, self.id, false)
    }
}
