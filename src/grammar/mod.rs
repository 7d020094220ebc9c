//! # Grammar AST
//!
//! The input to the model factory: an ordered list of named rules, each bound
//! to an [`Expression`] tree. The first rule is the root of the grammar.
//!
//! Turning grammar text into this structure is the job of an external front
//! end, plugged in through [`GrammarSource`].

mod expression;
mod source;

pub use expression::Expression;
pub use source::GrammarSource;

use crate::base::Name;

/// A named grammar rule: `name ::= expression ;`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pub name: Name,
    pub expression: Expression,
}

impl Rule {
    pub fn new(name: impl Into<Name>, expression: Expression) -> Self {
        Self {
            name: name.into(),
            expression,
        }
    }
}

/// An ordered set of rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grammar {
    rules: Vec<Rule>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style rule addition, keeping declaration order.
    pub fn with_rule(mut self, name: impl Into<Name>, expression: Expression) -> Self {
        self.push(Rule::new(name, expression));
        self
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The first rule, if any.
    pub fn root(&self) -> Option<&Rule> {
        self.rules.first()
    }

    /// Find the first rule with the given name.
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for Grammar {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{} ::= {} ;", rule.name, rule.expression)?;
        }
        Ok(())
    }
}
