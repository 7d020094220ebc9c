//! The expression algebra used inside grammar rules.

use std::fmt;

use crate::base::Name;

/// A grammar expression.
///
/// `Alternatives` and `Sequential` are binary and lean to the right in
/// front-end output (`a | b | c` is `Alternatives(a, Alternatives(b, c))`).
/// Consumers unroll them with [`Expression::alternatives`] and
/// [`Expression::sequence`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// `left | right`
    Alternatives {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// `left right`
    Sequential {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// `[ inner ]`
    Optional(Box<Expression>),
    /// `{ inner }`
    Repetition(Box<Expression>),
    /// `( inner )`
    Group(Box<Expression>),
    /// Reference to another rule, e.g. `identifier` or `name@identifier`
    IdentifierRef { label: Option<Name>, target: Name },
    /// A literal keyword or punctuation, e.g. `"if"`
    StringLiteral { label: Option<Name>, text: String },
    /// A regular pattern whose match becomes a value, e.g. `/[a-z]+/`
    Extractor { label: Option<Name>, pattern: String },
}

impl Expression {
    pub fn reference(target: impl Into<Name>) -> Self {
        Expression::IdentifierRef {
            label: None,
            target: target.into(),
        }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Expression::StringLiteral {
            label: None,
            text: text.into(),
        }
    }

    pub fn pattern(pattern: impl Into<String>) -> Self {
        Expression::Extractor {
            label: None,
            pattern: pattern.into(),
        }
    }

    pub fn optional(inner: Expression) -> Self {
        Expression::Optional(Box::new(inner))
    }

    pub fn repetition(inner: Expression) -> Self {
        Expression::Repetition(Box::new(inner))
    }

    pub fn group(inner: Expression) -> Self {
        Expression::Group(Box::new(inner))
    }

    /// Attach an explicit label to a leaf expression.
    ///
    /// Composite expressions carry no label and are returned unchanged.
    pub fn labeled(self, name: impl Into<Name>) -> Self {
        let name = Some(name.into());
        match self {
            Expression::IdentifierRef { target, .. } => Expression::IdentifierRef {
                label: name,
                target,
            },
            Expression::StringLiteral { text, .. } => {
                Expression::StringLiteral { label: name, text }
            }
            Expression::Extractor { pattern, .. } => Expression::Extractor {
                label: name,
                pattern,
            },
            other => other,
        }
    }

    /// Append `other` as the last alternative, keeping the chain right-leaning.
    pub fn or(self, other: Expression) -> Self {
        match self {
            Expression::Alternatives { left, right } => Expression::Alternatives {
                left,
                right: Box::new((*right).or(other)),
            },
            first => Expression::Alternatives {
                left: Box::new(first),
                right: Box::new(other),
            },
        }
    }

    /// Append `other` as the last member of a sequence, keeping the chain right-leaning.
    pub fn then(self, other: Expression) -> Self {
        match self {
            Expression::Sequential { left, right } => Expression::Sequential {
                left,
                right: Box::new((*right).then(other)),
            },
            first => Expression::Sequential {
                left: Box::new(first),
                right: Box::new(other),
            },
        }
    }

    /// Unroll an `Alternatives` chain into its ordered branches.
    ///
    /// Any other expression is a single branch. Groups are not looked into.
    pub fn alternatives(&self) -> Vec<&Expression> {
        let mut branches = Vec::new();
        self.unroll_alternatives(&mut branches);
        branches
    }

    fn unroll_alternatives<'a>(&'a self, out: &mut Vec<&'a Expression>) {
        match self {
            Expression::Alternatives { left, right } => {
                left.unroll_alternatives(out);
                right.unroll_alternatives(out);
            }
            other => out.push(other),
        }
    }

    /// Unroll a `Sequential` chain into its ordered members.
    pub fn sequence(&self) -> Vec<&Expression> {
        let mut members = Vec::new();
        self.unroll_sequence(&mut members);
        members
    }

    fn unroll_sequence<'a>(&'a self, out: &mut Vec<&'a Expression>) {
        match self {
            Expression::Sequential { left, right } => {
                left.unroll_sequence(out);
                right.unroll_sequence(out);
            }
            other => out.push(other),
        }
    }

    /// Explicit label of a leaf expression.
    pub fn label(&self) -> Option<&Name> {
        match self {
            Expression::IdentifierRef { label, .. }
            | Expression::StringLiteral { label, .. }
            | Expression::Extractor { label, .. } => label.as_ref(),
            _ => None,
        }
    }

    /// Visit every rule name referenced anywhere in this expression.
    pub fn references(&self) -> Vec<&Name> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<&'a Name>) {
        match self {
            Expression::Alternatives { left, right } | Expression::Sequential { left, right } => {
                left.collect_references(out);
                right.collect_references(out);
            }
            Expression::Optional(inner)
            | Expression::Repetition(inner)
            | Expression::Group(inner) => {
                inner.collect_references(out)
            }
            Expression::IdentifierRef { target, .. } => out.push(target),
            Expression::StringLiteral { .. } | Expression::Extractor { .. } => {}
        }
    }
}

fn write_label(f: &mut fmt::Formatter<'_>, label: &Option<Name>) -> fmt::Result {
    match label {
        Some(label) => write!(f, "{label}@"),
        None => Ok(()),
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Alternatives { .. } => {
                for (i, branch) in self.alternatives().into_iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{branch}")?;
                }
                Ok(())
            }
            Expression::Sequential { .. } => {
                for (i, member) in self.sequence().into_iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    match member {
                        Expression::Alternatives { .. } => write!(f, "( {member} )")?,
                        _ => write!(f, "{member}")?,
                    }
                }
                Ok(())
            }
            Expression::Optional(inner) => write!(f, "[ {inner} ]"),
            Expression::Repetition(inner) => write!(f, "{{ {inner} }}"),
            Expression::Group(inner) => write!(f, "( {inner} )"),
            Expression::IdentifierRef { label, target } => {
                write_label(f, label)?;
                write!(f, "{target}")
            }
            Expression::StringLiteral { label, text } => {
                write_label(f, label)?;
                write!(f, "{text:?}")
            }
            Expression::Extractor { label, pattern } => {
                write_label(f, label)?;
                write!(f, "/{pattern}/")
            }
        }
    }
}
