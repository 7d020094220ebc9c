//! Phase 1: compile every rule's expression into a parse action tree,
//! creating properties along the way.

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use super::error::{ModelError, ModelResult};
use crate::base::{ActionId, Name, PropertyId, sanitize_label, witness_name};
use crate::grammar::Expression;
use crate::model::{ActionKind, Model, ParseAction, Property};

/// Label that consumes a literal without keeping anything.
const DISCARD_LABEL: &str = "_";

/// Synthesize properties and parse actions for all entities.
pub fn synthesize(mut model: Model) -> ModelResult<Model> {
    let rules: Vec<(Name, Expression)> = model
        .entities()
        .filter_map(|entity| {
            entity
                .rule()
                .map(|rule| (entity.name().clone(), rule.expression.clone()))
        })
        .collect();

    for (name, expression) in rules {
        let mut synthesizer = Synthesizer::new(&mut model, name.clone());
        let action = synthesizer.compile(&expression, Context::BODY)?;
        let properties = synthesizer.finish();

        if let Some(entity) = model.entity_mut(&name) {
            entity.action = Some(action);
            entity.properties = properties;
        }
    }

    Ok(model)
}

/// What the expression being compiled is embedded in.
#[derive(Debug, Clone, Copy)]
struct Context {
    /// Inside an optional or a choice branch: may not match.
    optional: bool,
    /// The expression is the whole rule body (modulo groups).
    body: bool,
}

impl Context {
    const BODY: Context = Context {
        optional: false,
        body: true,
    };

    fn nested(self) -> Self {
        Self {
            body: false,
            ..self
        }
    }

    fn optional(self) -> Self {
        Self {
            optional: true,
            ..self
        }
    }
}

struct Synthesizer<'m> {
    model: &'m mut Model,
    entity: Name,
    properties: Vec<PropertyId>,
}

impl<'m> Synthesizer<'m> {
    fn new(model: &'m mut Model, entity: Name) -> Self {
        Self {
            model,
            entity,
            properties: Vec::new(),
        }
    }

    fn compile(&mut self, expression: &Expression, ctx: Context) -> ModelResult<ActionId> {
        match expression {
            Expression::StringLiteral { label, text } => {
                let action = self.leaf(ActionKind::ConsumeLiteral(text.clone()));
                let name = match label.as_deref() {
                    Some(DISCARD_LABEL) => None,
                    Some(label) => Some(sanitize_label(label)),
                    None if ctx.optional => Some(witness_name(text)),
                    None if ctx.body => Some(self.entity.clone()),
                    None => None,
                };
                if let Some(name) = name {
                    // A literal's text is fixed; what varies is whether it was there.
                    self.model.action_mut(action).report_success = ctx.optional;
                    self.attach(name, action);
                }
                Ok(action)
            }
            Expression::IdentifierRef { label, target } => {
                if !self.model.contains(target) {
                    return Err(ModelError::unknown_reference(
                        self.entity.clone(),
                        target.clone(),
                    ));
                }
                let action = self.leaf(ActionKind::ConsumeEntity(target.clone()));
                let name = label
                    .as_deref()
                    .map(sanitize_label)
                    .unwrap_or_else(|| target.clone());
                self.attach(name, action);
                Ok(action)
            }
            Expression::Extractor { label, pattern } => {
                let action = self.leaf(ActionKind::ConsumePattern(pattern.clone()));
                let name = label
                    .as_deref()
                    .map(sanitize_label)
                    .unwrap_or_else(|| self.entity.clone());
                self.attach(name, action);
                Ok(action)
            }
            Expression::Optional(inner) => {
                let action = self.compile(inner, ctx.nested().optional())?;
                self.model.action_mut(action).is_optional = true;
                Ok(action)
            }
            Expression::Repetition(inner) => {
                let action = self.compile(inner, ctx.nested())?;
                self.model.action_mut(action).is_plural = true;
                Ok(action)
            }
            Expression::Group(inner) => self.compile(inner, ctx),
            Expression::Alternatives { .. } => {
                let branch_ctx = ctx.nested().optional();
                let children = expression
                    .alternatives()
                    .into_iter()
                    .map(|branch| self.compile(branch, branch_ctx))
                    .collect::<ModelResult<Vec<_>>>()?;
                Ok(self
                    .model
                    .add_action(ParseAction::new(ActionKind::ConsumeAny(children))))
            }
            Expression::Sequential { .. } => {
                let member_ctx = ctx.nested();
                let children = expression
                    .sequence()
                    .into_iter()
                    .map(|member| self.compile(member, member_ctx))
                    .collect::<ModelResult<Vec<_>>>()?;
                Ok(self
                    .model
                    .add_action(ParseAction::new(ActionKind::ConsumeAll(children))))
            }
        }
    }

    fn leaf(&mut self, kind: ActionKind) -> ActionId {
        self.model.add_action(ParseAction::new(kind))
    }

    fn attach(&mut self, name: Name, source: ActionId) {
        trace!("[SYNTH] {}.{} <- {}", self.entity, name, source);
        let id = self
            .model
            .add_property(Property::new(name, self.entity.clone(), source));
        self.properties.push(id);
    }

    /// Make property names unique and return them in creation order.
    ///
    /// Every member of a group of equal names gets a 0-based suffix, the
    /// first one included: `id id id` becomes `id0 id1 id2`.
    fn finish(self) -> IndexMap<Name, PropertyId> {
        let mut counts: FxHashMap<Name, usize> = FxHashMap::default();
        for &id in &self.properties {
            *counts.entry(self.model.property(id).name.clone()).or_default() += 1;
        }
        let mut taken: FxHashSet<Name> = counts
            .iter()
            .filter(|&(_, &count)| count == 1)
            .map(|(name, _)| name.clone())
            .collect();
        let mut next_suffix: FxHashMap<Name, usize> = FxHashMap::default();

        let mut properties = IndexMap::with_capacity(self.properties.len());
        for id in self.properties {
            let name = self.model.property(id).name.clone();
            let unique = if counts.get(&name).copied().unwrap_or(0) > 1 {
                let suffix = next_suffix.entry(name.clone()).or_default();
                loop {
                    let candidate = Name::from(format!("{name}{suffix}"));
                    *suffix += 1;
                    if !taken.contains(&candidate) {
                        break candidate;
                    }
                }
            } else {
                name
            };
            taken.insert(unique.clone());
            self.model.rename_property(id, unique.clone());
            properties.insert(unique, id);
        }
        properties
    }
}
