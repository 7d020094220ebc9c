//! # Runtime
//!
//! Executes a [`Model`]'s parse actions directly against input text, without
//! generating code first. This is the reference reading of what a model
//! means: a generated parser should accept the same inputs and produce the
//! same instances.
//!
//! ```text
//! ConsumeLiteral / ConsumePattern  -> Scanner token, Value::Text or Value::Bool
//! ConsumeEntity                    -> nested Instance (or its value, if virtual)
//! ConsumeAll                       -> every child in order, rewind on failure
//! ConsumeAny                       -> first child that matches
//! is_optional / is_plural          -> zero-or-one / zero-or-more
//! ```
//!
//! Matching is ordered-choice with full backtracking; there is no
//! memoization, so pathological grammars can be slow. Left recursion is
//! cut off by the depth limit: the branch that exceeds it fails, and the
//! parse reports `DepthLimit` only if it fails overall.

mod error;
mod instance;
mod scanner;

pub use error::{RuntimeError, RuntimeResult};
pub use instance::{Instance, Value};
pub use scanner::{Scanner, anchored};

use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::base::{ActionId, Name, PropertyId};
use crate::model::{ActionKind, Model};

/// Interpreter settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Pattern skipped before every token; `None` makes whitespace significant.
    pub ignore: Option<String>,
    /// Maximum entity nesting.
    pub max_depth: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            ignore: Some(r"\s+".to_string()),
            max_depth: 256,
        }
    }
}

/// A model prepared for parsing: patterns compiled once, reusable for any
/// number of inputs.
#[derive(Debug, Clone)]
pub struct Interpreter<'m> {
    model: &'m Model,
    root: Name,
    patterns: FxHashMap<ActionId, Regex>,
    ignore: Option<Regex>,
    max_depth: usize,
}

impl<'m> Interpreter<'m> {
    pub fn new(model: &'m Model, config: RuntimeConfig) -> RuntimeResult<Self> {
        let root = model.root().cloned().ok_or(RuntimeError::NoRoot)?;

        let mut patterns = FxHashMap::default();
        for (id, action) in model.actions() {
            if let ActionKind::ConsumePattern(pattern) = &action.kind {
                let regex =
                    anchored(pattern).map_err(|err| RuntimeError::invalid_pattern(pattern, &err))?;
                patterns.insert(id, regex);
            }
        }

        let ignore = config
            .ignore
            .as_deref()
            .map(|pattern| {
                anchored(pattern).map_err(|err| RuntimeError::invalid_pattern(pattern, &err))
            })
            .transpose()?;

        debug!(
            "[RUNTIME] root={}, {} patterns compiled",
            root,
            patterns.len()
        );
        Ok(Self {
            model,
            root,
            patterns,
            ignore,
            max_depth: config.max_depth,
        })
    }

    pub fn model(&self) -> &'m Model {
        self.model
    }

    /// Parse `text` as an instance of the root entity. All of the input must
    /// be consumed, up to trailing ignorable text.
    pub fn parse(&self, text: &str) -> RuntimeResult<Instance> {
        let mut run = Run {
            interpreter: self,
            scanner: Scanner::new(text, self.ignore.clone()),
            depth_limit: None,
        };

        let Some(instance) = run.entity(&self.root, 0) else {
            return Err(self.failure(run));
        };

        if !run.scanner.at_end() {
            let offset = run.scanner.offset();
            debug!("[RUNTIME] trailing input at {:?}", offset);
            // A repetition that gave up early hides the real failure.
            if run.depth_limit.is_some() || run.scanner.farthest_failure().0 > offset {
                return Err(self.failure(run));
            }
            return Err(RuntimeError::TrailingInput { offset });
        }
        Ok(instance)
    }

    /// Why a run failed: the depth limit if any branch hit it, else the
    /// farthest point the scanner reached.
    fn failure(&self, run: Run<'_, '_, '_>) -> RuntimeError {
        if let Some(err) = run.depth_limit {
            return err;
        }
        let (offset, expected) = run.scanner.farthest_failure();
        RuntimeError::NoMatch {
            entity: self.root.clone(),
            offset,
            expected: expected.to_vec(),
        }
    }
}

/// Values collected while matching, in match order. Truncated on backtrack.
type Assignments = Vec<(PropertyId, Value)>;

/// State of one `parse` call.
struct Run<'i, 'm, 't> {
    interpreter: &'i Interpreter<'m>,
    scanner: Scanner<'t>,
    /// First depth overflow; the branch that hit it just fails.
    depth_limit: Option<RuntimeError>,
}

impl Run<'_, '_, '_> {
    fn model(&self) -> &Model {
        self.interpreter.model
    }

    /// Match one entity. `None` means no match and nothing consumed.
    fn entity(&mut self, name: &str, depth: usize) -> Option<Instance> {
        if depth > self.interpreter.max_depth {
            trace!("[RUNTIME] depth limit at {}", name);
            if self.depth_limit.is_none() {
                self.depth_limit = Some(RuntimeError::DepthLimit {
                    entity: Name::from(name),
                    limit: self.interpreter.max_depth,
                });
            }
            return None;
        }
        let action = self.model().entity(name).and_then(|entity| entity.action())?;

        trace!("[RUNTIME] {} at {:?}", name, self.scanner.offset());
        let mut out = Assignments::new();
        if !self.action(action, depth, &mut out) {
            return None;
        }
        Some(self.assemble(name, out))
    }

    /// Match an action with its optional/plural modifiers applied.
    /// On failure the scanner and `out` are left as they were.
    fn action(&mut self, id: ActionId, depth: usize, out: &mut Assignments) -> bool {
        let action = self.model().action(id);
        let (optional, plural) = (action.is_optional, action.is_plural);

        if plural {
            loop {
                let start = self.scanner.checkpoint();
                let mark = out.len();
                if !self.once(id, depth, out) {
                    self.scanner.rewind(start);
                    out.truncate(mark);
                    break;
                }
                if self.scanner.offset() == start {
                    break;
                }
            }
            return true;
        }

        let start = self.scanner.checkpoint();
        let mark = out.len();
        if self.once(id, depth, out) {
            return true;
        }
        self.scanner.rewind(start);
        out.truncate(mark);
        optional
    }

    /// Match an action exactly once, ignoring its modifiers.
    fn once(&mut self, id: ActionId, depth: usize, out: &mut Assignments) -> bool {
        let model = self.interpreter.model;
        let action = model.action(id);
        match &action.kind {
            ActionKind::ConsumeLiteral(text) => {
                let Some(matched) = self.scanner.literal(text) else {
                    return false;
                };
                let value = if action.report_success {
                    Value::Bool(true)
                } else {
                    Value::Text(matched.to_string())
                };
                self.emit(id, value, out);
                true
            }
            ActionKind::ConsumePattern(pattern) => {
                let Some(regex) = self.interpreter.patterns.get(&id) else {
                    return false;
                };
                let Some(matched) = self.scanner.pattern(regex, pattern) else {
                    return false;
                };
                self.emit(id, Value::Text(matched.to_string()), out);
                true
            }
            ActionKind::ConsumeEntity(target) => {
                let Some(instance) = self.entity(target, depth + 1) else {
                    return false;
                };
                let value = if model.is_virtual(target) {
                    instance.into_first_value()
                } else {
                    Some(Value::Node(Box::new(instance)))
                };
                if let Some(value) = value {
                    self.emit(id, value, out);
                }
                true
            }
            ActionKind::ConsumeAll(children) => {
                for &child in children {
                    if !self.action(child, depth, out) {
                        return false;
                    }
                }
                true
            }
            ActionKind::ConsumeAny(children) => {
                for &child in children {
                    if self.action(child, depth, out) {
                        return true;
                    }
                }
                false
            }
        }
    }

    /// Record a leaf's value for the property it ends up in.
    fn emit(&self, id: ActionId, value: Value, out: &mut Assignments) {
        let model = self.model();
        if model.action(id).property().is_none() {
            return;
        }
        if let Some(target) = model.assignment_target(id) {
            out.push((target, value));
        }
    }

    /// Build the instance: fields in property order, plural properties as
    /// lists, unmatched witnesses as `false`.
    fn assemble(&self, entity: &str, out: Assignments) -> Instance {
        let model = self.model();
        let mut values: FxHashMap<PropertyId, Vec<Value>> = FxHashMap::default();
        for (property, value) in out {
            values.entry(property).or_default().push(value);
        }

        let mut instance = Instance::new(entity);
        for (id, property) in model.properties_of(entity) {
            let matched = values.remove(&id).unwrap_or_default();
            let name = property.name().clone();
            if model.is_plural(id) {
                instance.set(name, Value::List(matched));
            } else if let Some(value) = matched.into_iter().last() {
                instance.set(name, value);
            } else if model.action(property.source()).report_success {
                instance.set(name, Value::Bool(false));
            }
        }
        instance
    }
}

#[cfg(test)]
mod tests;
