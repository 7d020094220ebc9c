//! Parse results: one [`Instance`] per matched entity.

use std::fmt;

use indexmap::IndexMap;

use crate::base::Name;

/// The value stored in an instance field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Bool(bool),
    Node(Box<Instance>),
    List(Vec<Value>),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Instance> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

/// A matched entity with its fields in property order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    entity: Name,
    fields: IndexMap<Name, Value>,
}

impl Instance {
    pub fn new(entity: impl Into<Name>) -> Self {
        Self {
            entity: entity.into(),
            fields: IndexMap::new(),
        }
    }

    /// Name of the entity this is an instance of.
    pub fn entity(&self) -> &Name {
        &self.entity
    }

    pub fn fields(&self) -> &IndexMap<Name, Value> {
        &self.fields
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_text)
    }

    pub fn flag(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(Value::as_bool)
    }

    pub fn node(&self, field: &str) -> Option<&Instance> {
        self.get(field).and_then(Value::as_node)
    }

    pub fn list(&self, field: &str) -> Option<&[Value]> {
        self.get(field).and_then(Value::as_list)
    }

    pub(crate) fn set(&mut self, field: Name, value: Value) {
        self.fields.insert(field, value);
    }

    /// The value of the first field; what a virtual entity stands for.
    pub(crate) fn into_first_value(self) -> Option<Value> {
        self.fields.into_iter().next().map(|(_, value)| value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{text:?}"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Node(node) => write!(f, "{node}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Compact one-line form: `pair { key: "a", value: "1" }`.
impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entity)?;
        if self.fields.is_empty() {
            return Ok(());
        }
        write!(f, " {{ ")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, " }}")
    }
}
