//! Serializable, self-contained views of a [`Model`].
//!
//! The model itself is arena-based and full of ids. Views resolve every id
//! into names and nest action trees, and they carry the derived attributes
//! (virtual, effective type, optional/plural) an emitter needs, so a
//! consumer in another process never has to recompute them.

use serde::Serialize;

use super::InterchangeError;
use crate::base::{ActionId, PropertyId};
use crate::model::{ActionKind, Model};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelView {
    pub root: Option<String>,
    pub entities: Vec<EntityView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityView {
    pub name: String,
    pub is_virtual: bool,
    pub effective_type: String,
    pub supers: Vec<String>,
    pub subs: Vec<String>,
    pub properties: Vec<PropertyView>,
    pub action: Option<ActionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyView {
    pub name: String,
    /// `None` when the type cannot be decided.
    #[serde(rename = "type")]
    pub value_type: Option<String>,
    pub is_optional: bool,
    pub is_plural: bool,
    /// Names of the properties a proxy replaced.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subsumed: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionView {
    /// `literal`, `pattern`, `entity`, `all` or `any`.
    pub kind: &'static str,
    /// Literal text, pattern source or target entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub is_optional: bool,
    pub is_plural: bool,
    pub report_success: bool,
    /// The property this action feeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ActionView>,
}

impl ModelView {
    pub fn from_model(model: &Model) -> Self {
        let entities = model
            .entities()
            .map(|entity| EntityView {
                name: entity.name().to_string(),
                is_virtual: model.is_virtual(entity.name()),
                effective_type: model.effective_type(entity.name()).to_string(),
                supers: entity.supers().iter().map(|n| n.to_string()).collect(),
                subs: entity.subs().iter().map(|n| n.to_string()).collect(),
                properties: entity
                    .properties()
                    .values()
                    .map(|&id| PropertyView::from_model(model, id))
                    .collect(),
                action: entity.action().map(|id| ActionView::from_model(model, id)),
            })
            .collect();

        Self {
            root: model.root().map(|n| n.to_string()),
            entities,
        }
    }

    pub fn entity(&self, name: &str) -> Option<&EntityView> {
        self.entities.iter().find(|entity| entity.name == name)
    }

    pub fn to_json_pretty(&self) -> Result<String, InterchangeError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| InterchangeError::json(format!("Serialization error: {e}")))
    }
}

impl PropertyView {
    fn from_model(model: &Model, id: PropertyId) -> Self {
        let property = model.property(id);
        Self {
            name: property.name().to_string(),
            value_type: model.property_type(id).map(|t| t.to_string()),
            is_optional: model.is_optional(id),
            is_plural: model.is_plural(id),
            subsumed: property
                .subsumed()
                .iter()
                .map(|&sub| model.property(sub).name().to_string())
                .collect(),
        }
    }
}

impl ActionView {
    fn from_model(model: &Model, id: ActionId) -> Self {
        let action = model.action(id);
        let (kind, value) = match &action.kind {
            ActionKind::ConsumeLiteral(text) => ("literal", Some(text.clone())),
            ActionKind::ConsumePattern(pattern) => ("pattern", Some(pattern.clone())),
            ActionKind::ConsumeEntity(target) => ("entity", Some(target.to_string())),
            ActionKind::ConsumeAll(_) => ("all", None),
            ActionKind::ConsumeAny(_) => ("any", None),
        };
        Self {
            kind,
            value,
            is_optional: action.is_optional,
            is_plural: action.is_plural,
            report_success: action.report_success,
            property: action
                .property()
                .map(|property| model.property(property).name().to_string()),
            children: action
                .children()
                .iter()
                .map(|&child| Self::from_model(model, child))
                .collect(),
        }
    }
}
