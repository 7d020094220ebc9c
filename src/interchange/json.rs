//! JSON export of a model through [`ModelView`].

use super::{InterchangeError, ModelFormat, ModelView};
use crate::model::Model;

/// Pretty-printed JSON of a [`ModelView`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl ModelFormat for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn write(&self, model: &Model) -> Result<Vec<u8>, InterchangeError> {
        ModelView::from_model(model)
            .to_json_pretty()
            .map(String::into_bytes)
    }
}
