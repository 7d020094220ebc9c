//! Model interchange: exporting a finished model for out-of-process emitters.
//!
//! ## Architecture
//!
//! Formats never see the arena-based [`Model`](crate::model::Model)
//! directly. They serialize a [`ModelView`], which resolves ids into names
//! and carries the derived attributes.
//!
//! ```text
//! ┌──────────────┐      ┌──────────────┐      ┌──────────────────────┐
//! │    Model     │ ───▶ │  ModelView   │ ───▶ │  ModelFormat (JSON)  │
//! └──────────────┘      └──────────────┘      └──────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use parsegen::interchange::{Json, ModelFormat};
//!
//! let model = parsegen::build_model(&grammar)?;
//! std::fs::write("model.json", Json.write(&model)?)?;
//! ```

mod error;
mod format;
mod json;
mod views;

pub use error::InterchangeError;
pub use format::ModelFormat;
pub use json::Json;
pub use views::{ActionView, EntityView, ModelView, PropertyView};

/// Supported file extensions for interchange formats.
pub fn supported_extensions() -> &'static [&'static str] {
    Json.extensions()
}

/// Detect format from file extension.
pub fn detect_format(path: &std::path::Path) -> Option<Box<dyn ModelFormat>> {
    let ext = path.extension()?.to_str()?;
    match ext.to_lowercase().as_str() {
        "json" => Some(Box::new(Json)),
        _ => None,
    }
}
