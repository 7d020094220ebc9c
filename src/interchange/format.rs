//! Common trait for model export formats.

use std::io::Write;

use super::InterchangeError;
use crate::model::Model;

/// A format a finished [`Model`] can be exported to.
///
/// Formats are write-only: a model is always rebuilt from its grammar, never
/// read back.
pub trait ModelFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// MIME type for this format.
    fn mime_type(&self) -> &'static str;

    /// Write a model to bytes.
    fn write(&self, model: &Model) -> Result<Vec<u8>, InterchangeError>;

    /// Write a model to any writer.
    fn write_to(&self, model: &Model, writer: &mut dyn Write) -> Result<(), InterchangeError> {
        let bytes = self.write(model)?;
        writer.write_all(&bytes)?;
        Ok(())
    }
}
