//! Foundation types for the parsegen toolchain.
//!
//! This module provides fundamental types used throughout the compiler:
//! - [`Name`] - Cheap-to-clone rule, entity and property names
//! - [`PropertyId`], [`ActionId`] - Arena indices into a [`Model`](crate::model::Model)
//! - [`sanitize_label`], [`is_identifier`] - Turning grammar labels into identifiers
//!
//! This module has NO dependencies on other parsegen modules.

mod ids;
mod label;

pub use ids::{ActionId, PropertyId};
pub use label::{is_identifier, sanitize_label, witness_name};

/// A rule, entity or property name.
///
/// Names are short and cloned a lot (every `ConsumeEntity` carries one),
/// so they are stored inline when possible.
pub type Name = smol_str::SmolStr;
