//! Zod translation passes.
//!
//! Each pass scans the catalog and appends to a [`crate::SchemaMap`]; the
//! generator runs them in a fixed order: scalars, enums, unions, objects,
//! actions.

pub mod actions;
pub mod enums;
pub mod fields;
pub mod objects;
pub mod scalars;

pub use actions::{ActionDescriptor, ActionFields, ActionSynthesizer};
pub use enums::{EnumTranslator, UnionTranslator};
pub use fields::{FieldExpr, FieldTypeResolver};
pub use objects::ObjectTranslator;
pub use scalars::{PRIMITIVE_SCALARS, ScalarTranslator, primitive_for};
