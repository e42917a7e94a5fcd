//! Primitive scalar seeding.

use crate::error::CodegenError;
use crate::expr::{Expr, Primitive};
use crate::schema_map::SchemaMap;
use zodgen_schema::TypeCatalog;

/// Scalars with a fixed Zod primitive, in seeding order.
pub const PRIMITIVE_SCALARS: [(&str, Primitive); 9] = [
    ("String", Primitive::String),
    ("Int", Primitive::Number),
    ("Decimal", Primitive::Number),
    ("Float", Primitive::Number),
    ("Boolean", Primitive::Boolean),
    ("ID", Primitive::String),
    ("DateTime", Primitive::Date),
    ("JSON", Primitive::Json),
    ("Unknown", Primitive::Unknown),
];

/// Returns the primitive for a known scalar name.
#[must_use]
pub fn primitive_for(name: &str) -> Option<Primitive> {
    PRIMITIVE_SCALARS
        .iter()
        .find(|(scalar, _)| *scalar == name)
        .map(|&(_, primitive)| primitive)
}

/// Seeds a schema map with one entry per declared scalar.
pub struct ScalarTranslator<'a> {
    catalog: &'a TypeCatalog,
}

impl<'a> ScalarTranslator<'a> {
    /// Creates a new scalar translator.
    #[must_use]
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        Self { catalog }
    }

    /// Appends the declared scalars.
    ///
    /// Known primitives come first in their fixed order; custom scalars follow
    /// in declaration order and accept anything.
    ///
    /// # Errors
    /// Returns `CodegenError` if an entry already exists.
    pub fn populate(&self, map: &mut SchemaMap) -> Result<(), CodegenError> {
        for (name, primitive) in PRIMITIVE_SCALARS {
            if self.catalog.scalars().any(|s| s.name == name) {
                map.insert(name, Expr::Primitive(primitive))?;
            }
        }

        for scalar in self.catalog.scalars() {
            if primitive_for(&scalar.name).is_none() {
                tracing::warn!(
                    "Custom scalar '{}' has no primitive mapping, accepting any value",
                    scalar.name
                );
                map.insert(scalar.name.as_str(), Expr::unknown())?;
            }
        }

        Ok(())
    }
}
