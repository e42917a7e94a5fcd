//! Catalog validation utilities.
//!
//! This module checks that a [`TypeCatalog`] is consistent before code is
//! generated from it: references resolve, unions only hold object types, and
//! no type declares the same member twice.

use crate::error::SchemaError;
use crate::types::{EnumDef, ObjectDef, TypeCatalog, TypeDef, UnionDef};
use std::collections::HashSet;

/// Validates a catalog for correctness.
///
/// # Arguments
/// * `catalog` - The catalog to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue found.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_catalog(catalog: &TypeCatalog) -> Result<(), SchemaError> {
    for (_, type_def) in catalog.iter() {
        match type_def {
            TypeDef::Enum(enum_def) => validate_enum(enum_def)?,
            TypeDef::Union(union_def) => validate_union(catalog, union_def)?,
            TypeDef::Object(object) | TypeDef::InputObject(object) => {
                validate_object(catalog, object)?;
            }
            TypeDef::Scalar(_) | TypeDef::Unsupported(_) => {}
        }
    }
    Ok(())
}

/// Validates an enum type definition.
fn validate_enum(enum_def: &EnumDef) -> Result<(), SchemaError> {
    if enum_def.values.is_empty() {
        return Err(SchemaError::Empty {
            kind: "enum".to_string(),
            name: enum_def.name.clone(),
        });
    }

    let mut seen = HashSet::new();
    for value in &enum_def.values {
        if !seen.insert(value) {
            return Err(SchemaError::Validation {
                message: format!(
                    "Duplicate enum value '{}' in enum '{}'",
                    value, enum_def.name
                ),
            });
        }
    }

    Ok(())
}

/// Validates a union type definition.
fn validate_union(catalog: &TypeCatalog, union_def: &UnionDef) -> Result<(), SchemaError> {
    if union_def.members.is_empty() {
        return Err(SchemaError::Empty {
            kind: "union".to_string(),
            name: union_def.name.clone(),
        });
    }

    for member in &union_def.members {
        match catalog.get_type(member) {
            Some(TypeDef::Object(_)) => {}
            Some(other) => {
                return Err(SchemaError::invalid_member(
                    &union_def.name,
                    member,
                    format!("{} is not an object type", other.kind()),
                ));
            }
            None => {
                return Err(SchemaError::invalid_member(
                    &union_def.name,
                    member,
                    "type not found",
                ));
            }
        }
    }

    Ok(())
}

/// Validates fields within an object or input object.
fn validate_object(catalog: &TypeCatalog, object: &ObjectDef) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for field in &object.fields {
        if !seen.insert(&field.name) {
            return Err(SchemaError::Validation {
                message: format!(
                    "Duplicate field '{}' in type '{}'",
                    field.name, object.name
                ),
            });
        }

        let referenced = field.shape.base_name();
        if !catalog.has_type(referenced) {
            return Err(SchemaError::unknown_type(
                referenced,
                &field.declaring_type,
                &field.name,
            ));
        }
    }

    Ok(())
}
