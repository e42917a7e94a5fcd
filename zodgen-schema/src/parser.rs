//! GraphQL SDL ingestion.
//!
//! This module parses a GraphQL SDL document and extracts its type
//! declarations into a [`TypeCatalog`].

use crate::error::ParseError;
use crate::types::{
    BUILTIN_SCALARS, EnumDef, ObjectDef, ScalarDef, TypeCatalog, TypeDef, TypeShape, UnionDef,
    UnsupportedDef,
};
use async_graphql_parser::types as ast;

/// Parses a GraphQL SDL document from a string.
///
/// # Arguments
/// * `sdl` - SDL document content
///
/// # Returns
/// Catalog holding the built-in scalars followed by every declared type in
/// document order.
///
/// # Errors
/// Returns `ParseError` if the SDL is malformed, declares a type twice or
/// uses `extend`.
pub fn parse_sdl(sdl: &str) -> Result<TypeCatalog, ParseError> {
    let document = async_graphql_parser::parse_schema(sdl)?;
    let mut catalog = TypeCatalog::with_builtin_scalars();

    for definition in &document.definitions {
        let ast::TypeSystemDefinition::Type(type_definition) = definition else {
            continue;
        };
        let line = type_definition.pos.line;
        let type_definition = &type_definition.node;
        let name = type_definition.name.node.as_str();

        if is_introspection_name(name) {
            continue;
        }
        if type_definition.extend {
            return Err(ParseError::UnsupportedExtension {
                name: name.to_string(),
                line,
            });
        }

        let type_def = convert_type_definition(name, &type_definition.kind);
        if catalog.has_type(name) {
            if is_builtin_redeclaration(&type_def) {
                continue;
            }
            return Err(ParseError::duplicate(type_def.kind().to_string(), name));
        }

        tracing::trace!("Ingested {} '{}'", type_def.kind(), name);
        catalog.add_type(type_def);
    }

    tracing::debug!("Parsed SDL document into {} types", catalog.len());
    Ok(catalog)
}

/// Parses a GraphQL SDL document from a file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_sdl_file(path: &std::path::Path) -> Result<TypeCatalog, ParseError> {
    let sdl = std::fs::read_to_string(path)?;
    parse_sdl(&sdl)
}

/// Returns true for introspection-only names (`__Type`, `__Schema`, ...).
#[must_use]
pub fn is_introspection_name(name: &str) -> bool {
    name.starts_with("__")
}

fn is_builtin_redeclaration(type_def: &TypeDef) -> bool {
    matches!(type_def, TypeDef::Scalar(s) if BUILTIN_SCALARS.contains(&s.name.as_str()))
}

fn convert_type_definition(name: &str, kind: &ast::TypeKind) -> TypeDef {
    match kind {
        ast::TypeKind::Scalar => TypeDef::Scalar(ScalarDef::new(name)),
        ast::TypeKind::Enum(enum_type) => TypeDef::Enum(EnumDef::new(
            name,
            enum_type.values.iter().map(|v| v.node.value.node.as_str()),
        )),
        ast::TypeKind::Union(union_type) => TypeDef::Union(UnionDef::new(
            name,
            union_type.members.iter().map(|m| m.node.as_str()),
        )),
        ast::TypeKind::Object(object_type) => TypeDef::Object(
            object_type
                .fields
                .iter()
                .fold(ObjectDef::new(name), |object, field| {
                    object.field(field.node.name.node.as_str(), convert_type(&field.node.ty.node))
                }),
        ),
        ast::TypeKind::InputObject(input_type) => TypeDef::InputObject(
            input_type
                .fields
                .iter()
                .fold(ObjectDef::new(name), |object, field| {
                    object.field(field.node.name.node.as_str(), convert_type(&field.node.ty.node))
                }),
        ),
        ast::TypeKind::Interface(_) => TypeDef::Unsupported(UnsupportedDef {
            name: name.to_string(),
            keyword: "interface".to_string(),
        }),
    }
}

/// Converts a parsed field type into a [`TypeShape`].
fn convert_type(ty: &ast::Type) -> TypeShape {
    let base = match &ty.base {
        ast::BaseType::Named(name) => TypeShape::named(name.as_str()),
        ast::BaseType::List(inner) => TypeShape::list(convert_type(inner)),
    };
    if ty.nullable {
        base
    } else {
        TypeShape::non_null(base)
    }
}
