//! # zodgen Schema
//!
//! GraphQL SDL ingestion and type catalog definitions.
//!
//! This crate provides:
//! - SDL parsing into a declaration-ordered [`TypeCatalog`]
//! - Type definitions for scalars, enums, unions, objects and input objects
//! - Catalog validation

pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use parser::{parse_sdl, parse_sdl_file};
pub use types::{
    BUILTIN_SCALARS, EnumDef, Field, ObjectDef, ScalarDef, TypeCatalog, TypeDef, TypeId,
    TypeKind, TypeShape, UnionDef, UnsupportedDef,
};
pub use validation::validate_catalog;
