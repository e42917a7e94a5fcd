//! Prelude module for convenient imports.
//!
//! ```ignore
//! use zodgen::prelude::*;
//! ```

// Catalog types
pub use zodgen_schema::{
    ParseError, SchemaError, TypeCatalog, TypeDef, TypeKind, TypeShape, parse_sdl,
    parse_sdl_file, validate_catalog,
};

// Generation
pub use zodgen_codegen::{
    ActionDescriptor, ActionFields, CodegenError, Generator, GeneratorConfig, RenderOptions,
    SchemaMap, generate_from_file, generate_from_sdl, load_actions, output_path_for,
};

// Checking
pub use zodgen_codegen::{CheckError, Checker, Expr};
