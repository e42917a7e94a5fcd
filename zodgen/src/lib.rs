//! # zodgen
//!
//! Zod validator generation from GraphQL SDL schemas.
//!
//! zodgen reads a GraphQL type system document and emits a TypeScript module
//! with one Zod schema per declared type, plus discriminated action schemas
//! built over input objects.
//!
//! ## Quick Start
//!
//! ```ignore
//! use zodgen::prelude::*;
//!
//! let config = GeneratorConfig::new()
//!     .action(ActionDescriptor::new("set name", "global", "SetNameInput"));
//!
//! let module = generate_from_sdl(sdl, &config)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - SDL parsing, type catalog and validation
//! - [`codegen`] - Zod schema generation, rendering and checking
//! - [`cli`] - Command-line interface of the `zodgen` binary

pub mod cli;
pub mod prelude;

/// SDL parsing, type catalog and validation.
pub mod schema {
    pub use zodgen_schema::*;
}

/// Zod schema generation from type catalogs.
pub mod codegen {
    pub use zodgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use zodgen_codegen::{
    ActionDescriptor, CodegenError, Generator, GeneratorConfig, generate_from_file,
    generate_from_sdl,
};
pub use zodgen_schema::{TypeCatalog, parse_sdl};
