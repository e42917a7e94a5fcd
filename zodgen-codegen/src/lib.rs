//! # zodgen Codegen
//!
//! Zod schema generation from GraphQL type catalogs.
//!
//! This crate provides:
//! - Field type translation with nullability, lists and deferred references
//! - Enum, union, object and input object translators
//! - Action schema synthesis over input objects
//! - An ordered [`SchemaMap`] and its TypeScript rendering
//! - A reference checker evaluating generated validators against JSON

pub mod check;
pub mod config;
pub mod error;
pub mod expr;
pub mod generator;
pub mod render;
pub mod schema_map;
pub mod zod;

pub use check::{CheckError, Checker};
pub use config::{GeneratorConfig, load_actions};
pub use error::CodegenError;
pub use expr::{Expr, ObjectEntry, Primitive};
pub use generator::{Generator, OUTPUT_SUFFIX, output_path_for};
pub use render::{RenderOptions, render_module};
pub use schema_map::SchemaMap;
pub use zod::{ActionDescriptor, ActionFields};

/// Generates a Zod module from a GraphQL SDL string.
///
/// # Arguments
/// * `sdl` - GraphQL SDL content
/// * `config` - Actions and output settings
///
/// # Returns
/// Generated TypeScript source as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation or action synthesis fails.
pub fn generate_from_sdl(sdl: &str, config: &GeneratorConfig) -> Result<String, CodegenError> {
    let catalog = zodgen_schema::parse_sdl(sdl)?;
    Generator::new(&catalog, config).generate()
}

/// Generates a Zod module from a GraphQL SDL file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation or action
/// synthesis fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: &GeneratorConfig,
) -> Result<String, CodegenError> {
    let sdl = std::fs::read_to_string(path)?;
    generate_from_sdl(&sdl, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SDL: &str = r#"
scalar Unknown

enum TestEnum {
  TEST_ENUM_VALUE_1
  TEST_ENUM_VALUE_2
}

union TestUnion = TestOutputObject1 | TestOutputObject2

type TestOutputObject1 {
  nullable: String
  nonNullable: String!
  list: [String]
  listNonNullable: [String!]
  listNonNullableNonNullable: [String!]!
}

type TestOutputObject2 {
  nullable: String
  nonNullable: String!
  list: [String]
  listNonNullable: [String!]
  listNonNullableNonNullable: [String!]!
}

type TestOutputObject {
  nullableScalar: String
  nonNullableScalar: String!
  enum: TestEnum
  enumNonNullable: TestEnum!
  union: TestUnion
  unionNonNullable: TestUnion!
  unionList: [TestUnion]
  object: TestOutputObject1
  objectListNonNullableNonNullable: [TestOutputObject1!]!
  recursive: TestOutputObject
}

input TestInputObject1 {
  nullable: String
  nonNullable: String!
}
"#;

    const EXPECTED: &str = r#"import { z } from "zod";

export const StringSchema = z.string();

export const IntSchema = z.number();

export const FloatSchema = z.number();

export const BooleanSchema = z.boolean();

export const IDSchema = z.string();

export const UnknownSchema = z.unknown();

export const TestEnumSchema = z.enum([
  "TEST_ENUM_VALUE_1",
  "TEST_ENUM_VALUE_2",
]);

export const TestUnionSchema = z.union([
  z.lazy(() => TestOutputObject1Schema),
  z.lazy(() => TestOutputObject2Schema),
]);

export const TestOutputObject1Schema = z.object({
  nullable: StringSchema.optional(),
  nonNullable: StringSchema,
  list: z.array(StringSchema.optional()).optional(),
  listNonNullable: z.array(StringSchema).optional(),
  listNonNullableNonNullable: z.array(StringSchema),
});

export const TestOutputObject2Schema = z.object({
  nullable: StringSchema.optional(),
  nonNullable: StringSchema,
  list: z.array(StringSchema.optional()).optional(),
  listNonNullable: z.array(StringSchema).optional(),
  listNonNullableNonNullable: z.array(StringSchema),
});

export const TestOutputObjectSchema = z.object({
  nullableScalar: StringSchema.optional(),
  nonNullableScalar: StringSchema,
  enum: TestEnumSchema.optional(),
  enumNonNullable: TestEnumSchema,
  union: z.lazy(() => TestUnionSchema).optional(),
  unionNonNullable: z.lazy(() => TestUnionSchema),
  unionList: z.array(z.lazy(() => TestUnionSchema).optional()).optional(),
  object: TestOutputObject1Schema.optional(),
  objectListNonNullableNonNullable: z.array(TestOutputObject1Schema),
  get recursive() {
    return TestOutputObjectSchema.optional();
  },
});

export const TestInputObject1Schema = z.object({
  nullable: StringSchema.optional(),
  nonNullable: StringSchema,
});

export const TestCreateActionSchema = z.object({
  tag: z.literal("TEST_CREATE"),
  scope: z.literal("test1"),
  input: z.object({
    nullable: StringSchema.optional(),
    nonNullable: StringSchema,
  }),
});

export type String = z.infer<typeof StringSchema>;
export type Int = z.infer<typeof IntSchema>;
export type Float = z.infer<typeof FloatSchema>;
export type Boolean = z.infer<typeof BooleanSchema>;
export type ID = z.infer<typeof IDSchema>;
export type Unknown = z.infer<typeof UnknownSchema>;
export type TestEnum = z.infer<typeof TestEnumSchema>;
export type TestUnion = z.infer<typeof TestUnionSchema>;
export type TestOutputObject1 = z.infer<typeof TestOutputObject1Schema>;
export type TestOutputObject2 = z.infer<typeof TestOutputObject2Schema>;
export type TestOutputObject = z.infer<typeof TestOutputObjectSchema>;
export type TestInputObject1 = z.infer<typeof TestInputObject1Schema>;
export type TestCreateAction = z.infer<typeof TestCreateActionSchema>;
"#;

    #[test]
    fn test_generate_from_sdl() {
        let config = GeneratorConfig::new().action(ActionDescriptor::new(
            "test create",
            "test1",
            "TestInputObject1",
        ));
        let output = generate_from_sdl(SDL, &config).expect("generate");
        assert_eq!(output, EXPECTED);
    }

    #[test]
    fn test_generate_from_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("test.graphql");
        std::fs::write(&path, SDL).expect("write schema");

        let output = generate_from_file(&path, &GeneratorConfig::new()).expect("generate");
        assert!(output.contains("export const TestOutputObjectSchema = z.object({"));
        assert!(!output.contains("TestCreateAction"));
    }

    #[test]
    fn test_generate_from_missing_file() {
        let result = generate_from_file(
            std::path::Path::new("/nonexistent/schema.graphql"),
            &GeneratorConfig::new(),
        );
        assert!(matches!(result, Err(CodegenError::Io(_))));
    }

    #[test]
    fn test_generate_from_invalid_sdl() {
        let result = generate_from_sdl("type {", &GeneratorConfig::new());
        assert!(matches!(result, Err(CodegenError::Parse(_))));
    }
}
