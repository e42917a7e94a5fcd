//! Main code generator.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::render::render_module;
use crate::schema_map::SchemaMap;
use crate::zod::{
    ActionSynthesizer, EnumTranslator, ObjectTranslator, ScalarTranslator, UnionTranslator,
};
use std::path::{Path, PathBuf};
use zodgen_schema::{TypeCatalog, validate_catalog};

/// Suffix replacing the extension of the input path in the default output
/// path.
pub const OUTPUT_SUFFIX: &str = "-zod-schemas.ts";

/// Zod module generator over one catalog.
pub struct Generator<'a> {
    catalog: &'a TypeCatalog,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(catalog: &'a TypeCatalog, config: &'a GeneratorConfig) -> Self {
        Self { catalog, config }
    }

    /// Builds the ordered schema map: scalars, enums, unions, objects, then
    /// actions.
    ///
    /// # Errors
    /// Returns `CodegenError` if catalog validation or action synthesis
    /// fails. No map is returned in that case.
    pub fn build_schema_map(&self) -> Result<SchemaMap, CodegenError> {
        if self.config.validates() {
            validate_catalog(self.catalog)?;
        }

        let mut map = SchemaMap::new();
        ScalarTranslator::new(self.catalog).populate(&mut map)?;
        EnumTranslator::new(self.catalog).populate(&mut map)?;
        UnionTranslator::new(self.catalog).populate(&mut map)?;
        ObjectTranslator::new(self.catalog).populate(&mut map)?;
        ActionSynthesizer::new(self.catalog, self.config.action_fields())
            .populate(&mut map, self.config.action_list())?;

        tracing::debug!(
            "Built schema map with {} entries ({} actions)",
            map.len(),
            self.config.action_list().len()
        );
        Ok(map)
    }

    /// Generates the complete TypeScript module.
    ///
    /// # Errors
    /// Returns `CodegenError` if the schema map cannot be built.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let map = self.build_schema_map()?;
        Ok(render_module(&map, self.config.render_options()))
    }

    /// Generates the module and writes it to `path`.
    ///
    /// Nothing is written if generation fails.
    ///
    /// # Errors
    /// Returns `CodegenError` if generation or writing fails.
    pub fn write_to_file(&self, path: &Path) -> Result<(), CodegenError> {
        let source = self.generate()?;
        std::fs::write(path, source)?;
        tracing::info!("Wrote Zod schemas to {}", path.display());
        Ok(())
    }
}

/// Derives the default output path: the input path with its extension
/// replaced by [`OUTPUT_SUFFIX`].
#[must_use]
pub fn output_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zod::ActionDescriptor;
    use zodgen_schema::parse_sdl;

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
}

type TestOutputObject2 {
  list: [String]
}

input TestInputObject1 {
  nullable: String
  nonNullable: String!
}

input TestInputObject2 {
  listNonNullable: [String!]
}
"#;

    fn actions() -> [ActionDescriptor; 2] {
        [
            ActionDescriptor::new("test create", "test1", "TestInputObject1"),
            ActionDescriptor::new("test update", "test2", "TestInputObject2"),
        ]
    }

    #[test]
    fn test_pass_order() {
        let catalog = parse_sdl(SDL).expect("Failed to parse");
        let config = GeneratorConfig::new().actions(actions());
        let map = Generator::new(&catalog, &config)
            .build_schema_map()
            .expect("schema map");

        assert_eq!(
            map.names().collect::<Vec<_>>(),
            [
                "String",
                "Int",
                "Float",
                "Boolean",
                "ID",
                "Unknown",
                "TestEnum",
                "TestUnion",
                "TestOutputObject1",
                "TestOutputObject2",
                "TestInputObject1",
                "TestInputObject2",
                "TestCreateAction",
                "TestUpdateAction",
            ]
        );
    }

    #[test]
    fn test_generate_module() {
        let catalog = parse_sdl(SDL).expect("Failed to parse");
        let config = GeneratorConfig::new().actions(actions());
        let output = Generator::new(&catalog, &config)
            .generate()
            .expect("generate");

        assert!(output.starts_with("import { z } from \"zod\";\n\n"));
        assert!(output.contains("export const UnknownSchema = z.unknown();\n"));
        assert!(output.contains(
            "export const TestUnionSchema = z.union([\n  z.lazy(() => TestOutputObject1Schema),\n"
        ));
        assert!(output.contains("  list: z.array(StringSchema.optional()).optional(),\n"));
        assert!(output.contains("export const TestCreateActionSchema = z.object({\n"));
        assert!(output.contains("  tag: z.literal(\"TEST_CREATE\"),\n"));
        assert!(output.contains("    listNonNullable: z.array(StringSchema).optional(),\n"));
        assert!(output.ends_with(
            "export type TestUpdateAction = z.infer<typeof TestUpdateActionSchema>;\n"
        ));
        assert_eq!(output.matches("export type ").count(), 14);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let config = GeneratorConfig::new().actions(actions());
        let first = {
            let catalog = parse_sdl(SDL).expect("Failed to parse");
            Generator::new(&catalog, &config).generate().expect("generate")
        };
        let second = {
            let catalog = parse_sdl(SDL).expect("Failed to parse");
            Generator::new(&catalog, &config).generate().expect("generate")
        };
        assert_eq!(first, second);
    }

    #[test]
    fn test_validation_failure_aborts() {
        let catalog = parse_sdl("type A { b: Missing }").expect("Failed to parse");
        let config = GeneratorConfig::new();
        let result = Generator::new(&catalog, &config).build_schema_map();
        assert!(matches!(result, Err(CodegenError::Schema(_))));
    }

    #[test]
    fn test_skip_validation_falls_back() {
        let catalog = parse_sdl("type A { b: Missing }").expect("Failed to parse");
        let config = GeneratorConfig::new().validate(false);
        let output = Generator::new(&catalog, &config)
            .generate()
            .expect("generate");
        assert!(output.contains("  b: z.unknown(),\n"));
    }

    #[test]
    fn test_skip_validation_emits_loose_enums_and_unions() {
        let mut catalog = parse_sdl("enum E { X }\nunion U = E").expect("Failed to parse");
        catalog.add_type(zodgen_schema::TypeDef::Enum(zodgen_schema::EnumDef::new(
            "Empty",
            Vec::<String>::new(),
        )));

        let strict = GeneratorConfig::new();
        assert!(matches!(
            Generator::new(&catalog, &strict).build_schema_map(),
            Err(CodegenError::Schema(_))
        ));

        let loose = GeneratorConfig::new().validate(false);
        let output = Generator::new(&catalog, &loose)
            .generate()
            .expect("generate");
        assert!(output.contains(
            "export const USchema = z.union([\n  z.lazy(() => ESchema),\n]);\n"
        ));
        assert!(output.contains("export const EmptySchema = z.enum([]);\n"));
    }

    #[test]
    fn test_action_error_aborts_run() {
        let catalog = parse_sdl(SDL).expect("Failed to parse");
        let config = GeneratorConfig::new()
            .action(ActionDescriptor::new("test create", "test1", "TestOutputObject1"));
        let result = Generator::new(&catalog, &config).generate();
        assert!(matches!(result, Err(CodegenError::WrongInputKind { .. })));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out.ts");
        let catalog = parse_sdl(SDL).expect("Failed to parse");
        let config = GeneratorConfig::new().type_aliases(false);

        Generator::new(&catalog, &config)
            .write_to_file(&path)
            .expect("write");

        let written = std::fs::read_to_string(&path).expect("read back");
        assert!(written.contains("export const TestEnumSchema = z.enum(["));
        assert!(!written.contains("export type"));
    }

    #[test]
    fn test_write_nothing_on_failure() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out.ts");
        let catalog = parse_sdl(SDL).expect("Failed to parse");
        let config = GeneratorConfig::new().action(ActionDescriptor::new("x", "y", "Nope"));

        assert!(Generator::new(&catalog, &config).write_to_file(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_output_path_for() {
        assert_eq!(
            output_path_for(Path::new("schemas/document-drive.graphql")),
            PathBuf::from("schemas/document-drive-zod-schemas.ts")
        );
        assert_eq!(
            output_path_for(Path::new("schema")),
            PathBuf::from("schema-zod-schemas.ts")
        );
    }
}
