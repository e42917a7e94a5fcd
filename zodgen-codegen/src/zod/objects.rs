//! Object and input object translation.

use crate::error::CodegenError;
use crate::expr::{Expr, ObjectEntry};
use crate::schema_map::SchemaMap;
use crate::zod::fields::FieldTypeResolver;
use zodgen_schema::{ObjectDef, TypeCatalog, TypeId};

/// Translator for object and input object declarations.
pub struct ObjectTranslator<'a> {
    catalog: &'a TypeCatalog,
    fields: FieldTypeResolver<'a>,
}

impl<'a> ObjectTranslator<'a> {
    /// Creates a new object translator.
    #[must_use]
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        Self {
            catalog,
            fields: FieldTypeResolver::new(catalog),
        }
    }

    /// Appends one entry per object and input object, in declaration order.
    ///
    /// # Errors
    /// Returns `CodegenError` if an entry already exists.
    pub fn populate(&self, map: &mut SchemaMap) -> Result<(), CodegenError> {
        let mut count = 0;
        for (id, object) in self.catalog.objects() {
            map.insert(object.name.as_str(), self.translate(id, object))?;
            count += 1;
        }
        tracing::debug!("Translated {} object types", count);
        Ok(())
    }

    /// Translates one object declaration.
    ///
    /// Fields keep their declaration order and names. A field whose type
    /// refers back to the object itself becomes a getter.
    #[must_use]
    pub fn translate(&self, id: TypeId, object: &ObjectDef) -> Expr {
        let entries = object
            .fields
            .iter()
            .map(|field| {
                let translated = self.fields.translate(&field.shape, id);
                if translated.self_referential {
                    ObjectEntry::accessor(field.name.as_str(), translated.expr)
                } else {
                    ObjectEntry::property(field.name.as_str(), translated.expr)
                }
            })
            .collect();
        Expr::Object(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_expr;
    use zodgen_schema::parse_sdl;

    const SDL: &str = r#"
enum TestEnum { TEST_ENUM_VALUE_1 TEST_ENUM_VALUE_2 }
union TestUnion = TestOutputObject1
type TestOutputObject1 { nullable: String }
type TestOutputObject {
  nullableScalar: String
  nonNullableScalar: String!
  enumNonNullable: TestEnum!
  unionList: [TestUnion]
  object: TestOutputObject1
  recursive: TestOutputObject
}
input TestInputObject {
  zeta: Int!
  alpha: [[Float!]!]
  recursive: TestInputObject
}
"#;

    fn translate(catalog: &TypeCatalog, name: &str) -> Expr {
        let (id, type_def) = catalog.lookup(name).expect("type exists");
        let object = type_def.as_object().expect("object type");
        ObjectTranslator::new(catalog).translate(id, object)
    }

    #[test]
    fn test_translate_output_object() {
        let catalog = parse_sdl(SDL).expect("Failed to parse");
        let output = render_expr(&translate(&catalog, "TestOutputObject"));
        let expected = "\
z.object({
  nullableScalar: StringSchema.optional(),
  nonNullableScalar: StringSchema,
  enumNonNullable: TestEnumSchema,
  unionList: z.array(z.lazy(() => TestUnionSchema).optional()).optional(),
  object: TestOutputObject1Schema.optional(),
  get recursive() {
    return TestOutputObjectSchema.optional();
  },
})";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_field_order_is_declaration_order() {
        let catalog = parse_sdl(SDL).expect("Failed to parse");
        let Expr::Object(entries) = translate(&catalog, "TestInputObject") else {
            panic!("expected object expression");
        };
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha", "recursive"]);
        assert!(!entries[0].accessor);
        assert!(entries[2].accessor);
    }

    #[test]
    fn test_input_object_translated_like_object() {
        let catalog = parse_sdl(SDL).expect("Failed to parse");
        let output = render_expr(&translate(&catalog, "TestInputObject"));
        assert!(output.contains("zeta: IntSchema,"));
        assert!(output.contains("alpha: z.array(z.array(FloatSchema)).optional(),"));
        assert!(output.contains("return TestInputObjectSchema.optional();"));
    }

    #[test]
    fn test_populate_order() {
        let catalog = parse_sdl(SDL).expect("Failed to parse");
        let mut map = SchemaMap::new();
        ObjectTranslator::new(&catalog)
            .populate(&mut map)
            .expect("populate");
        assert_eq!(
            map.names().collect::<Vec<_>>(),
            ["TestOutputObject1", "TestOutputObject", "TestInputObject"]
        );
    }

    #[test]
    fn test_empty_object() {
        let mut catalog = TypeCatalog::new();
        let id = catalog.add_type(zodgen_schema::TypeDef::Object(ObjectDef::new("Empty")));
        let object = catalog.get(id).and_then(|t| t.as_object()).expect("object");
        let expr = ObjectTranslator::new(&catalog).translate(id, object);
        assert_eq!(render_expr(&expr), "z.object({})");
    }
}
