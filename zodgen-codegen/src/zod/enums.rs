//! Enum and union translation.

use crate::error::CodegenError;
use crate::expr::Expr;
use crate::schema_map::SchemaMap;
use zodgen_schema::{EnumDef, TypeCatalog, UnionDef};

/// Translator for enum declarations.
pub struct EnumTranslator<'a> {
    catalog: &'a TypeCatalog,
}

impl<'a> EnumTranslator<'a> {
    /// Creates a new enum translator.
    #[must_use]
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        Self { catalog }
    }

    /// Appends one entry per enum, in declaration order.
    ///
    /// # Errors
    /// Returns `CodegenError` if an entry already exists.
    pub fn populate(&self, map: &mut SchemaMap) -> Result<(), CodegenError> {
        for enum_def in self.catalog.enums() {
            map.insert(enum_def.name.as_str(), Self::translate(enum_def))?;
        }
        Ok(())
    }

    /// Translates an enum into a closed enumeration of its value names.
    #[must_use]
    pub fn translate(enum_def: &EnumDef) -> Expr {
        Expr::Enum(enum_def.values.clone())
    }
}

/// Translator for union declarations.
pub struct UnionTranslator<'a> {
    catalog: &'a TypeCatalog,
}

impl<'a> UnionTranslator<'a> {
    /// Creates a new union translator.
    #[must_use]
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        Self { catalog }
    }

    /// Appends one entry per union, in declaration order.
    ///
    /// # Errors
    /// Returns `CodegenError` if an entry already exists.
    pub fn populate(&self, map: &mut SchemaMap) -> Result<(), CodegenError> {
        for union_def in self.catalog.unions() {
            map.insert(union_def.name.as_str(), Self::translate(union_def))?;
        }
        Ok(())
    }

    /// Translates a union into a disjunction of deferred member references.
    ///
    /// Members are always deferred: unions are emitted before the objects
    /// they reference.
    #[must_use]
    pub fn translate(union_def: &UnionDef) -> Expr {
        Expr::Union(
            union_def
                .members
                .iter()
                .map(|member| Expr::reference(member.as_str()).lazy())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_expr;
    use zodgen_schema::parse_sdl;

    #[test]
    fn test_enum_keeps_order() {
        let enum_def = EnumDef::new("Transmitter", ["Internal", "SwitchboardPush", "PullResponder"]);
        let Expr::Enum(values) = EnumTranslator::translate(&enum_def) else {
            panic!("expected enum expression");
        };
        assert_eq!(values, ["Internal", "SwitchboardPush", "PullResponder"]);
    }

    #[test]
    fn test_enum_does_not_dedup() {
        let enum_def = EnumDef::new("E", ["B", "A", "B"]);
        let output = render_expr(&EnumTranslator::translate(&enum_def));
        assert_eq!(output, "z.enum([\n  \"B\",\n  \"A\",\n  \"B\",\n])");
    }

    #[test]
    fn test_union_members_are_lazy() {
        let union_def = UnionDef::new("Node", ["FolderNode", "FileNode"]);
        let output = render_expr(&UnionTranslator::translate(&union_def));
        let expected = "\
z.union([
  z.lazy(() => FolderNodeSchema),
  z.lazy(() => FileNodeSchema),
])";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_populate_enums_and_unions() {
        let sdl = r#"
type A { id: ID }
enum Second { X }
union U = A
enum First { Y Z }
"#;
        let catalog = parse_sdl(sdl).expect("Failed to parse");
        let mut map = SchemaMap::new();
        EnumTranslator::new(&catalog)
            .populate(&mut map)
            .expect("enums");
        UnionTranslator::new(&catalog)
            .populate(&mut map)
            .expect("unions");
        assert_eq!(map.names().collect::<Vec<_>>(), ["Second", "First", "U"]);
    }
}
