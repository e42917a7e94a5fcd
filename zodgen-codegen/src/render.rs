//! TypeScript rendering of schema maps.

use crate::expr::{Expr, ObjectEntry, schema_name, strip_schema_suffix};
use crate::schema_map::SchemaMap;

const INDENT: &str = "  ";

/// Options for module rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Module specifier of the Zod import.
    pub zod_import: String,
    /// Append one inferred type alias per declaration.
    pub type_aliases: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            zod_import: "zod".to_string(),
            type_aliases: true,
        }
    }
}

/// Renders a complete TypeScript module.
///
/// Declarations follow the map's insertion order, each exported as
/// `<Name>Schema`, followed by the inferred type aliases.
#[must_use]
pub fn render_module(map: &SchemaMap, options: &RenderOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "import {{ z }} from {};\n\n",
        quote(&options.zod_import)
    ));

    for (name, expr) in map.iter() {
        output.push_str(&format!(
            "export const {} = {};\n\n",
            schema_name(name),
            render_expr(expr)
        ));
    }

    if options.type_aliases {
        for name in map.names() {
            output.push_str(&type_alias(&schema_name(name)));
        }
    }

    output
}

/// Derives the inferred type alias of an exported schema declaration.
#[must_use]
pub fn type_alias(declaration: &str) -> String {
    format!(
        "export type {} = z.infer<typeof {}>;\n",
        strip_schema_suffix(declaration),
        declaration
    )
}

/// Renders one expression at the top level.
#[must_use]
pub fn render_expr(expr: &Expr) -> String {
    let mut output = String::new();
    write_expr(&mut output, expr, 0);
    output
}

fn write_expr(output: &mut String, expr: &Expr, depth: usize) {
    match expr {
        Expr::Primitive(primitive) => output.push_str(primitive.constructor()),
        Expr::Ref(name) => output.push_str(&schema_name(name)),
        Expr::Lazy(inner) => {
            output.push_str("z.lazy(() => ");
            write_expr(output, inner, depth);
            output.push(')');
        }
        Expr::Optional(inner) => {
            write_expr(output, inner, depth);
            output.push_str(".optional()");
        }
        Expr::Array(inner) => {
            output.push_str("z.array(");
            write_expr(output, inner, depth);
            output.push(')');
        }
        Expr::Literal(value) => {
            output.push_str(&format!("z.literal({})", quote(value)));
        }
        Expr::Enum(values) => {
            output.push_str("z.enum([");
            write_list(output, values, depth, |output, value, _| {
                output.push_str(&quote(value));
            });
            output.push_str("])");
        }
        Expr::Union(options) => {
            output.push_str("z.union([");
            write_list(output, options, depth, |output, option, depth| {
                write_expr(output, option, depth);
            });
            output.push_str("])");
        }
        Expr::Object(entries) => {
            output.push_str("z.object({");
            write_list(output, entries, depth, write_entry);
            output.push_str("})");
        }
    }
}

/// Writes one item per line with trailing commas; empty lists stay inline.
fn write_list<T>(
    output: &mut String,
    items: &[T],
    depth: usize,
    write_item: impl Fn(&mut String, &T, usize),
) {
    if items.is_empty() {
        return;
    }
    output.push('\n');
    for item in items {
        push_indent(output, depth + 1);
        write_item(output, item, depth + 1);
        output.push_str(",\n");
    }
    push_indent(output, depth);
}

fn write_entry(output: &mut String, entry: &ObjectEntry, depth: usize) {
    let key = property_key(&entry.name);
    if entry.accessor {
        output.push_str(&format!("get {key}() {{\n"));
        push_indent(output, depth + 1);
        output.push_str("return ");
        write_expr(output, &entry.value, depth + 1);
        output.push_str(";\n");
        push_indent(output, depth);
        output.push('}');
    } else {
        output.push_str(&format!("{key}: "));
        write_expr(output, &entry.value, depth);
    }
}

fn push_indent(output: &mut String, depth: usize) {
    for _ in 0..depth {
        output.push_str(INDENT);
    }
}

/// Quotes a string as a JSON (and therefore TypeScript) string literal.
fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Returns the name as-is if it is a plain identifier, quoted otherwise.
fn property_key(name: &str) -> String {
    let mut chars = name.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        name.to_string()
    } else {
        quote(name)
    }
}
