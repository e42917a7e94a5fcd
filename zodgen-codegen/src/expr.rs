//! Structured Zod validator expressions.
//!
//! Translators build [`Expr`] trees; [`crate::render`] turns them into
//! TypeScript source and [`crate::check`] evaluates them against JSON values.

/// Suffix appended to a type name to form its exported schema constant.
pub const SCHEMA_SUFFIX: &str = "Schema";

/// Returns the exported schema constant for a type name.
#[must_use]
pub fn schema_name(type_name: &str) -> String {
    format!("{type_name}{SCHEMA_SUFFIX}")
}

/// Strips the schema suffix from an exported constant name.
#[must_use]
pub fn strip_schema_suffix(name: &str) -> &str {
    name.strip_suffix(SCHEMA_SUFFIX).unwrap_or(name)
}

/// Zod primitive constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// `z.string()`
    String,
    /// `z.number()`
    Number,
    /// `z.boolean()`
    Boolean,
    /// `z.date()`
    Date,
    /// `z.json()`
    Json,
    /// `z.unknown()`
    Unknown,
}

impl Primitive {
    /// Returns the Zod constructor call.
    #[must_use]
    pub const fn constructor(self) -> &'static str {
        match self {
            Self::String => "z.string()",
            Self::Number => "z.number()",
            Self::Boolean => "z.boolean()",
            Self::Date => "z.date()",
            Self::Json => "z.json()",
            Self::Unknown => "z.unknown()",
        }
    }
}

/// Validator expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Primitive constructor.
    Primitive(Primitive),
    /// Reference to the named schema of a type (`<Name>Schema`).
    Ref(String),
    /// Deferred evaluation (`z.lazy(() => inner)`).
    Lazy(Box<Expr>),
    /// Optional wrapper (`inner.optional()`).
    Optional(Box<Expr>),
    /// Array constructor (`z.array(inner)`).
    Array(Box<Expr>),
    /// Closed string enumeration.
    Enum(Vec<String>),
    /// Ordered disjunction.
    Union(Vec<Expr>),
    /// Object with ordered entries.
    Object(Vec<ObjectEntry>),
    /// String literal.
    Literal(String),
}

impl Expr {
    /// The permissive fallback expression.
    #[must_use]
    pub const fn unknown() -> Self {
        Self::Primitive(Primitive::Unknown)
    }

    /// Reference to a type's named schema.
    #[must_use]
    pub fn reference(type_name: impl Into<String>) -> Self {
        Self::Ref(type_name.into())
    }

    /// String literal.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Wraps in a deferred accessor.
    #[must_use]
    pub fn lazy(self) -> Self {
        Self::Lazy(Box::new(self))
    }

    /// Appends the optional suffix.
    #[must_use]
    pub fn optional(self) -> Self {
        Self::Optional(Box::new(self))
    }

    /// Wraps in an array constructor.
    #[must_use]
    pub fn array(self) -> Self {
        Self::Array(Box::new(self))
    }
}

/// Entry of an object expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    /// Property name, kept verbatim.
    pub name: String,
    /// Property validator.
    pub value: Expr,
    /// Emit as a getter so the value is only built when first read.
    pub accessor: bool,
}

impl ObjectEntry {
    /// Creates a plain property entry.
    #[must_use]
    pub fn property(name: impl Into<String>, value: Expr) -> Self {
        Self {
            name: name.into(),
            value,
            accessor: false,
        }
    }

    /// Creates a getter entry.
    #[must_use]
    pub fn accessor(name: impl Into<String>, value: Expr) -> Self {
        Self {
            name: name.into(),
            value,
            accessor: true,
        }
    }
}
