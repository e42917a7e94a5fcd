//! Type catalog definitions.
//!
//! This module contains the data structures representing the declared types
//! of a GraphQL SDL document: scalars, enums, unions, objects and input
//! objects, plus the recursive field type shapes that reference them.

use indexmap::IndexMap;
use std::fmt;

/// Scalars every GraphQL document has without declaring them.
pub const BUILTIN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

/// Stable handle of a type inside a [`TypeCatalog`].
///
/// Two handles are equal only if they point at the same catalog node, which
/// is what self-reference detection relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(usize);

impl TypeId {
    /// Returns the declaration index of the type.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Immutable, declaration-ordered collection of named types.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: IndexMap<String, TypeDef>,
}

impl TypeCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding only the built-in GraphQL scalars.
    #[must_use]
    pub fn with_builtin_scalars() -> Self {
        let mut catalog = Self::new();
        for name in BUILTIN_SCALARS {
            catalog.add_type(TypeDef::Scalar(ScalarDef::new(name)));
        }
        catalog
    }

    /// Adds a type definition to the catalog and returns its handle.
    ///
    /// Adding a name that already exists replaces the definition in place and
    /// keeps its original position.
    pub fn add_type(&mut self, type_def: TypeDef) -> TypeId {
        let name = type_def.name().to_string();
        let (index, _) = self.types.insert_full(name, type_def);
        TypeId(index)
    }

    /// Looks up a type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    /// Looks up a type and its handle by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<(TypeId, &TypeDef)> {
        self.types
            .get_full(name)
            .map(|(index, _, type_def)| (TypeId(index), type_def))
    }

    /// Returns the handle of the named type.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<TypeId> {
        self.types.get_index_of(name).map(TypeId)
    }

    /// Returns the type behind a handle.
    #[must_use]
    pub fn get(&self, id: TypeId) -> Option<&TypeDef> {
        self.types.get_index(id.0).map(|(_, type_def)| type_def)
    }

    /// Returns true if a type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Iterates over all types in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDef)> {
        self.types
            .values()
            .enumerate()
            .map(|(index, type_def)| (TypeId(index), type_def))
    }

    /// Iterates over scalar declarations in declaration order.
    pub fn scalars(&self) -> impl Iterator<Item = &ScalarDef> {
        self.types.values().filter_map(|t| match t {
            TypeDef::Scalar(s) => Some(s),
            _ => None,
        })
    }

    /// Iterates over enum declarations in declaration order.
    pub fn enums(&self) -> impl Iterator<Item = &EnumDef> {
        self.types.values().filter_map(|t| match t {
            TypeDef::Enum(e) => Some(e),
            _ => None,
        })
    }

    /// Iterates over union declarations in declaration order.
    pub fn unions(&self) -> impl Iterator<Item = &UnionDef> {
        self.types.values().filter_map(|t| match t {
            TypeDef::Union(u) => Some(u),
            _ => None,
        })
    }

    /// Iterates over object and input object declarations, interleaved in
    /// declaration order.
    pub fn objects(&self) -> impl Iterator<Item = (TypeId, &ObjectDef)> {
        self.iter().filter_map(|(id, t)| match t {
            TypeDef::Object(o) | TypeDef::InputObject(o) => Some((id, o)),
            _ => None,
        })
    }

    /// Number of types in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the catalog holds no types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Kind of a named type, without its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Scalar type.
    Scalar,
    /// Enum type.
    Enum,
    /// Union type.
    Union,
    /// Output object type.
    Object,
    /// Input object type.
    InputObject,
    /// A kind the generator does not translate (interfaces).
    Unsupported,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scalar => "scalar",
            Self::Enum => "enum",
            Self::Union => "union",
            Self::Object => "object",
            Self::InputObject => "input object",
            Self::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// Type definition variants.
#[derive(Debug, Clone)]
pub enum TypeDef {
    /// Scalar type definition.
    Scalar(ScalarDef),
    /// Enum type definition.
    Enum(EnumDef),
    /// Union type definition.
    Union(UnionDef),
    /// Object type definition.
    Object(ObjectDef),
    /// Input object type definition.
    InputObject(ObjectDef),
    /// Declared but untranslated type (interface).
    Unsupported(UnsupportedDef),
}

impl TypeDef {
    /// Returns the name of the type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(s) => &s.name,
            Self::Enum(e) => &e.name,
            Self::Union(u) => &u.name,
            Self::Object(o) | Self::InputObject(o) => &o.name,
            Self::Unsupported(u) => &u.name,
        }
    }

    /// Returns the kind of the type.
    #[must_use]
    pub const fn kind(&self) -> TypeKind {
        match self {
            Self::Scalar(_) => TypeKind::Scalar,
            Self::Enum(_) => TypeKind::Enum,
            Self::Union(_) => TypeKind::Union,
            Self::Object(_) => TypeKind::Object,
            Self::InputObject(_) => TypeKind::InputObject,
            Self::Unsupported(_) => TypeKind::Unsupported,
        }
    }

    /// Returns the fields if this is an object or input object.
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectDef> {
        match self {
            Self::Object(o) | Self::InputObject(o) => Some(o),
            _ => None,
        }
    }
}

/// Scalar type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarDef {
    /// Type name.
    pub name: String,
}

impl ScalarDef {
    /// Creates a new scalar definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Enum type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    /// Type name.
    pub name: String,
    /// Value names in declaration order.
    pub values: Vec<String>,
}

impl EnumDef {
    /// Creates a new enum definition.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Union type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionDef {
    /// Type name.
    pub name: String,
    /// Member type names in declaration order.
    pub members: Vec<String>,
}

impl UnionDef {
    /// Creates a new union definition.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// Object or input object definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDef {
    /// Type name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

impl ObjectDef {
    /// Creates an object definition without fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field declared on this type.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, shape: TypeShape) -> Self {
        let field = Field {
            name: name.into(),
            shape,
            declaring_type: self.name.clone(),
        };
        self.fields.push(field);
        self
    }
}

/// Field of an object or input object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name, kept verbatim.
    pub name: String,
    /// Field type shape.
    pub shape: TypeShape,
    /// Name of the type declaring the field.
    pub declaring_type: String,
}

/// Declared type the generator does not translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedDef {
    /// Type name.
    pub name: String,
    /// SDL keyword of the declaration (e.g. `interface`).
    pub keyword: String,
}

/// Recursive field type shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeShape {
    /// Non-null wrapper (`T!`).
    NonNull(Box<TypeShape>),
    /// List wrapper (`[T]`).
    List(Box<TypeShape>),
    /// Reference to a named type.
    Named(String),
}

impl TypeShape {
    /// Creates a named reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps a shape in a list.
    #[must_use]
    pub fn list(inner: Self) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wraps a shape in a non-null marker.
    #[must_use]
    pub fn non_null(inner: Self) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// Returns true if the outermost layer is non-null.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Returns the named type at the bottom of the wrappers.
    #[must_use]
    pub fn base_name(&self) -> &str {
        match self {
            Self::NonNull(inner) | Self::List(inner) => inner.base_name(),
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonNull(inner) => write!(f, "{inner}!"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(name) => f.write_str(name),
        }
    }
}
