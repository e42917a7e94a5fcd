//! Field type translation.
//!
//! Turns a [`TypeShape`] into the validator expression of a single field.
//! Nullability is carried downwards as a `required` flag: a `NonNull` layer
//! sets it, every other layer consumes it and resets it for its children.

use crate::expr::Expr;
use zodgen_schema::{TypeCatalog, TypeDef, TypeId, TypeShape};

/// Translated field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldExpr {
    /// Validator expression.
    pub expr: Expr,
    /// The expression refers back to the enclosing type and must be deferred.
    pub self_referential: bool,
}

/// Recursive translator from field type shapes to validator expressions.
#[derive(Debug, Clone, Copy)]
pub struct FieldTypeResolver<'a> {
    catalog: &'a TypeCatalog,
}

impl<'a> FieldTypeResolver<'a> {
    /// Creates a new resolver over a catalog.
    #[must_use]
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        Self { catalog }
    }

    /// Translates a field type declared on `enclosing`.
    #[must_use]
    pub fn translate(&self, shape: &TypeShape, enclosing: TypeId) -> FieldExpr {
        let mut self_referential = false;
        let expr = self.resolve(shape, enclosing, false, &mut self_referential);
        FieldExpr {
            expr,
            self_referential,
        }
    }

    fn resolve(
        &self,
        shape: &TypeShape,
        enclosing: TypeId,
        required: bool,
        self_referential: &mut bool,
    ) -> Expr {
        match shape {
            // Nested non-null layers (`T!!`) collapse into one.
            TypeShape::NonNull(inner) => self.resolve(inner, enclosing, true, self_referential),
            TypeShape::List(inner) => {
                let element = self.resolve(inner, enclosing, false, self_referential);
                with_presence(element.array(), required)
            }
            TypeShape::Named(name) => match self.resolve_named(name, enclosing, self_referential)
            {
                Some(expr) => with_presence(expr, required),
                None => Expr::unknown(),
            },
        }
    }

    /// Returns `None` for names that fall back to the permissive expression.
    fn resolve_named(
        &self,
        name: &str,
        enclosing: TypeId,
        self_referential: &mut bool,
    ) -> Option<Expr> {
        let Some((id, type_def)) = self.catalog.lookup(name) else {
            tracing::warn!("Unresolved type '{}', accepting any value", name);
            return None;
        };

        match type_def {
            TypeDef::Scalar(_) | TypeDef::Enum(_) => Some(Expr::reference(name)),
            // Union members may be declared after the union itself.
            TypeDef::Union(_) => Some(Expr::reference(name).lazy()),
            TypeDef::Object(_) | TypeDef::InputObject(_) => {
                if id == enclosing {
                    *self_referential = true;
                }
                Some(Expr::reference(name))
            }
            TypeDef::Unsupported(u) => {
                tracing::warn!("{} '{}' is not translated, accepting any value", u.keyword, name);
                None
            }
        }
    }
}

fn with_presence(expr: Expr, required: bool) -> Expr {
    if required { expr } else { expr.optional() }
}
