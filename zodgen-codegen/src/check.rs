//! Reference evaluation of generated validators.
//!
//! [`Checker`] interprets an [`Expr`] the way Zod would parse a JSON value,
//! resolving schema references through the [`SchemaMap`] only when a value
//! actually reaches them. Recursive schemas therefore terminate on any finite
//! value.
//!
//! Deviations from Zod that follow from JSON input: `z.date()` accepts
//! RFC 3339 strings, and an absent property plays the role of `undefined`.
//!
//! A chain of references that never reaches a value (`union U = U` in an
//! unvalidated catalog) is cut after [`MAX_REFERENCE_HOPS`] resolutions and
//! reported as [`CheckError::ReferenceCycle`].

use crate::expr::{Expr, ObjectEntry, Primitive};
use crate::schema_map::SchemaMap;
use serde_json::Value;
use thiserror::Error;

/// Schema references resolved in a row, at one value, before giving up.
pub const MAX_REFERENCE_HOPS: usize = 64;

/// Error returned when a value does not satisfy a validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// Required value is absent.
    #[error("{path}: required")]
    Missing {
        /// Location of the value.
        path: String,
    },

    /// Value has the wrong JSON type.
    #[error("{path}: expected {expected}")]
    TypeMismatch {
        /// Location of the value.
        path: String,
        /// Expected type.
        expected: &'static str,
    },

    /// String is not one of the enum values.
    #[error("{path}: '{value}' is not an allowed value")]
    InvalidEnumValue {
        /// Location of the value.
        path: String,
        /// Offending value.
        value: String,
    },

    /// String differs from the literal.
    #[error("{path}: expected literal \"{expected}\"")]
    LiteralMismatch {
        /// Location of the value.
        path: String,
        /// Expected literal.
        expected: String,
    },

    /// No union option accepted the value.
    #[error("{path}: no union member matched")]
    NoUnionMatch {
        /// Location of the value.
        path: String,
    },

    /// References loop without ever reaching the value.
    #[error("{path}: reference cycle through schema '{name}'")]
    ReferenceCycle {
        /// Location of the value.
        path: String,
        /// Schema at which the chain was cut.
        name: String,
    },

    /// Reference to a schema missing from the map.
    #[error("{path}: unresolved schema '{name}'")]
    UnresolvedReference {
        /// Location of the value.
        path: String,
        /// Referenced type name.
        name: String,
    },
}

/// Evaluates expressions against JSON values.
#[derive(Debug, Clone, Copy)]
pub struct Checker<'a> {
    map: &'a SchemaMap,
}

impl<'a> Checker<'a> {
    /// Creates a checker resolving references through `map`.
    #[must_use]
    pub fn new(map: &'a SchemaMap) -> Self {
        Self { map }
    }

    /// Checks a value against the named schema.
    ///
    /// # Errors
    /// Returns the first `CheckError` encountered.
    pub fn check_named(&self, name: &str, value: &Value) -> Result<(), CheckError> {
        self.check(&Expr::reference(name), value)
    }

    /// Checks a value against an expression.
    ///
    /// # Errors
    /// Returns the first `CheckError` encountered.
    pub fn check(&self, expr: &Expr, value: &Value) -> Result<(), CheckError> {
        self.check_at(expr, Some(value), "$", 0)
    }

    /// `hops` counts references resolved since the last step into a child
    /// value.
    fn check_at(
        &self,
        expr: &Expr,
        value: Option<&Value>,
        path: &str,
        hops: usize,
    ) -> Result<(), CheckError> {
        match expr {
            Expr::Optional(inner) => match value {
                None => Ok(()),
                Some(value) => self.check_at(inner, Some(value), path, hops),
            },
            Expr::Primitive(Primitive::Unknown) => Ok(()),
            Expr::Ref(name) => {
                let resolved =
                    self.map
                        .get(name)
                        .ok_or_else(|| CheckError::UnresolvedReference {
                            path: path.to_string(),
                            name: name.clone(),
                        })?;
                if hops >= MAX_REFERENCE_HOPS {
                    return Err(CheckError::ReferenceCycle {
                        path: path.to_string(),
                        name: name.clone(),
                    });
                }
                self.check_at(resolved, value, path, hops + 1)
            }
            Expr::Lazy(inner) => self.check_at(inner, value, path, hops),
            _ => {
                let value = value.ok_or_else(|| CheckError::Missing {
                    path: path.to_string(),
                })?;
                self.check_present(expr, value, path, hops)
            }
        }
    }

    fn check_present(
        &self,
        expr: &Expr,
        value: &Value,
        path: &str,
        hops: usize,
    ) -> Result<(), CheckError> {
        let mismatch = |expected| CheckError::TypeMismatch {
            path: path.to_string(),
            expected,
        };

        match expr {
            Expr::Primitive(primitive) => check_primitive(*primitive, value, path),
            Expr::Array(element) => {
                let items = value.as_array().ok_or_else(|| mismatch("array"))?;
                for (index, item) in items.iter().enumerate() {
                    self.check_at(element, Some(item), &format!("{path}[{index}]"), 0)?;
                }
                Ok(())
            }
            Expr::Enum(values) => {
                let s = value.as_str().ok_or_else(|| mismatch("string"))?;
                if values.iter().any(|v| v == s) {
                    Ok(())
                } else {
                    Err(CheckError::InvalidEnumValue {
                        path: path.to_string(),
                        value: s.to_string(),
                    })
                }
            }
            Expr::Literal(expected) => match value.as_str() {
                Some(s) if s == expected => Ok(()),
                _ => Err(CheckError::LiteralMismatch {
                    path: path.to_string(),
                    expected: expected.clone(),
                }),
            },
            Expr::Union(options) => {
                for option in options {
                    match self.check_at(option, Some(value), path, hops) {
                        Ok(()) => return Ok(()),
                        // A cycle fails every option the same way.
                        Err(cycle @ CheckError::ReferenceCycle { .. }) => return Err(cycle),
                        Err(_) => {}
                    }
                }
                Err(CheckError::NoUnionMatch {
                    path: path.to_string(),
                })
            }
            Expr::Object(entries) => {
                let object = value.as_object().ok_or_else(|| mismatch("object"))?;
                entries
                    .iter()
                    .try_for_each(|ObjectEntry { name, value: field, .. }| {
                        self.check_at(field, object.get(name), &format!("{path}.{name}"), 0)
                    })
            }
            Expr::Optional(_) | Expr::Ref(_) | Expr::Lazy(_) => {
                self.check_at(expr, Some(value), path, hops)
            }
        }
    }
}

fn check_primitive(primitive: Primitive, value: &Value, path: &str) -> Result<(), CheckError> {
    let matches = match primitive {
        Primitive::String => value.is_string(),
        Primitive::Number => value.is_number(),
        Primitive::Boolean => value.is_boolean(),
        Primitive::Date => value
            .as_str()
            .is_some_and(|s| chrono::DateTime::parse_from_rfc3339(s).is_ok()),
        Primitive::Json | Primitive::Unknown => true,
    };

    if matches {
        Ok(())
    } else {
        let expected = match primitive {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::Date => "RFC 3339 date",
            Primitive::Json | Primitive::Unknown => "any value",
        };
        Err(CheckError::TypeMismatch {
            path: path.to_string(),
            expected,
        })
    }
}
