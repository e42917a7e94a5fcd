//! Error types for SDL ingestion and catalog validation.

use thiserror::Error;

/// Error type for SDL ingestion.
#[derive(Debug, Error)]
pub enum ParseError {
    /// GraphQL syntax error.
    #[error("GraphQL syntax error: {0}")]
    Syntax(#[from] async_graphql_parser::Error),

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (type, enum, etc.).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Type extensions are not merged into the catalog.
    #[error("unsupported type extension for '{name}' at line {line}")]
    UnsupportedExtension {
        /// Extended type name.
        name: String,
        /// Line of the extension.
        line: usize,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for catalog validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Type not found.
    #[error("unknown type '{type_name}' referenced in field '{owner}.{field}'")]
    UnknownType {
        /// Referenced type name.
        type_name: String,
        /// Type declaring the field.
        owner: String,
        /// Field name.
        field: String,
    },

    /// Union member not found or not an object.
    #[error("invalid member '{member}' in union '{union_name}': {reason}")]
    InvalidUnionMember {
        /// Union name.
        union_name: String,
        /// Member name.
        member: String,
        /// Why the member is rejected.
        reason: String,
    },

    /// Enum or union without members.
    #[error("{kind} '{name}' declares no members")]
    Empty {
        /// Kind of the type.
        kind: String,
        /// Type name.
        name: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

impl SchemaError {
    /// Creates an unknown type error.
    pub fn unknown_type(
        type_name: impl Into<String>,
        owner: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
            owner: owner.into(),
            field: field.into(),
        }
    }

    /// Creates a union member error.
    pub fn invalid_member(
        union_name: impl Into<String>,
        member: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidUnionMember {
            union_name: union_name.into(),
            member: member.into(),
            reason: reason.into(),
        }
    }
}
