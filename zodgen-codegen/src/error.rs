//! Error types for code generation.

use thiserror::Error;
use zodgen_schema::TypeKind;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// SDL parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] zodgen_schema::ParseError),

    /// Catalog validation error.
    #[error("schema error: {0}")]
    Schema(#[from] zodgen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Action list could not be decoded.
    #[error("invalid action list: {0}")]
    ActionFile(#[from] serde_json::Error),

    /// Malformed action descriptor.
    #[error("invalid action descriptor '{input}': {message}")]
    ActionConfig {
        /// Descriptor text.
        input: String,
        /// Error message.
        message: String,
    },

    /// Action references a type missing from the catalog.
    #[error("action '{verb}' references unknown input type '{type_name}'")]
    UnknownInputType {
        /// Action verb.
        verb: String,
        /// Referenced type name.
        type_name: String,
    },

    /// Action references a type that is not an input object.
    #[error("action '{verb}' references '{type_name}', which is a {kind}, not an input object")]
    WrongInputKind {
        /// Action verb.
        verb: String,
        /// Referenced type name.
        type_name: String,
        /// Actual kind of the type.
        kind: TypeKind,
    },

    /// Synthesized action name is already taken.
    #[error("action '{verb}' would register '{name}', which already exists")]
    ActionNameCollision {
        /// Action verb.
        verb: String,
        /// Colliding schema map key.
        name: String,
    },

    /// Schema map key inserted twice.
    #[error("duplicate schema entry '{name}'")]
    DuplicateEntry {
        /// Entry name.
        name: String,
    },
}

impl CodegenError {
    /// Creates an unknown input type error.
    pub fn unknown_input(verb: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnknownInputType {
            verb: verb.into(),
            type_name: type_name.into(),
        }
    }

    /// Creates a wrong input kind error.
    pub fn wrong_kind(verb: impl Into<String>, type_name: impl Into<String>, kind: TypeKind) -> Self {
        Self::WrongInputKind {
            verb: verb.into(),
            type_name: type_name.into(),
            kind,
        }
    }

    /// Creates an action descriptor error.
    pub fn action_config(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ActionConfig {
            input: input.into(),
            message: message.into(),
        }
    }
}
