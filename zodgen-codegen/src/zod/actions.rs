//! Action schema synthesis.
//!
//! An action schema tags the fields of an input object with two literal
//! discriminants:
//!
//! ```ts
//! export const CreateWidgetActionSchema = z.object({
//!   tag: z.literal("CREATE_WIDGET"),
//!   scope: z.literal("global"),
//!   input: z.object({ ... }),
//! });
//! ```
//!
//! The input object is inlined rather than referenced, so the action and the
//! named input schema carry separate copies of the same field validators.

use crate::error::CodegenError;
use crate::expr::{Expr, ObjectEntry};
use crate::schema_map::SchemaMap;
use crate::zod::objects::ObjectTranslator;
use heck::{ToShoutySnakeCase, ToUpperCamelCase};
use serde::{Deserialize, Serialize};
use std::fmt;
use zodgen_schema::{TypeCatalog, TypeDef};

/// Externally supplied description of one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Action verb, e.g. `"create widget"`.
    #[serde(alias = "type")]
    pub verb: String,
    /// Scope name, copied verbatim.
    pub scope: String,
    /// Name of the input object type.
    #[serde(alias = "input", alias = "inputNameOrDefinition")]
    pub input_type: String,
}

impl ActionDescriptor {
    /// Creates a new descriptor.
    #[must_use]
    pub fn new(
        verb: impl Into<String>,
        scope: impl Into<String>,
        input_type: impl Into<String>,
    ) -> Self {
        Self {
            verb: verb.into(),
            scope: scope.into(),
            input_type: input_type.into(),
        }
    }

    /// Parses `VERB:SCOPE:INPUT`.
    ///
    /// # Errors
    /// Returns `CodegenError::ActionConfig` if a part is missing or the
    /// descriptor fails [`ActionDescriptor::validate`].
    pub fn from_arg(arg: &str) -> Result<Self, CodegenError> {
        let mut parts = arg.splitn(3, ':').map(str::trim);
        let (Some(verb), Some(scope), Some(input)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(CodegenError::action_config(
                arg,
                "expected VERB:SCOPE:INPUT_TYPE",
            ));
        };
        let action = Self::new(verb, scope, input);
        action.validate()?;
        Ok(action)
    }

    /// Checks that every part is non-empty and that the verb yields a valid
    /// TypeScript identifier.
    ///
    /// # Errors
    /// Returns `CodegenError::ActionConfig` describing the first problem.
    pub fn validate(&self) -> Result<(), CodegenError> {
        let problem = if self.verb.trim().is_empty() {
            Some("verb is empty")
        } else if self.scope.trim().is_empty() {
            Some("scope is empty")
        } else if self.input_type.trim().is_empty() {
            Some("input type is empty")
        } else {
            let name = self.verb.to_upper_camel_case();
            match name.chars().next() {
                None => Some("verb has no identifier characters"),
                Some(c) if c.is_ascii_digit() => Some("verb must not start with a digit"),
                Some(_) => None,
            }
        };

        match problem {
            Some(message) => Err(CodegenError::action_config(self.to_string(), message)),
            None => Ok(()),
        }
    }

    /// Schema map key of the synthesized action (`create widget` →
    /// `CreateWidgetAction`).
    #[must_use]
    pub fn action_name(&self) -> String {
        format!("{}Action", self.verb.to_upper_camel_case())
    }

    /// Literal tag value (`create widget` → `CREATE_WIDGET`).
    #[must_use]
    pub fn tag_value(&self) -> String {
        self.verb.to_shouty_snake_case()
    }
}

impl fmt::Display for ActionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.verb, self.scope, self.input_type)
    }
}

/// Property names used in synthesized action schemas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionFields {
    /// Property holding the literal tag.
    pub tag: String,
    /// Property holding the literal scope.
    pub scope: String,
    /// Property holding the inlined input object.
    pub input: String,
}

impl Default for ActionFields {
    fn default() -> Self {
        Self {
            tag: "tag".to_string(),
            scope: "scope".to_string(),
            input: "input".to_string(),
        }
    }
}

/// Appends action schemas to a schema map.
pub struct ActionSynthesizer<'a> {
    catalog: &'a TypeCatalog,
    objects: ObjectTranslator<'a>,
    fields: &'a ActionFields,
}

impl<'a> ActionSynthesizer<'a> {
    /// Creates a new synthesizer.
    #[must_use]
    pub fn new(catalog: &'a TypeCatalog, fields: &'a ActionFields) -> Self {
        Self {
            catalog,
            objects: ObjectTranslator::new(catalog),
            fields,
        }
    }

    /// Synthesizes one action, returning its name and expression.
    ///
    /// # Errors
    /// Returns `CodegenError::ActionConfig` if the descriptor is malformed,
    /// `CodegenError::UnknownInputType` if the input type is not in the
    /// catalog, or `CodegenError::WrongInputKind` if it is not an input
    /// object.
    pub fn synthesize(&self, action: &ActionDescriptor) -> Result<(String, Expr), CodegenError> {
        action.validate()?;

        let (id, type_def) = self
            .catalog
            .lookup(&action.input_type)
            .ok_or_else(|| CodegenError::unknown_input(&action.verb, &action.input_type))?;

        let TypeDef::InputObject(input) = type_def else {
            return Err(CodegenError::wrong_kind(
                &action.verb,
                &action.input_type,
                type_def.kind(),
            ));
        };

        let expr = Expr::Object(vec![
            ObjectEntry::property(self.fields.tag.as_str(), Expr::literal(action.tag_value())),
            ObjectEntry::property(self.fields.scope.as_str(), Expr::literal(action.scope.as_str())),
            ObjectEntry::property(self.fields.input.as_str(), self.objects.translate(id, input)),
        ]);

        Ok((action.action_name(), expr))
    }

    /// Synthesizes every action and appends them in order.
    ///
    /// Nothing is appended unless every action succeeds.
    ///
    /// # Errors
    /// Returns the first synthesis error, or
    /// `CodegenError::ActionNameCollision` if a synthesized name is already
    /// in the map or produced twice.
    pub fn populate(
        &self,
        map: &mut SchemaMap,
        actions: &[ActionDescriptor],
    ) -> Result<(), CodegenError> {
        let mut staged: Vec<(String, Expr)> = Vec::with_capacity(actions.len());

        for action in actions {
            let (name, expr) = self.synthesize(action)?;
            if map.contains(&name) || staged.iter().any(|(staged_name, _)| *staged_name == name) {
                return Err(CodegenError::ActionNameCollision {
                    verb: action.verb.clone(),
                    name,
                });
            }
            tracing::debug!(
                "Synthesized action '{}' over input '{}'",
                name,
                action.input_type
            );
            staged.push((name, expr));
        }

        for (name, expr) in staged {
            map.insert(name, expr)?;
        }
        Ok(())
    }
}
