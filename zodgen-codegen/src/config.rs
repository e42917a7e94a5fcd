//! Generator configuration.

use crate::error::CodegenError;
use crate::render::RenderOptions;
use crate::zod::actions::{ActionDescriptor, ActionFields};
use std::path::Path;

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    actions: Vec<ActionDescriptor>,
    action_fields: ActionFields,
    render: RenderOptions,
    validate: bool,
}

impl GeneratorConfig {
    /// Creates a configuration with default settings and no actions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            action_fields: ActionFields::default(),
            render: RenderOptions::default(),
            validate: true,
        }
    }

    /// Adds an action descriptor.
    #[must_use]
    pub fn action(mut self, action: ActionDescriptor) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds several action descriptors, keeping their order.
    #[must_use]
    pub fn actions(mut self, actions: impl IntoIterator<Item = ActionDescriptor>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Sets the property name of the action tag literal.
    #[must_use]
    pub fn tag_field(mut self, name: impl Into<String>) -> Self {
        self.action_fields.tag = name.into();
        self
    }

    /// Sets the property name of the action scope literal.
    #[must_use]
    pub fn scope_field(mut self, name: impl Into<String>) -> Self {
        self.action_fields.scope = name.into();
        self
    }

    /// Sets the property name of the inlined action input.
    #[must_use]
    pub fn input_field(mut self, name: impl Into<String>) -> Self {
        self.action_fields.input = name.into();
        self
    }

    /// Sets the module specifier of the Zod import.
    #[must_use]
    pub fn zod_import(mut self, specifier: impl Into<String>) -> Self {
        self.render.zod_import = specifier.into();
        self
    }

    /// Enables or disables the inferred type aliases.
    #[must_use]
    pub fn type_aliases(mut self, enabled: bool) -> Self {
        self.render.type_aliases = enabled;
        self
    }

    /// Enables or disables catalog validation before generation.
    #[must_use]
    pub fn validate(mut self, enabled: bool) -> Self {
        self.validate = enabled;
        self
    }

    /// Returns the configured actions.
    #[must_use]
    pub fn action_list(&self) -> &[ActionDescriptor] {
        &self.actions
    }

    /// Returns the action property names.
    #[must_use]
    pub fn action_fields(&self) -> &ActionFields {
        &self.action_fields
    }

    /// Returns the render options.
    #[must_use]
    pub fn render_options(&self) -> &RenderOptions {
        &self.render
    }

    /// Returns true if the catalog is validated before generation.
    #[must_use]
    pub fn validates(&self) -> bool {
        self.validate
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads action descriptors from a JSON file holding an array of
/// `{ "verb", "scope", "input_type" }` objects.
///
/// # Errors
/// Returns `CodegenError` if the file cannot be read or decoded, or if a
/// descriptor fails [`ActionDescriptor::validate`].
pub fn load_actions(path: &Path) -> Result<Vec<ActionDescriptor>, CodegenError> {
    let content = std::fs::read_to_string(path)?;
    let actions: Vec<ActionDescriptor> = serde_json::from_str(&content)?;
    for action in &actions {
        action.validate()?;
    }
    tracing::debug!("Loaded {} actions from {}", actions.len(), path.display());
    Ok(actions)
}
