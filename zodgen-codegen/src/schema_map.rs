//! Ordered schema map.

use crate::error::CodegenError;
use crate::expr::Expr;
use indexmap::IndexMap;
use indexmap::map::Entry;

/// Ordered mapping from type name to validator expression.
///
/// Insertion order is output order. Entries are append-only: inserting an
/// existing name is an error rather than an overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaMap {
    entries: IndexMap<String, Expr>,
}

impl SchemaMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    ///
    /// # Errors
    /// Returns `CodegenError::DuplicateEntry` if the name is already present.
    pub fn insert(&mut self, name: impl Into<String>, expr: Expr) -> Result<(), CodegenError> {
        match self.entries.entry(name.into()) {
            Entry::Occupied(entry) => Err(CodegenError::DuplicateEntry {
                name: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(expr);
                Ok(())
            }
        }
    }

    /// Looks up an entry by type name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Expr> {
        self.entries.get(name)
    }

    /// Returns true if the name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Expr)> {
        self.entries.iter().map(|(name, expr)| (name.as_str(), expr))
    }

    /// Iterates over names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
