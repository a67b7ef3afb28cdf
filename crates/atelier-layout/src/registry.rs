//! Registry for named span tables beyond the built-in set.

use indexmap::IndexMap;

use crate::pattern::{PatternName, PatternTable};

/// A registry of named span tables.
///
/// Pre-populated with the built-in patterns; callers add site-specific
/// tables under new names. Lookup follows the same fallback policy as the
/// built-in set: an unknown name resolves to the default pattern.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PatternRegistry {
    tables: IndexMap<String, PatternTable>,
}

impl PatternRegistry {
    /// Create a registry holding the built-in patterns.
    pub fn new() -> Self {
        let mut tables = IndexMap::new();
        for name in [
            PatternName::Dynamic,
            PatternName::Uniform,
            PatternName::Featured,
        ] {
            tables.insert(name.as_str().to_string(), name.table());
        }
        Self { tables }
    }

    /// Register a table under a name, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, table: PatternTable) {
        self.tables.insert(name.into(), table);
    }

    /// Get a table by name.
    pub fn get(&self, name: &str) -> Option<&PatternTable> {
        self.tables.get(name)
    }

    /// Get a table by name, falling back to the default pattern.
    pub fn get_or_default(&self, name: &str) -> &PatternTable {
        self.get(name).unwrap_or_else(|| {
            // The default table is inserted in `new` and never removed.
            &self.tables[PatternName::default().as_str()]
        })
    }

    /// Check whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(|s| s.as_str())
    }

    /// Number of registered tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}
