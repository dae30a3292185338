//! Definition sequence
//!
//! Immutable, shared list of the definitions of one term.

use std::ops::Index;
use std::sync::Arc;

/// Ordered, non-empty list of definitions
///
/// Cloning shares the underlying storage, so the cache and the cursor see
/// the same list without copying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionSequence {
    definitions: Arc<[String]>,
}

impl DefinitionSequence {
    /// Build a sequence, or `None` if there are no definitions
    pub fn new(definitions: Vec<String>) -> Option<Self> {
        if definitions.is_empty() {
            return None;
        }
        Some(Self {
            definitions: definitions.into(),
        })
    }

    /// Number of definitions (always >= 1)
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Always false; kept for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definition at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.definitions.get(index).map(String::as_str)
    }

    /// First definition
    pub fn first(&self) -> &str {
        &self.definitions[0]
    }

    /// Last definition
    pub fn last(&self) -> &str {
        &self.definitions[self.definitions.len() - 1]
    }

    /// Iterate in received order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(String::as_str)
    }

    /// True if both handles point at the same storage
    pub fn shares_storage(&self, other: &DefinitionSequence) -> bool {
        Arc::ptr_eq(&self.definitions, &other.definitions)
    }

    /// Copy out as owned strings
    pub fn to_vec(&self) -> Vec<String> {
        self.definitions.to_vec()
    }
}

impl Index<usize> for DefinitionSequence {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.definitions[index]
    }
}
