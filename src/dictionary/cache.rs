//! Definition cache
//!
//! Per-term store of resolved definitions, consulted before the network.

use std::collections::HashMap;

use super::DefinitionSequence;

/// Cache of resolved terms
///
/// Keys are normalized terms. Entries keep insertion order and are never
/// replaced: once a term is resolved its sequence stays as it was for the
/// lifetime of the cache (unless explicitly invalidated).
#[derive(Debug, Default)]
pub struct DefinitionCache {
    /// Term -> position in `entries`
    index: HashMap<String, usize>,

    /// Entries in insertion order
    entries: Vec<(String, DefinitionSequence)>,
}

impl DefinitionCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the definitions of a term
    pub fn get(&self, term: &str) -> Option<&DefinitionSequence> {
        self.index.get(term).map(|&pos| &self.entries[pos].1)
    }

    /// Insert the definitions of a newly resolved term
    ///
    /// Returns false and leaves the cache untouched if the term is already
    /// cached.
    pub fn put(&mut self, term: impl Into<String>, sequence: DefinitionSequence) -> bool {
        let term = term.into();
        if self.index.contains_key(&term) {
            tracing::debug!("Term '{}' already cached, keeping existing entry", term);
            return false;
        }

        self.index.insert(term.clone(), self.entries.len());
        self.entries.push((term, sequence));
        true
    }

    /// Check whether a term is cached
    pub fn has(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    /// Drop a term so the next lookup goes back to the server
    ///
    /// Returns the removed sequence, if any.
    pub fn invalidate(&mut self, term: &str) -> Option<DefinitionSequence> {
        let pos = self.index.remove(term)?;
        let (_, sequence) = self.entries.remove(pos);

        // Shift positions of everything inserted after the removed entry
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }

        Some(sequence)
    }

    /// Number of cached terms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached terms in insertion order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(term, _)| term.as_str())
    }
}
