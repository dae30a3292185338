//! Pagination cursor
//!
//! Tracks which definition of the active term is on display.

use super::{DefinitionCache, DefinitionSequence};

/// Position of the cursor within the active sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// No active term
    Empty,

    /// On the first definition (possibly also the only one)
    AtFirst,

    /// Strictly between the first and the last definition
    InMiddle,

    /// On the last definition of a sequence with more than one entry
    AtLast,
}

/// Navigation state over a cached sequence
///
/// The cursor holds a shared handle to the sequence owned by the cache;
/// it never copies or modifies it. Navigating past either end is a bug in
/// the caller and panics: front ends gate `advance`/`retreat` on
/// `has_next`/`has_previous`.
#[derive(Debug, Default)]
pub struct Cursor {
    /// Active term and its sequence
    active: Option<(String, DefinitionSequence)>,

    /// Current position, `None` when nothing is selected
    index: Option<usize>,
}

impl Cursor {
    /// Create an empty cursor
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the selection
    pub fn reset(&mut self) {
        self.active = None;
        self.index = None;
    }

    /// Point at the first definition of `term`
    ///
    /// Stays `Empty` when the term is not cached; the caller then shows the
    /// not-found message instead.
    pub fn start_over(&mut self, cache: &DefinitionCache, term: &str) -> CursorState {
        self.reset();

        if let Some(sequence) = cache.get(term) {
            self.active = Some((term.to_string(), sequence.clone()));
            self.index = Some(0);
        }

        self.state()
    }

    /// Current state, derived from the index and the sequence length
    pub fn state(&self) -> CursorState {
        match (&self.active, self.index) {
            (Some((_, sequence)), Some(index)) => {
                if index == 0 {
                    CursorState::AtFirst
                } else if index == sequence.len() - 1 {
                    CursorState::AtLast
                } else {
                    CursorState::InMiddle
                }
            }
            _ => CursorState::Empty,
        }
    }

    /// True if `advance` is allowed
    pub fn has_next(&self) -> bool {
        match (&self.active, self.index) {
            (Some((_, sequence)), Some(index)) => index + 1 < sequence.len(),
            _ => false,
        }
    }

    /// True if `retreat` is allowed
    pub fn has_previous(&self) -> bool {
        matches!(self.index, Some(index) if self.active.is_some() && index > 0)
    }

    /// Definition under the cursor
    pub fn current(&self) -> Option<&str> {
        let (_, sequence) = self.active.as_ref()?;
        sequence.get(self.index?)
    }

    /// Move to the next definition
    ///
    /// # Panics
    /// If `has_next()` is false.
    pub fn advance(&mut self) -> Option<&str> {
        assert!(
            self.has_next(),
            "Cursor::advance called in state {:?} with no next definition",
            self.state()
        );
        self.index = self.index.map(|index| index + 1);
        self.current()
    }

    /// Move to the previous definition
    ///
    /// # Panics
    /// If `has_previous()` is false.
    pub fn retreat(&mut self) -> Option<&str> {
        assert!(
            self.has_previous(),
            "Cursor::retreat called in state {:?} with no previous definition",
            self.state()
        );
        self.index = self.index.map(|index| index - 1);
        self.current()
    }

    /// Active term, if any
    pub fn term(&self) -> Option<&str> {
        self.active.as_ref().map(|(term, _)| term.as_str())
    }

    /// Current position, `None` when nothing is selected
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Number of definitions of the active term (0 when empty)
    pub fn len(&self) -> usize {
        self.active.as_ref().map_or(0, |(_, sequence)| sequence.len())
    }

    /// True when no term is active
    pub fn is_empty(&self) -> bool {
        self.active.is_none()
    }
}
