//! Session Module
//!
//! The state of one running client: protocol client, cache and cursor.
//!
//! ## Responsibilities
//! - Serve FIND from the cache when possible, from the server otherwise
//! - Reset the cursor on every FIND and place it on the first definition
//! - Validate ADD / DELETE input before touching the network
//!
//! Each session owns its state; independent sessions never share a cache.

use crate::client::{Client, Lookup};
use crate::config::Config;
use crate::dictionary::{normalize_term, Cursor, DefinitionCache};
use crate::error::{JHelpError, Result};

/// Confirmation shown after a successful ADD
pub const ADD_CONFIRMATION: &str =
    "Successfully added new definition. Restart server to commit changes";

/// Confirmation shown after a successful DELETE
pub const DELETE_CONFIRMATION: &str = "Term successfully deleted. Restart server to commit changes";

/// One client session
///
/// Methods take `&mut self`: a session serves one user action at a time.
pub struct Session {
    client: Client,
    cache: DefinitionCache,
    cursor: Cursor,
    invalidate_on_write: bool,
}

impl Session {
    /// Create a session with an empty cache
    pub fn new(config: Config) -> Self {
        let invalidate_on_write = config.invalidate_on_write;
        Self {
            client: Client::new(config),
            cache: DefinitionCache::new(),
            cursor: Cursor::new(),
            invalidate_on_write,
        }
    }

    /// Create a session after checking the config
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Look up a term and put the cursor on its first definition
    ///
    /// Steps:
    /// 1. Reset the cursor (even for cached terms)
    /// 2. Normalize the term
    /// 3. Serve from cache, or FIND on the server and cache the result
    /// 4. Start the cursor over the cached sequence
    ///
    /// On error the cache is left as it was and the cursor stays empty.
    pub fn find(&mut self, raw_term: &str) -> Result<Lookup> {
        self.cursor.reset();
        let term = normalize_term(raw_term)?;

        if let Some(sequence) = self.cache.get(&term) {
            tracing::debug!("Cache hit for '{}'", term);
            let lookup = Lookup::Found(sequence.clone());
            self.cursor.start_over(&self.cache, &term);
            return Ok(lookup);
        }

        let lookup = self.client.lookup(&term)?;
        if let Lookup::Found(sequence) = &lookup {
            self.cache.put(term.clone(), sequence.clone());
            self.cursor.start_over(&self.cache, &term);
        }

        Ok(lookup)
    }

    /// Send a new definition for a term
    pub fn add(&mut self, raw_term: &str, definition: &str) -> Result<()> {
        let term_blank = raw_term.trim().is_empty();
        let definition_blank = definition.trim().is_empty();

        let problem = match (term_blank, definition_blank) {
            (true, true) => Some("Nothing to add"),
            (true, false) => Some("Term can not be empty"),
            (false, true) => Some("Definition can not be empty"),
            (false, false) => None,
        };
        if let Some(problem) = problem {
            return Err(JHelpError::InvalidArgument(problem.to_string()));
        }

        let term = normalize_term(raw_term)?;
        self.client.submit_add(&term, definition)?;
        self.after_write(&term);
        Ok(())
    }

    /// Ask the server to delete a term
    pub fn delete(&mut self, raw_term: &str) -> Result<()> {
        let term = normalize_term(raw_term)?;
        self.client.submit_delete(&term)?;
        self.after_write(&term);
        Ok(())
    }

    fn after_write(&mut self, term: &str) {
        if !self.invalidate_on_write {
            return;
        }
        if self.cache.invalidate(term).is_some() {
            tracing::debug!("Invalidated cached definitions of '{}'", term);
            if self.cursor.term() == Some(term) {
                self.cursor.reset();
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Cursor over the active term
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Mutable cursor, for `advance` / `retreat`
    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    /// Cache of resolved terms
    pub fn cache(&self) -> &DefinitionCache {
        &self.cache
    }

    /// Underlying protocol client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Connections opened by this session
    pub fn round_trips(&self) -> u64 {
        self.client.round_trips()
    }
}
