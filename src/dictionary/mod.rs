//! Dictionary Module
//!
//! Client-side state for resolved terms.
//!
//! ## Responsibilities
//! - Normalize terms before any cache or network operation
//! - Cache the definitions of every resolved term
//! - Page through the definitions of the active term
//!
//! ## Data Structure Choice
//! Definitions are stored once per term behind an `Arc<[String]>`; the
//! cursor holds another handle to the same slice plus an index.

mod sequence;
mod cache;
mod cursor;

pub use sequence::DefinitionSequence;
pub use cache::DefinitionCache;
pub use cursor::{Cursor, CursorState};

use crate::error::{JHelpError, Result};

/// Message shown when a term has no definitions
pub const NOT_FOUND_MESSAGE: &str = "Definition not found";

/// Lowercase a raw term, rejecting blank input
pub fn normalize_term(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(JHelpError::InvalidArgument(
            "Term can not be empty".to_string(),
        ));
    }
    Ok(raw.to_lowercase())
}
