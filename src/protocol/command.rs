//! Command definitions
//!
//! Represents requests sent to the dictionary server.

use serde::{Deserialize, Serialize};

use super::WireValue;

/// Command types (the tag sent as the first frame of every request)
///
/// Serialized as its single-byte tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum CommandType {
    Find = 0x01,
    Add = 0x02,
    DeleteTerm = 0x03,
}

impl From<CommandType> for u8 {
    fn from(command_type: CommandType) -> u8 {
        command_type as u8
    }
}

impl TryFrom<u8> for CommandType {
    type Error = String;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0x01 => Ok(CommandType::Find),
            0x02 => Ok(CommandType::Add),
            0x03 => Ok(CommandType::DeleteTerm),
            _ => Err(format!("Unknown command type: 0x{:02x}", tag)),
        }
    }
}

/// A request for the server
///
/// Terms are expected to be normalized already
/// (see [`crate::dictionary::normalize_term`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up every definition of a term
    Find { term: String },

    /// Add a definition to a term
    Add { term: String, definition: String },

    /// Delete a term with all its definitions
    DeleteTerm { term: String },
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Find { .. } => CommandType::Find,
            Command::Add { .. } => CommandType::Add,
            Command::DeleteTerm { .. } => CommandType::DeleteTerm,
        }
    }

    /// The term this command is about
    pub fn term(&self) -> &str {
        match self {
            Command::Find { term }
            | Command::Add { term, .. }
            | Command::DeleteTerm { term } => term,
        }
    }

    /// Values of the request in wire order: tag, term, and for ADD the definition
    pub fn to_values(&self) -> Vec<WireValue> {
        let mut values = vec![
            WireValue::Command(self.command_type()),
            WireValue::Text(self.term().to_string()),
        ];
        if let Command::Add { definition, .. } = self {
            values.push(WireValue::Text(definition.clone()));
        }
        values
    }
}
