//! Wire values
//!
//! The unit carried by a single frame.
//!
//! Payloads use bincode's default layout: a 4-byte little-endian variant
//! index (0 = Command, 1 = Text, 2 = Null), then for `Command` the tag byte
//! and for `Text` an 8-byte length followed by the UTF-8 bytes.

use serde::{Deserialize, Serialize};

use super::CommandType;

/// One framed value on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireValue {
    /// Command tag, always the first value of a request
    Command(CommandType),

    /// A term or a definition
    Text(String),

    /// "No value": sent first by the server when a term has no definitions
    Null,
}

impl WireValue {
    /// Short name used in protocol error messages
    pub fn kind(&self) -> &'static str {
        match self {
            WireValue::Command(_) => "command",
            WireValue::Text(_) => "text",
            WireValue::Null => "null",
        }
    }
}
