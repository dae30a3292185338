//! Protocol Module
//!
//! Defines the wire protocol between the client and the dictionary server.
//!
//! ## Protocol Format
//!
//! ### Frame Format
//! ```text
//! ┌──────────┬─────────────────────────────┐
//! │ Len (4)  │   bincode(WireValue)        │
//! └──────────┴─────────────────────────────┘
//! ```
//!
//! ### Command Tags
//! - 0x01: FIND        - then Text(term)
//! - 0x02: ADD         - then Text(term), Text(definition)
//! - 0x03: DELETE_TERM - then Text(term)
//!
//! ### Response (FIND)
//! - Null                    : term not found
//! - Text, Text, ... <close> : definitions, terminated by the server closing
//!
//! ADD and DELETE_TERM get no response at all.

mod command;
mod value;
mod codec;
mod stream;

pub use command::{Command, CommandType};
pub use value::WireValue;
pub use codec::{
    encode_value, decode_value, encode_command,
    read_value, write_value, read_command, write_command,
    LEN_SIZE, MAX_FRAME_SIZE,
};
pub use stream::{DefinitionStream, FindResponse, StreamEvent};
