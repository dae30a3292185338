//! Client Module
//!
//! TCP client for the dictionary server.
//!
//! ## Architecture
//! - One connection per request: connect, send, read until close, release
//! - FIND decodes a streamed response; ADD / DELETE_TERM expect no reply
//! - Socket timeouts surface as `JHelpError::Timeout`

mod protocol_client;
mod connection;

pub use protocol_client::{Client, Lookup};
pub use connection::Connection;
