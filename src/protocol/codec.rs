//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! Every value travels as one frame:
//! ```text
//! ┌──────────┬─────────────────────────────┐
//! │ Len (4)  │   bincode(WireValue)        │
//! └──────────┴─────────────────────────────┘
//! ```
//!
//! ### Request
//! - FIND:        Command(Find)       + Text(term)
//! - ADD:         Command(Add)        + Text(term) + Text(definition)
//! - DELETE_TERM: Command(DeleteTerm) + Text(term)
//!
//! ### Response (FIND only)
//! - `Null`, then close                      => not found
//! - `Text` x N (N >= 1), then close         => N definitions
//!
//! The end of a response is the server closing the connection, so a clean
//! end-of-stream is only accepted on a frame boundary.

use std::io::{ErrorKind, Read, Write};

use crate::error::{JHelpError, Result};
use super::{Command, WireValue};

/// Length prefix size: 4 bytes big-endian
pub const LEN_SIZE: usize = 4;

/// Hard upper bound on any frame payload (16 MB)
pub const MAX_FRAME_SIZE: usize = 16 * 1024 * 1024;

// =============================================================================
// Value Encoding/Decoding
// =============================================================================

/// Encode a value to a single frame
///
/// Format: payload_len (4) + payload
pub fn encode_value(value: &WireValue) -> Result<Vec<u8>> {
    let payload = bincode::serialize(value)?;

    if payload.len() > MAX_FRAME_SIZE {
        return Err(JHelpError::FrameTooLarge {
            size: payload.len(),
            max: MAX_FRAME_SIZE,
        });
    }

    let mut frame = Vec::with_capacity(LEN_SIZE + payload.len());
    frame.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    frame.extend_from_slice(&payload);

    Ok(frame)
}

/// Decode one frame from the front of `bytes`
///
/// Returns the value and the number of bytes consumed
pub fn decode_value(bytes: &[u8]) -> Result<(WireValue, usize)> {
    if bytes.len() < LEN_SIZE {
        return Err(JHelpError::Protocol(format!(
            "Incomplete frame header: expected {} bytes, got {}",
            LEN_SIZE,
            bytes.len()
        )));
    }

    let payload_len = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
    check_frame_size(payload_len, MAX_FRAME_SIZE)?;

    let total_len = LEN_SIZE + payload_len;
    if bytes.len() < total_len {
        return Err(JHelpError::Protocol(format!(
            "Incomplete frame payload: expected {} bytes, got {}",
            payload_len,
            bytes.len() - LEN_SIZE
        )));
    }

    let value = bincode::deserialize(&bytes[LEN_SIZE..total_len])?;
    Ok((value, total_len))
}

/// Encode a whole request (all of its frames, back to back)
pub fn encode_command(command: &Command) -> Result<Vec<u8>> {
    let mut message = Vec::new();
    for value in command.to_values() {
        message.extend_from_slice(&encode_value(&value)?);
    }
    Ok(message)
}

fn check_frame_size(size: usize, max: usize) -> Result<()> {
    if size > max {
        return Err(JHelpError::FrameTooLarge { size, max });
    }
    Ok(())
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read the next value from a stream
///
/// Returns `Ok(None)` when the peer closed the connection cleanly between
/// two frames. A close in the middle of a frame is a protocol error.
pub fn read_value<R: Read>(reader: &mut R, max_frame_size: usize) -> Result<Option<WireValue>> {
    // Read header, distinguishing "closed before any byte" from a short read
    let mut header = [0u8; LEN_SIZE];
    let mut filled = 0;
    while filled < LEN_SIZE {
        match reader.read(&mut header[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => {
                return Err(JHelpError::Protocol(format!(
                    "Connection closed inside frame header ({} of {} bytes)",
                    filled, LEN_SIZE
                )))
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    let payload_len = u32::from_be_bytes(header) as usize;
    check_frame_size(payload_len, max_frame_size.min(MAX_FRAME_SIZE))?;

    let mut payload = vec![0u8; payload_len];
    if let Err(e) = reader.read_exact(&mut payload) {
        if e.kind() == ErrorKind::UnexpectedEof {
            return Err(JHelpError::Protocol(format!(
                "Connection closed inside frame payload (expected {} bytes)",
                payload_len
            )));
        }
        return Err(e.into());
    }

    let value: WireValue = bincode::deserialize(&payload)?;
    tracing::trace!("Read {} frame ({} bytes)", value.kind(), payload_len);

    Ok(Some(value))
}

/// Write a single value to a stream and flush it
pub fn write_value<W: Write>(writer: &mut W, value: &WireValue) -> Result<()> {
    let frame = encode_value(value)?;
    writer.write_all(&frame)?;
    writer.flush()?;
    Ok(())
}

/// Write a request to a stream
///
/// All frames are written before a single flush.
pub fn write_command<W: Write>(writer: &mut W, command: &Command) -> Result<()> {
    let bytes = encode_command(command)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    tracing::trace!("Wrote {:?} request ({} bytes)", command.command_type(), bytes.len());
    Ok(())
}

/// Read a complete request from a stream (server side of the protocol)
pub fn read_command<R: Read>(reader: &mut R, max_frame_size: usize) -> Result<Command> {
    let tag = match expect_value(reader, max_frame_size, "command tag")? {
        WireValue::Command(tag) => tag,
        other => {
            return Err(JHelpError::Protocol(format!(
                "Expected command tag, got {} value",
                other.kind()
            )))
        }
    };

    let term = expect_text(reader, max_frame_size, "term")?;

    let command = match tag {
        super::CommandType::Find => Command::Find { term },
        super::CommandType::Add => {
            let definition = expect_text(reader, max_frame_size, "definition")?;
            Command::Add { term, definition }
        }
        super::CommandType::DeleteTerm => Command::DeleteTerm { term },
    };

    Ok(command)
}

fn expect_value<R: Read>(reader: &mut R, max_frame_size: usize, what: &str) -> Result<WireValue> {
    read_value(reader, max_frame_size)?.ok_or_else(|| {
        JHelpError::Protocol(format!("Connection closed before {}", what))
    })
}

fn expect_text<R: Read>(reader: &mut R, max_frame_size: usize, what: &str) -> Result<String> {
    match expect_value(reader, max_frame_size, what)? {
        WireValue::Text(text) => Ok(text),
        other => Err(JHelpError::Protocol(format!(
            "Expected {} text, got {} value",
            what,
            other.kind()
        ))),
    }
}
