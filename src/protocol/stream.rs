//! Response stream decoding
//!
//! A FIND response carries no count: the server streams definitions and
//! then closes the connection. `DefinitionStream` turns the raw frames of
//! one connection into a lazy sequence of events.

use std::io::Read;

use crate::dictionary::DefinitionSequence;
use crate::error::{JHelpError, Result};
use super::codec::read_value;
use super::WireValue;

/// One decoded event of a FIND response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// One more definition of the term
    Definition(String),

    /// The server has no definitions for the term (always the only event)
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamState {
    /// Nothing read yet
    Start,
    /// At least one definition read, reading until close
    Streaming,
    /// End reached (close, not-found marker, or error)
    Finished,
}

/// Lazy reader of a FIND response
///
/// Yields `Definition`s until the peer closes the connection, or a single
/// `NotFound` when the first value is the null marker. The iterator is
/// fused: after the end or an error it only returns `None`.
pub struct DefinitionStream<R> {
    reader: R,
    state: StreamState,
    received: usize,
    max_definitions: usize,
    max_frame_size: usize,
}

impl<R: Read> DefinitionStream<R> {
    /// Create a stream over a connection whose request was already sent
    pub fn new(reader: R, max_definitions: usize, max_frame_size: usize) -> Self {
        Self {
            reader,
            state: StreamState::Start,
            received: 0,
            max_definitions,
            max_frame_size,
        }
    }

    /// Number of definitions yielded so far
    pub fn received(&self) -> usize {
        self.received
    }

    /// Give back the underlying reader
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn next_event(&mut self) -> Result<Option<StreamEvent>> {
        match self.state {
            StreamState::Finished => Ok(None),
            StreamState::Start => match read_value(&mut self.reader, self.max_frame_size)? {
                None => Err(JHelpError::Protocol(
                    "Connection closed before any response value".to_string(),
                )),
                Some(WireValue::Null) => {
                    self.state = StreamState::Finished;
                    Ok(Some(StreamEvent::NotFound))
                }
                Some(WireValue::Text(definition)) => {
                    self.state = StreamState::Streaming;
                    self.accept(definition).map(Some)
                }
                Some(other) => Err(unexpected(&other, 0)),
            },
            StreamState::Streaming => match read_value(&mut self.reader, self.max_frame_size)? {
                None => {
                    self.state = StreamState::Finished;
                    Ok(None)
                }
                Some(WireValue::Text(definition)) => self.accept(definition).map(Some),
                Some(other) => Err(unexpected(&other, self.received)),
            },
        }
    }

    fn accept(&mut self, definition: String) -> Result<StreamEvent> {
        if self.received >= self.max_definitions {
            return Err(JHelpError::TooManyDefinitions {
                max: self.max_definitions,
            });
        }
        self.received += 1;
        Ok(StreamEvent::Definition(definition))
    }
}

fn unexpected(value: &WireValue, position: usize) -> JHelpError {
    JHelpError::Protocol(format!(
        "Unexpected {} value at response position {}",
        value.kind(),
        position
    ))
}

impl<R: Read> Iterator for DefinitionStream<R> {
    type Item = Result<StreamEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_event() {
            Ok(Some(event)) => Some(Ok(event)),
            Ok(None) => None,
            Err(e) => {
                self.state = StreamState::Finished;
                Some(Err(e))
            }
        }
    }
}

/// Fully decoded FIND response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindResponse {
    /// One or more definitions, in received order
    Definitions(DefinitionSequence),

    /// The server holds nothing for the term
    NotFound,
}

impl FindResponse {
    /// Drain a stream into a response
    pub fn read_from<R: Read>(stream: DefinitionStream<R>) -> Result<Self> {
        let mut definitions = Vec::new();

        for event in stream {
            match event? {
                StreamEvent::NotFound => return Ok(FindResponse::NotFound),
                StreamEvent::Definition(definition) => definitions.push(definition),
            }
        }

        // A stream that ended without NotFound has yielded at least one definition
        DefinitionSequence::new(definitions)
            .map(FindResponse::Definitions)
            .ok_or_else(|| JHelpError::Protocol("Empty response".to_string()))
    }
}
