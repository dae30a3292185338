//! Protocol client
//!
//! Issues FIND / ADD / DELETE_TERM requests, one connection each.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::Config;
use crate::dictionary::{normalize_term, DefinitionSequence};
use crate::error::{JHelpError, Result};
use crate::protocol::{Command, FindResponse};
use super::connection::{classify, Connection};

/// Outcome of a successful FIND round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The term has one or more definitions
    Found(DefinitionSequence),

    /// The server holds nothing for the term
    NotFound,
}

impl Lookup {
    /// The definitions, if found
    pub fn definitions(&self) -> Option<&DefinitionSequence> {
        match self {
            Lookup::Found(sequence) => Some(sequence),
            Lookup::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

/// Client for the dictionary server
///
/// Every call is blocking and opens its own connection. Any `Err` means the
/// request did not reach a determinate outcome; nothing is retried.
pub struct Client {
    config: Config,

    /// Connections opened so far
    round_trips: AtomicU64,
}

impl Client {
    /// Create a client for the given config
    pub fn new(config: Config) -> Self {
        Self {
            config,
            round_trips: AtomicU64::new(0),
        }
    }

    /// Create a client after checking the config
    pub fn try_new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Look up every definition of a term
    pub fn lookup(&self, term: &str) -> Result<Lookup> {
        let term = normalize_term(term)?;
        let command = Command::Find { term };

        let mut connection = self.open()?;
        connection.send(&command)?;

        let peer = connection.peer_addr().to_string();
        let read_timeout_ms = connection.read_timeout_ms();
        let stream = connection
            .into_definition_stream(self.config.max_definitions, self.config.max_frame_size);

        let response = FindResponse::read_from(stream).map_err(|e| {
            let e = classify(e, &peer, read_timeout_ms);
            tracing::warn!("FIND '{}' via {} failed: {}", command.term(), peer, e);
            e
        })?;

        match response {
            FindResponse::Definitions(sequence) => {
                tracing::debug!(
                    "FIND '{}': {} definition(s)",
                    command.term(),
                    sequence.len()
                );
                Ok(Lookup::Found(sequence))
            }
            FindResponse::NotFound => {
                tracing::debug!("FIND '{}': not found", command.term());
                Ok(Lookup::NotFound)
            }
        }
    }

    /// Send a new definition for a term
    ///
    /// Fire-and-forget: success means the request was flushed without an
    /// I/O error. The server only persists it after a restart.
    pub fn submit_add(&self, term: &str, definition: &str) -> Result<()> {
        if definition.trim().is_empty() {
            return Err(JHelpError::InvalidArgument(
                "Definition can not be empty".to_string(),
            ));
        }
        let command = Command::Add {
            term: normalize_term(term)?,
            definition: definition.to_string(),
        };
        self.submit(command)
    }

    /// Ask the server to delete a term
    ///
    /// Fire-and-forget, like [`Client::submit_add`].
    pub fn submit_delete(&self, term: &str) -> Result<()> {
        let command = Command::DeleteTerm {
            term: normalize_term(term)?,
        };
        self.submit(command)
    }

    /// Number of connections opened by this client
    pub fn round_trips(&self) -> u64 {
        self.round_trips.load(Ordering::Relaxed)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn submit(&self, command: Command) -> Result<()> {
        let mut connection = self.open()?;

        if let Err(e) = connection.send(&command) {
            tracing::warn!(
                "{:?} '{}' via {} failed: {}",
                command.command_type(),
                command.term(),
                connection.peer_addr(),
                e
            );
            return Err(e);
        }

        tracing::info!("Sent {:?} for '{}'", command.command_type(), command.term());
        connection.close();
        Ok(())
    }

    fn open(&self) -> Result<Connection> {
        self.round_trips.fetch_add(1, Ordering::Relaxed);
        Connection::open(&self.config).map_err(|e| {
            tracing::warn!("Connection to {} failed: {}", self.config.server_addr, e);
            e
        })
    }
}
