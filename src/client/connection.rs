//! Connection Handler
//!
//! One-shot TCP connection to the dictionary server.

use std::io::{BufReader, BufWriter, ErrorKind};
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

use crate::config::Config;
use crate::error::{JHelpError, Result};
use crate::protocol::{write_command, Command, DefinitionStream};

/// A single request's connection
///
/// The socket is released when the connection (or the stream made from it)
/// is dropped, on every exit path.
pub struct Connection {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Peer address for logging
    peer_addr: String,

    /// Read timeout (ms), reported in timeout errors
    read_timeout_ms: u64,

    /// Write timeout (ms), reported in timeout errors
    write_timeout_ms: u64,
}

impl Connection {
    /// Connect to the configured server
    ///
    /// Sets up buffered I/O and configures timeouts
    pub fn open(config: &Config) -> Result<Self> {
        let addr = config.resolve_server_addr()?;
        let peer_addr = addr.to_string();

        let connected = if config.connect_timeout_ms > 0 {
            TcpStream::connect_timeout(&addr, Duration::from_millis(config.connect_timeout_ms))
        } else {
            TcpStream::connect(addr)
        };

        let stream = connected.map_err(|e| {
            if is_timeout(e.kind()) {
                JHelpError::Timeout {
                    peer: peer_addr.clone(),
                    timeout_ms: config.connect_timeout_ms,
                }
            } else {
                JHelpError::Connect {
                    addr: peer_addr.clone(),
                    source: e,
                }
            }
        })?;

        // Requests are tiny; don't let Nagle hold them back
        stream.set_nodelay(true)?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        let mut connection = Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            peer_addr,
            read_timeout_ms: 0,
            write_timeout_ms: 0,
        };
        connection.set_timeouts(config.read_timeout_ms, config.write_timeout_ms)?;

        tracing::debug!("Connected to {}", connection.peer_addr);
        Ok(connection)
    }

    /// Configure connection timeouts (0 disables)
    pub fn set_timeouts(&mut self, read_ms: u64, write_ms: u64) -> Result<()> {
        let read_stream = self.reader.get_ref();
        let write_stream = self.writer.get_ref();

        read_stream.set_read_timeout((read_ms > 0).then(|| Duration::from_millis(read_ms)))?;
        write_stream.set_write_timeout((write_ms > 0).then(|| Duration::from_millis(write_ms)))?;

        self.read_timeout_ms = read_ms;
        self.write_timeout_ms = write_ms;
        Ok(())
    }

    /// Send a request and flush it
    pub fn send(&mut self, command: &Command) -> Result<()> {
        tracing::trace!("Sending {:?} to {}", command.command_type(), self.peer_addr);
        write_command(&mut self.writer, command)
            .map_err(|e| classify(e, &self.peer_addr, self.write_timeout_ms))
    }

    /// Turn the connection into the response stream of a FIND
    ///
    /// The write half is dropped here; the socket closes when the stream is
    /// dropped.
    pub fn into_definition_stream(
        self,
        max_definitions: usize,
        max_frame_size: usize,
    ) -> DefinitionStream<BufReader<TcpStream>> {
        DefinitionStream::new(self.reader, max_definitions, max_frame_size)
    }

    /// Close both directions after a request that expects no reply
    pub fn close(self) {
        if let Err(e) = self.writer.get_ref().shutdown(Shutdown::Both) {
            // Peer may already be gone; the request bytes were flushed
            tracing::debug!("Shutdown of connection to {} failed: {}", self.peer_addr, e);
        }
        tracing::debug!("Closed connection to {}", self.peer_addr);
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }

    /// Read timeout in effect (ms)
    pub fn read_timeout_ms(&self) -> u64 {
        self.read_timeout_ms
    }
}

fn is_timeout(kind: ErrorKind) -> bool {
    // Unix reports socket timeouts as WouldBlock, Windows as TimedOut
    matches!(kind, ErrorKind::WouldBlock | ErrorKind::TimedOut)
}

/// Map raw socket timeouts to `Timeout`, leave everything else alone
pub(crate) fn classify(err: JHelpError, peer: &str, timeout_ms: u64) -> JHelpError {
    match err {
        JHelpError::Io(ref e) if is_timeout(e.kind()) => JHelpError::Timeout {
            peer: peer.to_string(),
            timeout_ms,
        },
        other => other,
    }
}
