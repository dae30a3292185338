//! Error types for JHelp
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using JHelpError
pub type Result<T> = std::result::Result<T, JHelpError>;

/// Unified error type for JHelp operations
///
/// Everything returned by the client side of a request is a transport
/// error in the user-facing sense: the request did not reach a determinate
/// outcome. "Not found" is not an error (see [`crate::Lookup`]).
#[derive(Debug, Error)]
pub enum JHelpError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Could not connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Timed out after {timeout_ms}ms waiting for {peer}")]
    Timeout { peer: String, timeout_ms: u64 },

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Frame too large: {size} bytes (max {max})")]
    FrameTooLarge { size: usize, max: usize },

    #[error("Server sent more than {max} definitions")]
    TooManyDefinitions { max: usize },

    // -------------------------------------------------------------------------
    // Caller Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    InvalidArgument(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl JHelpError {
    /// True for errors raised before any byte left the client
    /// (blank term, blank definition, bad configuration).
    pub fn is_caller_error(&self) -> bool {
        matches!(self, JHelpError::InvalidArgument(_) | JHelpError::Config(_))
    }
}
