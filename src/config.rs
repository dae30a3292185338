//! Configuration for JHelp
//!
//! Centralized configuration with sensible defaults.

use std::net::{SocketAddr, ToSocketAddrs};

use crate::error::{JHelpError, Result};

/// Well-known port of the JHelp dictionary server
pub const DEFAULT_PORT: u16 = 16105;

/// Main configuration for a JHelp client
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Server address (host:port), loopback on the well-known port by default
    pub server_addr: String,

    /// Connect timeout (milliseconds, 0 = OS default)
    pub connect_timeout_ms: u64,

    /// Connection read timeout (milliseconds, 0 = none)
    pub read_timeout_ms: u64,

    /// Connection write timeout (milliseconds, 0 = none)
    pub write_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Protocol Limits
    // -------------------------------------------------------------------------
    /// Max definitions accepted in a single FIND response
    pub max_definitions: usize,

    /// Max size of a single frame payload (in bytes)
    pub max_frame_size: usize,

    // -------------------------------------------------------------------------
    // Cache Configuration
    // -------------------------------------------------------------------------
    /// Drop a term's cached definitions after a successful ADD/DELETE on it.
    /// Off by default: resolved terms stay cached for the whole session.
    pub invalidate_on_write: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: format!("127.0.0.1:{}", DEFAULT_PORT),
            connect_timeout_ms: 3000,
            read_timeout_ms: 5000,
            write_timeout_ms: 5000,
            max_definitions: 1024,
            max_frame_size: 1024 * 1024, // 1 MB
            invalidate_on_write: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check limits and resolve the server address
    pub fn validate(&self) -> Result<()> {
        if self.max_definitions == 0 {
            return Err(JHelpError::Config(
                "max_definitions must be at least 1".to_string(),
            ));
        }
        if self.max_frame_size == 0 {
            return Err(JHelpError::Config(
                "max_frame_size must be at least 1".to_string(),
            ));
        }
        self.resolve_server_addr()?;
        Ok(())
    }

    /// Resolve `server_addr` to the first socket address it names
    pub fn resolve_server_addr(&self) -> Result<SocketAddr> {
        let mut addrs = self.server_addr.to_socket_addrs().map_err(|e| {
            JHelpError::Config(format!("Invalid server address {}: {}", self.server_addr, e))
        })?;

        addrs.next().ok_or_else(|| {
            JHelpError::Config(format!(
                "Server address {} did not resolve",
                self.server_addr
            ))
        })
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server address (host:port)
    pub fn server_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.server_addr = addr.into();
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set connect, read and write timeouts at once
    pub fn timeouts_ms(self, ms: u64) -> Self {
        self.connect_timeout_ms(ms)
            .read_timeout_ms(ms)
            .write_timeout_ms(ms)
    }

    /// Set the maximum number of definitions per response
    pub fn max_definitions(mut self, count: usize) -> Self {
        self.config.max_definitions = count;
        self
    }

    /// Set the maximum frame payload size (in bytes)
    pub fn max_frame_size(mut self, size: usize) -> Self {
        self.config.max_frame_size = size;
        self
    }

    /// Invalidate cached definitions on successful writes
    pub fn invalidate_on_write(mut self, enabled: bool) -> Self {
        self.config.invalidate_on_write = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
