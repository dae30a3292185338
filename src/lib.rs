//! # JHelp
//!
//! Client for the JHelp dictionary server:
//! - One TCP connection per request (FIND / ADD / DELETE_TERM)
//! - Streamed responses terminated by the server closing the connection
//! - Per-term cache of resolved definitions
//! - Cursor for paging back and forth through a term's definitions
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Front End (CLI / shell)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Session                               │
//! │          (owns Client + Cache + Cursor)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Client    │          │    Cache    │◀── Cursor
//!   │ (one-shot)  │          │ (per term)  │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │  Protocol   │
//!   │   (codec)   │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod client;
pub mod dictionary;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{JHelpError, Result};
pub use config::Config;
pub use client::{Client, Lookup};
pub use dictionary::{Cursor, CursorState, DefinitionCache, DefinitionSequence};
pub use session::Session;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of JHelp
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
