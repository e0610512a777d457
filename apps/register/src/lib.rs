//! # Till Register
//!
//! Command line cash register built on `till-core`.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Till Register                                   │
//! │                                                                         │
//! │  ┌──────────────┐   ┌──────────────┐   ┌────────────────────────────┐   │
//! │  │ clap CLI     │──►│ commands::*  │──►│ till-core                  │   │
//! │  │ (main.rs)    │   │              │   │ settle / ChangeCalculator  │   │
//! │  └──────────────┘   └──────┬───────┘   └────────────────────────────┘   │
//! │                            │                                            │
//! │              ┌─────────────┴─────────────┐                              │
//! │              ▼                           ▼                              │
//! │       ┌──────────────┐           ┌──────────────┐                       │
//! │       │ config       │           │ display      │                       │
//! │       │ TOML + env   │           │ text / JSON  │                       │
//! │       └──────────────┘           └──────────────┘                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logs go to stderr so stdout carries only the register output.

pub mod commands;
pub mod config;
pub mod display;
pub mod error;

pub use config::RegisterConfig;
pub use error::{RegisterError, RegisterResult};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=till=trace` - Trace register and core crates
///
/// Defaults to `info,till=debug`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,till=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
