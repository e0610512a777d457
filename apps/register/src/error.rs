//! # Register Error Type
//!
//! Unified error type for register commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  register.toml ── TomlDe / Io ──┐                                       │
//! │                                 │                                       │
//! │  "--payment abc" ── Validation ─┼──► RegisterError ──► main: anyhow ──► │
//! │                                 │                         exit code 1   │
//! │  unknown coin ───── Core ───────┘                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Business outcomes such as a short drawer are NOT errors; they print a
//! status line and exit 0.

use thiserror::Error;
use till_core::{CoreError, ValidationError};

/// Errors raised while configuring the register or running a command.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// Domain error from till-core (unknown denomination, bad amount).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Typed input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration is structurally valid TOML but unusable.
    #[error("Invalid register configuration: {0}")]
    Config(String),

    /// Refusing to overwrite an existing file.
    #[error("Config file already exists: {0} (use --force to overwrite)")]
    ConfigExists(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for register operations.
pub type RegisterResult<T> = Result<T, RegisterError>;
