//! # Register Commands
//!
//! One module per CLI subcommand. Each command returns the text to print,
//! so `main` is the only place that touches stdout.
//!
//! ```text
//! till checkout --payment 20      ──► checkout::run
//! till drawer                     ──► drawer::run
//! till init                       ──► init::run
//! ```

pub mod checkout;
pub mod drawer;
pub mod init;
