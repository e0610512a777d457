//! # till-core: Pure Change-Making Logic for Titan Till
//!
//! This crate decides what a cash register hands back. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Titan Till Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Register (apps/register)                        │   │
//! │  │   config file ──► price, drawer      CLI ──► payment           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ checkout(price, payment, drawer)       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  ledger   │  │  change   │  │ checkout  │  │   │
//! │  │   │   Money   │  │  Drawer   │  │ Calculator│  │  status   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING SUBSCRIBERS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ChangeResult                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │     display: "Status: OPEN QUARTER: $0.5"  or JSON              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`denomination`] - Named cash units and the US set
//! - [`ledger`] - Denomination universe and drawer inventories
//! - [`change`] - Greedy change calculator and result types
//! - [`checkout`] - Outcome classification for a cash sale
//! - [`validation`] - Parsing and range checks for typed input
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same price, payment and drawer = same result
//! 2. **Caller Owns the Drawer**: inputs are borrowed and never mutated
//! 3. **Integer Money**: all amounts are cents (i64), so rounding is exact
//! 4. **Outcomes Are Not Errors**: a short drawer is a status, not an `Err`
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{checkout, ChangeStatus, DenominationLedger, Money};
//!
//! let ledger = DenominationLedger::standard_usd();
//! let drawer = ledger
//!     .inventory_from_pairs(&[("PENNY", 1.01), ("QUARTER", 4.25), ("ONE", 90.0)])
//!     .unwrap();
//!
//! let price: Money = "19.50".parse().unwrap();
//! let paid: Money = "20".parse().unwrap();
//!
//! let result = checkout(&ledger, price, paid, &drawer).unwrap();
//! assert_eq!(result.status, ChangeStatus::ChangeGiven);
//! assert_eq!(result.breakdown[0].denomination, "QUARTER");
//! assert_eq!(result.breakdown[0].amount.cents(), 50);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod change;
pub mod checkout;
pub mod denomination;
pub mod error;
pub mod ledger;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use change::{ChangeCalculator, ChangeComputation, ChangeLine, ChangeResult, ChangeStatus};
pub use checkout::{checkout, settle};
pub use denomination::Denomination;
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::{DenominationLedger, DrawerEntry, DrawerInventory};
pub use money::Money;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest price or payment the register accepts, in cents ($1,000,000.00).
///
/// ## Business Reason
/// Catches keying errors (an extra run of zeros) long before i64 overflow.
pub const MAX_TRANSACTION_CENTS: i64 = 100_000_000;

/// Largest total a single drawer entry may hold, in cents ($1,000,000,000.00).
///
/// Keeps drawer sums far away from i64 overflow for any realistic number of
/// entries.
pub const MAX_DRAWER_CENTS: i64 = 100_000_000_000;
