//! # Checkout
//!
//! Turns a price, a cash payment and the drawer into a transaction outcome.
//!
//! ## Decision Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  payment < price ─────────────────────► INSUFFICIENT_CUSTOMER_FUNDS     │
//! │        │                                                                │
//! │  payment == price ────────────────────► EXACT                           │
//! │        │                                                                │
//! │  due = payment - price                                                  │
//! │        │                                                                │
//! │  drawer total < due ──────────────────► INSUFFICIENT_DRAWER_FUNDS       │
//! │        │                                                                │
//! │  drawer total == due ──► calculator ──┬► CHANGE_GIVEN → DRAWER_CLOSED   │
//! │        │                              └► INSUFFICIENT_DRAWER_FUNDS      │
//! │        │                                                                │
//! │  drawer total > due ───► calculator ──┬► CHANGE_GIVEN                   │
//! │                                       └► INSUFFICIENT_DRAWER_FUNDS      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculator only runs when a payout is possible on totals alone.
//! When totals match but a drawer entry holds a fraction of a unit, the
//! payout fails and the drawer is reported short rather than closed.

use crate::change::{ChangeCalculator, ChangeComputation, ChangeResult};
use crate::error::{CoreError, CoreResult};
use crate::ledger::{DenominationLedger, DrawerInventory};
use crate::money::Money;

/// Settles a cash sale and reports what to hand back.
///
/// ## Errors
/// - `InvalidAmount` if `price` is not positive or `payment` is negative
/// - Ledger errors for a malformed inventory (only when change is due)
///
/// ## Example
/// ```rust
/// use till_core::{checkout, ChangeStatus, DenominationLedger, Money};
///
/// let ledger = DenominationLedger::standard_usd();
/// let drawer = ledger.inventory_from_pairs(&[("PENNY", 0.5)]).unwrap();
///
/// let result = checkout(
///     &ledger,
///     Money::from_cents(1950),
///     Money::from_cents(2000),
///     &drawer,
/// )
/// .unwrap();
///
/// assert_eq!(result.status, ChangeStatus::DrawerClosed);
/// assert_eq!(result.breakdown[0].amount.cents(), 50);
/// ```
pub fn checkout(
    ledger: &DenominationLedger,
    price: Money,
    payment: Money,
    inventory: &DrawerInventory,
) -> CoreResult<ChangeResult> {
    settle(ledger, price, payment, inventory).map(|computation| computation.result)
}

/// Like [`checkout`], also returning the drawer left after the payout.
///
/// The core never stores the drawer; a register that owns one applies
/// `remaining_drawer` itself once the sale is committed.
pub fn settle(
    ledger: &DenominationLedger,
    price: Money,
    payment: Money,
    inventory: &DrawerInventory,
) -> CoreResult<ChangeComputation> {
    if !price.is_positive() {
        return Err(CoreError::invalid_amount("price", "must be positive"));
    }
    if payment.is_negative() {
        return Err(CoreError::invalid_amount("payment", "must not be negative"));
    }

    let untouched = |result: ChangeResult| ChangeComputation {
        result,
        remaining_drawer: inventory.clone(),
    };

    let change_due = payment - price;

    if change_due.is_negative() {
        return Ok(untouched(ChangeResult::insufficient_customer_funds(change_due)));
    }
    if change_due.is_zero() {
        return Ok(untouched(ChangeResult::exact()));
    }

    ledger.validate_inventory(inventory)?;
    let drawer_total = ledger.total_value(inventory)?;

    if drawer_total < change_due {
        return Ok(untouched(ChangeResult::insufficient_drawer_funds(change_due)));
    }

    let computation = ChangeCalculator::new(ledger).compute(change_due, inventory)?;

    if drawer_total == change_due {
        return Ok(ChangeComputation {
            result: computation.result.into_drawer_closed(),
            remaining_drawer: computation.remaining_drawer,
        });
    }

    Ok(computation)
}

// =============================================================================
// Unit Tests
// =============================================================================
