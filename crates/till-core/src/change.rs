//! # Change Calculator
//!
//! Greedy change-making against a drawer inventory.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  change due: $96.74                                                     │
//! │                                                                         │
//! │  ONE HUNDRED  $100 > $96.74             skip                            │
//! │  TWENTY       3 × $20   = $60.00  ──►  remaining $36.74                 │
//! │  TEN          2 × $10   = $20.00  ──►  remaining $16.74  (drawer empty) │
//! │  FIVE         3 × $5    = $15.00  ──►  remaining  $1.74                 │
//! │  ONE          1 × $1    =  $1.00  ──►  remaining  $0.74                 │
//! │  QUARTER      2 × $0.25 =  $0.50  ──►  remaining  $0.24                 │
//! │  DIME         2 × $0.10 =  $0.20  ──►  remaining  $0.04                 │
//! │  NICKEL       $0.05 > $0.04           skip                              │
//! │  PENNY        4 × $0.01 =  $0.04  ──►  remaining  $0.00  ✓              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each denomination gives as many whole units as both the remaining change
//! and its drawer total allow. If anything is left after the smallest
//! denomination, the drawer cannot make exact change and the breakdown is
//! discarded.
//!
//! ## Greedy Caveat
//! Greedy is optimal for the US set with an unlimited drawer, but a
//! depleted drawer can defeat it: $0.30 from one quarter and three dimes
//! takes the quarter first and then cannot finish. The register reports
//! INSUFFICIENT_DRAWER_FUNDS in that case; it does not search for another
//! combination.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::ledger::{DenominationLedger, DrawerEntry, DrawerInventory};
use crate::money::Money;

// =============================================================================
// Change Status
// =============================================================================

/// Outcome of a cash transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeStatus {
    /// Customer paid the exact price.
    Exact,
    /// Customer handed over less than the price.
    InsufficientCustomerFunds,
    /// The drawer cannot make the change (too little cash or wrong coins).
    InsufficientDrawerFunds,
    /// Change was given and it emptied the drawer exactly.
    DrawerClosed,
    /// Change was given and cash remains in the drawer.
    ChangeGiven,
}

impl ChangeStatus {
    /// Whether cash leaves the drawer for this outcome.
    #[inline]
    pub const fn pays_out(&self) -> bool {
        matches!(self, ChangeStatus::ChangeGiven | ChangeStatus::DrawerClosed)
    }
}

// =============================================================================
// Change Result
// =============================================================================

/// One line of the payout: a denomination and the value returned in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChangeLine {
    pub denomination: String,
    /// Total value returned in this denomination (always positive).
    pub amount: Money,
}

impl ChangeLine {
    pub fn new(denomination: impl Into<String>, amount: Money) -> Self {
        ChangeLine {
            denomination: denomination.into(),
            amount,
        }
    }
}

/// Structured result handed to presenters.
///
/// ## Invariants
/// - `breakdown` is non-empty only when `status.pays_out()`
/// - Lines are ordered by descending unit value, each amount positive
/// - When paying out, the lines sum to `change_due`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChangeResult {
    pub status: ChangeStatus,

    /// `payment - price`. Negative when the customer is short.
    pub change_due: Money,

    pub breakdown: Vec<ChangeLine>,
}

impl ChangeResult {
    /// Customer paid exactly; nothing to return.
    pub fn exact() -> Self {
        ChangeResult {
            status: ChangeStatus::Exact,
            change_due: Money::zero(),
            breakdown: Vec::new(),
        }
    }

    /// Customer is short by `-change_due`.
    pub fn insufficient_customer_funds(change_due: Money) -> Self {
        ChangeResult {
            status: ChangeStatus::InsufficientCustomerFunds,
            change_due,
            breakdown: Vec::new(),
        }
    }

    /// The drawer cannot produce `change_due`.
    pub fn insufficient_drawer_funds(change_due: Money) -> Self {
        ChangeResult {
            status: ChangeStatus::InsufficientDrawerFunds,
            change_due,
            breakdown: Vec::new(),
        }
    }

    /// Change was counted out.
    pub fn change_given(change_due: Money, breakdown: Vec<ChangeLine>) -> Self {
        ChangeResult {
            status: ChangeStatus::ChangeGiven,
            change_due,
            breakdown,
        }
    }

    /// Marks a successful payout as having emptied the drawer.
    ///
    /// Any other status is returned unchanged.
    pub fn into_drawer_closed(self) -> Self {
        if self.status.pays_out() && !self.breakdown.is_empty() {
            ChangeResult {
                status: ChangeStatus::DrawerClosed,
                ..self
            }
        } else {
            self
        }
    }

    /// Sum of the breakdown.
    pub fn total_returned(&self) -> Money {
        self.breakdown.iter().map(|line| line.amount).sum()
    }

    /// Returned amount for one denomination, zero if it was not used.
    pub fn returned_in(&self, denomination: &str) -> Money {
        self.breakdown
            .iter()
            .find(|line| line.denomination == denomination)
            .map(|line| line.amount)
            .unwrap_or_default()
    }
}

// =============================================================================
// Change Calculator
// =============================================================================

/// A payout together with the drawer it leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeComputation {
    pub result: ChangeResult,

    /// The inventory after the payout, in the caller's entry order.
    /// Identical to the input when nothing was paid out.
    pub remaining_drawer: DrawerInventory,
}

/// Counts out change, highest denomination first.
///
/// Holds a borrowed ledger. Every call works on its own copy of the drawer.
#[derive(Debug, Clone, Copy)]
pub struct ChangeCalculator<'a> {
    ledger: &'a DenominationLedger,
}

impl<'a> ChangeCalculator<'a> {
    pub fn new(ledger: &'a DenominationLedger) -> Self {
        ChangeCalculator { ledger }
    }

    /// Computes the payout for `amount_due`.
    ///
    /// Returns CHANGE_GIVEN with the breakdown, or INSUFFICIENT_DRAWER_FUNDS
    /// with an empty one. Closing the drawer is decided by
    /// [`checkout`](crate::checkout::checkout), not here.
    ///
    /// ## Errors
    /// - `InvalidAmount` if `amount_due` is zero or negative
    /// - `UnknownDenomination` / `DuplicateDenomination` for a bad inventory
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{ChangeCalculator, ChangeStatus, DenominationLedger, Money};
    ///
    /// let ledger = DenominationLedger::standard_usd();
    /// let drawer = ledger
    ///     .inventory_from_pairs(&[("DIME", 3.1), ("QUARTER", 4.25)])
    ///     .unwrap();
    ///
    /// let result = ChangeCalculator::new(&ledger)
    ///     .calculate(Money::from_cents(50), &drawer)
    ///     .unwrap();
    ///
    /// assert_eq!(result.status, ChangeStatus::ChangeGiven);
    /// assert_eq!(result.breakdown.len(), 1);
    /// assert_eq!(result.breakdown[0].denomination, "QUARTER");
    /// assert_eq!(result.breakdown[0].amount.cents(), 50);
    /// ```
    pub fn calculate(
        &self,
        amount_due: Money,
        inventory: &DrawerInventory,
    ) -> CoreResult<ChangeResult> {
        self.compute(amount_due, inventory).map(|computation| computation.result)
    }

    /// Like [`calculate`](Self::calculate), also returning the drawer left
    /// after the payout.
    pub fn compute(
        &self,
        amount_due: Money,
        inventory: &DrawerInventory,
    ) -> CoreResult<ChangeComputation> {
        if !amount_due.is_positive() {
            return Err(CoreError::invalid_amount("change due", "must be positive"));
        }

        self.ledger.validate_inventory(inventory)?;
        let ordered = self.ledger.ordered_highest_first(inventory)?;

        let mut working: HashMap<&str, Money> = inventory
            .iter()
            .map(|entry| (entry.name.as_str(), entry.total))
            .collect();

        let mut remaining = amount_due;
        let mut breakdown = Vec::new();

        for entry in &ordered {
            if remaining.is_zero() {
                break;
            }

            let unit = self.ledger.unit_value_of(&entry.name)?;
            let Some(available) = working.get_mut(entry.name.as_str()) else {
                continue;
            };

            let units = remaining
                .whole_units_of(unit)
                .min(available.whole_units_of(unit));
            if units == 0 {
                continue;
            }

            let paid = unit * units;
            remaining -= paid;
            *available -= paid;
            breakdown.push(ChangeLine::new(entry.name.clone(), paid));
        }

        if remaining.is_positive() {
            return Ok(ChangeComputation {
                result: ChangeResult::insufficient_drawer_funds(amount_due),
                remaining_drawer: inventory.clone(),
            });
        }

        let remaining_drawer = inventory
            .iter()
            .map(|entry| {
                let total = working
                    .get(entry.name.as_str())
                    .copied()
                    .unwrap_or(entry.total);
                DrawerEntry::new(entry.name.clone(), total)
            })
            .collect();

        Ok(ChangeComputation {
            result: ChangeResult::change_given(amount_due, breakdown),
            remaining_drawer,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// The drawer from the classic register exercise.
    fn classic_drawer(ledger: &DenominationLedger) -> DrawerInventory {
        ledger
            .inventory_from_pairs(&[
                ("PENNY", 1.01),
                ("NICKEL", 2.05),
                ("DIME", 3.1),
                ("QUARTER", 4.25),
                ("ONE", 90.0),
                ("FIVE", 55.0),
                ("TEN", 20.0),
                ("TWENTY", 60.0),
                ("ONE HUNDRED", 100.0),
            ])
            .unwrap()
    }

    fn cents(n: i64) -> Money {
        Money::from_cents(n)
    }

    #[test]
    fn test_fifty_cents_in_quarters() {
        let ledger = DenominationLedger::standard_usd();
        let drawer = classic_drawer(&ledger);

        let result = ChangeCalculator::new(&ledger).calculate(cents(50), &drawer).unwrap();

        assert_eq!(result.status, ChangeStatus::ChangeGiven);
        assert_eq!(result.breakdown, vec![ChangeLine::new("QUARTER", cents(50))]);
    }

    #[test]
    fn test_large_change_walks_every_denomination() {
        let ledger = DenominationLedger::standard_usd();
        let drawer = classic_drawer(&ledger);

        let result = ChangeCalculator::new(&ledger).calculate(cents(9674), &drawer).unwrap();

        assert_eq!(result.status, ChangeStatus::ChangeGiven);
        assert_eq!(
            result.breakdown,
            vec![
                ChangeLine::new("TWENTY", cents(6000)),
                ChangeLine::new("TEN", cents(2000)),
                ChangeLine::new("FIVE", cents(1500)),
                ChangeLine::new("ONE", cents(100)),
                ChangeLine::new("QUARTER", cents(50)),
                ChangeLine::new("DIME", cents(20)),
                ChangeLine::new("PENNY", cents(4)),
            ]
        );
        assert_eq!(result.total_returned(), cents(9674));
        assert_eq!(result.returned_in("NICKEL"), Money::zero());
    }

    #[test]
    fn test_more_than_drawer_total_is_insufficient() {
        let ledger = DenominationLedger::standard_usd();
        let drawer = ledger.inventory_from_pairs(&[("PENNY", 0.01), ("ONE", 1.0)]).unwrap();

        let result = ChangeCalculator::new(&ledger).calculate(cents(50), &drawer).unwrap();

        assert_eq!(result.status, ChangeStatus::InsufficientDrawerFunds);
        assert!(result.breakdown.is_empty());
        assert_eq!(result.change_due, cents(50));
    }

    #[test]
    fn test_partial_units_are_never_returned() {
        // $0.23 in nickels is four nickels; the extra 3 cents cannot be paid.
        let ledger = DenominationLedger::standard_usd();
        let drawer = DrawerInventory::new(vec![DrawerEntry::new("NICKEL", cents(23))]);
        let calculator = ChangeCalculator::new(&ledger);

        let paid = calculator.calculate(cents(20), &drawer).unwrap();
        assert_eq!(paid.breakdown, vec![ChangeLine::new("NICKEL", cents(20))]);

        let short = calculator.calculate(cents(23), &drawer).unwrap();
        assert_eq!(short.status, ChangeStatus::InsufficientDrawerFunds);
    }

    #[test]
    fn test_greedy_can_miss_a_valid_combination() {
        let ledger = DenominationLedger::standard_usd();
        let drawer = ledger.inventory_from_pairs(&[("DIME", 0.3), ("QUARTER", 0.25)]).unwrap();

        let result = ChangeCalculator::new(&ledger).calculate(cents(30), &drawer).unwrap();

        assert_eq!(result.status, ChangeStatus::InsufficientDrawerFunds);
    }

    #[test]
    fn test_input_is_not_mutated_and_calls_are_repeatable() {
        let ledger = DenominationLedger::standard_usd();
        let drawer = classic_drawer(&ledger);
        let snapshot = drawer.clone();
        let calculator = ChangeCalculator::new(&ledger);

        let first = calculator.calculate(cents(9674), &drawer).unwrap();
        let second = calculator.calculate(cents(9674), &drawer).unwrap();

        assert_eq!(first, second);
        assert_eq!(drawer, snapshot);
    }

    #[test]
    fn test_remaining_drawer_after_payout() {
        let ledger = DenominationLedger::standard_usd();
        let drawer = ledger
            .inventory_from_pairs(&[("PENNY", 0.5), ("QUARTER", 1.0), ("ONE", 3.0)])
            .unwrap();

        let computation = ChangeCalculator::new(&ledger).compute(cents(162), &drawer).unwrap();

        assert_eq!(computation.result.status, ChangeStatus::ChangeGiven);
        assert_eq!(computation.remaining_drawer.amount_of("ONE"), Some(cents(200)));
        assert_eq!(computation.remaining_drawer.amount_of("QUARTER"), Some(cents(50)));
        assert_eq!(computation.remaining_drawer.amount_of("PENNY"), Some(cents(38)));
        assert_eq!(
            computation.remaining_drawer.total().unwrap(),
            drawer.total().unwrap() - computation.result.total_returned()
        );

        let names: Vec<&str> = computation
            .remaining_drawer
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, ["PENNY", "QUARTER", "ONE"]);
    }

    #[test]
    fn test_failed_payout_leaves_drawer_as_is() {
        let ledger = DenominationLedger::standard_usd();
        let drawer = ledger.inventory_from_pairs(&[("DIME", 0.3), ("QUARTER", 0.25)]).unwrap();

        let computation = ChangeCalculator::new(&ledger).compute(cents(30), &drawer).unwrap();

        assert_eq!(computation.remaining_drawer, drawer);
    }

    #[test]
    fn test_breakdown_properties_hold_for_every_small_amount() {
        let ledger = DenominationLedger::standard_usd();
        let drawer = classic_drawer(&ledger);
        let calculator = ChangeCalculator::new(&ledger);

        for due in 1..=2_000 {
            let result = calculator.calculate(cents(due), &drawer).unwrap();
            assert_eq!(result.status, ChangeStatus::ChangeGiven, "due {due}");
            assert_eq!(result.total_returned(), cents(due), "due {due}");
            assert!(result.breakdown.iter().all(|line| line.amount.is_positive()));

            let units: Vec<Money> = result
                .breakdown
                .iter()
                .map(|line| ledger.unit_value_of(&line.denomination).unwrap())
                .collect();
            assert!(units.windows(2).all(|pair| pair[0] > pair[1]), "due {due}");
        }
    }

    #[test]
    fn test_rejects_non_positive_amounts() {
        let ledger = DenominationLedger::standard_usd();
        let drawer = classic_drawer(&ledger);
        let calculator = ChangeCalculator::new(&ledger);

        assert!(matches!(
            calculator.calculate(Money::zero(), &drawer),
            Err(CoreError::InvalidAmount { .. })
        ));
        assert!(matches!(
            calculator.calculate(cents(-1), &drawer),
            Err(CoreError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_denomination() {
        let ledger = DenominationLedger::standard_usd();
        let drawer = DrawerInventory::new(vec![DrawerEntry::new("TWO", cents(200))]);

        assert_eq!(
            ChangeCalculator::new(&ledger).calculate(cents(200), &drawer),
            Err(CoreError::UnknownDenomination("TWO".to_string()))
        );
    }

    #[test]
    fn test_status_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ChangeStatus::InsufficientDrawerFunds).unwrap();
        assert_eq!(json, "\"INSUFFICIENT_DRAWER_FUNDS\"");

        let result =
            ChangeResult::change_given(cents(25), vec![ChangeLine::new("QUARTER", cents(25))]);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], "CHANGE_GIVEN");
        assert_eq!(value["breakdown"][0]["denomination"], "QUARTER");
        assert_eq!(value["breakdown"][0]["amount"], 25);
    }

    #[test]
    fn test_into_drawer_closed_only_for_payouts() {
        let paid = ChangeResult::change_given(cents(5), vec![ChangeLine::new("NICKEL", cents(5))]);
        let closed = paid.into_drawer_closed();
        assert_eq!(closed.status, ChangeStatus::DrawerClosed);
        assert!(closed.status.pays_out());
        assert_eq!(closed.clone().into_drawer_closed(), closed);

        let short = ChangeResult::insufficient_drawer_funds(cents(5));
        assert!(!short.status.pays_out());
        assert_eq!(
            short.into_drawer_closed().status,
            ChangeStatus::InsufficientDrawerFunds
        );
    }
}
