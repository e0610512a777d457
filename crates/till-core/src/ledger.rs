//! # Denomination Ledger
//!
//! The ledger knows the face value of every denomination the register
//! accepts, and reads drawer inventories in payout order.
//!
//! ## Inventory Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DrawerInventory = ordered list of DrawerEntry                          │
//! │                                                                         │
//! │   name          total            (total VALUE, not a count!)            │
//! │   ───────────   ──────                                                  │
//! │   PENNY         $1.01   ──► 101 pennies                                 │
//! │   NICKEL        $2.05   ──►  41 nickels                                 │
//! │   QUARTER       $4.25   ──►  17 quarters                                │
//! │   ONE HUNDRED   $100    ──►   1 bill                                    │
//! │                                                                         │
//! │  ordered_highest_first() ──► ONE HUNDRED, QUARTER, NICKEL, PENNY        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validation Timing
//! Unknown names are configuration errors. Call
//! [`DenominationLedger::validate_inventory`] once, when the drawer is
//! loaded, so they never show up mid-transaction.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::denomination::Denomination;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::MAX_DRAWER_CENTS;

// =============================================================================
// Drawer Entry
// =============================================================================

/// How much of one denomination the drawer holds, by total value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DrawerEntry {
    /// Denomination name, e.g. `"DIME"`.
    pub name: String,

    /// Sum of the face values of every unit of this denomination.
    pub total: Money,
}

impl DrawerEntry {
    /// Creates a drawer entry.
    pub fn new(name: impl Into<String>, total: Money) -> Self {
        DrawerEntry {
            name: name.into(),
            total,
        }
    }
}

// =============================================================================
// Drawer Inventory
// =============================================================================

/// The cash in a drawer, as an ordered list of entries.
///
/// Built fresh for every calculation. Nothing in this crate mutates an
/// inventory it was handed; payouts are computed on copies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DrawerInventory(Vec<DrawerEntry>);

impl DrawerInventory {
    /// Wraps a list of entries. Use [`DenominationLedger::validate_inventory`]
    /// to check it against a universe.
    pub fn new(entries: Vec<DrawerEntry>) -> Self {
        DrawerInventory(entries)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, DrawerEntry> {
        self.0.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total held for `name`, if the drawer has an entry for it.
    pub fn amount_of(&self, name: &str) -> Option<Money> {
        self.0.iter().find(|e| e.name == name).map(|e| e.total)
    }

    /// Sum of every entry.
    ///
    /// ## Errors
    /// `InvalidAmount` if the sum does not fit in an i64 of cents.
    pub fn total(&self) -> CoreResult<Money> {
        self.0
            .iter()
            .try_fold(Money::zero(), |sum, entry| sum.checked_add(entry.total))
            .ok_or_else(|| CoreError::invalid_amount("drawer total", "is too large"))
    }
}

impl FromIterator<DrawerEntry> for DrawerInventory {
    fn from_iter<I: IntoIterator<Item = DrawerEntry>>(iter: I) -> Self {
        DrawerInventory(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DrawerInventory {
    type Item = &'a DrawerEntry;
    type IntoIter = std::slice::Iter<'a, DrawerEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Denomination Ledger
// =============================================================================

/// The fixed universe of denominations and their face values.
///
/// ## Invariants
/// - At least one denomination
/// - Names are unique
/// - Every unit value is positive
/// - `denominations` is kept highest value first
#[derive(Debug, Clone)]
pub struct DenominationLedger {
    denominations: Vec<Denomination>,
    unit_values: HashMap<String, Money>,
}

impl DenominationLedger {
    /// Builds a ledger from a denomination universe (any order).
    ///
    /// ## Errors
    /// - `InvalidDenomination` for an empty universe, an empty name or a
    ///   non-positive unit value
    /// - `DuplicateDenomination` when a name repeats
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{Denomination, DenominationLedger, Money};
    ///
    /// let ledger = DenominationLedger::new(vec![
    ///     Denomination::new("DIME", Money::from_cents(10)),
    ///     Denomination::new("QUARTER", Money::from_cents(25)),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(ledger.denominations()[0].name, "QUARTER");
    /// assert!(ledger.unit_value_of("PENNY").is_err());
    /// ```
    pub fn new(denominations: impl IntoIterator<Item = Denomination>) -> CoreResult<Self> {
        let mut denominations: Vec<Denomination> = denominations.into_iter().collect();

        if denominations.is_empty() {
            return Err(CoreError::InvalidDenomination {
                name: String::new(),
                reason: "at least one denomination is required".to_string(),
            });
        }

        let mut unit_values = HashMap::with_capacity(denominations.len());
        for denomination in &denominations {
            if denomination.name.trim().is_empty() {
                return Err(CoreError::InvalidDenomination {
                    name: denomination.name.clone(),
                    reason: "name is empty".to_string(),
                });
            }
            if !denomination.unit_value.is_positive() {
                return Err(CoreError::InvalidDenomination {
                    name: denomination.name.clone(),
                    reason: format!("unit value {} is not positive", denomination.unit_value),
                });
            }
            if unit_values
                .insert(denomination.name.clone(), denomination.unit_value)
                .is_some()
            {
                return Err(CoreError::DuplicateDenomination(denomination.name.clone()));
            }
        }

        // Stable: equal face values keep their configured order
        denominations.sort_by(|a, b| b.unit_value.cmp(&a.unit_value));

        Ok(DenominationLedger {
            denominations,
            unit_values,
        })
    }

    /// Ledger for the standard US drawer (PENNY through ONE HUNDRED).
    pub fn standard_usd() -> Self {
        let mut denominations = Denomination::usd();
        let unit_values = denominations
            .iter()
            .map(|d| (d.name.clone(), d.unit_value))
            .collect();
        denominations.reverse();

        DenominationLedger {
            denominations,
            unit_values,
        }
    }

    /// All denominations, highest value first.
    #[inline]
    pub fn denominations(&self) -> &[Denomination] {
        &self.denominations
    }

    /// Face value of one unit of `name`.
    ///
    /// ## Errors
    /// `UnknownDenomination` when `name` is not in the universe.
    pub fn unit_value_of(&self, name: &str) -> CoreResult<Money> {
        self.unit_values
            .get(name)
            .copied()
            .ok_or_else(|| CoreError::UnknownDenomination(name.to_string()))
    }

    /// Total value of an inventory.
    ///
    /// Amounts are whole cents, so the sum is already exact to 2 decimals.
    #[inline]
    pub fn total_value(&self, inventory: &DrawerInventory) -> CoreResult<Money> {
        inventory.total()
    }

    /// Returns a copy of the inventory sorted by descending unit value.
    ///
    /// Entries with equal unit values keep their input order. The input is
    /// left untouched.
    ///
    /// ## Errors
    /// `UnknownDenomination` if any entry names a foreign denomination.
    pub fn ordered_highest_first(
        &self,
        inventory: &DrawerInventory,
    ) -> CoreResult<Vec<DrawerEntry>> {
        let mut keyed = inventory
            .iter()
            .map(|entry| -> CoreResult<(Money, DrawerEntry)> {
                Ok((self.unit_value_of(&entry.name)?, entry.clone()))
            })
            .collect::<CoreResult<Vec<(Money, DrawerEntry)>>>()?;

        keyed.sort_by(|(a, _), (b, _)| b.cmp(a));

        Ok(keyed.into_iter().map(|(_, entry)| entry).collect())
    }

    /// Checks an inventory against this universe.
    ///
    /// ## Rules
    /// - Every name is known (`UnknownDenomination`)
    /// - No name appears twice (`DuplicateDenomination`)
    /// - No total is negative or above [`MAX_DRAWER_CENTS`] (`InvalidAmount`)
    pub fn validate_inventory(&self, inventory: &DrawerInventory) -> CoreResult<()> {
        let mut seen = HashSet::with_capacity(inventory.len());

        for entry in inventory {
            self.unit_value_of(&entry.name)?;

            if !seen.insert(entry.name.as_str()) {
                return Err(CoreError::DuplicateDenomination(entry.name.clone()));
            }

            if entry.total.is_negative() {
                return Err(CoreError::invalid_amount(
                    &format!("drawer amount for {}", entry.name),
                    "must not be negative",
                ));
            }

            if entry.total.cents() > MAX_DRAWER_CENTS {
                return Err(CoreError::invalid_amount(
                    &format!("drawer amount for {}", entry.name),
                    format!("must not exceed {}", Money::from_cents(MAX_DRAWER_CENTS)),
                ));
            }
        }

        Ok(())
    }

    /// Builds and validates an inventory from `(name, dollars)` pairs.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::DenominationLedger;
    ///
    /// let ledger = DenominationLedger::standard_usd();
    /// let drawer = ledger
    ///     .inventory_from_pairs(&[("PENNY", 1.01), ("QUARTER", 4.25)])
    ///     .unwrap();
    ///
    /// assert_eq!(ledger.total_value(&drawer).unwrap().cents(), 526);
    /// assert!(ledger.inventory_from_pairs(&[("DOUBLOON", 1.0)]).is_err());
    /// ```
    pub fn inventory_from_pairs(&self, pairs: &[(&str, f64)]) -> CoreResult<DrawerInventory> {
        let inventory = pairs
            .iter()
            .map(|(name, amount)| {
                Money::from_major_f64(*amount).map(|total| DrawerEntry::new(*name, total))
            })
            .collect::<CoreResult<DrawerInventory>>()?;

        self.validate_inventory(&inventory)?;
        Ok(inventory)
    }

    /// Entries whose total is not a whole number of units.
    ///
    /// The leftover fraction can never be paid out. Such a drawer is legal,
    /// but usually means a miscount.
    pub fn entries_with_partial_units<'a>(
        &self,
        inventory: &'a DrawerInventory,
    ) -> Vec<&'a DrawerEntry> {
        inventory
            .iter()
            .filter(|entry| {
                self.unit_value_of(&entry.name)
                    .map(|unit| entry.total.cents() % unit.cents() != 0)
                    .unwrap_or(false)
            })
            .collect()
    }
}

impl Default for DenominationLedger {
    fn default() -> Self {
        DenominationLedger::standard_usd()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, cents: i64) -> DrawerEntry {
        DrawerEntry::new(name, Money::from_cents(cents))
    }

    #[test]
    fn test_unit_value_of() {
        let ledger = DenominationLedger::standard_usd();
        assert_eq!(ledger.unit_value_of("PENNY").unwrap().cents(), 1);
        assert_eq!(ledger.unit_value_of("ONE HUNDRED").unwrap().cents(), 10_000);
        assert_eq!(
            ledger.unit_value_of("TWO"),
            Err(CoreError::UnknownDenomination("TWO".to_string()))
        );
    }

    #[test]
    fn test_standard_ledger_is_highest_first() {
        let ledger = DenominationLedger::standard_usd();
        let names: Vec<&str> = ledger.denominations().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            ["ONE HUNDRED", "TWENTY", "TEN", "FIVE", "ONE", "QUARTER", "DIME", "NICKEL", "PENNY"]
        );
    }

    #[test]
    fn test_new_rejects_bad_universes() {
        assert!(matches!(
            DenominationLedger::new(Vec::new()),
            Err(CoreError::InvalidDenomination { .. })
        ));
        assert!(matches!(
            DenominationLedger::new(vec![Denomination::new("FREE", Money::zero())]),
            Err(CoreError::InvalidDenomination { .. })
        ));
        assert_eq!(
            DenominationLedger::new(vec![
                Denomination::new("DIME", Money::from_cents(10)),
                Denomination::new("DIME", Money::from_cents(10)),
            ])
            .unwrap_err(),
            CoreError::DuplicateDenomination("DIME".to_string())
        );
    }

    #[test]
    fn test_total_value() {
        let ledger = DenominationLedger::standard_usd();
        let drawer = DrawerInventory::new(vec![
            entry("PENNY", 101),
            entry("NICKEL", 205),
            entry("DIME", 310),
            entry("QUARTER", 425),
            entry("ONE", 9_000),
            entry("FIVE", 5_500),
            entry("TEN", 2_000),
            entry("TWENTY", 6_000),
            entry("ONE HUNDRED", 10_000),
        ]);
        assert_eq!(ledger.total_value(&drawer).unwrap().cents(), 33_541);
        assert!(ledger.total_value(&DrawerInventory::default()).unwrap().is_zero());
    }

    #[test]
    fn test_ordered_highest_first_does_not_mutate() {
        let ledger = DenominationLedger::standard_usd();
        let drawer = DrawerInventory::new(vec![
            entry("PENNY", 101),
            entry("TWENTY", 6_000),
            entry("QUARTER", 425),
        ]);
        let snapshot = drawer.clone();

        let ordered = ledger.ordered_highest_first(&drawer).unwrap();
        let names: Vec<&str> = ordered.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, ["TWENTY", "QUARTER", "PENNY"]);
        assert_eq!(drawer, snapshot);
    }

    #[test]
    fn test_ordered_highest_first_ties_keep_input_order() {
        let ledger = DenominationLedger::new(vec![
            Denomination::new("DOLLAR COIN", Money::from_cents(100)),
            Denomination::new("ONE", Money::from_cents(100)),
            Denomination::new("DIME", Money::from_cents(10)),
        ])
        .unwrap();

        let drawer = DrawerInventory::new(vec![
            entry("DIME", 50),
            entry("ONE", 300),
            entry("DOLLAR COIN", 200),
        ]);
        let ordered = ledger.ordered_highest_first(&drawer).unwrap();
        let names: Vec<&str> = ordered.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, ["ONE", "DOLLAR COIN", "DIME"]);
    }

    #[test]
    fn test_ordered_highest_first_unknown_name() {
        let ledger = DenominationLedger::standard_usd();
        let drawer = DrawerInventory::new(vec![entry("PESO", 100)]);
        assert_eq!(
            ledger.ordered_highest_first(&drawer),
            Err(CoreError::UnknownDenomination("PESO".to_string()))
        );
    }

    #[test]
    fn test_validate_inventory() {
        let ledger = DenominationLedger::standard_usd();

        assert!(ledger
            .validate_inventory(&DrawerInventory::new(vec![entry("DIME", 0), entry("ONE", 500)]))
            .is_ok());

        assert_eq!(
            ledger.validate_inventory(&DrawerInventory::new(vec![
                entry("DIME", 10),
                entry("DIME", 20),
            ])),
            Err(CoreError::DuplicateDenomination("DIME".to_string()))
        );

        assert!(matches!(
            ledger.validate_inventory(&DrawerInventory::new(vec![entry("DIME", -10)])),
            Err(CoreError::InvalidAmount { .. })
        ));

        assert!(matches!(
            ledger.validate_inventory(&DrawerInventory::new(vec![entry("QUATER", 25)])),
            Err(CoreError::UnknownDenomination(_))
        ));
    }

    #[test]
    fn test_validate_inventory_caps_each_entry() {
        let ledger = DenominationLedger::standard_usd();

        let at_cap = DrawerInventory::new(vec![entry("ONE HUNDRED", MAX_DRAWER_CENTS)]);
        assert!(ledger.validate_inventory(&at_cap).is_ok());

        let over_cap = DrawerInventory::new(vec![entry("ONE HUNDRED", MAX_DRAWER_CENTS + 1)]);
        assert!(matches!(
            ledger.validate_inventory(&over_cap),
            Err(CoreError::InvalidAmount { .. })
        ));

        // Two huge entries that would overflow when summed.
        assert!(matches!(
            ledger.inventory_from_pairs(&[
                ("ONE HUNDRED", 50_000_000_000_000_000.0),
                ("TWENTY", 50_000_000_000_000_000.0),
            ]),
            Err(CoreError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_total_reports_overflow_instead_of_wrapping() {
        let drawer = DrawerInventory::new(vec![
            entry("ONE HUNDRED", i64::MAX - 5),
            entry("TWENTY", 10),
        ]);

        assert!(matches!(drawer.total(), Err(CoreError::InvalidAmount { .. })));
        assert!(DenominationLedger::standard_usd().total_value(&drawer).is_err());
    }

    #[test]
    fn test_inventory_from_pairs_rounds_floats() {
        let ledger = DenominationLedger::standard_usd();
        let drawer = ledger
            .inventory_from_pairs(&[("NICKEL", 2.05), ("DIME", 3.1)])
            .unwrap();

        assert_eq!(drawer.amount_of("NICKEL"), Some(Money::from_cents(205)));
        assert_eq!(drawer.amount_of("DIME"), Some(Money::from_cents(310)));
        assert_eq!(drawer.amount_of("PENNY"), None);
    }

    #[test]
    fn test_entries_with_partial_units() {
        let ledger = DenominationLedger::standard_usd();
        let drawer = DrawerInventory::new(vec![
            entry("NICKEL", 203),
            entry("DIME", 310),
            entry("QUARTER", 30),
        ]);
        let partial: Vec<&str> = ledger
            .entries_with_partial_units(&drawer)
            .into_iter()
            .map(|e| e.name.as_str())
            .collect();

        assert_eq!(partial, ["NICKEL", "QUARTER"]);
    }
}
