//! # Denominations
//!
//! A denomination is a named unit of cash with a fixed face value.
//!
//! ## Standard US Drawer
//! ```text
//! ┌──────────────┬─────────┐
//! │ Name         │ Value   │
//! ├──────────────┼─────────┤
//! │ PENNY        │ $0.01   │
//! │ NICKEL       │ $0.05   │
//! │ DIME         │ $0.10   │
//! │ QUARTER      │ $0.25   │
//! │ ONE          │ $1.00   │
//! │ FIVE         │ $5.00   │
//! │ TEN          │ $10.00  │
//! │ TWENTY       │ $20.00  │
//! │ ONE HUNDRED  │ $100.00 │
//! └──────────────┴─────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// The US denominations as `(name, cents)`, lowest first.
pub const USD_DENOMINATIONS: [(&str, i64); 9] = [
    ("PENNY", 1),
    ("NICKEL", 5),
    ("DIME", 10),
    ("QUARTER", 25),
    ("ONE", 100),
    ("FIVE", 500),
    ("TEN", 1_000),
    ("TWENTY", 2_000),
    ("ONE HUNDRED", 10_000),
];

/// A named currency unit with a fixed face value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Denomination {
    /// Identifier used in drawer entries, e.g. `"QUARTER"`.
    pub name: String,

    /// Face value of a single unit.
    pub unit_value: Money,
}

impl Denomination {
    /// Creates a denomination.
    pub fn new(name: impl Into<String>, unit_value: Money) -> Self {
        Denomination {
            name: name.into(),
            unit_value,
        }
    }

    /// Returns the standard US set, lowest value first.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::denomination::Denomination;
    ///
    /// let usd = Denomination::usd();
    /// assert_eq!(usd.len(), 9);
    /// assert_eq!(usd[3].name, "QUARTER");
    /// assert_eq!(usd[3].unit_value.cents(), 25);
    /// ```
    pub fn usd() -> Vec<Denomination> {
        USD_DENOMINATIONS
            .iter()
            .map(|(name, cents)| Denomination::new(*name, Money::from_cents(*cents)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_values_ascend() {
        let usd = Denomination::usd();
        assert!(usd
            .windows(2)
            .all(|pair| pair[0].unit_value < pair[1].unit_value));
        assert_eq!(usd[0].name, "PENNY");
        assert_eq!(usd[8].name, "ONE HUNDRED");
    }
}
