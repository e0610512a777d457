//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Counting change with binary floats:                                    │
//! │    0.50 - 0.25 - 0.10 - 0.10 = 0.04999999999999999  ❌ WRONG!           │
//! │    → the last nickel "doesn't fit" and the drawer reports INSUFFICIENT  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    50 - 25 - 10 - 10 = 5 cents, exactly                                 │
//! │    Every step is already "rounded to 2 decimals"; comparisons are exact │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Decimal text and floats only appear at the boundary, through
//! [`Money::from_str`](std::str::FromStr) and [`Money::from_major_f64`].
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//!
//! let quarter = Money::from_cents(25);
//! let paid: Money = "20.00".parse().unwrap();
//! let price: Money = "19.50".parse().unwrap();
//!
//! assert_eq!(paid - price, quarter * 2);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};

/// Largest float magnitude (in cents) that converts to `i64` without loss of range.
const MAX_F64_CENTS: f64 = 9.0e18;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: `payment - price` may be negative before classification
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as cents**: `{"amount": 25}` means $0.25
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let penny = Money::from_cents(1);
    /// assert_eq!(penny.cents(), 1);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a float amount in major units (dollars) to Money.
    ///
    /// The value is rounded to the nearest cent, half away from zero, which
    /// is what a cashier means by `19.5` or `0.1`.
    ///
    /// ## Errors
    /// `CoreError::InvalidAmount` for NaN, infinities and values too large
    /// to count in cents.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_f64(3.1).unwrap().cents(), 310);
    /// assert_eq!(Money::from_major_f64(0.1 + 0.2).unwrap().cents(), 30);
    /// assert!(Money::from_major_f64(f64::NAN).is_err());
    /// ```
    pub fn from_major_f64(value: f64) -> CoreResult<Self> {
        if !value.is_finite() {
            return Err(CoreError::invalid_amount("amount", "must be a finite number"));
        }

        let cents = (value * 100.0).round();
        if cents.abs() > MAX_F64_CENTS {
            return Err(CoreError::invalid_amount("amount", "is too large"));
        }

        Ok(Money(cents as i64))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value in major units as a float (for display only).
    #[inline]
    pub fn to_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// How many whole `unit`s fit into this amount.
    ///
    /// Partial units are discarded, so a drawer holding $0.23 in nickels
    /// contains 4 nickels. Returns 0 for a non-positive unit or amount.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let nickel = Money::from_cents(5);
    /// assert_eq!(Money::from_cents(23).whole_units_of(nickel), 4);
    /// assert_eq!(Money::from_cents(4).whole_units_of(nickel), 0);
    /// ```
    #[inline]
    pub const fn whole_units_of(&self, unit: Money) -> i64 {
        if unit.0 <= 0 || self.0 <= 0 {
            return 0;
        }
        self.0 / unit.0
    }

    /// Adds two amounts, returning `None` on i64 overflow.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let a = Money::from_cents(i64::MAX - 1);
    /// assert_eq!(a.checked_add(Money::from_cents(1)), Some(Money::from_cents(i64::MAX)));
    /// assert_eq!(a.checked_add(Money::from_cents(2)), None);
    /// ```
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text such as `"19.50"`, `"$20"` or `"0.5"`.
///
/// ## Rules
/// - Optional leading `-`, then an optional `$`
/// - At least one digit
/// - At most two digits after the decimal point (no silent rounding)
///
/// The error names the field `amount`; callers that know the field use
/// [`validation::parse_amount`](crate::validation::parse_amount).
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let text = s.trim();
        if text.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }

        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let text = text.strip_prefix('$').unwrap_or(text);

        let (major_text, minor_text) = match text.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (text, ""),
        };

        if major_text.is_empty() && minor_text.is_empty() {
            return Err(invalid("no digits"));
        }
        if !major_text.chars().all(|c| c.is_ascii_digit())
            || !minor_text.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("must contain only digits and one decimal point"));
        }
        if minor_text.len() > 2 {
            return Err(invalid("more than two decimal places"));
        }

        let major: i64 = if major_text.is_empty() {
            0
        } else {
            major_text.parse().map_err(|_| invalid("is too large"))?
        };
        let minor: i64 = match minor_text.len() {
            0 => 0,
            1 => minor_text.parse::<i64>().map_err(|_| invalid("bad cents"))? * 10,
            _ => minor_text.parse().map_err(|_| invalid("bad cents"))?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// Always two decimals (`$0.50`). The register's legacy status line uses
/// the shorter form and formats amounts itself.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a unit count.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing drawer entries or breakdown lines.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
