//! # Validation Module
//!
//! Input validation for values typed at the register.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end (CLI args, web form)                               │
//! │  └── Raw text: "20", "$19.50", "abc"                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── parse_amount: text → Money, or ValidationError                    │
//! │  └── validate_price / validate_payment: business ranges                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: checkout()                                                   │
//! │  └── Refuses non-positive prices and negative payments again           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::validation::{parse_amount, validate_payment};
//!
//! let payment = parse_amount("payment", "$20.00").unwrap();
//! validate_payment(payment).unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_TRANSACTION_CENTS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted denomination name.
pub const MAX_DENOMINATION_NAME_LEN: usize = 32;

// =============================================================================
// Amount Parsing
// =============================================================================

/// Parses a user-entered amount, naming `field` in any error.
///
/// ## Example
/// ```rust
/// use till_core::validation::parse_amount;
///
/// assert_eq!(parse_amount("price", "19.5").unwrap().cents(), 1950);
/// assert!(parse_amount("price", "19.555").is_err());
/// assert!(parse_amount("price", "").is_err());
/// ```
pub fn parse_amount(field: &str, text: &str) -> ValidationResult<Money> {
    text.parse::<Money>().map_err(|err| match err {
        ValidationError::Required { .. } => ValidationError::Required {
            field: field.to_string(),
        },
        ValidationError::InvalidFormat { reason, .. } => ValidationError::InvalidFormat {
            field: field.to_string(),
            reason,
        },
        other => other,
    })
}

// =============================================================================
// Amount Validators
// =============================================================================

/// Validates an item price.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_TRANSACTION_CENTS
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    check_ceiling("price", price)
}

/// Validates a cash payment.
///
/// ## Rules
/// - Must be non-negative (zero is a valid, if useless, payment)
/// - Must not exceed MAX_TRANSACTION_CENTS
pub fn validate_payment(payment: Money) -> ValidationResult<()> {
    if payment.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "payment".to_string(),
            min: 0,
            max: MAX_TRANSACTION_CENTS,
        });
    }

    check_ceiling("payment", payment)
}

fn check_ceiling(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.cents() > MAX_TRANSACTION_CENTS {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_TRANSACTION_CENTS,
        });
    }
    Ok(())
}

// =============================================================================
// Name Validators
// =============================================================================

/// Validates a denomination name from configuration.
///
/// ## Rules
/// - Must not be empty
/// - At most MAX_DENOMINATION_NAME_LEN characters
/// - Uppercase letters, digits and single spaces only (`"ONE HUNDRED"`)
pub fn validate_denomination_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "denomination name".to_string(),
        });
    }

    if name.len() > MAX_DENOMINATION_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "denomination name".to_string(),
            max: MAX_DENOMINATION_NAME_LEN,
        });
    }

    let well_formed = name
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == ' ')
        && !name.starts_with(' ')
        && !name.ends_with(' ')
        && !name.contains("  ");

    if !well_formed {
        return Err(ValidationError::InvalidFormat {
            field: "denomination name".to_string(),
            reason: "use uppercase letters, digits and single spaces".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
