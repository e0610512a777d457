//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CoreError        - Configuration and amount errors                │
//! │  └── ValidationError  - Input parsing failures                         │
//! │                                                                         │
//! │  register errors (apps/register)                                       │
//! │  └── RegisterError    - Config file, I/O, rendering                    │
//! │                                                                         │
//! │  Flow: ValidationError / CoreError → RegisterError → exit status       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Insufficient customer funds, insufficient drawer funds and a closed drawer
//! are ordinary transaction outcomes. They are reported through
//! [`ChangeStatus`](crate::change::ChangeStatus), never through these types.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core change-making errors.
///
/// Every variant is either a configuration mistake (caught when the drawer
/// is loaded) or an amount the core refuses to calculate with.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A drawer entry or lookup names a denomination outside the universe.
    ///
    /// ## When This Occurs
    /// - Drawer config lists `"TWO"` but the ledger has no such coin
    /// - A typo such as `"QUATER"` in the register file
    #[error("Unknown denomination: {0}")]
    UnknownDenomination(String),

    /// The same denomination appears twice in a universe or an inventory.
    #[error("Denomination listed more than once: {0}")]
    DuplicateDenomination(String),

    /// A denomination definition is unusable (e.g. zero face value).
    #[error("Invalid denomination {name}: {reason}")]
    InvalidDenomination { name: String, reason: String },

    /// A monetary amount is negative, non-finite or otherwise unusable.
    ///
    /// ## User Workflow
    /// ```text
    /// Cashier types payment: -5
    ///      │
    ///      ▼
    /// checkout(price, payment, drawer)
    ///      │
    ///      ▼
    /// InvalidAmount { field: "payment", reason: "must not be negative" }
    /// ```
    #[error("Invalid {field}: {reason}")]
    InvalidAmount { field: String, reason: String },
}

impl CoreError {
    /// Shorthand for [`CoreError::InvalidAmount`].
    pub fn invalid_amount(field: &str, reason: impl Into<String>) -> Self {
        CoreError::InvalidAmount {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user-entered text doesn't meet requirements.
/// Used before any amount reaches the change calculator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., "12.3.4" as an amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownDenomination("QUATER".to_string());
        assert_eq!(err.to_string(), "Unknown denomination: QUATER");

        let err = CoreError::invalid_amount("payment", "must not be negative");
        assert_eq!(err.to_string(), "Invalid payment: must not be negative");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "payment".to_string(),
        };
        assert_eq!(err.to_string(), "payment is required");

        let err = ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "more than two decimal places".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "price has invalid format: more than two decimal places"
        );
    }
}
