//! # Error Types
//!
//! Domain-specific error types for datacalc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  datacalc-core errors (this file)                                      │
//! │  ├── CoreError        - Metric computation failures                    │
//! │  └── ValidationError  - Bundle field validation failures               │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  └── AppError         - What the user sees (message + exit code)       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → Terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (which field divided by zero)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Metric computation errors.
///
/// The engine assumes finite numeric inputs (the caller parses and validates
/// raw text before invoking it) and fails only when a denominator is zero.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A metric would divide by a zero denominator.
    ///
    /// ## When This Occurs
    /// - `data_amount_gb` is 0 in a per-GB metric
    /// - `validity_days` is 0 in a per-day metric
    ///
    /// The raw division would produce infinity (or NaN); the engine refuses
    /// to hand such a value to the caller.
    #[error("division by zero: {field} is zero")]
    DivisionByZero { field: &'static str },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a division-by-zero error for the named denominator field.
    pub(crate) fn division_by_zero(field: &'static str) -> Self {
        CoreError::DivisionByZero { field }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Bundle field validation errors.
///
/// These occur when user input doesn't describe a sane bundle. They are
/// raised by the [`crate::validation`] module before the engine runs, so the
/// engine itself only ever deals with the zero-denominator case.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Value must be positive.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: &'static str },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Invalid numeric value (e.g. NaN or infinite).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::division_by_zero("data amount");
        assert_eq!(err.to_string(), "division by zero: data amount is zero");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "price" };
        assert_eq!(err.to_string(), "price is required");

        let err = ValidationError::MustBePositive {
            field: "data amount",
        };
        assert_eq!(err.to_string(), "data amount must be greater than zero");

        let err = ValidationError::OutOfRange {
            field: "validity period",
            min: 1,
            max: 3650,
        };
        assert_eq!(
            err.to_string(),
            "validity period must be between 1 and 3650"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required { field: "price" };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
