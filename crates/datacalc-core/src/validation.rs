//! # Validation Module
//!
//! Bundle field validation for callers of the metrics engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front-end (apps/cli)                                         │
//! │  ├── Raw text parsing ("12.5" → 12.5)                                  │
//! │  └── Empty-field detection ("All fields are required!")                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Finiteness and sign checks                                        │
//! │  └── Sanity bounds (validity period)                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine (metrics)                                             │
//! │  └── Zero-denominator guard (DivisionByZero)                           │
//! │                                                                         │
//! │  The engine never parses text; raw input stops at layer 1.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use datacalc_core::validation::{validate_bundle, validate_price};
//! use datacalc_core::BundleInput;
//!
//! validate_price(1000.0).unwrap();
//! validate_bundle(&BundleInput::new(1000.0, 5.0, 30)).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::BundleInput;
use crate::MAX_VALIDITY_DAYS;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a bundle price.
///
/// ## Rules
/// - Must be a finite number (no NaN, no infinity)
/// - Must be greater than zero (a free bundle has no cost metrics)
///
/// ## Example
/// ```rust
/// use datacalc_core::validation::validate_price;
///
/// assert!(validate_price(499.99).is_ok());
/// assert!(validate_price(0.0).is_err());
/// assert!(validate_price(-100.0).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "price",
            reason: "must be a finite number",
        });
    }

    if price <= 0.0 {
        return Err(ValidationError::MustBePositive { field: "price" });
    }

    Ok(())
}

/// Validates a data amount in GB.
///
/// ## Rules
/// - Must be a finite number
/// - Must be greater than zero
pub fn validate_data_amount(data_amount_gb: f64) -> ValidationResult<()> {
    if !data_amount_gb.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "data amount",
            reason: "must be a finite number",
        });
    }

    if data_amount_gb <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "data amount",
        });
    }

    Ok(())
}

/// Validates a validity period in days.
///
/// ## Rules
/// - Must be at least 1
/// - Must not exceed [`MAX_VALIDITY_DAYS`]
pub fn validate_validity_days(validity_days: u32) -> ValidationResult<()> {
    if validity_days == 0 {
        return Err(ValidationError::MustBePositive {
            field: "validity period",
        });
    }

    if validity_days > MAX_VALIDITY_DAYS {
        return Err(ValidationError::OutOfRange {
            field: "validity period",
            min: 1,
            max: i64::from(MAX_VALIDITY_DAYS),
        });
    }

    Ok(())
}

// =============================================================================
// Bundle Validator
// =============================================================================

/// Validates all three fields of a bundle.
///
/// Fails on the first offending field, in form order (price, data amount,
/// validity period).
pub fn validate_bundle(bundle: &BundleInput) -> ValidationResult<()> {
    validate_price(bundle.price)?;
    validate_data_amount(bundle.data_amount_gb)?;
    validate_validity_days(bundle.validity_days)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_price() {
        assert!(validate_price(1000.0).is_ok());
        assert!(validate_price(0.01).is_ok());

        assert!(validate_price(0.0).is_err());
        assert!(validate_price(-100.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_data_amount() {
        assert!(validate_data_amount(5.0).is_ok());
        assert!(validate_data_amount(0.25).is_ok());

        assert!(validate_data_amount(0.0).is_err());
        assert!(validate_data_amount(-1.0).is_err());
        assert!(validate_data_amount(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_validity_days() {
        assert!(validate_validity_days(1).is_ok());
        assert!(validate_validity_days(30).is_ok());
        assert!(validate_validity_days(MAX_VALIDITY_DAYS).is_ok());

        assert!(validate_validity_days(0).is_err());
        assert!(validate_validity_days(MAX_VALIDITY_DAYS + 1).is_err());
    }

    #[test]
    fn test_validate_bundle_reports_first_offender() {
        let bundle = BundleInput::new(-1.0, 0.0, 0);
        let err = validate_bundle(&bundle).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MustBePositive { field: "price" }
        ));

        assert!(validate_bundle(&BundleInput::new(1000.0, 5.0, 30)).is_ok());
    }
}
