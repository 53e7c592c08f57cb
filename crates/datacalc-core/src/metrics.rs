//! # Metrics Engine
//!
//! The five value-for-money metrics of a data bundle.
//!
//! ## Metric Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │            (price, data_amount_gb, validity_days)                       │
//! │                                                                         │
//! │   value_per_gb          = price / data_amount_gb                        │
//! │   value_per_day         = price / validity_days                         │
//! │   value_per_gb_per_day  = price / (data_amount_gb * validity_days)      │
//! │   days_per_gb           = validity_days / data_amount_gb                │
//! │   gb_per_day            = data_amount_gb / validity_days                │
//! │                                                                         │
//! │   Each result is rounded to two decimals (MetricValue::from_raw).       │
//! │   A zero denominator is CoreError::DivisionByZero, never infinity.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is stateless and reentrant: no caches, no globals,
//! no suspension points. Concurrent callers need no coordination.

use crate::error::{CoreError, CoreResult};
use crate::metric::MetricValue;
use crate::types::MetricSet;

// =============================================================================
// Denominator Guards
// =============================================================================

/// Rejects a zero data amount before it reaches a division.
#[inline]
fn nonzero_data_amount(data_amount_gb: f64) -> CoreResult<f64> {
    if data_amount_gb == 0.0 {
        return Err(CoreError::division_by_zero("data amount"));
    }
    Ok(data_amount_gb)
}

/// Rejects a zero validity period, converting to f64 for the division.
#[inline]
fn nonzero_validity_days(validity_days: u32) -> CoreResult<f64> {
    if validity_days == 0 {
        return Err(CoreError::division_by_zero("validity period"));
    }
    Ok(f64::from(validity_days))
}

// =============================================================================
// Metric Operations
// =============================================================================

/// Calculates how much is being paid for each GB of data.
///
/// ## Example
/// ```rust
/// use datacalc_core::metrics::value_per_gb;
///
/// // ₦1000 for 5 GB → ₦200 per GB
/// assert_eq!(value_per_gb(1000.0, 5.0).unwrap().value(), 200.0);
/// ```
pub fn value_per_gb(price: f64, data_amount_gb: f64) -> CoreResult<MetricValue> {
    let gb = nonzero_data_amount(data_amount_gb)?;
    Ok(MetricValue::from_raw(price / gb))
}

/// Calculates the daily cost of the bundle.
///
/// ## Example
/// ```rust
/// use datacalc_core::metrics::value_per_day;
///
/// // ₦1000 over 30 days → ₦33.33 per day
/// assert_eq!(value_per_day(1000.0, 30).unwrap().value(), 33.33);
/// ```
pub fn value_per_day(price: f64, validity_days: u32) -> CoreResult<MetricValue> {
    let days = nonzero_validity_days(validity_days)?;
    Ok(MetricValue::from_raw(price / days))
}

/// Calculates the cost efficiency metric (cost per GB per day).
pub fn value_per_gb_per_day(
    price: f64,
    data_amount_gb: f64,
    validity_days: u32,
) -> CoreResult<MetricValue> {
    let gb = nonzero_data_amount(data_amount_gb)?;
    let days = nonzero_validity_days(validity_days)?;
    Ok(MetricValue::from_raw(price / (gb * days)))
}

/// Calculates how long each GB should last if used evenly.
pub fn days_per_gb(data_amount_gb: f64, validity_days: u32) -> CoreResult<MetricValue> {
    let gb = nonzero_data_amount(data_amount_gb)?;
    Ok(MetricValue::from_raw(f64::from(validity_days) / gb))
}

/// Calculates the average daily data allowance.
pub fn gb_per_day(data_amount_gb: f64, validity_days: u32) -> CoreResult<MetricValue> {
    let days = nonzero_validity_days(validity_days)?;
    Ok(MetricValue::from_raw(data_amount_gb / days))
}

// =============================================================================
// Aggregate
// =============================================================================

/// Calculates all five metrics for a bundle.
///
/// Atomic: returns a complete [`MetricSet`] or the first error - never a
/// partial result. Computing metrics individually or through this aggregate
/// yields identical values.
///
/// ## Example
/// ```rust
/// use datacalc_core::metrics::calculate_all;
///
/// let set = calculate_all(1000.0, 5.0, 30).unwrap();
/// assert_eq!(set.value_per_gb.value(), 200.0);
/// assert_eq!(set.value_per_day.value(), 33.33);
/// assert_eq!(set.value_per_gb_per_day.value(), 6.67);
/// assert_eq!(set.days_per_gb.value(), 6.0);
/// assert_eq!(set.gb_per_day.value(), 0.17);
/// ```
pub fn calculate_all(
    price: f64,
    data_amount_gb: f64,
    validity_days: u32,
) -> CoreResult<MetricSet> {
    Ok(MetricSet {
        value_per_gb: value_per_gb(price, data_amount_gb)?,
        value_per_day: value_per_day(price, validity_days)?,
        value_per_gb_per_day: value_per_gb_per_day(price, data_amount_gb, validity_days)?,
        days_per_gb: days_per_gb(data_amount_gb, validity_days)?,
        gb_per_day: gb_per_day(data_amount_gb, validity_days)?,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// |a - b| within the slack two independent two-decimal roundings allow.
    fn assert_close(a: f64, b: f64, tolerance: f64) {
        assert!(
            (a - b).abs() <= tolerance,
            "expected {} ≈ {} (tolerance {})",
            a,
            b,
            tolerance
        );
    }

    #[test]
    fn test_bundle_1000_for_5gb_30_days() {
        assert_eq!(value_per_gb(1000.0, 5.0).unwrap().value(), 200.0);
        assert_eq!(value_per_day(1000.0, 30).unwrap().value(), 33.33);
        assert_eq!(value_per_gb_per_day(1000.0, 5.0, 30).unwrap().value(), 6.67);
        assert_eq!(days_per_gb(5.0, 30).unwrap().value(), 6.0);
        assert_eq!(gb_per_day(5.0, 30).unwrap().value(), 0.17);
    }

    #[test]
    fn test_bundle_500_for_2gb_7_days() {
        assert_eq!(value_per_gb(500.0, 2.0).unwrap().value(), 250.0);
        assert_eq!(value_per_day(500.0, 7).unwrap().value(), 71.43);
        assert_eq!(value_per_gb_per_day(500.0, 2.0, 7).unwrap().value(), 35.71);
        assert_eq!(days_per_gb(2.0, 7).unwrap().value(), 3.5);
        assert_eq!(gb_per_day(2.0, 7).unwrap().value(), 0.29);
    }

    #[test]
    fn test_value_per_gb_is_rounded_quotient() {
        for (price, gb) in [(1000.0f64, 3.0f64), (499.99, 1.5), (75.0, 0.25)] {
            let expected = ((price / gb) * 100.0).round() / 100.0;
            assert_eq!(value_per_gb(price, gb).unwrap().value(), expected);
        }
    }

    #[test]
    fn test_zero_data_amount_is_division_by_zero() {
        assert!(matches!(
            value_per_gb(100.0, 0.0),
            Err(CoreError::DivisionByZero {
                field: "data amount"
            })
        ));
        assert!(matches!(
            days_per_gb(0.0, 30),
            Err(CoreError::DivisionByZero { .. })
        ));
        assert!(matches!(
            value_per_gb_per_day(100.0, 0.0, 30),
            Err(CoreError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_zero_validity_is_division_by_zero() {
        assert!(matches!(
            value_per_day(100.0, 0),
            Err(CoreError::DivisionByZero {
                field: "validity period"
            })
        ));
        assert!(matches!(
            gb_per_day(5.0, 0),
            Err(CoreError::DivisionByZero { .. })
        ));
        assert!(matches!(
            value_per_gb_per_day(100.0, 5.0, 0),
            Err(CoreError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_calculate_all_fails_atomically() {
        // Zero data amount: no partial MetricSet, just the error
        assert!(matches!(
            calculate_all(100.0, 0.0, 30),
            Err(CoreError::DivisionByZero { .. })
        ));
        assert!(matches!(
            calculate_all(100.0, 5.0, 0),
            Err(CoreError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_calculate_all_is_idempotent() {
        let first = calculate_all(1000.0, 5.0, 30).unwrap();
        let second = calculate_all(1000.0, 5.0, 30).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_aggregate_matches_individual_calls() {
        let set = calculate_all(799.5, 3.3, 14).unwrap();
        assert_eq!(set.value_per_gb, value_per_gb(799.5, 3.3).unwrap());
        assert_eq!(set.value_per_day, value_per_day(799.5, 14).unwrap());
        assert_eq!(
            set.value_per_gb_per_day,
            value_per_gb_per_day(799.5, 3.3, 14).unwrap()
        );
        assert_eq!(set.days_per_gb, days_per_gb(3.3, 14).unwrap());
        assert_eq!(set.gb_per_day, gb_per_day(3.3, 14).unwrap());
    }

    #[test]
    fn test_gb_per_day_and_days_per_gb_are_reciprocal() {
        for (gb, days) in [(5.0, 30), (2.0, 7), (10.0, 28), (1.5, 14)] {
            let product = gb_per_day(gb, days).unwrap().value()
                * days_per_gb(gb, days).unwrap().value();
            assert_close(product, 1.0, 0.05);
        }
    }

    #[test]
    fn test_value_per_gb_per_day_consistency() {
        for (price, gb, days) in [(1000.0, 5.0, 30), (500.0, 2.0, 7), (1200.0, 8.0, 28)] {
            let combined = value_per_gb_per_day(price, gb, days).unwrap().value();
            let via_day = value_per_day(price, days).unwrap().value() / gb;
            let via_gb = value_per_gb(price, gb).unwrap().value() / f64::from(days);
            assert_close(combined, via_day, 0.01);
            assert_close(combined, via_gb, 0.01);
        }
    }

    #[test]
    fn test_fractional_data_amounts() {
        // 750 MB bundle for 3 days
        assert_eq!(value_per_gb(300.0, 0.75).unwrap().value(), 400.0);
        assert_eq!(days_per_gb(0.75, 3).unwrap().value(), 4.0);
        assert_eq!(gb_per_day(0.75, 3).unwrap().value(), 0.25);
    }
}
