//! # Metric Module
//!
//! Provides the `MetricValue` type for handling derived metric values.
//!
//! ## The Precision Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ROUNDING HAPPENS EXACTLY ONCE                                          │
//! │                                                                         │
//! │  Raw division:                                                          │
//! │    1000 / 30 = 33.333333333333336                                       │
//! │                                                                         │
//! │  What the user must see:                                                │
//! │    33.33                                                                │
//! │                                                                         │
//! │  OUR SOLUTION: round on construction                                    │
//! │    MetricValue::from_raw(1000.0 / 30.0) == 33.33                        │
//! │    A MetricValue NEVER holds more than two decimals.                    │
//! │                                                                         │
//! │  Rounding rule: round(value * 100) / 100, ties away from zero.          │
//! │  Display: the shortest decimal form, no forced trailing zeros           │
//! │    (200 not 200.00, 6 not 6.0, 33.33 stays 33.33).                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use datacalc_core::metric::MetricValue;
//!
//! let value = MetricValue::from_raw(1000.0 / 30.0);
//!
//! assert_eq!(value.value(), 33.33);
//! assert_eq!(value.to_string(), "33.33");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Rounding Primitive
// =============================================================================

/// Rounds a value to two decimal places.
///
/// Uses `f64::round`, which rounds ties away from zero. This is the one
/// rounding rule shared by all five metrics; nothing else in the crate
/// truncates or rounds.
///
/// ## Example
/// ```rust
/// use datacalc_core::metric::round_to_two_decimals;
///
/// assert_eq!(round_to_two_decimals(33.333333), 33.33);
/// assert_eq!(round_to_two_decimals(6.666666), 6.67);
/// assert_eq!(round_to_two_decimals(0.125), 0.13); // tie rounds away from zero
/// ```
#[inline]
pub fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// MetricValue Type
// =============================================================================

/// A single derived metric, rounded to two decimal places on construction.
///
/// ## Design Decisions
/// - **f64**: Metrics are display quantities, not ledger entries; the two
///   test points of the contract (`33.33`, `0.17`) are reachable only through
///   real division followed by rounding, so the inner value is a float with
///   the rounding applied up front.
/// - **Single field tuple struct**: Zero-cost abstraction over f64
/// - **Serde as bare number**: A `MetricValue` serializes as `33.33`, not as
///   an object, so a `MetricSet` stays a flat name → number map on the wire
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct MetricValue(f64);

impl MetricValue {
    /// Creates a metric from a raw (unrounded) computation result.
    ///
    /// ## Example
    /// ```rust
    /// use datacalc_core::metric::MetricValue;
    ///
    /// let per_day = MetricValue::from_raw(500.0 / 7.0);
    /// assert_eq!(per_day.value(), 71.43);
    /// ```
    #[inline]
    pub fn from_raw(raw: f64) -> Self {
        MetricValue(round_to_two_decimals(raw))
    }

    /// Returns the rounded numeric value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Checks if the metric rounded down to zero.
    ///
    /// Happens for very diluted bundles, e.g. 0.001 GB per day.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the metric in its natural decimal form.
///
/// ## Note
/// This is the value half of the presentation contract: `200`, `33.33`,
/// `0.17`. Currency symbols and units are prepended/appended by the
/// front-end, never here.
impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Conversion from a raw f64 applies the rounding rule.
impl From<f64> for MetricValue {
    fn from(raw: f64) -> Self {
        MetricValue::from_raw(raw)
    }
}

/// Conversion back to the bare rounded number (used by serde).
impl From<MetricValue> for f64 {
    fn from(metric: MetricValue) -> Self {
        metric.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
