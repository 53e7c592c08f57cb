//! # Domain Types
//!
//! Core domain types for the data bundle calculator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐        ┌──────────────────────────────────┐      │
//! │  │   BundleInput    │        │            MetricSet             │      │
//! │  │  ──────────────  │ engine │  ──────────────────────────────  │      │
//! │  │  price           │ ─────► │  value_per_gb      (valuePerGB)  │      │
//! │  │  data_amount_gb  │        │  value_per_day     (valuePerDay) │      │
//! │  │  validity_days   │        │  value_per_gb_per_day            │      │
//! │  └──────────────────┘        │  days_per_gb       (daysPerGB)   │      │
//! │                              │  gb_per_day        (gbPerDay)    │      │
//! │  ┌──────────────────┐        └──────────────────────────────────┘      │
//! │  │    MetricKind    │                                                  │
//! │  │  ──────────────  │   Lookup key for MetricSet::get; carries the     │
//! │  │  5 metric names  │   wire name used in the JSON map                 │
//! │  └──────────────────┘                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! Both types are transient value types: a `BundleInput` is built fresh from
//! parsed user input per calculation request, and the `MetricSet` it produces
//! is immutable and discarded when the caller resets or recalculates.
//! Nothing here is ever persisted.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::metric::MetricValue;
use crate::metrics;

// =============================================================================
// Bundle Input
// =============================================================================

/// The three numbers that describe a data bundle.
///
/// The front-end owns parsing raw field text into these numbers and runs
/// [`crate::validation::validate_bundle`] before handing them to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BundleInput {
    /// Total price of the bundle, in currency units.
    pub price: f64,

    /// Total amount of data in GB.
    #[serde(rename = "dataAmountGB")]
    pub data_amount_gb: f64,

    /// Validity period in days.
    #[serde(rename = "validityDays")]
    pub validity_days: u32,
}

impl BundleInput {
    /// Creates a bundle input from the three field values.
    #[inline]
    pub const fn new(price: f64, data_amount_gb: f64, validity_days: u32) -> Self {
        BundleInput {
            price,
            data_amount_gb,
            validity_days,
        }
    }

    /// Computes all five metrics for this bundle.
    ///
    /// Convenience wrapper over [`metrics::calculate_all`].
    ///
    /// ## Example
    /// ```rust
    /// use datacalc_core::BundleInput;
    ///
    /// let bundle = BundleInput::new(500.0, 2.0, 7);
    /// let set = bundle.metrics().unwrap();
    /// assert_eq!(set.days_per_gb.value(), 3.5);
    /// ```
    pub fn metrics(&self) -> CoreResult<MetricSet> {
        metrics::calculate_all(self.price, self.data_amount_gb, self.validity_days)
    }
}

// =============================================================================
// Metric Kind
// =============================================================================

/// Identifies one of the five metrics.
///
/// Consumers of [`MetricSet`] look values up by kind; the wire name doubles
/// as the key of the serialized map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    /// Cost of each GB of data.
    #[serde(rename = "valuePerGB")]
    ValuePerGb,

    /// Daily cost of the bundle.
    #[serde(rename = "valuePerDay")]
    ValuePerDay,

    /// Cost efficiency: cost per GB per day.
    #[serde(rename = "valuePerGBPerDay")]
    ValuePerGbPerDay,

    /// How long each GB should last if used evenly.
    #[serde(rename = "daysPerGB")]
    DaysPerGb,

    /// Average daily data allowance.
    #[serde(rename = "gbPerDay")]
    GbPerDay,
}

impl MetricKind {
    /// All five kinds, in presentation order.
    pub const ALL: [MetricKind; 5] = [
        MetricKind::ValuePerGb,
        MetricKind::ValuePerDay,
        MetricKind::ValuePerGbPerDay,
        MetricKind::DaysPerGb,
        MetricKind::GbPerDay,
    ];

    /// The wire name of this metric (key in the serialized map).
    pub const fn key(&self) -> &'static str {
        match self {
            MetricKind::ValuePerGb => "valuePerGB",
            MetricKind::ValuePerDay => "valuePerDay",
            MetricKind::ValuePerGbPerDay => "valuePerGBPerDay",
            MetricKind::DaysPerGb => "daysPerGB",
            MetricKind::GbPerDay => "gbPerDay",
        }
    }
}

// =============================================================================
// Metric Set
// =============================================================================

/// The five derived metrics of a bundle, each rounded to two decimals.
///
/// Produced atomically by [`metrics::calculate_all`]: either every field is
/// present or the computation failed as a whole. Serializes as a flat map:
///
/// ```json
/// {
///   "valuePerGB": 200.0,
///   "valuePerDay": 33.33,
///   "valuePerGBPerDay": 6.67,
///   "daysPerGB": 6.0,
///   "gbPerDay": 0.17
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    /// Cost of each GB of data.
    #[serde(rename = "valuePerGB")]
    pub value_per_gb: MetricValue,

    /// Daily cost of the bundle.
    #[serde(rename = "valuePerDay")]
    pub value_per_day: MetricValue,

    /// Cost per GB per day.
    #[serde(rename = "valuePerGBPerDay")]
    pub value_per_gb_per_day: MetricValue,

    /// Days each GB should last if used evenly.
    #[serde(rename = "daysPerGB")]
    pub days_per_gb: MetricValue,

    /// Average daily data allowance in GB.
    #[serde(rename = "gbPerDay")]
    pub gb_per_day: MetricValue,
}

impl MetricSet {
    /// Looks a metric up by kind.
    pub const fn get(&self, kind: MetricKind) -> MetricValue {
        match kind {
            MetricKind::ValuePerGb => self.value_per_gb,
            MetricKind::ValuePerDay => self.value_per_day,
            MetricKind::ValuePerGbPerDay => self.value_per_gb_per_day,
            MetricKind::DaysPerGb => self.days_per_gb,
            MetricKind::GbPerDay => self.gb_per_day,
        }
    }

    /// All five metrics with their kinds, in presentation order.
    pub fn entries(&self) -> [(MetricKind, MetricValue); 5] {
        [
            (MetricKind::ValuePerGb, self.value_per_gb),
            (MetricKind::ValuePerDay, self.value_per_day),
            (MetricKind::ValuePerGbPerDay, self.value_per_gb_per_day),
            (MetricKind::DaysPerGb, self.days_per_gb),
            (MetricKind::GbPerDay, self.gb_per_day),
        ]
    }

    /// The metrics as a name → display-text map.
    ///
    /// Keyed by wire name (`"valuePerGB"` → `"200"`), each value in its
    /// natural decimal text form.
    pub fn to_text_map(&self) -> std::collections::BTreeMap<&'static str, String> {
        self.entries()
            .into_iter()
            .map(|(kind, value)| (kind.key(), value.to_string()))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> MetricSet {
        BundleInput::new(1000.0, 5.0, 30).metrics().unwrap()
    }

    #[test]
    fn test_get_by_kind() {
        let set = sample_set();
        assert_eq!(set.get(MetricKind::ValuePerGb).value(), 200.0);
        assert_eq!(set.get(MetricKind::GbPerDay).value(), 0.17);
    }

    #[test]
    fn test_entries_cover_all_kinds() {
        let set = sample_set();
        let entries = set.entries();
        assert_eq!(entries.len(), MetricKind::ALL.len());
        for (slot, kind) in entries.iter().zip(MetricKind::ALL) {
            assert_eq!(slot.0, kind);
            assert_eq!(slot.1, set.get(kind));
        }
    }

    #[test]
    fn test_text_map_shape() {
        let map = sample_set().to_text_map();
        assert_eq!(map["valuePerGB"], "200");
        assert_eq!(map["valuePerDay"], "33.33");
        assert_eq!(map["valuePerGBPerDay"], "6.67");
        assert_eq!(map["daysPerGB"], "6");
        assert_eq!(map["gbPerDay"], "0.17");
    }

    #[test]
    fn test_wire_keys() {
        let json = serde_json::to_value(sample_set()).unwrap();
        let object = json.as_object().unwrap();
        for kind in MetricKind::ALL {
            assert!(object.contains_key(kind.key()), "missing {}", kind.key());
        }
        assert_eq!(object["valuePerGB"], serde_json::json!(200.0));
        assert_eq!(object["valuePerDay"], serde_json::json!(33.33));
    }

    #[test]
    fn test_bundle_input_wire_format() {
        let bundle: BundleInput =
            serde_json::from_str(r#"{"price":1000.0,"dataAmountGB":5.0,"validityDays":30}"#)
                .unwrap();
        assert_eq!(bundle, BundleInput::new(1000.0, 5.0, 30));
    }
}
