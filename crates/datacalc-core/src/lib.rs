//! # datacalc-core: Pure Metric Computation for the Data Bundle Calculator
//!
//! This crate is the **heart** of the calculator. It turns the three numbers
//! that describe a data bundle (price, data amount, validity period) into
//! five value-for-money metrics, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     datacalc Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front-end (apps/cli)                         │   │
//! │  │    Field Prompts ──► Parsing ──► Validation ──► Rendering       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ three numbers in, MetricSet out        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ datacalc-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │  metric   │  │  metrics  │  │ validation│   │   │
//! │  │   │  Bundle   │  │ rounding  │  │  engine   │  │   rules   │   │   │
//! │  │   │ MetricSet │  │  display  │  │ 5 metrics │  │  checks   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (BundleInput, MetricSet, MetricKind)
//! - [`metric`] - MetricValue with the two-decimal rounding rule
//! - [`metrics`] - The five metric operations and the aggregate
//! - [`error`] - Domain error types
//! - [`validation`] - Bundle field validation for callers
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Terminal, network, file system access is FORBIDDEN here
//! 3. **Explicit Rounding**: Every metric is rounded to two decimals, in one place
//! 4. **Explicit Errors**: A zero denominator is a typed error, never infinity or NaN
//!
//! ## Example Usage
//!
//! ```rust
//! use datacalc_core::metrics;
//! use datacalc_core::MetricKind;
//!
//! // ₦1000 for 5 GB, valid for 30 days
//! let set = metrics::calculate_all(1000.0, 5.0, 30).unwrap();
//!
//! assert_eq!(set.get(MetricKind::ValuePerGb).value(), 200.0);
//! assert_eq!(set.get(MetricKind::ValuePerDay).to_string(), "33.33");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod metric;
pub mod metrics;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use datacalc_core::MetricSet` instead of
// `use datacalc_core::types::MetricSet`

pub use error::{CoreError, CoreResult, ValidationError};
pub use metric::MetricValue;
pub use types::{BundleInput, MetricKind, MetricSet};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum validity period accepted for a bundle, in days (10 years).
///
/// No carrier sells a longer plan; anything above this is a typo
/// (e.g. pasting a price into the days field).
pub const MAX_VALIDITY_DAYS: u32 = 3650;
