//! # Result Rendering
//!
//! Turns a [`MetricSet`] into the labelled rows of the result section, or
//! into JSON for scripting.
//!
//! ## Output Shape
//! ```text
//! Result
//! Value Per GB:          ₦200
//! Value Per Day:         ₦33.33
//! Value Per GB Per Day:  ₦6.67
//! Days Per GB:           6 days
//! GB Per Day:            0.17 GB
//! ```
//!
//! The core returns bare numbers; the currency symbol and units are applied
//! here and nowhere else.

use colored::Colorize;
use datacalc_core::{MetricKind, MetricSet};

use crate::error::AppError;

/// Column the values start at; fits the longest label plus two spaces.
const LABEL_WIDTH: usize = 22;

/// Human label for a metric row.
fn label(kind: MetricKind) -> &'static str {
    match kind {
        MetricKind::ValuePerGb => "Value Per GB:",
        MetricKind::ValuePerDay => "Value Per Day:",
        MetricKind::ValuePerGbPerDay => "Value Per GB Per Day:",
        MetricKind::DaysPerGb => "Days Per GB:",
        MetricKind::GbPerDay => "GB Per Day:",
    }
}

/// Decorates a metric's text with its unit.
///
/// Money metrics get the currency symbol as a prefix; the usage metrics get
/// their unit as a suffix.
fn decorate(kind: MetricKind, text: &str, currency: &str) -> String {
    match kind {
        MetricKind::ValuePerGb | MetricKind::ValuePerDay | MetricKind::ValuePerGbPerDay => {
            format!("{}{}", currency, text)
        }
        MetricKind::DaysPerGb => format!("{} days", text),
        MetricKind::GbPerDay => format!("{} GB", text),
    }
}

/// The five result rows, in presentation order.
pub fn result_rows(set: &MetricSet, currency: &str) -> Vec<(&'static str, String)> {
    set.entries()
        .into_iter()
        .map(|(kind, value)| (label(kind), decorate(kind, &value.to_string(), currency)))
        .collect()
}

/// Prints the result section with bold labels.
pub fn print_results(set: &MetricSet, currency: &str) {
    println!();
    println!("{}", "Result".bold());
    for (label, value) in result_rows(set, currency) {
        // Pad before styling: ANSI escape codes would break the column width
        println!("{} {}", format!("{:<width$}", label, width = LABEL_WIDTH).bold(), value);
    }
}

/// Prints the metric set as pretty JSON.
pub fn print_json(set: &MetricSet) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(set)
        .map_err(|err| AppError::internal(format!("failed to serialize metrics: {}", err)))?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use datacalc_core::BundleInput;

    fn sample_set() -> MetricSet {
        BundleInput::new(1000.0, 5.0, 30).metrics().unwrap()
    }

    #[test]
    fn test_result_rows_have_units() {
        let rows = result_rows(&sample_set(), "₦");
        assert_eq!(
            rows,
            vec![
                ("Value Per GB:", "₦200".to_string()),
                ("Value Per Day:", "₦33.33".to_string()),
                ("Value Per GB Per Day:", "₦6.67".to_string()),
                ("Days Per GB:", "6 days".to_string()),
                ("GB Per Day:", "0.17 GB".to_string()),
            ]
        );
    }

    #[test]
    fn test_currency_symbol_is_caller_supplied() {
        let rows = result_rows(&sample_set(), "$");
        assert_eq!(rows[0].1, "$200");
        // Usage metrics are not money; no symbol
        assert_eq!(rows[3].1, "6 days");
    }

    #[test]
    fn test_labels_fit_the_column() {
        for kind in MetricKind::ALL {
            assert!(label(kind).len() < LABEL_WIDTH);
        }
    }
}
