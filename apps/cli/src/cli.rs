//! # Argument Surface
//!
//! Clap definitions for the `datacalc` binary.
//!
//! All three bundle fields are optional on the command line: any field left
//! out switches the binary into interactive mode, where [`crate::form`]
//! prompts for the missing values.

use clap::Parser;

/// Data bundle value calculator.
///
/// Computes what a mobile data bundle really costs: per GB, per day, per GB
/// per day, plus how far the data stretches (days per GB, GB per day).
#[derive(Debug, Parser)]
#[command(name = "datacalc", version)]
pub struct Cli {
    /// Bundle price, in currency units (e.g. 1000 or 499.99)
    #[arg(short, long)]
    pub price: Option<f64>,

    /// Data amount in GB (e.g. 5 or 1.5)
    #[arg(short = 'g', long)]
    pub data_amount: Option<f64>,

    /// Validity period in days
    #[arg(short = 'd', long)]
    pub validity_days: Option<u32>,

    /// Currency symbol prefixed to the money metrics
    #[arg(short, long, default_value = "₦")]
    pub currency: String,

    /// Print the metric set as JSON instead of labelled rows
    #[arg(long)]
    pub json: bool,
}
