//! # datacalc Entry Point
//!
//! Terminal front-end for the data bundle value calculator.
//!
//! ## Application Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           datacalc                                      │
//! │                                                                         │
//! │  main.rs ──► init tracing, parse args                                   │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  form.rs ──► collect bundle fields (flags or prompts), parse, validate  │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  datacalc-core ──► calculate_all(price, data_amount_gb, validity_days)  │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  render.rs ──► labelled rows (default) or JSON (--json)                 │
//! │                                                                         │
//! │  Errors surface through error.rs: message on stderr, nonzero exit.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! # All fields as flags
//! datacalc -p 1000 -g 5 -d 30
//!
//! # Prompt for everything (interactive form)
//! datacalc
//!
//! # Different currency symbol, JSON output
//! datacalc -p 500 -g 2 -d 7 --currency '$' --json
//! ```

mod cli;
mod error;
mod form;
mod render;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::AppError;

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        err.report();
        std::process::exit(err.exit_code());
    }
}

/// Collects input, runs the engine, renders the result.
fn run(cli: &Cli) -> Result<(), AppError> {
    let bundle = form::collect_bundle(cli)?;
    debug!(
        price = bundle.price,
        data_amount_gb = bundle.data_amount_gb,
        validity_days = bundle.validity_days,
        "calculating metrics"
    );

    let metrics = bundle.metrics()?;

    if cli.json {
        render::print_json(&metrics)?;
    } else {
        render::print_results(&metrics, &cli.currency);
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=datacalc=trace` - Trace the datacalc crates only
/// - Default: WARN (the terminal belongs to the form and the results)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
