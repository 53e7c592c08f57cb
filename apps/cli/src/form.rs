//! # Input Form
//!
//! Interactive collection of the three bundle fields.
//!
//! ## Form Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Field Collection                                     │
//! │                                                                         │
//! │  Flags cover all 3 fields? ──► validate ──► BundleInput                 │
//! │        │ no                                                             │
//! │        ▼                                                                │
//! │  Prompt each missing field:                                             │
//! │    Price (₦): _                                                         │
//! │    Data Amount (GB): _                                                  │
//! │    Validity Period (Days): _                                            │
//! │        │                                                                │
//! │        ├── any field empty / unparseable ──► "All fields are required!" │
//! │        │                                     (red), prompt again        │
//! │        ├── validation fails ──► message (red), prompt again             │
//! │        └── all parse + validate ──► BundleInput                         │
//! │                                                                         │
//! │  Raw text stops here: the core only ever sees parsed numbers.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use colored::Colorize;
use datacalc_core::{validation, BundleInput};
use tracing::debug;

use crate::cli::Cli;
use crate::error::AppError;

/// Warning shown when a prompted field is left empty or does not parse.
pub const REQUIRED_WARNING: &str = "All fields are required!";

/// Collects a validated bundle from flags and, if needed, prompts.
///
/// Flag-supplied values are checked once up front: re-prompting cannot fix
/// them, so a bad flag is a hard error rather than a retry loop.
pub fn collect_bundle(cli: &Cli) -> Result<BundleInput, AppError> {
    if let Some(price) = cli.price {
        validation::validate_price(price)?;
    }
    if let Some(data_amount) = cli.data_amount {
        validation::validate_data_amount(data_amount)?;
    }
    if let Some(days) = cli.validity_days {
        validation::validate_validity_days(days)?;
    }

    if let (Some(price), Some(data_amount), Some(days)) =
        (cli.price, cli.data_amount, cli.validity_days)
    {
        return Ok(BundleInput::new(price, data_amount, days));
    }

    debug!("missing fields on the command line, entering interactive mode");
    prompt_bundle(cli)
}

/// Prompts for the missing fields until the form parses and validates.
fn prompt_bundle(cli: &Cli) -> Result<BundleInput, AppError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let price = match cli.price {
            Some(value) => Some(value),
            None => prompt_field(&mut input, &format!("Price ({}): ", cli.currency))?,
        };
        let data_amount = match cli.data_amount {
            Some(value) => Some(value),
            None => prompt_field(&mut input, "Data Amount (GB): ")?,
        };
        let validity_days = match cli.validity_days {
            Some(value) => Some(value),
            None => prompt_field(&mut input, "Validity Period (Days): ")?,
        };

        let (Some(price), Some(data_amount), Some(validity_days)) =
            (price, data_amount, validity_days)
        else {
            eprintln!("{}", REQUIRED_WARNING.red());
            continue;
        };

        let bundle = BundleInput::new(price, data_amount, validity_days);
        match validation::validate_bundle(&bundle) {
            Ok(()) => return Ok(bundle),
            Err(err) => {
                eprintln!("{}", err.to_string().red());
                continue;
            }
        }
    }
}

/// Prompts for one field and parses the reply.
///
/// Returns `Ok(None)` for empty or non-numeric input (the caller shows the
/// required-fields warning and loops); errors only on actual I/O failure or
/// EOF.
fn prompt_field<T: FromStr, R: BufRead>(input: &mut R, label: &str) -> Result<Option<T>, AppError> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::aborted());
    }

    Ok(parse_field(&line))
}

/// Parses one field of raw text.
///
/// Empty and unparseable text both collapse to `None` - the form treats "no
/// answer" and "not a number" the same way.
fn parse_field<T: FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_decimal() {
        assert_eq!(parse_field::<f64>("499.99\n"), Some(499.99));
        assert_eq!(parse_field::<f64>("  1000  "), Some(1000.0));
        assert_eq!(parse_field::<f64>(""), None);
        assert_eq!(parse_field::<f64>("   \n"), None);
        assert_eq!(parse_field::<f64>("abc"), None);
    }

    #[test]
    fn test_parse_field_integer() {
        assert_eq!(parse_field::<u32>("30\n"), Some(30));
        assert_eq!(parse_field::<u32>("7.5"), None);
        assert_eq!(parse_field::<u32>("-3"), None);
        assert_eq!(parse_field::<u32>("thirty"), None);
    }

    #[test]
    fn test_prompt_field_reads_one_line() {
        let mut input = "5\n30\n".as_bytes();
        let first: Option<f64> = prompt_field(&mut input, "Data Amount (GB): ").unwrap();
        let second: Option<u32> = prompt_field(&mut input, "Validity Period (Days): ").unwrap();
        assert_eq!(first, Some(5.0));
        assert_eq!(second, Some(30));
    }

    #[test]
    fn test_prompt_field_eof_aborts() {
        let mut input = "".as_bytes();
        let result: Result<Option<f64>, AppError> = prompt_field(&mut input, "Price: ");
        assert!(result.is_err());
    }
}
