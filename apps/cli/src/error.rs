//! # App Error Type
//!
//! Unified error type for the CLI.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in datacalc                               │
//! │                                                                         │
//! │  datacalc-core                       CLI                                │
//! │  ─────────────                       ───                                │
//! │                                                                         │
//! │  ValidationError ──┐                                                    │
//! │                    ├──► CoreError ──► AppError ──► stderr + exit code   │
//! │  DivisionByZero ───┘                    ▲                               │
//! │                                         │                               │
//! │  std::io::Error (prompt I/O) ───────────┘                               │
//! │                                                                         │
//! │  Exit codes: 2 for bad input (validation, zero denominators),           │
//! │              1 for everything else.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use colored::Colorize;
use datacalc_core::{CoreError, ValidationError};

/// Error reported to the terminal when a run fails.
///
/// Carries a machine-readable code (drives the exit status) and a
/// human-readable message (printed to stderr).
#[derive(Debug, Clone)]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for CLI failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A metric denominator was zero
    DivisionByZero,

    /// A bundle field failed validation
    ValidationError,

    /// Interactive input ended before all fields were provided
    InputAborted,

    /// Terminal I/O failed
    Io,

    /// Anything unexpected
    Internal,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates an aborted-input error (EOF while prompting).
    pub fn aborted() -> Self {
        AppError::new(
            ErrorCode::InputAborted,
            "input closed before all fields were provided",
        )
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }

    /// Process exit code for this error.
    ///
    /// Bad input exits 2 (the conventional usage-error status, same as
    /// clap's own parse failures); operational failures exit 1.
    pub fn exit_code(&self) -> i32 {
        match self.code {
            ErrorCode::ValidationError | ErrorCode::DivisionByZero => 2,
            _ => 1,
        }
    }

    /// Prints the error to stderr in the CLI's standard shape.
    pub fn report(&self) {
        eprintln!("{} {}", "error:".red().bold(), self.message);
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DivisionByZero { .. } => {
                AppError::new(ErrorCode::DivisionByZero, err.to_string())
            }
            CoreError::Validation(e) => AppError::from(e),
        }
    }
}

/// Converts validation errors to app errors.
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::new(ErrorCode::ValidationError, err.to_string())
    }
}

/// Converts prompt I/O errors to app errors.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::new(ErrorCode::Io, format!("terminal i/o failed: {}", err))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err = AppError::from(datacalc_core::metrics::value_per_gb(100.0, 0.0).unwrap_err());
        assert_eq!(err.code, ErrorCode::DivisionByZero);
        assert_eq!(err.message, "division by zero: data amount is zero");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_validation_error_mapping() {
        let err = AppError::from(datacalc_core::validation::validate_price(0.0).unwrap_err());
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_operational_errors_exit_one() {
        assert_eq!(AppError::aborted().exit_code(), 1);
        assert_eq!(AppError::internal("boom").exit_code(), 1);
    }
}
