//! Error types for the calculator core.
//!
//! This module defines the centralized error type [`CalcError`] and a type alias
//! [`Result`] used by the arithmetic, statistics and configuration layers. The
//! event handler never lets these escape: every failure is folded into a
//! [`Status`](crate::domain::Status) value before the display is rendered.

use thiserror::Error;

/// The main error type for calculator operations.
///
/// Arithmetic variants describe why a computation produced no value; the
/// handler maps all of them to the `Error` status except the statistics
/// variants, which carry their own display text.
///
/// # Examples
///
/// ```
/// use fraccalc::domain::{CalcError, Fraction};
///
/// assert!(matches!(Fraction::new(1, 0), Err(CalcError::DivisionByZero)));
/// ```
#[derive(Debug, Error)]
pub enum CalcError {
    /// A denominator or divisor evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A value is too large or too small to be represented as a fraction.
    ///
    /// Raised by decimal-to-fraction conversion for magnitudes above `1e9` or
    /// below `1e-9`, and by fraction arithmetic that overflows.
    #[error("value out of range: {0}")]
    OutOfRange(f64),

    /// Entry text could not be read as a number or fraction.
    #[error("invalid number: {0}")]
    Parse(String),

    /// A function was applied outside its domain (negative square root,
    /// non-positive logarithm, undefined tangent, non-finite result).
    #[error("math domain error: {0}")]
    Domain(&'static str),

    /// Equals was pressed while the denominator was still empty or zero.
    #[error("incomplete denominator")]
    IncompleteDenominator,

    /// A statistic was requested from an empty sample set.
    #[error("no data")]
    NoData,

    /// Variance or standard deviation requested with fewer than two samples.
    #[error("need at least 2 data points")]
    InsufficientData,

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for calculator operations.
pub type Result<T> = std::result::Result<T, CalcError>;
