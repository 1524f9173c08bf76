//! Internal value model held by the calculator.
//!
//! A [`Value`] is either a plain number, an exact [`Fraction`], or a
//! [`Status`] standing in for a result when no number applies. `Status::Error`
//! is the absorbing error sentinel: the calculation engine returns it whenever
//! either operand carries a status.

use crate::domain::error::{CalcError, Result};
use crate::domain::fraction::Fraction;
use std::fmt;

/// Which of the two stored matrices a status refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixSlot {
    /// Matrix slot `A`.
    A,
    /// Matrix slot `B`.
    B,
}

impl fmt::Display for MatrixSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
        }
    }
}

/// Named non-numeric outcome shown verbatim on the main display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The absorbing error sentinel.
    Error,
    /// A statistic was requested without samples.
    NoData,
    /// Variance or standard deviation requested with fewer than two samples.
    NeedMoreData,
    /// The sample set was cleared.
    DataCleared,
    /// A sample was added.
    DataAdded,
    /// The current operand could not be added as a sample.
    InvalidData,
    /// The linear equation holds for every `x`.
    InfiniteSolutions,
    /// The linear equation holds for no `x`.
    NoSolution,
    /// A linear-equation coefficient failed to parse.
    InvalidCoefficient,
    /// A matrix was stored; carries its formatted text.
    Stored {
        /// Slot the matrix was stored in.
        slot: MatrixSlot,
        /// Formatted matrix, e.g. `[[1,2],[3,4]]`.
        matrix: String,
    },
    /// A matrix operation failed; carries the message after `Matrix Error: `.
    MatrixError(String),
    /// A formatted matrix result.
    Matrix(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("Error"),
            Self::NoData => f.write_str("No Data"),
            Self::NeedMoreData => f.write_str("Need >= 2 Data"),
            Self::DataCleared => f.write_str("Data Cleared"),
            Self::DataAdded => f.write_str("Data Added"),
            Self::InvalidData => f.write_str("Invalid Data"),
            Self::InfiniteSolutions => f.write_str("Infinite solutions"),
            Self::NoSolution => f.write_str("No solution"),
            Self::InvalidCoefficient => f.write_str("Invalid coefficient"),
            Self::Stored { slot, matrix } => write!(f, "Stored {slot}: {matrix}"),
            Self::MatrixError(message) => write!(f, "Matrix Error: {message}"),
            Self::Matrix(matrix) => f.write_str(matrix),
        }
    }
}

/// A value held by the calculator.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A plain floating-point number.
    Number(f64),
    /// An exact fraction in lowest terms.
    Fraction(Fraction),
    /// A status sentinel.
    Status(Status),
}

impl Value {
    /// The error sentinel.
    pub const ERROR: Self = Self::Status(Status::Error);

    /// Returns `true` for the error sentinel.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Status(Status::Error))
    }

    /// Returns `true` for any status sentinel.
    #[must_use]
    pub const fn is_status(&self) -> bool {
        matches!(self, Self::Status(_))
    }

    /// Returns the float view of a numeric value, `None` for statuses.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Fraction(f) => Some(f.to_f64()),
            Self::Status(_) => None,
        }
    }

    /// Returns the exact fraction view of a numeric value.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::Parse`] for statuses and the conversion error of
    /// [`Fraction::from_decimal`] for numbers that cannot be represented.
    pub fn to_fraction(&self) -> Result<Fraction> {
        match self {
            Self::Number(n) => Fraction::from_decimal(*n),
            Self::Fraction(f) => Ok(*f),
            Self::Status(status) => Err(CalcError::Parse(status.to_string())),
        }
    }

    /// Folds a fallible computation into a value, mapping failures to the
    /// error sentinel.
    #[must_use]
    pub fn from_result(result: Result<Self>) -> Self {
        result.unwrap_or_else(|e| {
            tracing::debug!(error = %e, "computation failed");
            Self::ERROR
        })
    }
}

impl From<Fraction> for Value {
    fn from(f: Fraction) -> Self {
        Self::Fraction(f)
    }
}

impl From<Status> for Value {
    fn from(s: Status) -> Self {
        Self::Status(s)
    }
}

/// Parses typed entry text into a value.
///
/// Text with a single `/` (and no leading sign) is read as `numerator/denominator`
/// and reduced exactly; anything else is read as a decimal number.
///
/// # Errors
///
/// Returns [`CalcError::Parse`] for malformed text and
/// [`CalcError::DivisionByZero`] for a zero denominator.
///
/// # Examples
///
/// ```
/// use fraccalc::domain::{parse_entry, Value};
///
/// assert_eq!(parse_entry("2/4")?.to_string_lossy(), "1/2");
/// assert_eq!(parse_entry("1.5")?, Value::Number(1.5));
/// # Ok::<(), fraccalc::CalcError>(())
/// ```
pub fn parse_entry(text: &str) -> Result<Value> {
    let text = text.trim();

    if !text.starts_with('-') && text.matches('/').count() == 1 {
        let (num, den) = text
            .split_once('/')
            .ok_or_else(|| CalcError::Parse(text.to_string()))?;
        let num = parse_number(num)?;
        let den = parse_number(den)?;
        if den == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        let fraction = Fraction::from_decimal(num)?.checked_div(Fraction::from_decimal(den)?)?;
        return Ok(Value::Fraction(fraction));
    }

    parse_number(text).map(Value::Number)
}

fn parse_number(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| CalcError::Parse(text.to_string()))
}

impl Value {
    /// Renders the value without any display mode, for logs and doc examples.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Fraction(f) => f.to_string(),
            Self::Status(s) => s.to_string(),
        }
    }
}
