//! Domain layer for the calculator core.
//!
//! This module contains the value model and the pure arithmetic of the
//! calculator, independent of session state or any shell. Nothing in here
//! mutates; the [`app`](crate::app) layer owns the session and drives these
//! functions.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`fraction`]: Exact rationals and decimal-to-fraction conversion
//! - [`value`]: Numbers, fractions and status sentinels
//! - [`format`]: Display-string rendering
//! - [`engine`]: Binary operator application
//!
//! # Examples
//!
//! ```
//! use fraccalc::domain::{apply, format_value, Context, Operator, Value};
//!
//! let result = apply(&Value::Number(1.2), &Value::Number(3.4), Operator::Add);
//! assert_eq!(format_value(&result, false, Context::Display), "4.6");
//! ```

pub mod engine;
pub mod error;
pub mod format;
pub mod fraction;
pub mod value;

pub use engine::{apply, Function, Operator};
pub use error::{CalcError, Result};
pub use format::{format_value, Context};
pub use fraction::Fraction;
pub use value::{parse_entry, MatrixSlot, Status, Value};
