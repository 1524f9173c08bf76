//! Rendering of internal values into display strings.
//!
//! Numbers follow the shortest round-trip decimal form used by the widget
//! (exponent notation only for very large or very small magnitudes); the main
//! display additionally switches to a normalized nine-digit exponent form
//! outside `[1e-5, 1e7]`.

use crate::domain::value::Value;
use std::f64::consts::PI;

/// Lower magnitude bound for plain decimal notation on the main display.
const DISPLAY_MIN: f64 = 1.0e-5;

/// Upper magnitude bound for plain decimal notation on the main display.
const DISPLAY_MAX: f64 = 1.0e7;

/// Where a formatted value is going to be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Context {
    /// The main result line.
    #[default]
    Display,
    /// The expression line and history entries.
    Expression,
}

/// Formats a value for the given context.
///
/// # Parameters
///
/// * `value` - The value to render
/// * `fraction_mode` - Whether non-integral fractions render as `num/den`
/// * `context` - Main display or expression/history line
///
/// # Examples
///
/// ```
/// use fraccalc::domain::{format_value, Context, Fraction, Value};
///
/// let half = Value::Fraction(Fraction::new(1, 2)?);
/// assert_eq!(format_value(&half, true, Context::Display), "1/2");
/// assert_eq!(format_value(&half, false, Context::Display), "0.5");
/// assert_eq!(format_value(&Value::Number(1.5e8), false, Context::Display), "1.500000000e+8");
/// # Ok::<(), fraccalc::CalcError>(())
/// ```
#[must_use]
pub fn format_value(value: &Value, fraction_mode: bool, context: Context) -> String {
    match value {
        Value::Status(status) => status.to_string(),
        Value::Fraction(f) if f.is_integer() => f.numer().to_string(),
        Value::Fraction(f) if fraction_mode => f.to_string(),
        Value::Fraction(f) => format_number(f.to_f64(), context),
        Value::Number(n) if context == Context::Expression && *n == PI => "π".to_string(),
        Value::Number(n) => format_number(*n, context),
    }
}

fn format_number(n: f64, context: Context) -> String {
    let magnitude = n.abs();
    if context == Context::Display
        && n != 0.0
        && n.is_finite()
        && !(DISPLAY_MIN..=DISPLAY_MAX).contains(&magnitude)
    {
        return signed_exponent(format!("{n:.9e}"));
    }
    shortest(n)
}

/// Shortest round-trip rendering, exponent form below `1e-6` or from `1e21` up.
#[must_use]
pub fn shortest(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if !(1.0e-6..1.0e21).contains(&magnitude) {
        return signed_exponent(format!("{n:e}"));
    }
    n.to_string()
}

fn signed_exponent(mut rendered: String) -> String {
    if let Some(pos) = rendered.find('e') {
        if !rendered[pos + 1..].starts_with('-') {
            rendered.insert(pos + 1, '+');
        }
    }
    rendered
}
