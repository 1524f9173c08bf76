//! Binary operator application over calculator values.
//!
//! `+ - * /` are evaluated exactly on fractions; `^` is evaluated in floating
//! point and only converted back to a fraction when the result is clearly not
//! a short decimal. Any status operand yields the error sentinel.

use crate::domain::error::{CalcError, Result};
use crate::domain::fraction::Fraction;
use crate::domain::value::Value;
use std::fmt;

/// Powers within this distance of their 7-decimal rounding stay plain numbers.
const POW_ROUNDING_EPSILON: f64 = 1.0e-9;

/// Binary operators understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Parses a button symbol (`+ - * / ^`).
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '^' => Some(Self::Power),
            _ => None,
        }
    }

    /// The button symbol for this operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Power => '^',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Unary functions on the keypad. Trigonometry works in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    /// Base-10 logarithm.
    Log,
    /// Natural logarithm.
    Ln,
    Sqrt,
}

impl Function {
    /// Button caption, also used in history entries (`sin(30)`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
        }
    }

    /// Parses a button caption.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "log" => Some(Self::Log),
            "ln" => Some(Self::Ln),
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// [`CalcError::Domain`] for a non-positive logarithm argument, a negative
    /// square root, a tangent at an odd multiple of 90 degrees, or any
    /// non-finite result.
    ///
    /// # Examples
    ///
    /// ```
    /// use fraccalc::domain::Function;
    ///
    /// assert!((Function::Sin.apply(30.0)? - 0.5).abs() < 1e-12);
    /// assert!(Function::Tan.apply(270.0).is_err());
    /// # Ok::<(), fraccalc::CalcError>(())
    /// ```
    pub fn apply(self, x: f64) -> Result<f64> {
        let result = match self {
            Self::Sin => x.to_radians().sin(),
            Self::Cos => x.to_radians().cos(),
            Self::Tan => {
                if ((x % 360.0) % 180.0).abs() == 90.0 {
                    return Err(CalcError::Domain("tangent undefined"));
                }
                x.to_radians().tan()
            }
            Self::Log | Self::Ln if x <= 0.0 => {
                return Err(CalcError::Domain("logarithm of non-positive number"));
            }
            Self::Log => x.log10(),
            Self::Ln => x.ln(),
            Self::Sqrt if x < 0.0 => return Err(CalcError::Domain("square root of negative number")),
            Self::Sqrt => x.sqrt(),
        };
        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Domain("non-finite result"))
        }
    }
}

/// Applies `op` to `prev` and `curr`.
///
/// Never fails: every error condition (status operand, division by zero,
/// non-finite power, unrepresentable operand) produces [`Value::ERROR`].
///
/// # Examples
///
/// ```
/// use fraccalc::domain::{apply, Fraction, Operator, Value};
///
/// let sum = apply(&Value::Number(1.2), &Value::Number(3.4), Operator::Add);
/// assert_eq!(sum, Value::Fraction(Fraction::new(23, 5)?));
///
/// assert!(apply(&Value::Number(5.0), &Value::Number(0.0), Operator::Divide).is_error());
/// # Ok::<(), fraccalc::CalcError>(())
/// ```
#[must_use]
pub fn apply(prev: &Value, curr: &Value, op: Operator) -> Value {
    if prev.is_status() || curr.is_status() {
        return Value::ERROR;
    }

    let result = match op {
        Operator::Power => power(prev, curr),
        _ => exact(prev, curr, op),
    };

    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(%op, error = %e, "operation failed");
            Value::ERROR
        }
    }
}

fn power(prev: &Value, curr: &Value) -> Result<Value> {
    let (base, exponent) = floats(prev, curr)?;
    let result = base.powf(exponent);
    if !result.is_finite() {
        return Err(CalcError::Domain("non-finite power"));
    }

    let rounded = (result * 1.0e7).round() / 1.0e7;
    if result.fract() == 0.0 || (result - rounded).abs() < POW_ROUNDING_EPSILON {
        Ok(Value::Number(result))
    } else {
        Fraction::from_decimal(result).map(Value::Fraction)
    }
}

/// Exact view of an operand, or `None` for a whole number too large for a
/// fraction.
fn operand(value: &Value) -> Result<Option<Fraction>> {
    match value.to_fraction() {
        Ok(fraction) => Ok(Some(fraction)),
        Err(CalcError::OutOfRange(n)) if n.fract() == 0.0 => Ok(None),
        Err(e) => Err(e),
    }
}

fn exact(prev: &Value, curr: &Value, op: Operator) -> Result<Value> {
    let (Some(lhs), Some(rhs)) = (operand(prev)?, operand(curr)?) else {
        let (lhs, rhs) = floats(prev, curr)?;
        return float_fallback(lhs, rhs, op);
    };

    let combined = match op {
        Operator::Add => lhs.checked_add(rhs),
        Operator::Subtract => lhs.checked_sub(rhs),
        Operator::Multiply => lhs.checked_mul(rhs),
        Operator::Divide => lhs.checked_div(rhs),
        Operator::Power => return power(prev, curr),
    };

    match combined {
        Ok(fraction) => Ok(Value::Fraction(fraction)),
        // Reduced result does not fit i64; keep the float result instead.
        Err(CalcError::OutOfRange(_)) => float_fallback(lhs.to_f64(), rhs.to_f64(), op),
        Err(e) => Err(e),
    }
}

fn float_fallback(lhs: f64, rhs: f64, op: Operator) -> Result<Value> {
    let result = match op {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide => lhs / rhs,
        Operator::Power => lhs.powf(rhs),
    };
    if result.is_finite() {
        Ok(Value::Number(result))
    } else {
        Err(CalcError::OutOfRange(result))
    }
}

fn floats(prev: &Value, curr: &Value) -> Result<(f64, f64)> {
    match (prev.as_f64(), curr.as_f64()) {
        (Some(p), Some(c)) => Ok((p, c)),
        _ => Err(CalcError::Parse("status operand".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value::Status;
    use proptest::prelude::*;

    fn frac(n: i64, d: i64) -> Value {
        Value::Fraction(Fraction::new(n, d).unwrap())
    }

    #[test]
    fn basic_operators_are_exact() {
        let three = Value::Number(3.0);
        let five = Value::Number(5.0);
        assert_eq!(apply(&three, &five, Operator::Add), frac(8, 1));
        assert_eq!(apply(&Value::Number(10.0), &Value::Number(4.0), Operator::Subtract), frac(6, 1));
        assert_eq!(apply(&Value::Number(7.0), &Value::Number(6.0), Operator::Multiply), frac(42, 1));
        assert_eq!(apply(&Value::Number(1.0), &three, Operator::Divide), frac(1, 3));
    }

    #[test]
    fn whole_numbers_beyond_fraction_range_use_floats() {
        let big = 2f64.powi(70);
        assert_eq!(
            apply(&Value::Number(big), &Value::Number(1.0), Operator::Add),
            Value::Number(big + 1.0)
        );
        assert_eq!(
            apply(&Value::Number(1e19), &frac(1, 2), Operator::Multiply),
            Value::Number(5e18)
        );
        assert_eq!(
            apply(&Value::Number(3.0), &Value::Number(-1e19), Operator::Subtract),
            Value::Number(3.0 + 1e19)
        );
        assert!(apply(&Value::Number(big), &Value::Number(0.0), Operator::Divide).is_error());
        // non-integral operands out of range still fail
        assert!(apply(&Value::Number(big), &Value::Number(1e-10), Operator::Add).is_error());
    }

    #[test]
    fn fractions_combine_with_numbers() {
        assert_eq!(apply(&frac(1, 2), &Value::Number(0.25), Operator::Add), frac(3, 4));
        assert_eq!(apply(&frac(2, 3), &frac(4, 9), Operator::Divide), frac(3, 2));
    }

    #[test]
    fn division_by_zero_is_error() {
        assert!(apply(&Value::Number(5.0), &Value::Number(0.0), Operator::Divide).is_error());
        assert!(apply(&frac(1, 2), &Value::Fraction(Fraction::ZERO), Operator::Divide).is_error());
    }

    #[test]
    fn power_keeps_short_decimals_as_numbers() {
        assert_eq!(apply(&Value::Number(2.0), &Value::Number(10.0), Operator::Power), Value::Number(1024.0));
        assert_eq!(apply(&Value::Number(0.5), &Value::Number(2.0), Operator::Power), Value::Number(0.25));
    }

    #[test]
    fn power_converts_long_decimals_to_fractions() {
        let result = apply(&Value::Number(2.0), &Value::Number(-0.5), Operator::Power);
        assert!(matches!(result, Value::Fraction(_)));
        let third = apply(&frac(1, 3), &Value::Number(1.0), Operator::Power);
        assert_eq!(third, frac(1, 3));
    }

    #[test]
    fn power_rejects_non_finite_results() {
        assert!(apply(&Value::Number(-8.0), &Value::Number(0.5), Operator::Power).is_error());
        assert!(apply(&Value::Number(10.0), &Value::Number(400.0), Operator::Power).is_error());
    }

    #[test]
    fn overflowing_fraction_falls_back_to_float() {
        let big = Value::Number(4.0e18);
        let result = apply(&big, &big, Operator::Multiply);
        assert_eq!(result, Value::Number(1.6e37));
    }

    #[test]
    fn operator_symbols_round_trip() {
        for op in [Operator::Add, Operator::Subtract, Operator::Multiply, Operator::Divide, Operator::Power] {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol('%'), None);
    }

    #[test]
    fn functions_work_in_degrees() {
        assert!((Function::Cos.apply(60.0).unwrap() - 0.5).abs() < 1e-12);
        assert!((Function::Tan.apply(45.0).unwrap() - 1.0).abs() < 1e-12);
        assert!(Function::Tan.apply(90.0).is_err());
        assert!(Function::Tan.apply(-450.0).is_err());
    }

    #[test]
    fn functions_check_their_domains() {
        assert_eq!(Function::Log.apply(1000.0).unwrap().round(), 3.0);
        assert!(Function::Log.apply(0.0).is_err());
        assert!(Function::Ln.apply(-1.0).is_err());
        assert!(Function::Sqrt.apply(-4.0).is_err());
        assert_eq!(Function::Sqrt.apply(16.0).unwrap(), 4.0);
    }

    #[test]
    fn function_names_round_trip() {
        for f in [Function::Sin, Function::Cos, Function::Tan, Function::Log, Function::Ln, Function::Sqrt] {
            assert_eq!(Function::from_name(f.name()), Some(f));
        }
    }

    fn any_operator() -> impl Strategy<Value = Operator> {
        prop_oneof![
            Just(Operator::Add),
            Just(Operator::Subtract),
            Just(Operator::Multiply),
            Just(Operator::Divide),
            Just(Operator::Power),
        ]
    }

    proptest! {
        #[test]
        fn error_is_absorbing(n in -1000i64..1000, d in 1i64..1000, op in any_operator()) {
            let v = frac(n, d);
            prop_assert!(apply(&Value::ERROR, &v, op).is_error());
            prop_assert!(apply(&v, &Value::ERROR, op).is_error());
            prop_assert!(apply(&Value::Status(Status::NoData), &v, op).is_error());
        }
    }
}
