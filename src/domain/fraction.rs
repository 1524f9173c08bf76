//! Exact rational arithmetic for calculator operands.
//!
//! Every [`Fraction`] is kept in lowest terms with a positive denominator.
//! Intermediate products are computed in `i128` and reduced before being
//! narrowed back to `i64`, so a result only fails when its reduced form does
//! not fit.
//!
//! Decimal inputs are converted with a continued-fraction expansion
//! ([`Fraction::from_decimal`]) that stops once the convergent is within a
//! relative tolerance of the input or its denominator would exceed
//! [`MAX_DENOMINATOR`].

use crate::domain::error::{CalcError, Result};
use std::fmt;

/// Default relative tolerance for decimal-to-fraction conversion.
pub const DEFAULT_TOLERANCE: f64 = 1.0e-6;

/// Largest denominator a continued-fraction convergent may reach.
pub const MAX_DENOMINATOR: f64 = 1.0e7;

/// Magnitudes above this cannot be converted from a non-integral decimal.
const MAX_MAGNITUDE: f64 = 1.0e9;

/// Non-zero magnitudes below this cannot be converted.
const MIN_MAGNITUDE: f64 = 1.0e-9;

/// Remainders smaller than this end the expansion.
const INTEGER_EPSILON: f64 = 1.0e-12;

/// Integral decimals at or beyond this magnitude do not fit an `i64` numerator.
const MAX_INTEGRAL: f64 = 9.0e18;

/// A rational number in lowest terms.
///
/// # Examples
///
/// ```
/// use fraccalc::domain::Fraction;
///
/// let half = Fraction::new(2, 4)?;
/// assert_eq!(half.to_string(), "1/2");
/// assert_eq!(Fraction::new(6, -3)?.to_string(), "-2");
/// # Ok::<(), fraccalc::CalcError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: i64,
    den: i64,
}

impl Fraction {
    /// Zero as a fraction (0/1).
    pub const ZERO: Self = Self { num: 0, den: 1 };

    /// Creates a fraction reduced to lowest terms with a positive denominator.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] when `den` is zero.
    pub fn new(num: i64, den: i64) -> Result<Self> {
        Self::reduce(i128::from(num), i128::from(den))
    }

    /// Creates the fraction `n/1`.
    #[must_use]
    pub const fn from_integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    /// Converts a decimal to the nearest fraction within [`DEFAULT_TOLERANCE`].
    ///
    /// # Errors
    ///
    /// See [`Fraction::from_decimal_with_tolerance`].
    pub fn from_decimal(value: f64) -> Result<Self> {
        Self::from_decimal_with_tolerance(value, DEFAULT_TOLERANCE)
    }

    /// Converts a decimal to a fraction by continued-fraction expansion.
    ///
    /// Integral inputs convert exactly. Otherwise convergents `h/k` are folded
    /// from the integer parts of the remaining value until the convergent is
    /// within `tolerance * |value|`, the remainder is negligible, or the next
    /// denominator would exceed [`MAX_DENOMINATOR`].
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::OutOfRange`] for non-finite inputs, for integral
    /// inputs that do not fit an `i64`, and for non-integral inputs whose
    /// magnitude is above `1e9` or below `1e-9`.
    pub fn from_decimal_with_tolerance(value: f64, tolerance: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(CalcError::OutOfRange(value));
        }

        if value.fract() == 0.0 {
            if value.abs() >= MAX_INTEGRAL {
                return Err(CalcError::OutOfRange(value));
            }
            #[allow(clippy::cast_possible_truncation)]
            return Ok(Self::from_integer(value as i64));
        }

        if value.abs() > MAX_MAGNITUDE || value.abs() < MIN_MAGNITUDE {
            return Err(CalcError::OutOfRange(value));
        }

        let (mut h1, mut h2) = (1.0_f64, 0.0_f64);
        let (mut k1, mut k2) = (0.0_f64, 1.0_f64);
        let mut remaining = value;

        loop {
            let whole = remaining.floor();
            let h = whole * h1 + h2;
            let k = whole * k1 + k2;

            if k > MAX_DENOMINATOR && k1 > 0.0 {
                break;
            }

            (h2, h1) = (h1, h);
            (k2, k1) = (k1, k);

            let rest = remaining - whole;
            if rest < INTEGER_EPSILON {
                break;
            }
            if (value - h1 / k1).abs() <= tolerance * value.abs() {
                break;
            }
            remaining = 1.0 / rest;
        }

        tracing::trace!(value, num = h1, den = k1, "decimal converted to fraction");

        #[allow(clippy::cast_possible_truncation)]
        Self::reduce(h1 as i128, k1 as i128)
    }

    /// Returns the numerator.
    #[must_use]
    pub const fn numer(&self) -> i64 {
        self.num
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub const fn denom(&self) -> i64 {
        self.den
    }

    /// Returns `true` when the denominator is 1.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.den == 1
    }

    /// Returns the decimal quotient.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Adds two fractions.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::OutOfRange`] if the reduced sum overflows.
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        let (a, b, c, d) = self.widen(rhs);
        Self::reduce(a * d + c * b, b * d)
    }

    /// Subtracts `rhs` from `self`.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::OutOfRange`] if the reduced difference overflows.
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        let (a, b, c, d) = self.widen(rhs);
        Self::reduce(a * d - c * b, b * d)
    }

    /// Multiplies two fractions.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::OutOfRange`] if the reduced product overflows.
    pub fn checked_mul(self, rhs: Self) -> Result<Self> {
        let (a, b, c, d) = self.widen(rhs);
        Self::reduce(a * c, b * d)
    }

    /// Divides `self` by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] when `rhs` is zero, or
    /// [`CalcError::OutOfRange`] if the reduced quotient overflows.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        if rhs.num == 0 {
            return Err(CalcError::DivisionByZero);
        }
        let (a, b, c, d) = self.widen(rhs);
        Self::reduce(a * d, b * c)
    }

    fn widen(self, rhs: Self) -> (i128, i128, i128, i128) {
        (
            i128::from(self.num),
            i128::from(self.den),
            i128::from(rhs.num),
            i128::from(rhs.den),
        )
    }

    /// Reduces `num/den` and narrows it back to `i64`.
    fn reduce(num: i128, den: i128) -> Result<Self> {
        if den == 0 {
            return Err(CalcError::DivisionByZero);
        }
        if num == 0 {
            return Ok(Self::ZERO);
        }

        let common = gcd(num.unsigned_abs(), den.unsigned_abs());
        let common = i128::try_from(common).map_err(|_| overflow(num, den))?;
        let (mut num, mut den) = (num / common, den / common);
        if den < 0 {
            num = -num;
            den = -den;
        }

        match (i64::try_from(num), i64::try_from(den)) {
            (Ok(num), Ok(den)) => Ok(Self { num, den }),
            _ => Err(overflow(num, den)),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn overflow(num: i128, den: i128) -> CalcError {
    CalcError::OutOfRange(num as f64 / den as f64)
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// Greatest common divisor by Euclid's algorithm.
///
/// `gcd(0, 0)` is 0; callers never reduce by it because a zero numerator is
/// handled before reduction.
#[must_use]
pub fn gcd(a: u128, b: u128) -> u128 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_reduces_to_lowest_terms() {
        let f = Fraction::new(6, 9).unwrap();
        assert_eq!((f.numer(), f.denom()), (2, 3));
    }

    #[test]
    fn new_moves_sign_to_numerator() {
        let f = Fraction::new(3, -4).unwrap();
        assert_eq!((f.numer(), f.denom()), (-3, 4));
        let g = Fraction::new(-3, -6).unwrap();
        assert_eq!((g.numer(), g.denom()), (1, 2));
    }

    #[test]
    fn zero_denominator_fails() {
        assert!(matches!(Fraction::new(5, 0), Err(CalcError::DivisionByZero)));
    }

    #[test]
    fn zero_numerator_is_canonical_zero() {
        assert_eq!(Fraction::new(0, -7).unwrap(), Fraction::ZERO);
    }

    #[test]
    fn decimal_conversion_finds_simple_fractions() {
        assert_eq!(Fraction::from_decimal(0.5).unwrap().to_string(), "1/2");
        assert_eq!(Fraction::from_decimal(1.2).unwrap().to_string(), "6/5");
        assert_eq!(Fraction::from_decimal(3.4).unwrap().to_string(), "17/5");
        assert_eq!(Fraction::from_decimal(-0.75).unwrap().to_string(), "-3/4");
        assert_eq!(Fraction::from_decimal(1.0 / 3.0).unwrap().to_string(), "1/3");
    }

    #[test]
    fn decimal_conversion_rejects_extreme_magnitudes() {
        assert!(Fraction::from_decimal(1.5e9).is_err());
        assert!(Fraction::from_decimal(1.0e-10).is_err());
        assert!(Fraction::from_decimal(f64::NAN).is_err());
        assert!(Fraction::from_decimal(f64::INFINITY).is_err());
    }

    #[test]
    fn decimal_conversion_caps_denominator() {
        let f = Fraction::from_decimal_with_tolerance(std::f64::consts::PI, 1e-15).unwrap();
        assert!(f.denom() as f64 <= MAX_DENOMINATOR);
        assert!((f.to_f64() - std::f64::consts::PI).abs() < 1e-6);
        // the next convergent, 80143857/25510582, is over the cap and never taken
        assert_eq!((f.numer(), f.denom()), (5_419_351, 1_725_033));
    }

    #[test]
    fn arithmetic_matches_textbook_rules() {
        let half = Fraction::new(1, 2).unwrap();
        let third = Fraction::new(1, 3).unwrap();
        assert_eq!(half.checked_add(third).unwrap().to_string(), "5/6");
        assert_eq!(half.checked_sub(third).unwrap().to_string(), "1/6");
        assert_eq!(half.checked_mul(third).unwrap().to_string(), "1/6");
        assert_eq!(half.checked_div(third).unwrap().to_string(), "3/2");
        assert!(matches!(
            half.checked_div(Fraction::ZERO),
            Err(CalcError::DivisionByZero)
        ));
    }

    #[test]
    fn overflow_is_reported_not_wrapped() {
        let big = Fraction::new(i64::MAX, 1).unwrap();
        assert!(matches!(big.checked_mul(big), Err(CalcError::OutOfRange(_))));
    }

    #[test]
    fn gcd_follows_euclid() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
    }

    proptest! {
        #[test]
        fn simplified_fractions_are_canonical(n in -1_000_000i64..1_000_000, d in -1_000_000i64..1_000_000) {
            prop_assume!(d != 0);
            let f = Fraction::new(n, d).unwrap();
            prop_assert!(f.denom() > 0);
            prop_assert_eq!(gcd(f.numer().unsigned_abs().into(), f.denom().unsigned_abs().into()), 1);
            prop_assert_eq!(i128::from(f.numer()) * i128::from(d), i128::from(n) * i128::from(f.denom()));
        }

        #[test]
        fn integers_convert_exactly(k in -1_000_000_000i64..1_000_000_000) {
            #[allow(clippy::cast_precision_loss)]
            let f = Fraction::from_decimal(k as f64).unwrap();
            prop_assert_eq!((f.numer(), f.denom()), (k, 1));
        }
    }
}
