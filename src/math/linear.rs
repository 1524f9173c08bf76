//! Solver for `a·x + b = c`.

use crate::domain::format::shortest;

/// Outcome of solving a single linear equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solution {
    /// Exactly one solution.
    Unique(f64),
    /// `a == 0` and `b == c`.
    Infinite,
    /// `a == 0` and `b != c`.
    None,
}

/// Parsed coefficients of `a·x + b = c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearEquation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LinearEquation {
    /// Parses the three coefficient fields; `None` if any is not a number.
    #[must_use]
    pub fn parse(a: &str, b: &str, c: &str) -> Option<Self> {
        let field = |s: &str| s.trim().parse::<f64>().ok().filter(|v| v.is_finite());
        Some(Self {
            a: field(a)?,
            b: field(b)?,
            c: field(c)?,
        })
    }

    /// Solves for `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fraccalc::math::{LinearEquation, Solution};
    ///
    /// let eq = LinearEquation::parse("2", "3", "7").unwrap();
    /// assert_eq!(eq.solve(), Solution::Unique(2.0));
    /// ```
    #[must_use]
    pub fn solve(&self) -> Solution {
        if self.a == 0.0 {
            if self.b == self.c {
                Solution::Infinite
            } else {
                Solution::None
            }
        } else {
            Solution::Unique((self.c - self.b) / self.a)
        }
    }
}

impl std::fmt::Display for LinearEquation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x + {} = {}",
            shortest(self.a),
            shortest(self.b),
            shortest(self.c)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_solution() {
        let eq = LinearEquation::parse("4", "-2", "10").unwrap();
        assert_eq!(eq.solve(), Solution::Unique(3.0));
        assert_eq!(eq.to_string(), "4x + -2 = 10");
    }

    #[test]
    fn degenerate_equations() {
        assert_eq!(LinearEquation::parse("0", "5", "5").unwrap().solve(), Solution::Infinite);
        assert_eq!(LinearEquation::parse("0", "5", "6").unwrap().solve(), Solution::None);
    }

    #[test]
    fn bad_coefficients_do_not_parse() {
        assert!(LinearEquation::parse("", "1", "2").is_none());
        assert!(LinearEquation::parse("1", "two", "2").is_none());
    }
}
