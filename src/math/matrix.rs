//! Small dense matrices typed into the matrix fields.
//!
//! Text format: rows separated by `;`, cells by `,` (`"1,2;3,4"`). Rendering
//! uses the bracketed form `[[1,2],[3,4]]`.

use crate::domain::format::shortest;
use crate::domain::value::MatrixSlot;
use std::fmt;
use thiserror::Error;

/// Element-wise or product operation between the stored matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixOperation {
    Add,
    Subtract,
    Multiply,
}

impl MatrixOperation {
    /// Symbol used in history entries (`Matrix A + Matrix B`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
        }
    }

    /// Parses a symbol back into an operation.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            _ => None,
        }
    }
}

/// Matrix failures, rendered after the `Matrix Error: ` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The text typed for a slot did not parse.
    #[error("Invalid {0} format")]
    InvalidFormat(MatrixSlot),

    /// An operation was requested before both slots were filled.
    #[error("Store A and B first")]
    NotStored,

    /// Operand shapes are incompatible for the operation.
    #[error("Size mismatch for {}", shape_rule(.0))]
    SizeMismatch(MatrixOperation),
}

const fn shape_rule(op: &MatrixOperation) -> &'static str {
    match op {
        MatrixOperation::Add => "add",
        MatrixOperation::Subtract => "sub",
        MatrixOperation::Multiply => "mul (A_cols != B_rows)",
    }
}

/// A non-empty rectangular matrix of floats.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    /// Parses `;`-separated rows of `,`-separated cells.
    ///
    /// Returns `None` for an unparsable cell, an empty row, or rows of
    /// differing length.
    ///
    /// # Examples
    ///
    /// ```
    /// use fraccalc::math::Matrix;
    ///
    /// let m = Matrix::parse("1, 2; 3, 4").unwrap();
    /// assert_eq!(m.to_string(), "[[1,2],[3,4]]");
    /// assert!(Matrix::parse("1,2;3").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let rows = text
            .split(';')
            .map(|row| {
                row.split(',')
                    .map(|cell| cell.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
                    .collect::<Option<Vec<f64>>>()
            })
            .collect::<Option<Vec<_>>>()?;

        let width = rows.first().map(Vec::len)?;
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self { rows })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Applies `op` with `self` as the left operand.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SizeMismatch`] when the shapes are incompatible:
    /// add/subtract need identical dimensions, multiply needs
    /// `self.cols() == rhs.rows()`.
    pub fn apply(&self, rhs: &Self, op: MatrixOperation) -> Result<Self, MatrixError> {
        match op {
            MatrixOperation::Add => self.zip_with(rhs, op, |a, b| a + b),
            MatrixOperation::Subtract => self.zip_with(rhs, op, |a, b| a - b),
            MatrixOperation::Multiply => self.multiply(rhs),
        }
    }

    fn zip_with(
        &self,
        rhs: &Self,
        op: MatrixOperation,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Self, MatrixError> {
        if self.rows() != rhs.rows() || self.cols() != rhs.cols() {
            return Err(MatrixError::SizeMismatch(op));
        }
        let rows = self
            .rows
            .iter()
            .zip(&rhs.rows)
            .map(|(l, r)| l.iter().zip(r).map(|(&a, &b)| f(a, b)).collect())
            .collect();
        Ok(Self { rows })
    }

    fn multiply(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.cols() != rhs.rows() {
            return Err(MatrixError::SizeMismatch(MatrixOperation::Multiply));
        }
        let rows = self
            .rows
            .iter()
            .map(|row| {
                (0..rhs.cols())
                    .map(|j| row.iter().zip(&rhs.rows).map(|(a, b_row)| a * b_row[j]).sum())
                    .collect()
            })
            .collect();
        Ok(Self { rows })
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            let cells: Vec<String> = row.iter().map(|&v| shortest(v)).collect();
            write!(f, "[{}]", cells.join(","))?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(text: &str) -> Matrix {
        Matrix::parse(text).unwrap()
    }

    #[test]
    fn parse_accepts_rectangular_input() {
        let matrix = m("1,2,3;4,5,6");
        assert_eq!((matrix.rows(), matrix.cols()), (2, 3));
        assert_eq!(m(" 1.5 ").to_string(), "[[1.5]]");
    }

    #[test]
    fn parse_rejects_ragged_or_bad_cells() {
        assert!(Matrix::parse("").is_none());
        assert!(Matrix::parse("1,2;3").is_none());
        assert!(Matrix::parse("1,x").is_none());
        assert!(Matrix::parse("1,2;").is_none());
    }

    #[test]
    fn add_and_subtract_are_elementwise() {
        let a = m("1,2;3,4");
        let b = m("5,6;7,8");
        assert_eq!(a.apply(&b, MatrixOperation::Add).unwrap().to_string(), "[[6,8],[10,12]]");
        assert_eq!(a.apply(&b, MatrixOperation::Subtract).unwrap().to_string(), "[[-4,-4],[-4,-4]]");
    }

    #[test]
    fn multiply_uses_row_by_column() {
        let a = m("1,2,3;4,5,6");
        let b = m("7,8;9,10;11,12");
        assert_eq!(a.apply(&b, MatrixOperation::Multiply).unwrap().to_string(), "[[58,64],[139,154]]");
    }

    #[test]
    fn shape_errors_name_the_operation() {
        let a = m("1,2;3,4");
        let b = m("1,2,3;4,5,6");
        let err = a.apply(&b, MatrixOperation::Add).unwrap_err();
        assert_eq!(err.to_string(), "Size mismatch for add");
        let err = b.apply(&a, MatrixOperation::Multiply).unwrap_err();
        assert_eq!(err.to_string(), "Size mismatch for mul (A_cols != B_rows)");
        assert_eq!(MatrixError::InvalidFormat(MatrixSlot::A).to_string(), "Invalid A format");
    }
}
