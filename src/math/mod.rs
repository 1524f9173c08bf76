//! Numeric collaborators invoked by the calculator.
//!
//! - [`matrix`]: parsing, formatting and algebra on small matrices
//! - [`linear`]: the `a·x + b = c` solver
//! - [`expr`]: restricted expression parser for graphing
//! - [`plot`]: per-column sampling of a parsed expression

pub mod expr;
pub mod linear;
pub mod matrix;
pub mod plot;

pub use expr::{Expr, ParseError};
pub use linear::{LinearEquation, Solution};
pub use matrix::{Matrix, MatrixError, MatrixOperation};
pub use plot::{Plot, PlotError, Point, Window};
