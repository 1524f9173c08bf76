//! Sampling of `f(x)` over a fixed window.

use crate::math::expr::{Expr, ParseError};
use std::ops::Range;
use thiserror::Error;

/// Graph failures, shown inline in place of the plot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotError {
    #[error("Error: Empty function")]
    Empty,

    #[error("Error: Invalid function syntax")]
    Syntax(#[source] ParseError),
}

/// A point in logical (graph) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Logical ranges mapped onto the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    pub x: Range<f64>,
    pub y: Range<f64>,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            x: -10.0..10.0,
            y: -10.0..10.0,
        }
    }
}

/// A sampled graph: one point per pixel column, split into connected
/// segments wherever the function was undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub expression: String,
    pub window: Window,
    pub width: usize,
    pub height: usize,
    pub segments: Vec<Vec<Point>>,
}

impl Plot {
    /// Parses `expression` and samples it once per pixel column.
    ///
    /// Column `px` maps to `x = (px - width/2) / (width / span)`, so the
    /// centre column is `x = 0`. Non-finite samples end the current segment.
    ///
    /// # Errors
    ///
    /// [`PlotError::Empty`] for blank input, [`PlotError::Syntax`] when the
    /// expression does not parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use fraccalc::math::Plot;
    ///
    /// let plot = Plot::sample("1 / x", 40, 20)?;
    /// assert_eq!(plot.segments.len(), 2);
    /// # Ok::<(), fraccalc::math::PlotError>(())
    /// ```
    pub fn sample(expression: &str, width: usize, height: usize) -> Result<Self, PlotError> {
        let source = expression.trim();
        if source.is_empty() {
            return Err(PlotError::Empty);
        }
        let expr = Expr::parse(source).map_err(PlotError::Syntax)?;

        let window = Window::default();
        #[allow(clippy::cast_precision_loss)]
        let (w, origin) = (width.max(1) as f64, width as f64 / 2.0);
        let scale = w / (window.x.end - window.x.start);

        let mut segments = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        for px in 0..width {
            #[allow(clippy::cast_precision_loss)]
            let x = (px as f64 - origin) / scale;
            let y = expr.eval(x);
            if y.is_finite() {
                current.push(Point { x, y });
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        tracing::debug!(expression = source, width, height, segments = segments.len(), "function sampled");

        Ok(Self {
            expression: source.to_string(),
            window,
            width,
            height,
            segments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_one_point_per_column() {
        let plot = Plot::sample("x", 20, 20).unwrap();
        assert_eq!(plot.segments.len(), 1);
        let points = &plot.segments[0];
        assert_eq!(points.len(), 20);
        assert_eq!(points[0].x, -10.0);
        assert_eq!(points[10].x, 0.0);
    }

    #[test]
    fn undefined_regions_split_segments() {
        let plot = Plot::sample("sqrt(x)", 20, 20).unwrap();
        assert_eq!(plot.segments.len(), 1);
        assert_eq!(plot.segments[0][0].x, 0.0);

        let plot = Plot::sample("1/x", 20, 20).unwrap();
        assert_eq!(plot.segments.len(), 2);
    }

    #[test]
    fn errors_carry_canvas_messages() {
        assert_eq!(Plot::sample("   ", 10, 10).unwrap_err().to_string(), "Error: Empty function");
        assert_eq!(
            Plot::sample("sin(", 10, 10).unwrap_err().to_string(),
            "Error: Invalid function syntax"
        );
    }
}
