//! Character-cell rasterization of sampled graphs.
//!
//! The shell has no pixel canvas, so a [`Plot`] is drawn onto a grid of
//! `width × height` cells: axes through the origin, and `*` for the curve.
//! Consecutive samples of one segment are joined vertically so steep curves
//! stay connected; separate segments are never joined.

use crate::math::{Plot, Point, Window};

const AXIS_H: char = '-';
const AXIS_V: char = '|';
const ORIGIN: char = '+';
const CURVE: char = '*';

struct Grid {
    cells: Vec<Vec<char>>,
    width: usize,
    height: usize,
}

impl Grid {
    fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![' '; width]; height],
            width,
            height,
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn column(&self, window: &Window, x: f64) -> Option<usize> {
        let span = window.x.end - window.x.start;
        let col = ((x - window.x.start) / span * self.width as f64).round();
        (col >= 0.0 && col < self.width as f64).then_some(col as usize)
    }

    /// Row 0 is the top of the canvas (largest y).
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn row(&self, window: &Window, y: f64) -> Option<usize> {
        if self.height == 0 {
            return None;
        }
        let span = window.y.end - window.y.start;
        let row = ((window.y.end - y) / span * (self.height - 1) as f64).round();
        (row >= 0.0 && row < self.height as f64).then_some(row as usize)
    }

    fn set(&mut self, row: usize, col: usize, c: char) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = c;
        }
    }

    fn draw_axes(&mut self, window: &Window) {
        let x_axis = self.row(window, 0.0);
        let y_axis = self.column(window, 0.0);
        if let Some(row) = x_axis {
            for col in 0..self.width {
                self.set(row, col, AXIS_H);
            }
        }
        if let Some(col) = y_axis {
            for row in 0..self.height {
                self.set(row, col, AXIS_V);
            }
        }
        if let (Some(row), Some(col)) = (x_axis, y_axis) {
            self.set(row, col, ORIGIN);
        }
    }

    fn draw_segment(&mut self, window: &Window, points: &[Point]) {
        let mut previous: Option<usize> = None;
        for point in points {
            let cell = self
                .column(window, point.x)
                .zip(self.row(window, point.y));
            let Some((col, row)) = cell else {
                previous = None;
                continue;
            };
            if let Some(prev_row) = previous {
                for r in prev_row.min(row)..=prev_row.max(row) {
                    self.set(r, col, CURVE);
                }
            }
            self.set(row, col, CURVE);
            previous = Some(row);
        }
    }

    fn into_string(self) -> String {
        self.cells
            .into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Draws `plot` as text, one line per canvas row.
///
/// # Example
///
/// ```rust
/// use fraccalc::math::Plot;
/// use fraccalc::ui::canvas::rasterize;
///
/// let plot = Plot::sample("x", 21, 21)?;
/// let text = rasterize(&plot);
/// assert_eq!(text.lines().count(), 21);
/// # Ok::<(), fraccalc::math::PlotError>(())
/// ```
#[must_use]
pub fn rasterize(plot: &Plot) -> String {
    let mut grid = Grid::new(plot.width, plot.height);
    grid.draw_axes(&plot.window);
    for segment in &plot.segments {
        grid.draw_segment(&plot.window, segment);
    }
    grid.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_function_is_a_horizontal_line() {
        let plot = Plot::sample("5", 20, 21).unwrap();
        let text = rasterize(&plot);
        let lines: Vec<&str> = text.lines().collect();
        // y = 5 sits a quarter of the way down a [-10, 10] window
        assert_eq!(lines[5], "*".repeat(20));
        assert_eq!(lines[10].chars().nth(10), Some('+'));
    }

    #[test]
    fn values_outside_window_are_clipped() {
        let plot = Plot::sample("100", 20, 21).unwrap();
        let text = rasterize(&plot);
        assert!(!text.contains(CURVE));
    }

    #[test]
    fn steep_curve_stays_connected() {
        let plot = Plot::sample("10 * x", 20, 21).unwrap();
        let text = rasterize(&plot);
        let rows_with_curve = text.lines().filter(|l| l.contains(CURVE)).count();
        assert_eq!(rows_with_curve, 21);
    }
}
