//! Text rendering of the calculator view model.
//!
//! The renderer turns a [`UIViewModel`] into the lines the shell prints: the
//! expression line, the right-aligned main display and, when open, the
//! history panel. It returns a `String` rather than printing so the shell
//! decides where output goes.
//!
//! # Example
//!
//! ```rust
//! use fraccalc::app::Calculator;
//! use fraccalc::ui::render;
//!
//! let calc = Calculator::default();
//! let frame = render(&calc, 24);
//! assert!(frame.ends_with("0"));
//! ```

use crate::app::Calculator;
use crate::ui::viewmodel::{HistoryPanel, UIViewModel};
use std::fmt::Write;

/// Marker shown beside the display while fraction mode is on.
const FRACTION_BADGE: &str = "[a/b]";

/// Renders the calculator for a panel `width` columns wide.
#[must_use]
pub fn render(calc: &Calculator, width: usize) -> String {
    render_viewmodel(&calc.compute_viewmodel(), width)
}

/// Renders a pre-computed view model.
///
/// # Parameters
///
/// * `vm` - The view model for this frame
/// * `width` - Minimum panel width; longer values widen the panel
///
/// # Returns
///
/// The frame as newline-separated lines, without a trailing newline.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, width: usize) -> String {
    let width = width
        .max(vm.expression.chars().count())
        .max(vm.display.chars().count() + FRACTION_BADGE.len() + 1);

    let mut out = String::new();
    if let Some(panel) = &vm.history {
        render_history(&mut out, panel);
    }

    let badge = if vm.fraction_mode { FRACTION_BADGE } else { "" };
    let _ = writeln!(out, "{:>width$}", vm.expression);
    let pad = width - badge.len();
    let _ = write!(out, "{badge}{:>pad$}", vm.display);
    out
}

fn render_history(out: &mut String, panel: &HistoryPanel) {
    out.push_str("History\n");
    if let Some(empty) = &panel.empty_state {
        let _ = writeln!(out, "  {empty}");
    }
    for item in &panel.items {
        let _ = writeln!(out, "  {item}");
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm(expression: &str, display: &str) -> UIViewModel {
        UIViewModel {
            expression: expression.to_string(),
            display: display.to_string(),
            fraction_mode: false,
            history: None,
        }
    }

    #[test]
    fn display_is_right_aligned() {
        let frame = render_viewmodel(&vm("12 +", "3"), 10);
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines, vec!["      12 +", "         3"]);
    }

    #[test]
    fn fraction_badge_on_the_left() {
        let mut model = vm("", "3/4");
        model.fraction_mode = true;
        let frame = render_viewmodel(&model, 12);
        assert_eq!(frame.lines().last(), Some("[a/b]    3/4"));
    }

    #[test]
    fn long_values_widen_the_panel() {
        let frame = render_viewmodel(&vm("", "Matrix Error: Store A and B first"), 5);
        assert!(frame.ends_with("Matrix Error: Store A and B first"));
    }

    #[test]
    fn history_panel_comes_first() {
        let mut model = vm("", "0");
        model.history = Some(HistoryPanel {
            items: vec![],
            empty_state: Some("No history yet.".to_string()),
        });
        let frame = render_viewmodel(&model, 8);
        assert!(frame.starts_with("History\n  No history yet.\n\n"));
    }
}
