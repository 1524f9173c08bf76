//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only entry point that mutates a [`Calculator`].
//! Every event runs to completion before the next one is handled; failures
//! inside the math components are turned into status values on the display,
//! so the handler itself never returns an error.
//!
//! # Event Types
//!
//! - **Keypad**: `Digit`, `DecimalPoint`, `Operator`, `Equals`, `Pi`
//! - **Functions**: `Function` (sin/cos/tan/log/ln/sqrt)
//! - **Session**: `ToggleMode`, `Clear`, `ToggleHistory`, `ClearHistory`
//! - **Statistics**: `AddSample`, `Mean`, `Variance`, `StdDev`, `ClearSamples`
//! - **Panels**: `StoreMatrix`, `Matrix`, `SolveLinear`, `Plot`
//!
//! # Example
//!
//! ```rust
//! use fraccalc::app::{handle_event, Calculator, Event};
//!
//! let mut calc = Calculator::default();
//! for label in ["1", "/", "3", "+", "1", "=", "F<=>D"] {
//!     let event = Event::from_label(label).unwrap();
//!     handle_event(&mut calc, &event);
//! }
//! assert_eq!(calc.display(), "4/3");
//! ```

use crate::app::state::Statistic;
use crate::app::{Action, Calculator};
use crate::domain::{Function, MatrixSlot, Operator};
use crate::math::MatrixOperation;

/// Events triggered by the keypad or the auxiliary panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A digit key `0`..`9`.
    Digit(char),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Function(Function),
    /// Inserts π as the current operand.
    Pi,
    /// Switches between decimal and fraction display.
    ToggleMode,
    /// Resets the session except for history.
    Clear,

    AddSample,
    Mean,
    Variance,
    StdDev,
    ClearSamples,

    /// Parses `text` (`"1,2;3,4"`) into matrix slot A or B.
    StoreMatrix {
        slot: MatrixSlot,
        text: String,
    },
    /// Combines matrix A with matrix B.
    Matrix(MatrixOperation),
    /// Solves `a·x + b = c` from the raw coefficient fields.
    SolveLinear {
        a: String,
        b: String,
        c: String,
    },
    /// Samples `f(x) = expression` for a canvas of the given size.
    Plot {
        expression: String,
        width: usize,
        height: usize,
    },

    ToggleHistory,
    ClearHistory,
}

impl Event {
    /// Maps a keypad button caption onto its event.
    ///
    /// Returns `None` for captions that are not buttons.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fraccalc::app::Event;
    ///
    /// assert_eq!(Event::from_label("F<=>D"), Some(Event::ToggleMode));
    /// assert_eq!(Event::from_label("Var"), Some(Event::Variance));
    /// assert_eq!(Event::from_label("%"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let event = match label {
            "." => Self::DecimalPoint,
            "=" => Self::Equals,
            "C" => Self::Clear,
            "π" | "pi" => Self::Pi,
            "F<=>D" => Self::ToggleMode,
            "Add Data" => Self::AddSample,
            "Mean" => Self::Mean,
            "Var" => Self::Variance,
            "StdDev" => Self::StdDev,
            "Clear Data" => Self::ClearSamples,
            _ => {
                if let Some(function) = Function::from_name(label) {
                    return Some(Self::Function(function));
                }
                let mut chars = label.chars();
                let (Some(c), None) = (chars.next(), chars.next()) else {
                    return None;
                };
                if c.is_ascii_digit() {
                    Self::Digit(c)
                } else {
                    Self::Operator(Operator::from_symbol(c)?)
                }
            }
        };
        Some(event)
    }
}

/// Processes one event, mutating the calculator.
///
/// # Parameters
///
/// * `calc` - The session to update
/// * `event` - The event to process
///
/// # Returns
///
/// Whether the shell should re-render, and the side effects it must carry out
/// in order.
///
/// # Tracing
///
/// Each call enters a debug-level span carrying the event.
#[allow(clippy::cognitive_complexity)]
pub fn handle_event(calc: &mut Calculator, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Digit(d) => {
            if !d.is_ascii_digit() {
                tracing::debug!(key = %d, "ignoring non-digit key");
                return (false, vec![]);
            }
            calc.press_digit(*d);
            (true, vec![])
        }
        Event::DecimalPoint => {
            calc.press_decimal();
            (true, vec![])
        }
        Event::Operator(op) => {
            calc.press_operator(*op);
            (true, vec![])
        }
        Event::Equals => {
            calc.press_equals();
            (true, vec![])
        }
        Event::Function(function) => {
            calc.apply_function(*function);
            (true, vec![])
        }
        Event::Pi => {
            calc.insert_pi();
            (true, vec![])
        }
        Event::ToggleMode => {
            calc.toggle_mode();
            (true, vec![])
        }
        Event::Clear => {
            tracing::debug!("session cleared");
            calc.clear();
            (true, vec![Action::ResetInputs])
        }
        Event::AddSample => {
            calc.add_sample();
            tracing::debug!(samples = calc.samples.len(), "sample added");
            (true, vec![])
        }
        Event::Mean => {
            calc.statistic(Statistic::Mean);
            (true, vec![])
        }
        Event::Variance => {
            calc.statistic(Statistic::Variance);
            (true, vec![])
        }
        Event::StdDev => {
            calc.statistic(Statistic::StdDev);
            (true, vec![])
        }
        Event::ClearSamples => {
            calc.clear_samples();
            (true, vec![])
        }
        Event::StoreMatrix { slot, text } => {
            calc.store_matrix(*slot, text);
            tracing::debug!(slot = %slot, stored = calc.matrices.get(*slot).is_some(), "matrix stored");
            (true, vec![])
        }
        Event::Matrix(op) => {
            calc.matrix_operation(*op);
            (true, vec![])
        }
        Event::SolveLinear { a, b, c } => {
            calc.solve_linear(a, b, c);
            (true, vec![])
        }
        Event::Plot {
            expression,
            width,
            height,
        } => match calc.plot(expression, *width, *height) {
            Ok(plot) => {
                tracing::debug!(
                    expression = %expression,
                    segments = plot.segments.len(),
                    "plot sampled"
                );
                (true, vec![Action::DrawPlot(plot)])
            }
            Err(e) => {
                tracing::debug!(expression = %expression, error = %e, "plot failed");
                (true, vec![Action::PlotFailed(e.to_string())])
            }
        },
        Event::ToggleHistory => {
            calc.history_visible = !calc.history_visible;
            (true, vec![])
        }
        Event::ClearHistory => {
            calc.history.clear();
            (true, vec![])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(calc: &mut Calculator, labels: &[&str]) {
        for label in labels {
            let event = Event::from_label(label).unwrap();
            handle_event(calc, &event);
        }
    }

    #[test]
    fn from_label_covers_keypad() {
        assert_eq!(Event::from_label("7"), Some(Event::Digit('7')));
        assert_eq!(Event::from_label("^"), Some(Event::Operator(Operator::Power)));
        assert_eq!(Event::from_label("sqrt"), Some(Event::Function(Function::Sqrt)));
        assert_eq!(Event::from_label("π"), Some(Event::Pi));
        assert_eq!(Event::from_label("Clear Data"), Some(Event::ClearSamples));
        assert_eq!(Event::from_label("12"), None);
        assert_eq!(Event::from_label(""), None);
    }

    #[test]
    fn clear_requests_input_reset_and_keeps_history() {
        let mut calc = Calculator::default();
        press(&mut calc, &["2", "+", "2", "=", "Add Data"]);
        let (render, actions) = handle_event(&mut calc, &Event::Clear);
        assert!(render);
        assert_eq!(actions, vec![Action::ResetInputs]);
        assert_eq!(calc.display(), "0");
        assert!(calc.samples.is_empty());
        assert_eq!(calc.history.len(), 2);
    }

    #[test]
    fn plot_emits_draw_or_failure() {
        let mut calc = Calculator::default();
        let event = Event::Plot {
            expression: "sin(x)".into(),
            width: 41,
            height: 21,
        };
        let (_, actions) = handle_event(&mut calc, &event);
        assert!(matches!(actions.as_slice(), [Action::DrawPlot(_)]));

        let event = Event::Plot {
            expression: "x +".into(),
            width: 41,
            height: 21,
        };
        let (_, actions) = handle_event(&mut calc, &event);
        assert_eq!(
            actions,
            vec![Action::PlotFailed("Error: Invalid function syntax".to_string())]
        );
    }

    #[test]
    fn history_toggle_and_clear() {
        let mut calc = Calculator::default();
        press(&mut calc, &["9", "sqrt"]);
        handle_event(&mut calc, &Event::ToggleHistory);
        let panel = calc.compute_viewmodel().history.unwrap();
        assert_eq!(panel.items, vec!["sqrt(9) = 3".to_string()]);
        handle_event(&mut calc, &Event::ClearHistory);
        assert!(calc.history.is_empty());
        handle_event(&mut calc, &Event::ToggleHistory);
        assert!(calc.compute_viewmodel().history.is_none());
    }

    #[test]
    fn non_digit_key_is_ignored() {
        let mut calc = Calculator::default();
        let (render, _) = handle_event(&mut calc, &Event::Digit('x'));
        assert!(!render);
        assert_eq!(calc.display(), "0");
    }
}
