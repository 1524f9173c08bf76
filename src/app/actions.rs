//! Actions representing side effects the shell must carry out.
//!
//! The event handler returns a `Vec<Action>` alongside its re-render flag.
//! The calculator core never touches input fields or the canvas itself; it asks
//! the shell to do so through these commands.
//!
//! # Example
//!
//! ```rust
//! use fraccalc::app::{handle_event, Action, Calculator, Event};
//!
//! let mut calc = Calculator::default();
//! let (_, actions) = handle_event(&mut calc, &Event::Clear);
//! assert_eq!(actions, vec![Action::ResetInputs]);
//! ```

use crate::math::Plot;

/// Commands for the shell, executed in order after an event is handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Empties the matrix, coefficient and function input fields and blanks
    /// the canvas.
    ResetInputs,

    /// Draws a sampled graph on the canvas.
    DrawPlot(Plot),

    /// Replaces the canvas with an inline error message.
    PlotFailed(String),
}
