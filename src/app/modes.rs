//! Input state types for the calculator session.
//!
//! The session is always in exactly one [`Entry`] state. A pending binary
//! operation, if any, is held separately as a [`PendingOperation`]; the two are
//! independent except that [`Entry::Denominator`] is only ever entered while
//! nothing is pending.
//!
//! # State Machine
//!
//! ```text
//!            digit                    '/' (nothing pending)
//! Result ───────────► Typing ─────────────────────────────► Denominator
//!   ▲                   │  operator                              │
//!   │ equals/function   ▼                                        │ operator
//!   └──────────── AwaitingOperand ◄──────────────────────────────┘
//! ```

use crate::domain::{parse_entry, CalcError, Operator, Value};

/// What the user is currently entering or looking at.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// An operand being typed digit by digit.
    Typing {
        /// Raw keystrokes, e.g. `"12.5"`.
        text: String,
        /// Re-parse made by the mode toggle so the operand shows formatted.
        parsed: Option<Value>,
    },

    /// A typed fraction, after `/` was pressed with no operator pending.
    Denominator {
        /// Text typed before the `/`.
        numerator: String,
        /// Text typed after the `/`; `"0"` is a placeholder until the first digit.
        denominator: String,
        /// Re-parse made by the mode toggle.
        parsed: Option<Value>,
    },

    /// An operator was just pressed; the display still shows the pending operand.
    AwaitingOperand,

    /// A computed or inserted value (or status) on display. The next digit
    /// starts a fresh operand.
    Result(Value),
}

impl Default for Entry {
    fn default() -> Self {
        Self::fresh()
    }
}

impl Entry {
    /// A new operand showing `0`.
    #[must_use]
    pub fn fresh() -> Self {
        Self::Typing {
            text: "0".to_string(),
            parsed: None,
        }
    }

    /// Appends a digit, replacing a lone `0` (or the denominator placeholder).
    ///
    /// Entries that are not being typed are replaced by a fresh operand first.
    pub fn push_digit(&mut self, digit: char) {
        if !self.is_typing() {
            *self = Self::fresh();
        }
        match self {
            Self::Typing { text, parsed } | Self::Denominator { denominator: text, parsed, .. } => {
                *parsed = None;
                if *text == "0" {
                    text.clear();
                }
                text.push(digit);
            }
            Self::AwaitingOperand | Self::Result(_) => {}
        }
    }

    /// Appends a decimal point unless the current part already has one.
    pub fn push_decimal(&mut self) {
        if !self.is_typing() {
            *self = Self::fresh();
        }
        match self {
            Self::Typing { text, parsed } => {
                if !text.contains('.') {
                    *parsed = None;
                    text.push('.');
                }
            }
            Self::Denominator { denominator, parsed, .. } => {
                if !denominator.contains('.') {
                    *parsed = None;
                    if denominator.is_empty() {
                        denominator.push('0');
                    }
                    denominator.push('.');
                }
            }
            Self::AwaitingOperand | Self::Result(_) => {}
        }
    }

    /// Whether keystrokes extend this entry rather than replace it.
    #[must_use]
    pub const fn is_typing(&self) -> bool {
        matches!(self, Self::Typing { .. } | Self::Denominator { .. })
    }

    /// Raw text as typed, for entries that have any.
    #[must_use]
    pub fn typed_text(&self) -> Option<String> {
        match self {
            Self::Typing { text, .. } => Some(text.clone()),
            Self::Denominator {
                numerator,
                denominator,
                ..
            } => Some(format!("{numerator}/{denominator}")),
            Self::AwaitingOperand | Self::Result(_) => None,
        }
    }

    /// Parses the typed text into a value.
    ///
    /// # Errors
    ///
    /// [`CalcError::IncompleteDenominator`] while the denominator is empty or
    /// zero, otherwise the error from [`parse_entry`]. Entries that are not
    /// being typed yield [`CalcError::Parse`].
    pub fn parse(&self) -> Result<Value, CalcError> {
        match self {
            Self::Typing { text, .. } => parse_entry(text),
            Self::Denominator {
                numerator,
                denominator,
                ..
            } => {
                let complete = denominator
                    .parse::<f64>()
                    .is_ok_and(|d| d != 0.0);
                if !complete {
                    return Err(CalcError::IncompleteDenominator);
                }
                parse_entry(&format!("{numerator}/{denominator}"))
            }
            Self::AwaitingOperand | Self::Result(_) => {
                Err(CalcError::Parse("no typed operand".to_string()))
            }
        }
    }

    /// The toggle-mode re-parse, if one is cached.
    #[must_use]
    pub const fn parsed(&self) -> Option<&Value> {
        match self {
            Self::Typing { parsed, .. } | Self::Denominator { parsed, .. } => parsed.as_ref(),
            Self::AwaitingOperand | Self::Result(_) => None,
        }
    }

    /// Caches a re-parse of the typed text; ignored when it fails.
    pub fn reparse(&mut self) {
        let Ok(value) = self.parse() else {
            return;
        };
        if let Self::Typing { parsed, .. } | Self::Denominator { parsed, .. } = self {
            *parsed = Some(value);
        }
    }
}

/// A binary operation waiting for its right-hand operand.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOperation {
    /// Left-hand operand.
    pub operand: Value,
    /// Left-hand operand as shown on the expression line.
    pub text: String,
    pub operator: Operator,
}
