//! Calculator session state and view model computation.
//!
//! [`Calculator`] is the single owner of mutable session state: the current
//! [`Entry`], the pending binary operation, the fraction display flag, and the
//! auxiliary stores (history, samples, matrix slots). The event handler calls
//! the transition methods defined here; the main display and expression line
//! are always derived, never stored.
//!
//! # Example
//!
//! ```rust
//! use fraccalc::app::Calculator;
//! use fraccalc::domain::Operator;
//!
//! let mut calc = Calculator::default();
//! calc.press_digit('3');
//! calc.press_operator(Operator::Add);
//! calc.press_digit('5');
//! calc.press_equals();
//! assert_eq!(calc.display(), "8");
//! assert_eq!(calc.history.iter().next().unwrap().to_string(), "3 + 5 = 8");
//! ```

use super::modes::{Entry, PendingOperation};
use crate::domain::{
    apply, format_value, CalcError, Context, Function, MatrixSlot, Operator, Status, Value,
};
use crate::math::{LinearEquation, MatrixOperation, Plot, Solution};
use crate::storage::{History, MatrixSlots, SampleSet};
use crate::ui::viewmodel::{HistoryPanel, UIViewModel, EMPTY_HISTORY};
use std::f64::consts::PI;

/// Statistic requested from the sample set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Mean,
    Variance,
    StdDev,
}

impl Statistic {
    /// Label used in history entries.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mean => "Mean",
            Self::Variance => "Variance",
            Self::StdDev => "StdDev",
        }
    }
}

/// Central calculator session.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    /// What is being typed or shown.
    pub entry: Entry,

    /// Binary operation awaiting its right-hand operand.
    pub pending: Option<PendingOperation>,

    /// Whether non-integral fractions render as `a/b`.
    pub fraction_mode: bool,

    /// Completed expression kept on the expression line after equals or a
    /// function, until the next keystroke.
    pub completed: Option<String>,

    pub history: History,

    pub samples: SampleSet,

    pub matrices: MatrixSlots,

    /// Whether the history panel is open.
    pub history_visible: bool,
}

impl Calculator {
    /// Creates an empty session whose history keeps `history_limit` entries.
    #[must_use]
    pub fn new(history_limit: usize) -> Self {
        Self {
            history: History::with_limit(history_limit),
            ..Self::default()
        }
    }

    /// Resolves the current operand.
    ///
    /// Typed text is parsed (an incomplete denominator is an error); while an
    /// operator is awaiting its operand the pending left-hand value is reused.
    #[must_use]
    pub fn operand(&self) -> Value {
        match &self.entry {
            Entry::Result(value) => value.clone(),
            Entry::AwaitingOperand => self
                .pending
                .as_ref()
                .map_or(Value::Number(0.0), |p| p.operand.clone()),
            entry => entry
                .parsed()
                .cloned()
                .unwrap_or_else(|| Value::from_result(entry.parse())),
        }
    }

    fn format(&self, value: &Value, context: Context) -> String {
        format_value(value, self.fraction_mode, context)
    }

    fn record(&mut self, expression: impl Into<String>, value: &Value) {
        let result = self.format(value, Context::Expression);
        self.history.append(expression, result);
    }

    fn show(&mut self, value: Value) {
        self.entry = Entry::Result(value);
        self.completed = None;
    }

    fn shows_status(&self) -> bool {
        matches!(&self.entry, Entry::Result(v) if v.is_status())
    }

    /// Handles a digit key.
    ///
    /// A status on display is discarded together with any pending operation.
    pub fn press_digit(&mut self, digit: char) {
        self.prepare_keystroke();
        self.entry.push_digit(digit);
        tracing::trace!(digit = %digit, entry = ?self.entry, "digit");
    }

    /// Handles the decimal point key.
    pub fn press_decimal(&mut self) {
        self.prepare_keystroke();
        self.entry.push_decimal();
        tracing::trace!(entry = ?self.entry, "decimal point");
    }

    fn prepare_keystroke(&mut self) {
        if self.shows_status() {
            tracing::debug!("status discarded by keystroke");
            self.pending = None;
            self.entry = Entry::fresh();
        }
        self.completed = None;
    }

    /// Handles a binary operator key.
    ///
    /// `/` pressed on a plain typed number with nothing pending starts
    /// denominator entry instead. A pending operation is evaluated first, so
    /// evaluation is strictly left to right.
    pub fn press_operator(&mut self, op: Operator) {
        self.completed = None;

        if self.shows_status() {
            self.entry = Entry::Result(Value::Number(0.0));
        }

        if op == Operator::Divide && self.pending.is_none() {
            if let Entry::Typing { text, .. } = &self.entry {
                if !text.contains('/') {
                    if text.ends_with('.') {
                        tracing::debug!(text = %text, "fraction bar after decimal point");
                        self.entry = Entry::Result(Value::ERROR);
                        return;
                    }
                    self.entry = Entry::Denominator {
                        numerator: text.clone(),
                        denominator: "0".to_string(),
                        parsed: None,
                    };
                    tracing::debug!("denominator entry started");
                    return;
                }
            }
        }

        if let (Entry::AwaitingOperand, Some(pending)) = (&self.entry, self.pending.as_mut()) {
            tracing::debug!(from = %pending.operator, to = %op, "operator replaced");
            pending.operator = op;
            return;
        }

        let mut operand = self.operand();
        if let Some(pending) = self.pending.take() {
            operand = apply(&pending.operand, &operand, pending.operator);
            tracing::debug!(
                operator = %pending.operator,
                result = %operand.to_string_lossy(),
                "intermediate result"
            );
        }

        if operand.is_error() {
            self.entry = Entry::Result(Value::ERROR);
            return;
        }

        self.pending = Some(PendingOperation {
            text: self.format(&operand, Context::Expression),
            operand,
            operator: op,
        });
        self.entry = Entry::AwaitingOperand;
    }

    /// Handles the equals key.
    ///
    /// With an operation pending, applies it and records the calculation in
    /// history. Otherwise the current operand simply becomes the result.
    pub fn press_equals(&mut self) {
        let operand = self.operand();
        let Some(pending) = self.pending.take() else {
            if self.entry.is_typing() {
                self.show(operand);
            }
            return;
        };

        let expression = format!(
            "{} {} {}",
            pending.text,
            pending.operator,
            self.format(&operand, Context::Expression)
        );
        let result = apply(&pending.operand, &operand, pending.operator);
        if !result.is_error() {
            self.record(expression.clone(), &result);
        }
        tracing::debug!(expression = %expression, result = %result.to_string_lossy(), "equals");

        self.entry = Entry::Result(result);
        self.completed = Some(format!("{expression} ="));
    }

    /// Applies a unary function to the current operand.
    ///
    /// Functions end any pending chain and switch fraction display off.
    pub fn apply_function(&mut self, function: Function) {
        let operand = self.operand();
        let input = self.format(&operand, Context::Expression);

        let result = operand
            .as_f64()
            .ok_or_else(|| CalcError::Parse(input.clone()))
            .and_then(|x| function.apply(x));

        self.pending = None;
        self.fraction_mode = false;

        match result {
            Ok(value) => {
                let value = Value::Number(value);
                let expression = format!("{}({input})", function.name());
                self.record(expression.clone(), &value);
                self.entry = Entry::Result(value);
                self.completed = Some(format!("{expression} ="));
            }
            Err(e) => {
                tracing::debug!(function = function.name(), error = %e, "function failed");
                self.show(Value::ERROR);
            }
        }
    }

    /// Inserts π as the current operand.
    pub fn insert_pi(&mut self) {
        if self.shows_status() {
            self.pending = None;
        }
        self.show(Value::Number(PI));
    }

    /// Flips fraction display and re-parses the typed operand so it shows
    /// in the new mode.
    pub fn toggle_mode(&mut self) {
        self.fraction_mode = !self.fraction_mode;
        self.entry.reparse();
        tracing::debug!(fraction_mode = self.fraction_mode, "display mode toggled");
    }

    /// Resets arithmetic state, the sample set and both matrix slots.
    /// History survives.
    pub fn clear(&mut self) {
        self.entry = Entry::fresh();
        self.pending = None;
        self.fraction_mode = false;
        self.completed = None;
        self.samples.clear();
        self.matrices.clear();
    }

    /// Adds the current operand to the sample set.
    pub fn add_sample(&mut self) {
        if matches!(&self.entry, Entry::Result(v) if v.is_error()) {
            return;
        }
        let input = self.display();
        self.fraction_mode = false;

        let status = match self.operand().as_f64() {
            Some(value) => {
                let total = self.samples.add(value);
                self.history.append(format!("AddData({input})"), format!("Total: {total}"));
                Status::DataAdded
            }
            None => Status::InvalidData,
        };
        self.show(Value::Status(status));
    }

    /// Computes a statistic over the sample set.
    pub fn statistic(&mut self, statistic: Statistic) {
        let result = match statistic {
            Statistic::Mean => self.samples.mean(),
            Statistic::Variance => self.samples.variance(),
            Statistic::StdDev => self.samples.std_dev(),
        };
        self.fraction_mode = false;

        let value = match result {
            Ok(v) => {
                let value = Value::Number(v);
                self.record(statistic.label(), &value);
                value
            }
            Err(CalcError::NoData) => Value::Status(Status::NoData),
            Err(CalcError::InsufficientData) => Value::Status(Status::NeedMoreData),
            Err(_) => Value::ERROR,
        };
        self.show(value);
    }

    /// Empties the sample set.
    pub fn clear_samples(&mut self) {
        self.samples.clear();
        self.fraction_mode = false;
        self.history.append("Clear Stat Data", "Done");
        self.show(Value::Status(Status::DataCleared));
    }

    /// Parses `text` into a matrix slot.
    pub fn store_matrix(&mut self, slot: MatrixSlot, text: &str) {
        let status = match self.matrices.store(slot, text) {
            Ok(matrix) => {
                let matrix = matrix.to_string();
                self.history.append(format!("Store{slot}"), matrix.clone());
                Status::Stored { slot, matrix }
            }
            Err(e) => Status::MatrixError(e.to_string()),
        };
        self.fraction_mode = false;
        self.show(Value::Status(status));
    }

    /// Combines the stored matrices.
    pub fn matrix_operation(&mut self, op: MatrixOperation) {
        let status = match self.matrices.combine(op) {
            Ok(matrix) => {
                let matrix = matrix.to_string();
                self.history
                    .append(format!("Matrix A {} Matrix B", op.symbol()), matrix.clone());
                Status::Matrix(matrix)
            }
            Err(e) => Status::MatrixError(e.to_string()),
        };
        self.fraction_mode = false;
        self.show(Value::Status(status));
    }

    /// Solves `a·x + b = c` from the three coefficient fields.
    pub fn solve_linear(&mut self, a: &str, b: &str, c: &str) {
        self.fraction_mode = false;
        let Some(equation) = LinearEquation::parse(a, b, c) else {
            let value = Value::Status(Status::InvalidCoefficient);
            self.record(format!("{}x + {} = {}", a.trim(), b.trim(), c.trim()), &value);
            self.show(value);
            return;
        };
        let value = match equation.solve() {
            Solution::Unique(x) => Value::Number(x),
            Solution::Infinite => Value::Status(Status::InfiniteSolutions),
            Solution::None => Value::Status(Status::NoSolution),
        };
        self.record(equation.to_string(), &value);
        self.show(value);
    }

    /// Samples `expression` for the canvas, recording successful plots.
    ///
    /// # Errors
    ///
    /// Returns the [`PlotError`](crate::math::PlotError) to show on the canvas.
    pub fn plot(
        &mut self,
        expression: &str,
        width: usize,
        height: usize,
    ) -> Result<Plot, crate::math::PlotError> {
        let plot = Plot::sample(expression, width, height)?;
        self.history.append(format!("Graph f(x)={expression}"), "Drawn");
        Ok(plot)
    }

    /// Text of the main display.
    #[must_use]
    pub fn display(&self) -> String {
        match &self.entry {
            Entry::AwaitingOperand | Entry::Result(_) => {
                self.format(&self.operand(), Context::Display)
            }
            entry => match (entry.parsed(), entry.typed_text()) {
                (Some(value), _) => self.format(value, Context::Display),
                (None, Some(text)) => text,
                (None, None) => String::new(),
            },
        }
    }

    /// Text of the expression line.
    #[must_use]
    pub fn expression_line(&self) -> String {
        if let Some(pending) = &self.pending {
            return format!("{} {}", pending.text, pending.operator);
        }
        self.completed.clone().unwrap_or_default()
    }

    /// Computes the view model for the current frame.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let history = self.history_visible.then(|| {
            let items: Vec<String> = self.history.iter().map(ToString::to_string).collect();
            HistoryPanel {
                empty_state: items.is_empty().then(|| EMPTY_HISTORY.to_string()),
                items,
            }
        });

        UIViewModel {
            expression: self.expression_line(),
            display: self.display(),
            fraction_mode: self.fraction_mode,
            history,
        }
    }
}
