//! Pure transition rules of the calculator.
//!
//! [`Rules::apply`] maps a state and a command to the next state without
//! touching history, storage or display; the engine performs those effects
//! based on the returned [`Step`].

use super::command::Command;
use super::error::CalcError;
use super::format::NumberFormat;
use super::guard::{calculation_pending, operand_present, Guard};
use super::numeral::parse_float;
use super::state::{CalculatorState, Operation};
use serde::{Deserialize, Serialize};

/// What `%` does when the divisor is zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuloByZero {
    /// Compute it anyway; the result is NaN.
    #[default]
    Propagate,
    /// Treat it like division by zero.
    Reject,
}

/// A finished calculation, ready to become a history entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Calculation {
    pub expression: String,
    pub result: String,
}

/// Result of applying one command.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub state: CalculatorState,
    /// Set when the command completed a calculation.
    pub completed: Option<Calculation>,
    /// `false` when the command was a no-op.
    pub changed: bool,
}

impl Step {
    fn unchanged(state: &CalculatorState) -> Self {
        Self {
            state: state.clone(),
            completed: None,
            changed: false,
        }
    }

    fn changed(state: CalculatorState) -> Self {
        Self {
            state,
            completed: None,
            changed: true,
        }
    }
}

/// Transition rules parameterized by formatting and `%` policy.
pub struct Rules {
    format: NumberFormat,
    modulo_by_zero: ModuloByZero,
    can_apply_operator: Guard<CalculatorState>,
    can_calculate: Guard<CalculatorState>,
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(NumberFormat::default(), ModuloByZero::default())
    }
}

impl Rules {
    pub fn new(format: NumberFormat, modulo_by_zero: ModuloByZero) -> Self {
        Self {
            format,
            modulo_by_zero,
            can_apply_operator: operand_present(),
            can_calculate: calculation_pending(),
        }
    }

    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// Apply a command to a state (pure).
    ///
    /// `ClearHistory` does not concern the state and is returned unchanged.
    ///
    /// ```rust
    /// use dentaku::core::{CalculatorState, Command, Operation, Rules};
    ///
    /// let rules = Rules::default();
    /// let mut state = CalculatorState::new();
    /// for command in [
    ///     Command::Digit(5),
    ///     Command::Operator(Operation::Add),
    ///     Command::Digit(3),
    ///     Command::Equals,
    /// ] {
    ///     state = rules.apply(&state, command).state;
    /// }
    /// assert_eq!(state.current_input, "8");
    /// ```
    pub fn apply(&self, state: &CalculatorState, command: Command) -> Step {
        match command {
            Command::Digit(d) if d <= 9 => append(state, char::from(b'0' + d)),
            Command::Digit(_) => Step::unchanged(state),
            Command::DecimalPoint => append(state, '.'),
            Command::Operator(op) => self.choose_operation(state, op),
            Command::Equals => self.calculate(state),
            Command::Clear => Step::changed(CalculatorState::new()),
            Command::Backspace => backspace(state),
            Command::ClearHistory => Step::unchanged(state),
        }
    }

    fn choose_operation(&self, state: &CalculatorState, op: Operation) -> Step {
        if !self.can_apply_operator.check(state) {
            return Step::unchanged(state);
        }

        // Chaining: fold the pending operation first.
        let mut step = if state.previous_input.is_empty() {
            Step::unchanged(state)
        } else {
            self.calculate(state)
        };

        let next = &mut step.state;
        next.pending_operation = Some(op);
        next.previous_input = next.current_input.clone();
        next.reset_on_next_digit = true;
        next.error = None;
        step.changed = true;
        step
    }

    fn calculate(&self, state: &CalculatorState) -> Step {
        let Some(op) = state
            .pending_operation
            .filter(|_| self.can_calculate.check(state))
        else {
            return Step::unchanged(state);
        };

        let lhs = parse_float(&state.previous_input);
        let rhs = parse_float(&state.current_input);

        if let Some(error) = self.reject(op, rhs) {
            let mut next = state.clone();
            next.error = Some(error);
            next.reset_on_next_digit = true;
            return Step::changed(next);
        }

        let result = self.format.format(op.apply(lhs, rhs));
        let expression = format!(
            "{} {} {}",
            state.previous_input,
            op.symbol(),
            state.current_input
        );

        Step {
            state: CalculatorState {
                current_input: result.clone(),
                previous_input: String::new(),
                pending_operation: None,
                reset_on_next_digit: true,
                error: None,
            },
            completed: Some(Calculation { expression, result }),
            changed: true,
        }
    }

    fn reject(&self, op: Operation, divisor: f64) -> Option<CalcError> {
        match op {
            Operation::Divide if divisor == 0.0 => Some(CalcError::DivisionByZero),
            Operation::Modulo if divisor == 0.0 && self.modulo_by_zero == ModuloByZero::Reject => {
                Some(CalcError::ModuloByZero)
            }
            _ => None,
        }
    }
}

fn append(state: &CalculatorState, symbol: char) -> Step {
    let mut next = state.clone();
    if next.reset_on_next_digit {
        next.current_input.clear();
        next.reset_on_next_digit = false;
    }

    if symbol == '.' && next.current_input.contains('.') {
        return Step::unchanged(state);
    }

    if next.current_input == "0" && symbol != '.' {
        next.current_input = symbol.to_string();
    } else {
        next.current_input.push(symbol);
    }
    next.error = None;
    Step::changed(next)
}

fn backspace(state: &CalculatorState) -> Step {
    let mut next = state.clone();
    next.current_input.pop();
    if next.current_input.is_empty() {
        next.current_input.push('0');
    }
    next.error = None;
    Step::changed(next)
}
