//! Calculator state and the `State` trait it implements.
//!
//! The state is a plain value: every command produces a new state through
//! the pure transition rules in [`crate::core::transition`].

use super::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for values that describe a machine's position.
///
/// All methods are pure. The calculator uses the name for diagnostics and
/// guards use it to express preconditions.
pub trait State: Clone + PartialEq + Debug {
    /// Short name of the current phase for display/logging.
    fn name(&self) -> &str;

    /// Check if the state is showing an error.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Binary operation awaiting its second operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
    ];

    /// Symbol shown in expressions and on the operation line.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Modulo => "%",
        }
    }

    /// Parse an operator as typed on a keyboard (`+ - * / %`).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            "%" => Some(Self::Modulo),
            _ => None,
        }
    }

    /// Apply the operation with IEEE-754 semantics.
    ///
    /// `%` is the truncating remainder: the sign follows the dividend.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Modulo => lhs % rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Phase of the calculator derived from its fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Typing the first operand (or a fresh one after Clear).
    Entering,
    /// An operation is pending; the second operand is being typed.
    Pending,
    /// A result is displayed; the next digit starts fresh input.
    Result,
    /// The error message replaces the current line.
    Error,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Self::Entering => "Entering",
            Self::Pending => "Pending",
            Self::Result => "Result",
            Self::Error => "Error",
        }
    }
}

/// Complete calculator state.
///
/// # Invariants
///
/// - `current_input` contains at most one decimal point.
/// - `previous_input` is empty exactly when no operation is pending, except
///   transiently inside a transition.
/// - `error` only changes what is displayed, never the operands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub current_input: String,
    pub previous_input: String,
    pub pending_operation: Option<Operation>,
    pub reset_on_next_digit: bool,
    pub error: Option<CalcError>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Initial state: `"0"` with nothing pending.
    pub fn new() -> Self {
        Self {
            current_input: "0".to_string(),
            previous_input: String::new(),
            pending_operation: None,
            reset_on_next_digit: false,
            error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.error.is_some() {
            Phase::Error
        } else if self.pending_operation.is_some() {
            Phase::Pending
        } else if self.reset_on_next_digit {
            Phase::Result
        } else {
            Phase::Entering
        }
    }

    /// `previous op` as shown above the current line, if an operation is pending.
    pub fn pending_expression(&self) -> Option<String> {
        match self.pending_operation {
            Some(op) if !self.previous_input.is_empty() => {
                Some(format!("{} {}", self.previous_input, op.symbol()))
            }
            _ => None,
        }
    }
}

impl State for CalculatorState {
    fn name(&self) -> &str {
        self.phase().name()
    }

    fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
