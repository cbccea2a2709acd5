//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - State, operations and commands
//! - Guard predicates and the transition rules
//! - Number parsing and display formatting
//! - Immutable history tracking
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod command;
mod error;
mod format;
mod guard;
mod history;
pub mod numeral;
mod state;
mod transition;

pub use command::Command;
pub use error::CalcError;
pub use format::{DecimalOverflow, NumberFormat, DEFAULT_MAX_DIGITS};
pub use guard::{calculation_pending, operand_present, Guard};
pub use history::{History, HistoryEntry};
pub use state::{CalculatorState, Operation, Phase, State};
pub use transition::{Calculation, ModuloByZero, Rules, Step};
