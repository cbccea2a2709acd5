//! Arithmetic errors surfaced on the display.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid operation detected while calculating.
///
/// These never corrupt the operands; the engine shows them in place of the
/// current value until the next command changes the state.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcError {
    #[error("Division by zero")]
    DivisionByZero,

    /// Only raised when the configuration rejects `%` by zero.
    #[error("Modulo by zero")]
    ModuloByZero,
}
