//! Build errors for calculator construction.

use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Digit budget {found} is out of range. Use a value between {min} and {max}")]
    DigitBudgetOutOfRange { found: usize, min: usize, max: usize },

    #[error("Storage key is empty. Set .storage_key(name) or keep the default")]
    EmptyStorageKey,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
