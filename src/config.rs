//! Calculator configuration.
//!
//! Every field has a default, so a partial JSON document is a valid
//! configuration.

use crate::builder::BuildError;
use crate::core::{CalcError, DecimalOverflow, ModuloByZero, NumberFormat, DEFAULT_MAX_DIGITS};
use crate::storage::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Supported digit budgets.
pub const MAX_DIGITS_RANGE: RangeInclusive<usize> = 5..=21;

pub const DIVISION_BY_ZERO_MESSAGE: &str = "ゼロで割ることはできません";
pub const EMPTY_HISTORY_MESSAGE: &str = "履歴はまだありません";

/// Tunable behaviour and fixed strings of a calculator.
///
/// # Example
///
/// ```rust
/// use dentaku::config::CalculatorConfig;
/// use dentaku::core::DecimalOverflow;
///
/// let config = CalculatorConfig::from_json(r#"{"max_digits": 10, "decimal_overflow": "round"}"#).unwrap();
/// assert_eq!(config.max_digits, 10);
/// assert_eq!(config.decimal_overflow, DecimalOverflow::Round);
/// assert_eq!(config.storage_key, "calcHistory");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Characters a result may occupy before it is shortened
    pub max_digits: usize,
    /// How surplus decimal places are dropped
    pub decimal_overflow: DecimalOverflow,
    /// Whether `%` by zero yields NaN or an error
    pub modulo_by_zero: ModuloByZero,
    /// Storage slot holding the history
    pub storage_key: String,
    pub division_by_zero_message: String,
    pub modulo_by_zero_message: String,
    /// Placeholder shown for an empty history
    pub empty_history_message: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            decimal_overflow: DecimalOverflow::default(),
            modulo_by_zero: ModuloByZero::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            division_by_zero_message: DIVISION_BY_ZERO_MESSAGE.to_string(),
            modulo_by_zero_message: DIVISION_BY_ZERO_MESSAGE.to_string(),
            empty_history_message: EMPTY_HISTORY_MESSAGE.to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))
    }

    /// Check values that would make the calculator misbehave.
    pub fn validate(&self) -> Result<(), BuildError> {
        if !MAX_DIGITS_RANGE.contains(&self.max_digits) {
            return Err(BuildError::DigitBudgetOutOfRange {
                found: self.max_digits,
                min: *MAX_DIGITS_RANGE.start(),
                max: *MAX_DIGITS_RANGE.end(),
            });
        }
        if self.storage_key.trim().is_empty() {
            return Err(BuildError::EmptyStorageKey);
        }
        Ok(())
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat {
            max_digits: self.max_digits,
            overflow: self.decimal_overflow,
        }
    }

    /// Text shown in place of the current value for `error`.
    pub fn error_message(&self, error: CalcError) -> &str {
        match error {
            CalcError::DivisionByZero => &self.division_by_zero_message,
            CalcError::ModuloByZero => &self.modulo_by_zero_message,
        }
    }
}
