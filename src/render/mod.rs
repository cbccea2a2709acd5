//! Turning calculator state and history into display text.

mod html;
mod text;

pub use html::{escape_html, history_html};
pub use text::history_text;

use crate::config::CalculatorConfig;
use crate::core::CalculatorState;
use serde::Serialize;

/// Time format of history items: 24-hour, two digits each.
pub(crate) const TIME_FORMAT: &str = "%H:%M:%S";

/// The two display lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Display {
    /// Current value, or the error message
    pub current: String,
    /// `previous op`, or empty when nothing is pending
    pub operation: String,
}

impl Display {
    pub fn from_state(state: &CalculatorState, config: &CalculatorConfig) -> Self {
        let current = match state.error {
            Some(error) => config.error_message(error).to_string(),
            None => state.current_input.clone(),
        };
        Self {
            current,
            operation: state.pending_expression().unwrap_or_default(),
        }
    }
}
