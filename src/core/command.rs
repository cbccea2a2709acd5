//! Discrete input commands.
//!
//! Presentation layers translate clicks and key presses into these; the
//! engine never sees raw UI events.

use super::state::Operation;
use serde::{Deserialize, Serialize};

/// One calculator input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// A digit `0`-`9`. Larger values are ignored.
    Digit(u8),
    DecimalPoint,
    Operator(Operation),
    Equals,
    Clear,
    Backspace,
    /// Empty the history log.
    ClearHistory,
}

impl Command {
    /// Digit command, or `None` if `digit` is not a single decimal digit.
    pub fn digit(digit: u8) -> Option<Self> {
        (digit <= 9).then_some(Self::Digit(digit))
    }

    /// Map a keyboard key name to a command.
    ///
    /// Recognizes `0`-`9`, `.`, `+ - * / %`, `Enter` and `=` for equals,
    /// `Escape` for clear and `Backspace`. Other keys are not handled.
    ///
    /// ```rust
    /// use dentaku::core::{Command, Operation};
    ///
    /// assert_eq!(Command::from_key("7"), Some(Command::Digit(7)));
    /// assert_eq!(Command::from_key("*"), Some(Command::Operator(Operation::Multiply)));
    /// assert_eq!(Command::from_key("Enter"), Some(Command::Equals));
    /// assert_eq!(Command::from_key("Shift"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "." => Some(Self::DecimalPoint),
            "Enter" | "=" => Some(Self::Equals),
            "Escape" => Some(Self::Clear),
            "Backspace" => Some(Self::Backspace),
            _ => Self::single_digit(key).or_else(|| Operation::from_symbol(key).map(Self::Operator)),
        }
    }

    /// Map a keypad button's action name to a command.
    ///
    /// Buttons carry either a number (`"0"`-`"9"`, `"."`), an operator symbol,
    /// or one of the actions `clear`, `backspace`, `equals`, `clear-history`.
    pub fn from_button(action: &str) -> Option<Self> {
        match action {
            "clear" => Some(Self::Clear),
            "backspace" => Some(Self::Backspace),
            "equals" => Some(Self::Equals),
            "clear-history" => Some(Self::ClearHistory),
            "." => Some(Self::DecimalPoint),
            _ => Self::single_digit(action).or_else(|| Operation::from_symbol(action).map(Self::Operator)),
        }
    }

    fn single_digit(key: &str) -> Option<Self> {
        match key.as_bytes() {
            [d @ b'0'..=b'9'] => Some(Self::Digit(d - b'0')),
            _ => None,
        }
    }
}
