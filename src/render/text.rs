//! Plain-text rendering of the history list for terminals.

use super::TIME_FORMAT;
use crate::core::History;
use chrono::TimeZone;
use std::fmt;

/// One line per entry, newest first: `HH:MM:SS  expression = result`.
pub fn history_text<Tz>(history: &History, tz: &Tz, empty_message: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if history.is_empty() {
        return empty_message.to_string();
    }

    history
        .newest_first()
        .map(|entry| {
            format!(
                "{}  {} = {}",
                entry.timestamp.with_timezone(tz).format(TIME_FORMAT),
                entry.expression,
                entry.result
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
