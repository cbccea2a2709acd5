//! HTML rendering of the history list.

use super::TIME_FORMAT;
use crate::core::History;
use chrono::TimeZone;
use std::fmt;

/// Escape text for embedding in HTML element content or attributes.
///
/// ```rust
/// use dentaku::render::escape_html;
///
/// assert_eq!(escape_html(r#"<b>"1" & '2'</b>"#), "&lt;b&gt;&quot;1&quot; &amp; &#039;2&#039;&lt;/b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render the history list, newest first, with times shown in `tz`.
///
/// An empty history renders `empty_message` as a placeholder.
pub fn history_html<Tz>(history: &History, tz: &Tz, empty_message: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if history.is_empty() {
        return format!(
            "<div class=\"history-empty\">{}</div>",
            escape_html(empty_message)
        );
    }

    history
        .newest_first()
        .map(|entry| {
            format!(
                "<div class=\"history-entry\">\
                 <div class=\"history-time\">{}</div>\
                 <div class=\"history-expression\">{} = <span class=\"history-result\">{}</span></div>\
                 </div>",
                entry.timestamp.with_timezone(tz).format(TIME_FORMAT),
                escape_html(&entry.expression),
                escape_html(&entry.result),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HistoryEntry;
    use chrono::{FixedOffset, Utc};

    fn entry(expression: &str, result: &str, seconds: i64) -> HistoryEntry {
        HistoryEntry::new(
            expression,
            result,
            Utc.timestamp_opt(1_714_555_800 + seconds, 0).unwrap(),
        )
    }

    #[test]
    fn empty_history_shows_placeholder() {
        let html = history_html(&History::new(), &Utc, "No history yet");
        assert_eq!(html, "<div class=\"history-empty\">No history yet</div>");
    }

    #[test]
    fn entries_render_newest_first() {
        let history = History::new()
            .record(entry("1 + 1", "2", 0))
            .record(entry("2 × 3", "6", 65));

        let html = history_html(&history, &Utc, "");
        let newer = html.find("2 × 3").unwrap();
        let older = html.find("1 + 1").unwrap();
        assert!(newer < older);
        assert!(html.contains("<div class=\"history-time\">09:31:05</div>"));
        assert!(html.contains("<span class=\"history-result\">6</span>"));
    }

    #[test]
    fn each_entry_is_one_element() {
        let history = History::new()
            .record(entry("1 + 1", "2", 0))
            .record(entry("2 + 2", "4", 1));

        let html = history_html(&history, &Utc, "");
        assert_eq!(html.matches("<div class=\"history-entry\">").count(), 2);
        assert!(html.starts_with("<div class=\"history-entry\"><div class=\"history-time\">09:30:01</div>"));
        assert!(html.ends_with("<span class=\"history-result\">2</span></div></div>"));
    }

    #[test]
    fn times_follow_supplied_offset() {
        let history = History::new().record(entry("1 + 1", "2", 0));
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();

        let html = history_html(&history, &tokyo, "");
        assert!(html.contains("18:30:00"));
    }

    #[test]
    fn stored_text_is_escaped() {
        let history = History::new().record(entry("<script>", "\"x\" & 'y'", 0));

        let html = history_html(&history, &Utc, "");
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&quot;x&quot; &amp; &#039;y&#039;"));
        assert!(!html.contains("<script>"));
    }
}
