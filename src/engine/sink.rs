//! Display sinks: passive receivers of rendered output.

use crate::core::History;
use crate::render::Display;

/// Receives the display after every command.
///
/// Any `FnMut(&Display)` closure is a sink that ignores history updates.
pub trait DisplaySink {
    fn show(&mut self, display: &Display);

    /// Called after each change to the history.
    fn show_history(&mut self, _history: &History) {}
}

impl<F> DisplaySink for F
where
    F: FnMut(&Display),
{
    fn show(&mut self, display: &Display) {
        self(display)
    }
}

/// Sink that renders nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn show(&mut self, _display: &Display) {}
}
