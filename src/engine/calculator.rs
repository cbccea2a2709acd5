//! Calculator engine: the imperative shell around the pure rules.

use crate::config::CalculatorConfig;
use crate::core::{CalculatorState, Command, History, HistoryEntry, Rules, State};
use crate::engine::sink::{DisplaySink, NullDisplay};
use crate::render::Display;
use crate::storage::{HistoryStore, NullHistory, PersistenceError};
use tracing::{debug, error, info, trace, warn};

/// Calculator that owns its state and history and drives its sinks.
///
/// All mutation goes through [`Calculator::handle`]; each command is
/// processed to completion before the next one can be issued.
///
/// # Example
///
/// ```rust
/// use dentaku::core::{Command, Operation};
/// use dentaku::engine::Calculator;
///
/// let mut calculator = Calculator::new();
/// calculator.handle(Command::Digit(5));
/// calculator.handle(Command::Operator(Operation::Add));
/// calculator.handle(Command::Digit(3));
/// calculator.handle(Command::Equals);
///
/// assert_eq!(calculator.display().current, "8");
/// assert_eq!(calculator.history().entries()[0].expression, "5 + 3");
/// ```
pub struct Calculator<S: HistoryStore = NullHistory, D: DisplaySink = NullDisplay> {
    state: CalculatorState,
    history: History,
    rules: Rules,
    config: CalculatorConfig,
    store: S,
    sink: D,
}

impl Calculator {
    /// Calculator with default configuration, no persistence and no display.
    pub fn new() -> Self {
        Self::assemble(CalculatorConfig::default(), NullHistory, NullDisplay)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: HistoryStore, D: DisplaySink> Calculator<S, D> {
    /// Build a calculator, restoring history from `store`.
    ///
    /// The configuration is expected to be validated already; see
    /// [`crate::builder::CalculatorBuilder`].
    pub(crate) fn assemble(config: CalculatorConfig, store: S, sink: D) -> Self {
        let history = restore(&store);
        let mut calculator = Self {
            state: CalculatorState::new(),
            history,
            rules: Rules::new(config.number_format(), config.modulo_by_zero),
            config,
            store,
            sink,
        };
        calculator.sink.show_history(&calculator.history);
        calculator.refresh();
        calculator
    }

    /// Process one command.
    pub fn handle(&mut self, command: Command) {
        if command == Command::ClearHistory {
            self.clear_history();
            self.refresh();
            return;
        }

        let step = self.rules.apply(&self.state, command);
        if step.changed {
            debug!(
                ?command,
                from = self.state.name(),
                to = step.state.name(),
                "applied command"
            );
        } else {
            trace!(?command, state = self.state.name(), "ignored command");
        }
        if step.state.is_error() && !self.state.is_error() {
            debug!(error = ?step.state.error, "calculation rejected");
        }

        self.state = step.state;
        if let Some(calculation) = step.completed {
            let entry = HistoryEntry::now(calculation.expression, calculation.result);
            self.history = std::mem::take(&mut self.history).push(entry);
            self.persist();
            self.sink.show_history(&self.history);
        }
        self.refresh();
    }

    /// Process a keyboard key; returns `false` for keys the calculator ignores.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match Command::from_key(key) {
            Some(command) => {
                self.handle(command);
                true
            }
            None => false,
        }
    }

    /// Empty the history and persist the empty log immediately.
    pub fn clear_history(&mut self) {
        info!(discarded = self.history.len(), "clearing calculation history");
        self.history = History::new();
        self.persist();
        self.sink.show_history(&self.history);
    }

    /// Current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Completed calculations (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The display lines for the current state (pure)
    pub fn display(&self) -> Display {
        Display::from_state(&self.state, &self.config)
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    pub fn into_parts(self) -> (S, D) {
        (self.store, self.sink)
    }

    fn refresh(&mut self) {
        let display = self.display();
        self.sink.show(&display);
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.save(self.history.entries()) {
            error!(error = %err, entries = self.history.len(), "failed to save calculation history");
        }
    }
}

fn restore<S: HistoryStore>(store: &S) -> History {
    match store.load() {
        Ok(entries) => {
            if !entries.is_empty() {
                info!(entries = entries.len(), "restored calculation history");
            }
            History::from_entries(entries)
        }
        Err(err) => {
            if let PersistenceError::InvalidRecords(violations) = &err {
                for violation in violations {
                    warn!(%violation, "invalid stored history record");
                }
            }
            warn!(error = %err, "discarding stored calculation history");
            History::new()
        }
    }
}
