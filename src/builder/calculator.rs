//! Builder for constructing calculators.

use crate::builder::error::BuildError;
use crate::config::CalculatorConfig;
use crate::core::{DecimalOverflow, ModuloByZero};
use crate::engine::{Calculator, DisplaySink, NullDisplay};
use crate::storage::{HistoryStore, KeyValueStore, KeyedHistoryStore, NullHistory};

/// Builder for constructing calculators with a fluent API.
///
/// # Example
///
/// ```rust
/// use dentaku::builder::CalculatorBuilder;
/// use dentaku::core::DecimalOverflow;
/// use dentaku::storage::MemoryStore;
///
/// let calculator = CalculatorBuilder::new()
///     .max_digits(10)
///     .decimal_overflow(DecimalOverflow::Round)
///     .backend(MemoryStore::new())
///     .build()
///     .unwrap();
///
/// assert_eq!(calculator.display().current, "0");
/// assert_eq!(calculator.store().key(), "calcHistory");
/// ```
pub struct CalculatorBuilder<S = NullHistory, D = NullDisplay> {
    config: CalculatorConfig,
    store: S,
    sink: D,
}

impl CalculatorBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
            store: NullHistory,
            sink: NullDisplay,
        }
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: HistoryStore, D: DisplaySink> CalculatorBuilder<S, D> {
    /// Replace the whole configuration.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_digits(mut self, max_digits: usize) -> Self {
        self.config.max_digits = max_digits;
        self
    }

    pub fn decimal_overflow(mut self, overflow: DecimalOverflow) -> Self {
        self.config.decimal_overflow = overflow;
        self
    }

    pub fn modulo_by_zero(mut self, policy: ModuloByZero) -> Self {
        self.config.modulo_by_zero = policy;
        self
    }

    /// Set the storage key. Applies to a store already attached with
    /// [`backend`](Self::backend) as well as to a later one.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.config.storage_key = key.into();
        self.store.rekey(&self.config.storage_key);
        self
    }

    /// Persist history with a custom store.
    pub fn store<S2: HistoryStore>(self, store: S2) -> CalculatorBuilder<S2, D> {
        CalculatorBuilder {
            config: self.config,
            store,
            sink: self.sink,
        }
    }

    /// Persist history under the configured storage key of `backend`.
    pub fn backend<B: KeyValueStore>(self, backend: B) -> CalculatorBuilder<KeyedHistoryStore<B>, D> {
        let store = KeyedHistoryStore::new(backend, self.config.storage_key.clone());
        self.store(store)
    }

    /// Render to `sink` after every command.
    pub fn display<D2: DisplaySink>(self, sink: D2) -> CalculatorBuilder<S, D2> {
        CalculatorBuilder {
            config: self.config,
            store: self.store,
            sink,
        }
    }

    /// Build the calculator, restoring any persisted history.
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<Calculator<S, D>, BuildError> {
        self.config.validate()?;
        Ok(Calculator::assemble(self.config, self.store, self.sink))
    }
}
