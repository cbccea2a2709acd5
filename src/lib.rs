//! Dentaku: a pure functional calculator engine
//!
//! Dentaku follows the "pure core, imperative shell" philosophy. The
//! calculator's rules are pure functions from a state and a command to the
//! next state; the engine around them owns that state, keeps an append-only
//! history of completed calculations, persists it, and renders the display.
//!
//! # Core Concepts
//!
//! - **Commands**: digits, decimal point, operators, equals, clear, backspace
//! - **State**: current and previous operand, pending operation, reset flag
//! - **Guards**: pure preconditions; a failed guard makes a command a no-op
//! - **History**: immutable, timestamped record of calculations
//! - **Stores and sinks**: where history is persisted and output is shown
//!
//! # Example
//!
//! ```rust
//! use dentaku::builder::CalculatorBuilder;
//! use dentaku::core::{Command, Operation};
//! use dentaku::storage::MemoryStore;
//!
//! let storage = MemoryStore::new();
//! let mut calculator = CalculatorBuilder::new()
//!     .backend(storage.clone())
//!     .build()
//!     .unwrap();
//!
//! for key in ["1", "2", "*", "3", "Enter"] {
//!     calculator.handle_key(key);
//! }
//! assert_eq!(calculator.display().current, "36");
//!
//! // A second calculator on the same storage sees the history.
//! let reloaded = CalculatorBuilder::new().backend(storage).build().unwrap();
//! assert_eq!(reloaded.history().entries()[0].expression, "12 × 3");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod render;
pub mod storage;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use config::CalculatorConfig;
pub use crate::core::{CalcError, CalculatorState, Command, History, HistoryEntry, Operation};
pub use engine::{Calculator, DisplaySink};
pub use render::Display;
pub use storage::{HistoryStore, PersistenceError};
