//! Calculator engine around the pure core.
//!
//! This module provides the "imperative shell": it owns the state and the
//! history, applies commands through the pure rules, and performs the side
//! effects: persisting history, rendering to a display sink, and logging.
//!
//! # Key Concepts
//!
//! - **Commands**: the only way to change the calculator
//! - **Calculator**: owns state, history, store and sink
//! - **Sinks**: passive receivers of rendered output

mod calculator;
mod sink;

pub use crate::core::Command;
pub use calculator::Calculator;
pub use sink::{DisplaySink, NullDisplay};
