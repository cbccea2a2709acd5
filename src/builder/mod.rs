//! Builder API for ergonomic calculator construction.
//!
//! The builder gathers configuration, a history store and a display sink,
//! validates the configuration, and restores persisted history.

pub mod calculator;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use error::BuildError;
