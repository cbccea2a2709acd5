//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that decide whether a command may
//! change the state. A command whose guard fails is a silent no-op.

use super::state::{CalculatorState, State};
use std::marker::PhantomData;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use dentaku::core::{CalculatorState, Guard};
///
/// let has_input = Guard::new(|s: &CalculatorState| !s.current_input.is_empty());
///
/// assert!(has_input.check(&CalculatorState::new()));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard allows a transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

/// Operators need something to operate on.
pub fn operand_present() -> Guard<CalculatorState> {
    Guard::new(|s: &CalculatorState| !s.current_input.is_empty())
}

/// Equals only does something while an operation is pending.
pub fn calculation_pending() -> Guard<CalculatorState> {
    Guard::new(|s: &CalculatorState| {
        !s.previous_input.is_empty() && s.pending_operation.is_some()
    })
}
