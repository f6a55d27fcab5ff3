//! Reducer trait for MVI architecture.

use super::intent::ActionResult;
use super::state::UiState;

/// Reducer folds results onto state.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Result) -> State
pub trait Reducer: 'static {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The result type this reducer handles.
    type Result: ActionResult;

    /// Process a result and return the new state.
    ///
    /// This should be a pure function with no side effects. Every result
    /// variant must be handled by an exhaustive `match`.
    fn reduce(state: Self::State, result: Self::Result) -> Self::State;
}
