//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Turns the current state and an intent into the next state.
///
/// Reducers are the only place state transitions happen and must not
/// perform side effects. Network calls and logging stay with the caller.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
