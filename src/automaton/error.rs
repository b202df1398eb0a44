//! Configuration errors.

use crate::core::{Shape, State};
use thiserror::Error;

/// Errors caused by a malformed automaton definition or by misuse of the
/// control surface.
///
/// These are programmer errors. They are returned from the call that
/// introduces them and never reach a run's `Outcome`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("state cannot be defined as the empty label")]
    EmptyState,

    #[error("letter cannot be defined as the empty label")]
    EmptyLetter,

    #[error("computation bound to state '{state}' must be {expected}, found {found}")]
    ShapeMismatch {
        state: State,
        expected: Shape,
        found: Shape,
    },

    #[error("no start state defined. Call set_start_state() before running")]
    MissingStartState,

    #[error("no terminal states defined. Call set_terminal_states() before running")]
    MissingTerminalStates,

    #[error("start state '{state}' is not in the set of states")]
    UnknownStartState { state: State },

    #[error("terminal state '{state}' is not in the set of states")]
    UnknownTerminalState { state: State },

    #[error("stop called with no run in flight")]
    NotRunning,

    #[error("a run is already in flight on this automaton")]
    AlreadyRunning,
}
