//! Run outcomes and rejections.

use crate::core::{Letter, RunHistory, State};
use thiserror::Error;

/// Data-driven reasons a run ends without acceptance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("letter '{letter}' is not in alphabet")]
    UnknownLetter { letter: Letter },

    #[error("no state transition for input '{letter}' from '{state}'")]
    NoTransition { letter: Letter, state: State },

    #[error("stopped in state '{state}' before reaching a terminal state")]
    Stopped { state: State },

    #[error("letter feed closed in state '{state}' before reaching a terminal state")]
    FeedClosed { state: State },
}

/// How the engine itself concluded a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
    Cancelled,
}

/// Final state of a run plus the rejection cause, if any.
///
/// Produced exactly once per run and owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    state: State,
    cause: Option<Rejection>,
    history: RunHistory,
}

impl Outcome {
    pub(crate) fn accepted(state: State, history: RunHistory) -> Self {
        Self {
            state,
            cause: None,
            history,
        }
    }

    pub(crate) fn rejected(state: State, cause: Rejection, history: RunHistory) -> Self {
        Self {
            state,
            cause: Some(cause),
            history,
        }
    }

    /// The state the run ended in.
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn is_accepted(&self) -> bool {
        self.cause.is_none()
    }

    pub fn cause(&self) -> Option<&Rejection> {
        self.cause.as_ref()
    }

    pub fn verdict(&self) -> Verdict {
        match &self.cause {
            None => Verdict::Accepted,
            Some(Rejection::Stopped { .. }) => Verdict::Cancelled,
            Some(_) => Verdict::Rejected,
        }
    }

    /// Transitions taken during the run.
    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    /// `Ok(final state)` when accepted, the rejection otherwise.
    pub fn into_result(self) -> Result<State, Rejection> {
        match self.cause {
            None => Ok(self.state),
            Some(cause) => Err(cause),
        }
    }
}
