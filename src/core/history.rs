//! Per-run transition history.
//!
//! Each run starts a fresh history at the start state and records every
//! transition the driving loop takes, in order.

use super::state::{Letter, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single transition taken during a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// The state being left
    pub from: State,
    /// The letter that selected the transition
    pub letter: Letter,
    /// The state being entered
    pub to: State,
    /// When the driving loop took the transition
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of the transitions taken by one run.
///
/// `record` consumes the history and returns it with the step appended.
///
/// # Example
///
/// ```rust
/// use dfa::core::{Letter, RunHistory, State, Step};
/// use chrono::Utc;
///
/// let history = RunHistory::new(State::new("start")).record(Step {
///     from: State::new("start"),
///     letter: Letter::new("go"),
///     to: State::new("end"),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.path();
/// assert_eq!(path, vec![&State::new("start"), &State::new("end")]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunHistory {
    start: State,
    steps: Vec<Step>,
}

impl RunHistory {
    pub fn new(start: State) -> Self {
        Self {
            start,
            steps: Vec::new(),
        }
    }

    /// Append a step, returning the extended history.
    pub fn record(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn start(&self) -> &State {
        &self.start
    }

    /// States visited in order: the start state, then the target of each step.
    pub fn path(&self) -> Vec<&State> {
        std::iter::once(&self.start)
            .chain(self.steps.iter().map(|step| &step.to))
            .collect()
    }

    /// Letters consumed in order.
    pub fn letters(&self) -> Vec<&Letter> {
        self.steps.iter().map(|step| &step.letter).collect()
    }

    /// Elapsed time between the first and last recorded step.
    ///
    /// Returns `None` if no step was recorded.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.steps.first()?, self.steps.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(from: &str, letter: &str, to: &str) -> Step {
        Step {
            from: State::new(from),
            letter: Letter::new(letter),
            to: State::new(to),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = RunHistory::new(State::new("registering"));
        assert!(history.is_empty());
        assert_eq!(history.path(), vec![&State::new("registering")]);
        assert!(history.duration().is_none());
    }

    #[test]
    fn path_follows_recorded_steps() {
        let history = RunHistory::new(State::new("registering"))
            .record(step("registering", "register-success", "waiting"))
            .record(step("waiting", "group-join-success", "running"));

        let path = history.path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &State::new("registering"));
        assert_eq!(path[1], &State::new("waiting"));
        assert_eq!(path[2], &State::new("running"));
        assert_eq!(
            history.letters(),
            vec![
                &Letter::new("register-success"),
                &Letter::new("group-join-success")
            ]
        );
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let history = RunHistory::new(State::new("a")).record(step("a", "x", "b"));

        std::thread::sleep(std::time::Duration::from_millis(10));

        let history = history.record(step("b", "y", "c"));
        let duration = history.duration().unwrap();
        assert!(duration >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_step_has_duration_zero() {
        let history = RunHistory::new(State::new("a")).record(step("a", "x", "b"));
        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = RunHistory::new(State::new("a")).record(step("a", "x", "b"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: RunHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
