//! State and letter identifiers.
//!
//! Both are opaque labels. The automaton only compares and hashes them;
//! their text is used for diagnostics and graph export.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A state of the automaton.
///
/// # Example
///
/// ```rust
/// use dfa::core::State;
///
/// let running = State::new("running");
/// assert_eq!(running.as_str(), "running");
/// assert_eq!(running.to_string(), "running");
/// assert_eq!(running, State::from("running"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(String);

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The empty label is never a valid state.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for State {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for State {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A member of the automaton's alphabet.
///
/// Continuing computations yield a letter when they finish; the letter
/// selects the next transition from the current state.
///
/// # Example
///
/// ```rust
/// use dfa::core::Letter;
///
/// let done = Letter::new("done");
/// assert_eq!(done.to_string(), "done");
/// assert!(!done.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Letter(String);

impl Letter {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Letter {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Letter {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_displays_its_label() {
        assert_eq!(State::new("starting").to_string(), "starting");
    }

    #[test]
    fn letter_displays_its_label() {
        assert_eq!(Letter::new("fatal").to_string(), "fatal");
    }

    #[test]
    fn empty_labels_are_detected() {
        assert!(State::new("").is_empty());
        assert!(Letter::from("").is_empty());
        assert!(!State::from(String::from("x")).is_empty());
    }

    #[test]
    fn state_serializes_as_plain_string() {
        let state = State::new("waiting");
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"waiting\"");

        let deserialized: State = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn letter_serializes_as_plain_string() {
        let letter = Letter::new("send-success");
        let json = serde_json::to_string(&letter).unwrap();
        assert_eq!(json, "\"send-success\"");
    }

    #[test]
    fn states_are_comparable() {
        let a = State::new("a");
        let b = State::new("b");

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert!(a < b);
    }
}
