//! Transition table.
//!
//! Maps `(letter, source state)` to the target state and the computation
//! run on entering it. Keys are unique and the first registration for a key
//! wins; later registrations are ignored.

use super::computation::Computation;
use super::state::{Letter, State};
use std::collections::HashMap;

/// Lookup key of the transition function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransitionKey {
    pub letter: Letter,
    pub from: State,
}

/// Value of the transition function.
#[derive(Debug, Clone)]
pub struct Target {
    pub to: State,
    pub computation: Computation,
}

/// The transition function of the automaton.
///
/// The table has no intrinsic order; iteration order is arbitrary.
///
/// # Example
///
/// ```rust
/// use dfa::core::{Computation, Letter, State, TransitionTable};
///
/// let mut table = TransitionTable::new();
/// let first = table.insert(
///     State::new("idle"),
///     Letter::new("go"),
///     State::new("busy"),
///     Computation::continuing(|| Letter::new("go")),
/// );
/// let second = table.insert(
///     State::new("idle"),
///     Letter::new("go"),
///     State::new("elsewhere"),
///     Computation::continuing(|| Letter::new("go")),
/// );
///
/// assert!(first);
/// assert!(!second);
/// let target = table.get(&Letter::new("go"), &State::new("idle")).unwrap();
/// assert_eq!(target.to, State::new("busy"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransitionTable {
    entries: HashMap<TransitionKey, Target>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transition. Returns `false` and leaves the table untouched
    /// when `(letter, from)` is already occupied.
    pub fn insert(
        &mut self,
        from: State,
        letter: Letter,
        to: State,
        computation: Computation,
    ) -> bool {
        let key = TransitionKey { letter, from };
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, Target { to, computation });
        true
    }

    pub fn get(&self, letter: &Letter, from: &State) -> Option<&Target> {
        let key = TransitionKey {
            letter: letter.clone(),
            from: from.clone(),
        };
        self.entries.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TransitionKey, &Target)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Shape;

    fn next() -> Computation {
        Computation::continuing(|| Letter::new("next"))
    }

    #[test]
    fn new_table_is_empty() {
        let table = TransitionTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.get(&Letter::new("a"), &State::new("s")).is_none());
    }

    #[test]
    fn first_registration_wins() {
        let mut table = TransitionTable::new();
        assert!(table.insert("s".into(), "a".into(), "t".into(), next()));
        assert!(!table.insert(
            "s".into(),
            "a".into(),
            "u".into(),
            Computation::terminal(|| {})
        ));

        let target = table.get(&"a".into(), &"s".into()).unwrap();
        assert_eq!(target.to, State::new("t"));
        assert_eq!(target.computation.shape(), Shape::Continuing);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn keys_differ_by_letter_and_source() {
        let mut table = TransitionTable::new();
        assert!(table.insert("s".into(), "a".into(), "t".into(), next()));
        assert!(table.insert("s".into(), "b".into(), "t".into(), next()));
        assert!(table.insert("t".into(), "a".into(), "s".into(), next()));

        assert_eq!(table.len(), 3);
        assert_eq!(
            table.get(&"a".into(), &"t".into()).unwrap().to,
            State::new("s")
        );
        assert!(table.get(&"b".into(), &"t".into()).is_none());
    }

    #[test]
    fn iter_visits_every_entry() {
        let mut table = TransitionTable::new();
        table.insert("s".into(), "a".into(), "t".into(), next());
        table.insert("t".into(), "b".into(), "s".into(), next());

        let mut keys: Vec<_> = table
            .iter()
            .map(|(k, t)| (k.from.to_string(), k.letter.to_string(), t.to.to_string()))
            .collect();
        keys.sort();

        assert_eq!(
            keys,
            vec![
                ("s".to_string(), "a".to_string(), "t".to_string()),
                ("t".to_string(), "b".to_string(), "s".to_string()),
            ]
        );
    }
}
