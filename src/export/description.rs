//! Serializable snapshot of an automaton definition.

use crate::automaton::Dfa;
use crate::core::{Letter, Shape, State};
use serde::{Deserialize, Serialize};

/// One transition entry without its closure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDescription {
    pub from: State,
    pub letter: Letter,
    pub to: State,
    pub terminal: bool,
}

/// Structure of an automaton: everything but the computations.
///
/// Collections are sorted so that two descriptions of the same definition
/// compare and serialize identically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub states: Vec<State>,
    pub alphabet: Vec<Letter>,
    pub start: Option<State>,
    pub terminals: Vec<State>,
    pub transitions: Vec<EdgeDescription>,
}

impl Dfa {
    /// Describe the definition's structure.
    pub fn describe(&self) -> Description {
        let mut states: Vec<_> = self.states().into_iter().collect();
        states.sort();
        let mut alphabet: Vec<_> = self.alphabet().into_iter().collect();
        alphabet.sort();
        let mut terminals: Vec<_> = self.terminal_states().iter().cloned().collect();
        terminals.sort();

        let mut transitions: Vec<_> = self
            .transitions()
            .iter()
            .map(|(key, target)| EdgeDescription {
                from: key.from.clone(),
                letter: key.letter.clone(),
                to: target.to.clone(),
                terminal: target.computation.shape() == Shape::Terminal,
            })
            .collect();
        transitions.sort_by(|a, b| (&a.from, &a.letter).cmp(&(&b.from, &b.letter)));

        Description {
            states,
            alphabet,
            start: self.start_state().cloned(),
            terminals,
            transitions,
        }
    }
}

impl Description {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
