//! Automaton definition.
//!
//! Holds the state set, alphabet, transition table, start state and terminal
//! set, and enforces the structural invariants at configuration time.

mod definition;
mod error;

pub use definition::{Dfa, TransitionLogger};
pub use error::ConfigError;
