//! DFA: explicit state/transition tables for stateful computations
//!
//! This crate models workflows as a deterministic finite automaton rather
//! than ad-hoc control flow: "do this work in state X, then move to state Y
//! based on outcome Z". It is not a language recognizer. Each state's work
//! runs concurrently with the engine's bookkeeping and reports its outcome
//! as a letter of the alphabet.
//!
//! # Core Concepts
//!
//! - **State** / **Letter**: opaque labels for states and alphabet members
//! - **Computation**: work bound to a transition's target state, either
//!   continuing (yields the next letter) or terminal (effect only)
//! - **Dfa**: the definition, validated at configuration time
//! - **Outcome**: final state plus an optional rejection, once per run
//!
//! # Example
//!
//! ```rust
//! use dfa::automaton::Dfa;
//! use dfa::core::{Computation, Letter, State};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let attempts = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&attempts);
//! let starting = Computation::continuing(move || {
//!     if counter.fetch_add(1, Ordering::SeqCst) < 2 {
//!         Letter::new("repeat")
//!     } else {
//!         Letter::new("done")
//!     }
//! });
//!
//! // Terminal states first, so transitions into them are checked.
//! let mut dfa = Dfa::new();
//! dfa.set_start_state("starting");
//! dfa.set_terminal_states(["finishing"]);
//! dfa.add_transition("starting", "done", "finishing", Computation::terminal(|| {}))
//!     .unwrap();
//! dfa.add_transition("starting", "repeat", "starting", starting.clone())
//!     .unwrap();
//!
//! let outcome = dfa.run_synchronous(starting).unwrap();
//! assert!(outcome.is_accepted());
//! assert_eq!(outcome.state(), &State::new("finishing"));
//! assert_eq!(attempts.load(Ordering::SeqCst), 3);
//! ```

pub mod automaton;
pub mod builder;
pub mod core;
pub mod engine;
pub mod export;

// Re-export commonly used types
pub use automaton::{ConfigError, Dfa};
pub use self::core::{Computation, Letter, State};
pub use engine::{Outcome, Rejection, Verdict};
