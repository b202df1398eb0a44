//! Core automaton types.
//!
//! This module contains the building blocks shared by the definition and the
//! execution engine:
//! - `State` and `Letter` labels
//! - `Computation`, the work bound to a transition's target state
//! - `TransitionTable`, the transition function
//! - `RunHistory`, the record of one run's transitions
//!
//! Nothing in this module spawns work or blocks.

mod computation;
mod history;
mod state;
mod table;

pub use computation::{Computation, ContinuingFn, Shape, TerminalFn};
pub use history::{RunHistory, Step};
pub use state::{Letter, State};
pub use table::{Target, TransitionKey, TransitionTable};
