//! Execution engine.
//!
//! A run alternates between executing the computation bound to the current
//! state and consuming the letter it yields to select the next transition.
//!
//! # Concurrency
//!
//! - The driving loop owns the current state and all table lookups
//! - Each computation runs as its own unit of work, decoupled from the loop
//! - A fresh single-slot conduit carries each letter back to the loop
//! - At most one computation is in flight per run
//!
//! [`Dfa::stop`](crate::automaton::Dfa::stop) closes the conduit. A letter
//! delivered after that is dropped, and the loop finishes the run in the
//! state it was in.

mod control;
mod outcome;
mod runner;

pub(crate) use control::StopSlot;
pub use outcome::{Outcome, Rejection, Verdict};
