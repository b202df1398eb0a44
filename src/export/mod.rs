//! Diagnostic exports of an automaton definition.
//!
//! Exports describe the structure only; computations are never serialized.

mod description;
mod graphviz;

pub use description::{Description, EdgeDescription};
