//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder plus small computation helpers for
//! transitions whose work is trivial.

pub mod machine;

pub use machine::DfaBuilder;

use crate::core::{Computation, Letter};

/// Create a continuing computation that always yields `letter`.
///
/// # Example
///
/// ```
/// use dfa::builder::{emit, noop, DfaBuilder};
///
/// let dfa = DfaBuilder::new()
///     .start("ping")
///     .terminals(["done"])
///     .transition("ping", "pong", "pong", emit("stop"))
///     .transition("pong", "stop", "done", noop())
///     .build()
///     .unwrap();
///
/// let outcome = dfa.run_synchronous(emit("pong")).unwrap();
/// assert!(outcome.is_accepted());
/// ```
pub fn emit(letter: impl Into<Letter>) -> Computation {
    let letter = letter.into();
    Computation::continuing(move || letter.clone())
}

/// Create a terminal computation that does nothing.
pub fn noop() -> Computation {
    Computation::terminal(|| {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Shape;

    #[test]
    fn emit_yields_its_letter() {
        match emit("go") {
            Computation::Continuing(f) => assert_eq!(f(), Letter::new("go")),
            Computation::Terminal(_) => panic!("Expected continuing computation"),
        }
    }

    #[test]
    fn noop_is_terminal() {
        assert_eq!(noop().shape(), Shape::Terminal);
    }
}
