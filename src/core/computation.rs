//! Computations bound to transitions.

use super::state::Letter;
use std::fmt;
use std::sync::Arc;

/// Work that ends by yielding the letter for the next transition.
pub type ContinuingFn = Arc<dyn Fn() -> Letter + Send + Sync>;

/// Effect-only work run once when a terminal state is entered.
pub type TerminalFn = Arc<dyn Fn() + Send + Sync>;

/// Shape of a computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Yields a letter; bound to non-terminal targets.
    Continuing,
    /// Yields nothing; bound to terminal targets.
    Terminal,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Continuing => f.write_str("continuing"),
            Shape::Terminal => f.write_str("terminal"),
        }
    }
}

/// Caller-supplied unit of work associated with a target state.
///
/// A computation may be invoked many times across a run (self loops) and
/// across runs, so it is an `Fn`. Mutable bookkeeping belongs behind a lock
/// owned by the caller.
///
/// # Example
///
/// ```rust
/// use dfa::core::{Computation, Letter, Shape};
///
/// let next = Computation::continuing(|| Letter::new("done"));
/// let last = Computation::terminal(|| println!("finished"));
///
/// assert_eq!(next.shape(), Shape::Continuing);
/// assert_eq!(last.shape(), Shape::Terminal);
/// ```
#[derive(Clone)]
pub enum Computation {
    Continuing(ContinuingFn),
    Terminal(TerminalFn),
}

impl Computation {
    pub fn continuing<F>(f: F) -> Self
    where
        F: Fn() -> Letter + Send + Sync + 'static,
    {
        Computation::Continuing(Arc::new(f))
    }

    pub fn terminal<F>(f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Computation::Terminal(Arc::new(f))
    }

    pub fn shape(&self) -> Shape {
        match self {
            Computation::Continuing(_) => Shape::Continuing,
            Computation::Terminal(_) => Shape::Terminal,
        }
    }

    /// The shape a computation must have when bound to a target state.
    pub fn required_shape(target_is_terminal: bool) -> Shape {
        if target_is_terminal {
            Shape::Terminal
        } else {
            Shape::Continuing
        }
    }
}

impl fmt::Debug for Computation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Computation::{:?}", self.shape())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn constructors_pick_the_shape() {
        assert_eq!(
            Computation::continuing(|| Letter::new("x")).shape(),
            Shape::Continuing
        );
        assert_eq!(Computation::terminal(|| {}).shape(), Shape::Terminal);
    }

    #[test]
    fn required_shape_follows_terminality() {
        assert_eq!(Computation::required_shape(true), Shape::Terminal);
        assert_eq!(Computation::required_shape(false), Shape::Continuing);
    }

    #[test]
    fn clones_share_the_closure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let computation = Computation::terminal(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let cloned = computation.clone();
        for c in [computation, cloned] {
            if let Computation::Terminal(f) = c {
                f();
            }
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn debug_shows_shape_only() {
        let computation = Computation::terminal(|| {});
        assert_eq!(format!("{computation:?}"), "Computation::Terminal");
    }
}
