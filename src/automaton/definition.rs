//! Automaton definition.

use super::error::ConfigError;
use crate::core::{Computation, Letter, Shape, State, TransitionTable};
use crate::engine::StopSlot;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Sink invoked with every state the driving loop enters.
pub type TransitionLogger = Arc<dyn Fn(&State) + Send + Sync>;

/// A deterministic finite automaton describing a stateful computation.
///
/// The definition is built with additive configuration calls and then run
/// zero or more times. Configuration takes `&mut self` and runs take `&self`,
/// so the table cannot change while a run borrows the automaton.
///
/// Set the terminal states before registering transitions into them: the
/// shape of each computation is checked against the terminal set when the
/// transition is added, and again for the whole table before a run.
///
/// # Example
///
/// ```rust
/// use dfa::automaton::Dfa;
/// use dfa::core::{Computation, Letter, State};
///
/// let mut dfa = Dfa::new();
/// dfa.set_start_state("starting");
/// dfa.set_terminal_states(["finishing"]);
/// dfa.add_transition(
///     "starting",
///     "done",
///     "finishing",
///     Computation::terminal(|| println!("all finished")),
/// )
/// .unwrap();
/// dfa.add_transition(
///     "starting",
///     "repeat",
///     "starting",
///     Computation::continuing(|| Letter::new("done")),
/// )
/// .unwrap();
///
/// assert_eq!(dfa.states().len(), 2);
/// assert!(dfa.alphabet().contains(&Letter::new("repeat")));
/// assert!(dfa.is_terminal(&State::new("finishing")));
/// ```
pub struct Dfa {
    states: HashSet<State>,
    alphabet: HashSet<Letter>,
    table: TransitionTable,
    start: Option<State>,
    terminals: HashSet<State>,
    logger: TransitionLogger,
    stop: StopSlot,
}

impl Dfa {
    /// Create an empty automaton.
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
            alphabet: HashSet::new(),
            table: TransitionTable::new(),
            start: None,
            terminals: HashSet::new(),
            logger: Arc::new(|_: &State| {}),
            stop: StopSlot::default(),
        }
    }

    /// Register the transition `from --letter--> to`, running `computation`
    /// on entering `to`.
    ///
    /// `computation` must be [`Computation::Terminal`] when `to` is a terminal
    /// state and [`Computation::Continuing`] otherwise. On success `from` and
    /// `to` join the state set and `letter` joins the alphabet. An existing
    /// entry for `(letter, from)` is kept and the new one ignored.
    pub fn add_transition(
        &mut self,
        from: impl Into<State>,
        letter: impl Into<Letter>,
        to: impl Into<State>,
        computation: Computation,
    ) -> Result<(), ConfigError> {
        let (from, letter, to) = (from.into(), letter.into(), to.into());
        if from.is_empty() || to.is_empty() {
            return Err(ConfigError::EmptyState);
        }
        if letter.is_empty() {
            return Err(ConfigError::EmptyLetter);
        }
        self.check_shape(&to, &computation)?;

        self.states.insert(from.clone());
        self.states.insert(to.clone());
        self.alphabet.insert(letter.clone());
        if !self
            .table
            .insert(from.clone(), letter.clone(), to.clone(), computation)
        {
            tracing::debug!(
                from = %from,
                letter = %letter,
                ignored_target = %to,
                "transition already registered, keeping the first one"
            );
        }
        Ok(())
    }

    /// Set the start state. The last call wins; membership in the state set
    /// is checked when a run starts.
    pub fn set_start_state(&mut self, state: impl Into<State>) {
        self.start = Some(state.into());
    }

    /// Add states to the terminal set.
    pub fn set_terminal_states<I, S>(&mut self, states: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<State>,
    {
        self.terminals.extend(states.into_iter().map(Into::into));
    }

    /// Install the sink called with every state entered during a run.
    pub fn set_transition_logger<F>(&mut self, logger: F)
    where
        F: Fn(&State) + Send + Sync + 'static,
    {
        self.logger = Arc::new(logger);
    }

    /// Snapshot of the declared states.
    pub fn states(&self) -> HashSet<State> {
        self.states.clone()
    }

    /// Snapshot of the declared alphabet.
    pub fn alphabet(&self) -> HashSet<Letter> {
        self.alphabet.clone()
    }

    pub fn start_state(&self) -> Option<&State> {
        self.start.as_ref()
    }

    pub fn terminal_states(&self) -> &HashSet<State> {
        &self.terminals
    }

    pub fn is_terminal(&self, state: &State) -> bool {
        self.terminals.contains(state)
    }

    pub fn in_alphabet(&self, letter: &Letter) -> bool {
        self.alphabet.contains(letter)
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.table
    }

    /// Check the preconditions of a run and return the start state.
    pub fn validate(&self) -> Result<&State, ConfigError> {
        let start = self.start.as_ref().ok_or(ConfigError::MissingStartState)?;
        if self.terminals.is_empty() {
            return Err(ConfigError::MissingTerminalStates);
        }
        if !self.states.contains(start) {
            return Err(ConfigError::UnknownStartState {
                state: start.clone(),
            });
        }
        if let Some(state) = self.terminals.iter().find(|s| !self.states.contains(*s)) {
            return Err(ConfigError::UnknownTerminalState {
                state: state.clone(),
            });
        }
        for (_, target) in self.table.iter() {
            self.check_shape(&target.to, &target.computation)?;
        }
        Ok(start)
    }

    fn check_shape(&self, to: &State, computation: &Computation) -> Result<(), ConfigError> {
        let expected = Computation::required_shape(self.is_terminal(to));
        let found = computation.shape();
        if expected != found {
            return Err(ConfigError::ShapeMismatch {
                state: to.clone(),
                expected,
                found,
            });
        }
        Ok(())
    }

    /// Called by the driving loop on entering a state.
    pub(crate) fn enter(&self, state: &State) {
        tracing::debug!(state = %state, terminal = self.is_terminal(state), "entered state");
        (self.logger)(state);
    }

    pub(crate) fn stop_slot(&self) -> &StopSlot {
        &self.stop
    }

    /// Shape the initial computation needs for a given start state.
    pub(crate) fn initial_shape(&self, start: &State) -> Shape {
        Computation::required_shape(self.is_terminal(start))
    }
}

impl Default for Dfa {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dfa")
            .field("states", &self.states)
            .field("alphabet", &self.alphabet)
            .field("transitions", &self.table.len())
            .field("start", &self.start)
            .field("terminals", &self.terminals)
            .finish()
    }
}
